//! Multi-band light curves built from named columns
//!
//! A [`TimeSeries`] is assembled from a set of named columns and a
//! [`ColumnMap`] that says which column holds time, flux, flux error and
//! band. Per-band variability is then computed with the configured
//! mapping.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use robust_timeseries::{Column, ColumnMap, TimeSeries};
//!
//! let mut columns = HashMap::new();
//! columns.insert("mjd".to_string(), Column::from(vec![1.0, 2.0, 3.0, 1.5, 2.5, 3.5]));
//! columns.insert("psf_flux".to_string(), Column::from(vec![10.0, 12.0, 9.0, 20.0, 21.0, 19.0]));
//! columns.insert("psf_err".to_string(), Column::from(vec![1.0; 6]));
//! columns.insert("filter".to_string(), Column::from(vec!["g", "g", "g", "r", "r", "r"]));
//!
//! let colmap = ColumnMap::new()
//!     .with_time("mjd")
//!     .with_flux("psf_flux")
//!     .with_flux_err("psf_err")
//!     .with_band("filter");
//! let ts = TimeSeries::from_columns(&columns, colmap)?;
//!
//! let j = ts.stetson_j_multi()?;
//! assert_eq!(j.keys().collect::<Vec<_>>(), vec!["g", "r"]);
//! # Ok::<(), robust_timeseries::Error>(())
//! ```

mod config;
mod error;
mod timeseries;


pub use config::ColumnMap;
pub use error::{Error, Result};
pub use timeseries::{Column, TimeSeries};

// Re-export commonly used types from dependencies
pub use robust_core::{ExecutionEngine, SequentialEngine};
#[cfg(feature = "parallel")]
pub use robust_core::ParallelEngine;
pub use robust_variability::{BandAggregator, SparseBandPolicy, StetsonJ, StetsonMeanConfig};
