//! Robust variability statistics for multi-band light curves
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - `core`: error type, numeric helpers, estimator traits and execution engines
//! - `variability`: Stetson mean, Stetson J and the per-band aggregator
//! - `timeseries`: column-oriented light curves with a configurable column mapping
//!
//! # Example
//!
//! ```rust
//! use robust_lightcurve::prelude::*;
//!
//! let observations = vec![
//!     Observation::new("g", 10.0, 1.0),
//!     Observation::new("g", 10.0, 1.0),
//!     Observation::new("r", 4.0, 0.5),
//!     Observation::new("r", 9.0, 0.5),
//!     Observation::new("r", 4.5, 0.5),
//! ];
//!
//! let j = BandAggregator::new().aggregate(&observations)?;
//! assert_eq!(j["g"], -1.0);
//! assert!(j["r"] > 0.0);
//! # Ok::<(), robust_lightcurve::core::Error>(())
//! ```

pub use robust_core as core;
pub use robust_timeseries as timeseries;
pub use robust_variability as variability;

/// Commonly used types from all workspace crates
pub mod prelude {
    pub use robust_core::prelude::*;
    pub use robust_timeseries::{Column, ColumnMap, TimeSeries};
    pub use robust_variability::{
        AggregatorConfig, BandAggregator, BandReport, InverseVarianceMean, MeanEstimate,
        Observation, SparseBandPolicy, StetsonJ, StetsonJResult, StetsonMean, StetsonMeanConfig,
    };
}
