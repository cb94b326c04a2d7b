//! Robust photometric variability statistics
//!
//! This crate provides the Stetson family of error-aware variability
//! measures for light curves:
//!
//! - [`StetsonMean`]: iteratively reweighted, outlier-resistant mean
//! - [`StetsonJ`]: signed-root variability index around a robust center
//! - [`BandAggregator`]: evaluates an index independently for every band
//!
//! # Overview
//!
//! A non-variable source observed with honest error bars has residuals
//! that scatter within about one sigma, so each point contributes roughly
//! `-1` to Stetson J. Intrinsic variability produces residuals well beyond
//! the errors and drives J up. The reference center is the Stetson mean,
//! which keeps a handful of outliers from dragging the baseline.
//!
//! All estimators are pure functions of their inputs. Uncertainties must
//! be strictly positive and every band needs at least two observations;
//! anything else is rejected before computation starts. Non-finite fluxes
//! are not filtered and propagate into the results.
//!
//! # Examples
//!
//! ## Single band
//!
//! ```rust
//! use robust_variability::{StetsonJ, StetsonMean};
//!
//! let fluxes = [10.0, 10.0, 10.0, 10.0];
//! let errors = [1.0, 1.0, 1.0, 1.0];
//!
//! let mean = StetsonMean::new().estimate(&fluxes, &errors).unwrap();
//! assert_eq!(mean, 10.0);
//!
//! let j = StetsonJ::new().compute(&fluxes, &errors).unwrap();
//! assert_eq!(j, -1.0);
//! ```
//!
//! ## Tuning the robust mean
//!
//! ```rust
//! use robust_variability::{StetsonJ, StetsonMean, StetsonMeanConfig};
//!
//! let config = StetsonMeanConfig::new()
//!     .with_alpha(3.0)
//!     .with_max_iterations(50);
//!
//! let est = StetsonMean::with_config(config)
//!     .estimate_detailed(&[1.0, 1.2, 0.9, 6.0], &[0.1, 0.1, 0.1, 0.1])
//!     .unwrap();
//! assert!(est.iterations <= 50);
//!
//! let j = StetsonJ::with_mean_config(config)
//!     .compute(&[1.0, 1.2, 0.9, 6.0], &[0.1, 0.1, 0.1, 0.1])
//!     .unwrap();
//! assert!(j > 0.0);
//! ```

mod band;
mod config;
mod stetson_j;
mod stetson_mean;
mod types;

// Re-exports
pub use band::{group_by_band, group_columns_by_band, BandAggregator, BandSeries};
pub use config::{AggregatorConfig, SparseBandPolicy, StetsonMeanConfig};
pub use stetson_j::StetsonJ;
pub use stetson_mean::{InverseVarianceMean, StetsonMean};
pub use types::{BandReport, MeanEstimate, Observation, StetsonJResult};

pub use robust_core::{Error, Result, VariabilityEstimator, WeightedLocationEstimator};

// Convenience constructors

/// Stetson mean with the default tuning
pub fn stetson_mean() -> StetsonMean {
    StetsonMean::new()
}

/// Stetson J around the default Stetson mean
pub fn stetson_j() -> StetsonJ {
    StetsonJ::new()
}

/// Stetson J per band with default settings
pub fn stetson_j_per_band<B>(observations: &[Observation<B>]) -> Result<std::collections::BTreeMap<B, f64>>
where
    B: Ord + Clone + std::fmt::Display + Send + Sync,
{
    BandAggregator::new().aggregate(observations)
}
