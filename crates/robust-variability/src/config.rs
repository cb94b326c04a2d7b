//! Configuration types for the Stetson estimators and band aggregation

use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tuning of the iteratively reweighted Stetson mean
///
/// Each reweighting pass assigns point `i` the weight
/// `1 / err_i^2 / (1 + (chi_i / alpha)^beta)`, where `chi_i` is the
/// error-scaled residual from the current mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StetsonMeanConfig {
    /// Residual scale (in sigma) where down-weighting reaches one half.
    /// Lower values clip more.
    pub alpha: f64,
    /// Power-law slope of the down-weighting. Higher values clip more.
    pub beta: f64,
    /// Upper bound on reweighting passes
    pub max_iterations: usize,
    /// Absolute and relative tolerance on the change in the mean
    pub tolerance: f64,
    /// Starting point; the inverse-variance weighted mean when `None`
    pub initial_mean: Option<f64>,
}

impl StetsonMeanConfig {
    pub const DEFAULT_ALPHA: f64 = 2.0;
    pub const DEFAULT_BETA: f64 = 2.0;
    pub const DEFAULT_MAX_ITERATIONS: usize = 20;
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            beta: Self::DEFAULT_BETA,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            tolerance: Self::DEFAULT_TOLERANCE,
            initial_mean: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Start iterating from `mean` instead of the inverse-variance mean
    pub fn with_initial_mean(mut self, mean: f64) -> Self {
        self.initial_mean = Some(mean);
        self
    }

    /// Check that every parameter is in its valid range
    pub fn validate(&self) -> Result<()> {
        positive("alpha", self.alpha)?;
        positive("beta", self.beta)?;
        positive("tolerance", self.tolerance)?;
        Ok(())
    }
}

impl Default for StetsonMeanConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}

/// What to do with a band that has too few observations for the statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SparseBandPolicy {
    /// Fail the whole aggregation with an error naming the band
    #[default]
    Error,
    /// Leave the band out of the result and report it as skipped
    Skip,
}

/// Configuration of multi-band aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    pub sparse_band_policy: SparseBandPolicy,
}

impl AggregatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sparse_band_policy(mut self, policy: SparseBandPolicy) -> Self {
        self.sparse_band_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StetsonMeanConfig::default();
        assert_eq!(config.alpha, 2.0);
        assert_eq!(config.beta, 2.0);
        assert_eq!(config.max_iterations, 20);
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.initial_mean, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(StetsonMeanConfig::new().with_alpha(0.0).validate().is_err());
        assert!(StetsonMeanConfig::new().with_beta(-1.0).validate().is_err());
        assert!(StetsonMeanConfig::new().with_tolerance(f64::NAN).validate().is_err());
        assert!(StetsonMeanConfig::new()
            .with_alpha(f64::INFINITY)
            .validate()
            .is_err());
        // Zero iterations is a valid (degenerate) budget
        assert!(StetsonMeanConfig::new().with_max_iterations(0).validate().is_ok());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: StetsonMeanConfig =
            serde_json::from_str(r#"{ "alpha": 3.0, "initial_mean": 12.5 }"#).unwrap();
        assert_eq!(config.alpha, 3.0);
        assert_eq!(config.beta, 2.0);
        assert_eq!(config.max_iterations, 20);
        assert_eq!(config.initial_mean, Some(12.5));

        let agg: AggregatorConfig =
            serde_json::from_str(r#"{ "sparse_band_policy": "skip" }"#).unwrap();
        assert_eq!(agg.sparse_band_policy, SparseBandPolicy::Skip);
        assert_eq!(
            AggregatorConfig::default().sparse_band_policy,
            SparseBandPolicy::Error
        );
    }
}
