//! Iteratively reweighted Stetson mean
//!
//! The Stetson mean (Stetson 1996, PASP 108, 851) is an error-weighted mean
//! that progressively down-weights points with large error-scaled residuals.
//! Starting from the inverse-variance weighted mean, each pass recomputes
//!
//! ```text
//! chi_i = | sqrt(n / (n - 1)) * (x_i - mean) / err_i |
//! w_i   = (1 / err_i^2) / (1 + (chi_i / alpha)^beta)
//! mean  = sum(w_i * x_i) / sum(w_i)
//! ```
//!
//! until the change in the mean is below the tolerance both in absolute and
//! relative terms, or the iteration budget is spent. Running out of
//! iterations is not an error; the latest estimate is returned.
//!
//! A pass in which every weight underflows to zero yields a NaN mean, and
//! NaN is carried through the remaining passes.

use crate::config::StetsonMeanConfig;
use crate::types::MeanEstimate;
use robust_core::{
    cast, small_sample_factor, validate_measurements, weighted_average, Numeric, Result,
    WeightedLocationEstimator,
};
use tracing::{debug, instrument, trace};

/// Outlier-resistant weighted mean of measurements with uncertainties
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StetsonMean {
    config: StetsonMeanConfig,
}

impl StetsonMean {
    /// Create an estimator with the default tuning
    pub fn new() -> Self {
        Self {
            config: StetsonMeanConfig::default(),
        }
    }

    /// Create an estimator with custom tuning
    pub fn with_config(config: StetsonMeanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StetsonMeanConfig {
        &self.config
    }

    /// Compute the Stetson mean of `values`
    pub fn estimate<T: Numeric>(&self, values: &[T], errors: &[T]) -> Result<T> {
        self.estimate_detailed(values, errors).map(|est| est.mean)
    }

    /// Compute the Stetson mean along with iteration diagnostics
    #[instrument(level = "debug", skip_all, fields(n = values.len()))]
    pub fn estimate_detailed<T: Numeric>(
        &self,
        values: &[T],
        errors: &[T],
    ) -> Result<MeanEstimate<T>> {
        self.config.validate()?;
        validate_measurements(values, errors, 2)?;

        let n_factor: T = small_sample_factor(values.len())?;
        let alpha: T = cast(self.config.alpha)?;
        let beta: T = cast(self.config.beta)?;
        let tolerance: T = cast(self.config.tolerance)?;

        let inv_var: Vec<T> = errors.iter().map(|&e| (e * e).recip()).collect();
        let mut mean = match self.config.initial_mean {
            Some(start) => cast(start)?,
            None => weighted_average(values, &inv_var),
        };

        let mut weights = vec![T::zero(); values.len()];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.config.max_iterations {
            for (((w, &x), &err), &iv) in weights.iter_mut().zip(values).zip(errors).zip(&inv_var)
            {
                let chi = (n_factor * (x - mean) / err).abs();
                *w = iv / (T::one() + (chi / alpha).powf(beta));
            }

            let next = weighted_average(values, &weights);
            let diff = (next - mean).abs();
            mean = next;
            iterations += 1;
            trace!(iteration = iterations, %mean, %diff, "reweighting pass");

            // A zero mean makes the relative test undefined; keep iterating.
            if mean != T::zero() && diff / mean < tolerance && diff < tolerance {
                converged = true;
                break;
            }
        }

        if converged {
            debug!(iterations, %mean, "stetson mean converged");
        } else {
            debug!(
                iterations,
                %mean,
                "stetson mean stopped without meeting tolerance"
            );
        }

        Ok(MeanEstimate {
            mean,
            iterations,
            converged,
        })
    }
}

impl<T: Numeric> WeightedLocationEstimator<T> for StetsonMean {
    fn estimate_weighted(&self, values: &[T], errors: &[T]) -> Result<T> {
        self.estimate(values, errors)
    }

    fn name(&self) -> &str {
        "Stetson mean"
    }

    fn is_robust(&self) -> bool {
        true
    }
}

/// Plain inverse-variance weighted mean
///
/// The non-robust reference center: every point is weighted by
/// `1 / err^2` regardless of its residual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InverseVarianceMean;

impl<T: Numeric> WeightedLocationEstimator<T> for InverseVarianceMean {
    fn estimate_weighted(&self, values: &[T], errors: &[T]) -> Result<T> {
        validate_measurements(values, errors, 1)?;
        let inv_var: Vec<T> = errors.iter().map(|&e| (e * e).recip()).collect();
        Ok(weighted_average(values, &inv_var))
    }

    fn name(&self) -> &str {
        "inverse-variance mean"
    }

    fn is_robust(&self) -> bool {
        false
    }
}
