//! Stetson J variability index for a single band
//!
//! Given fluxes `f_i` with errors `e_i` and a robust center `m`:
//!
//! ```text
//! delta_i = sqrt(n / (n - 1)) * (f_i - m) / e_i
//! p_i     = delta_i^2 - 1
//! J       = mean( sign(p_i) * sqrt(|p_i|) )
//! ```
//!
//! Points scattered within their errors push J towards -1, points well
//! outside their errors push it up. A constant source therefore scores
//! close to -1 and a genuinely variable one scores large and positive.

use crate::config::StetsonMeanConfig;
use crate::stetson_mean::StetsonMean;
use crate::types::StetsonJResult;
use robust_core::{
    cast, signed_sqrt, small_sample_factor, validate_measurements, Numeric, Result,
    VariabilityEstimator, WeightedLocationEstimator,
};
use tracing::{debug, instrument};

/// Stetson J estimator, parameterized by the location estimator used as
/// the reference center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StetsonJ<L = StetsonMean> {
    location: L,
}

impl StetsonJ<StetsonMean> {
    /// Stetson J around a default-tuned Stetson mean
    pub fn new() -> Self {
        Self {
            location: StetsonMean::new(),
        }
    }

    /// Stetson J around a Stetson mean with custom tuning
    pub fn with_mean_config(config: StetsonMeanConfig) -> Self {
        Self {
            location: StetsonMean::with_config(config),
        }
    }

    /// Compute J together with the robust mean diagnostics
    #[instrument(level = "debug", skip_all, fields(n = fluxes.len()))]
    pub fn compute_detailed<T: Numeric>(
        &self,
        fluxes: &[T],
        errors: &[T],
    ) -> Result<StetsonJResult<T>> {
        // J itself needs two points; checked before the center is estimated
        validate_measurements(fluxes, errors, 2)?;
        let mean = self.location.estimate_detailed(fluxes, errors)?;
        let value = j_about(fluxes, errors, mean.mean)?;
        debug!(%value, center = %mean.mean, "stetson J computed");

        Ok(StetsonJResult {
            value,
            mean,
            n_points: fluxes.len(),
        })
    }
}

impl Default for StetsonJ<StetsonMean> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> StetsonJ<L> {
    /// Stetson J around an arbitrary location estimator
    pub fn with_location(location: L) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Compute J for one band
    pub fn compute<T>(&self, fluxes: &[T], errors: &[T]) -> Result<T>
    where
        T: Numeric,
        L: WeightedLocationEstimator<T>,
    {
        // Location estimators may accept a single point (InverseVarianceMean)
        validate_measurements(fluxes, errors, 2)?;
        let center = self.location.estimate_weighted(fluxes, errors)?;
        j_about(fluxes, errors, center)
    }
}

impl<T, L> VariabilityEstimator<T> for StetsonJ<L>
where
    T: Numeric,
    L: WeightedLocationEstimator<T>,
{
    fn compute(&self, fluxes: &[T], errors: &[T]) -> Result<T> {
        StetsonJ::compute(self, fluxes, errors)
    }

    fn name(&self) -> &str {
        "Stetson J"
    }
}

/// J of `fluxes` measured about a fixed `center`
fn j_about<T: Numeric>(fluxes: &[T], errors: &[T], center: T) -> Result<T> {
    let n_factor: T = small_sample_factor(fluxes.len())?;
    let n: T = cast(fluxes.len())?;

    let sum = fluxes
        .iter()
        .zip(errors)
        .map(|(&flux, &err)| {
            let delta = n_factor * (flux - center) / err;
            signed_sqrt(delta * delta - T::one())
        })
        .fold(T::zero(), |acc, term| acc + term);

    Ok(sum / n)
}
