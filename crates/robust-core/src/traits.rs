//! Core traits for robust statistical estimation
//!
//! These traits define the seams between the estimators in this workspace.
//! Concrete estimators live in their respective crates.

use crate::{Numeric, Result};

/// Location estimator for measurements with per-point uncertainties
///
/// Implementations reduce a sample of values, each paired index-wise with
/// a strictly positive uncertainty, to a single central value.
///
/// # Example
///
/// ```rust
/// use robust_core::{validate_measurements, Numeric, Result, WeightedLocationEstimator};
///
/// #[derive(Clone)]
/// struct FirstValue;
///
/// impl<T: Numeric> WeightedLocationEstimator<T> for FirstValue {
///     fn estimate_weighted(&self, values: &[T], errors: &[T]) -> Result<T> {
///         validate_measurements(values, errors, 1)?;
///         Ok(values[0])
///     }
///
///     fn name(&self) -> &str { "first" }
///     fn is_robust(&self) -> bool { false }
/// }
///
/// let center = FirstValue.estimate_weighted(&[3.0, 4.0], &[1.0, 1.0]).unwrap();
/// assert_eq!(center, 3.0);
/// ```
pub trait WeightedLocationEstimator<T: Numeric = f64>: Send + Sync + Clone {
    /// Estimate the center of `values` given their uncertainties
    fn estimate_weighted(&self, values: &[T], errors: &[T]) -> Result<T>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator down-weights outliers
    fn is_robust(&self) -> bool;
}

/// Single-band variability index computed from fluxes and their errors
pub trait VariabilityEstimator<T: Numeric = f64>: Send + Sync + Clone {
    /// Compute the index for one band
    fn compute(&self, fluxes: &[T], errors: &[T]) -> Result<T>;

    /// Human-readable name of the index
    fn name(&self) -> &str;

    /// Minimum number of observations the index is defined for
    fn min_points(&self) -> usize {
        2
    }
}

/// Validate a paired measurement sample
///
/// Checks, in order: equal lengths, at least `min_points` entries, and
/// strictly positive uncertainties. NaN uncertainties are not rejected; they
/// propagate into the result like any other non-finite input.
pub fn validate_measurements<T: Numeric>(
    values: &[T],
    errors: &[T],
    min_points: usize,
) -> Result<()> {
    if values.len() != errors.len() {
        return Err(crate::Error::size_mismatch(
            values.len(),
            errors.len(),
            "measurement errors",
        ));
    }
    if values.len() < min_points {
        return Err(crate::Error::insufficient_points(min_points, values.len()));
    }
    if let Some((index, &value)) = errors.iter().enumerate().find(|&(_, &e)| e <= T::zero()) {
        return Err(crate::Error::InvalidUncertainty {
            index,
            value: value.to_report(),
        });
    }
    Ok(())
}
