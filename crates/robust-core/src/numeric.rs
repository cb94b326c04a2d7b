//! Generic numeric trait for type-safe statistical computing
//!
//! Estimators in this workspace are written once over [`Numeric`] and work
//! for both `f32` and `f64` samples.

use crate::{Error, Result};
use num_traits::{Float, NumCast};
use std::fmt::{Debug, Display};

/// Floating point type usable by the estimators
pub trait Numeric: Float + Debug + Display + Send + Sync + 'static {
    /// Lossy conversion used when reporting values in error messages
    fn to_report(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Numeric for f32 {}
impl Numeric for f64 {}

/// Convert between numeric types, failing instead of panicking
#[inline]
pub fn cast<T: Numeric, U: NumCast + Copy + Debug>(value: U) -> Result<T> {
    <T as NumCast>::from(value)
        .ok_or_else(|| Error::Computation(format!("cannot represent {value:?} in target type")))
}

/// Small-sample correction factor `sqrt(n / (n - 1))`
///
/// Requires `n >= 2`.
pub fn small_sample_factor<T: Numeric>(n: usize) -> Result<T> {
    if n < 2 {
        return Err(Error::insufficient_points(2, n));
    }
    let n_f: T = cast(n)?;
    Ok((n_f / (n_f - T::one())).sqrt())
}

/// Sign-preserving square root with `signed_sqrt(0) == 0`
///
/// NaN inputs are returned unchanged.
#[inline]
pub fn signed_sqrt<T: Numeric>(x: T) -> T {
    if x > T::zero() {
        x.sqrt()
    } else if x < T::zero() {
        -(-x).sqrt()
    } else {
        // zero or NaN
        x
    }
}

/// Weighted average `sum(w * x) / sum(w)`
///
/// A zero total weight yields NaN rather than an error; callers validate
/// their inputs before weighting.
pub fn weighted_average<T: Numeric>(values: &[T], weights: &[T]) -> T {
    let (num, den) = values
        .iter()
        .zip(weights)
        .fold((T::zero(), T::zero()), |(num, den), (&x, &w)| {
            (num + w * x, den + w)
        });
    num / den
}
