//! Types for observations and estimator results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single flux measurement tagged with its band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation<B, T = f64> {
    pub band: B,
    pub flux: T,
    pub flux_err: T,
}

impl<B, T> Observation<B, T> {
    pub fn new(band: B, flux: T, flux_err: T) -> Self {
        Self {
            band,
            flux,
            flux_err,
        }
    }
}

/// Robust mean together with its convergence diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanEstimate<T = f64> {
    /// The final estimate
    pub mean: T,
    /// Reweighting passes actually performed
    pub iterations: usize,
    /// Whether the tolerance was met before the budget ran out
    pub converged: bool,
}

impl<T: fmt::Display> fmt::Display for MeanEstimate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.converged {
            "converged"
        } else {
            "not converged"
        };
        write!(
            f,
            "{} ({state} after {} iterations)",
            self.mean, self.iterations
        )
    }
}

/// Stetson J value with the intermediate robust mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StetsonJResult<T = f64> {
    pub value: T,
    pub mean: MeanEstimate<T>,
    pub n_points: usize,
}

/// Outcome of a multi-band aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct BandReport<B, T = f64> {
    /// One entry per evaluated band, in ascending band order
    pub statistics: BTreeMap<B, T>,
    /// Bands left out under [`SparseBandPolicy::Skip`](crate::SparseBandPolicy::Skip),
    /// with their observation counts
    pub skipped: Vec<(B, usize)>,
}

impl<B: Ord, T> BandReport<B, T> {
    /// Whether every band present in the input was evaluated
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn get(&self, band: &B) -> Option<&T> {
        self.statistics.get(band)
    }

    pub fn into_statistics(self) -> BTreeMap<B, T> {
        self.statistics
    }
}
