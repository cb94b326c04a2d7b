//! Error types for robust statistical analysis
//!
//! Provides a unified error type for all robust-lightcurve crates.

use thiserror::Error;

/// Core error type for robust statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Too few observations for the requested estimator
    #[error("Invalid input size: expected at least {expected} observations, got {actual}")]
    InvalidInputSize { expected: usize, actual: usize },

    /// A measurement uncertainty that is zero or negative
    #[error("Invalid uncertainty at index {index}: {value} (uncertainties must be strictly positive)")]
    InvalidUncertainty { index: usize, value: f64 },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Failure while evaluating a single band of a multi-band series
    #[error("Band '{band}': {source}")]
    Band {
        band: String,
        #[source]
        source: Box<Error>,
    },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sample that is too small
    pub fn insufficient_points(expected: usize, actual: usize) -> Self {
        Self::InvalidInputSize { expected, actual }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Attach a band label to an error raised while processing that band
    pub fn for_band(band: impl std::fmt::Display, source: Error) -> Self {
        Self::Band {
            band: band.to_string(),
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through band wrappers
    pub fn root(&self) -> &Error {
        match self {
            Self::Band { source, .. } => source.root(),
            other => other,
        }
    }
}
