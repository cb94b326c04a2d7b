//! Core traits and types for robust light-curve statistics
//!
//! This crate provides the pieces shared by every estimator in the
//! workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Numeric`]: the float abstraction estimators are generic over
//! - [`WeightedLocationEstimator`] and [`VariabilityEstimator`]: the seams
//!   between robust centers, variability indices and band aggregation
//! - [`execution`]: sequential and Rayon-backed batch execution
//!
//! # Example
//!
//! ```rust
//! use robust_core::{execution::sequential, ExecutionEngine};
//!
//! let engine = sequential();
//! let doubled = engine.execute_batch(3, |i| i * 2);
//! assert_eq!(doubled, vec![0, 2, 4]);
//! ```

pub mod error;
pub mod execution;
pub mod numeric;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use numeric::{cast, signed_sqrt, small_sample_factor, weighted_average, Numeric};

pub use traits::{validate_measurements, VariabilityEstimator, WeightedLocationEstimator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ExecutionEngine, ExecutionStrategy, Numeric, Result, SequentialEngine,
        VariabilityEstimator, WeightedLocationEstimator,
    };

    pub use crate::error::Error;

    #[cfg(feature = "parallel")]
    pub use crate::execution::ParallelEngine;
}
