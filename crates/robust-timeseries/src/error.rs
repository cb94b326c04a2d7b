//! Error types for robust-timeseries

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Robust core error: {0}")]
    RobustCore(#[from] robust_core::Error),

    #[error("The indicated label '{0}' was not found")]
    MissingColumn(String),

    #[error("Column '{column}' has the wrong type: expected {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
    },

    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Time series has no flux uncertainties")]
    MissingUncertainty,
}

pub type Result<T> = std::result::Result<T, Error>;
