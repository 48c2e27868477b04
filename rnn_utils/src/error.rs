//! Error types for the rnn_utils crate

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the rnn_utils crate
#[derive(Debug, Error)]
pub enum RnnUtilsError {
    /// Empty, degenerate or otherwise unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A metric or column name that the lookup tables do not know
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// More series requested than the fixed color/marker palette can serve
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Required input file is absent
    #[error("Missing resource: {} (download from {url})", path.display())]
    MissingResource { path: PathBuf, url: String },

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from the chart rendering backend
    #[error("Plot error: {0}")]
    PlotError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON parsing
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error from date parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] chrono::ParseError),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, RnnUtilsError>;

impl From<PolarsError> for RnnUtilsError {
    fn from(err: PolarsError) -> Self {
        RnnUtilsError::PolarsError(err.to_string())
    }
}
