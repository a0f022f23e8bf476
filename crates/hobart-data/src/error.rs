//! Error types for data operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur during data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// Stocks directory absent
    #[error("Stocks directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Stock or reference file absent
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Expected column absent from a tabular file
    #[error("Expected a '{0}' column but none was found")]
    MissingColumn(String),

    /// Reference file yielded no usable symbols
    #[error("No symbols found in symbols file: {0}")]
    EmptySymbolSet(PathBuf),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
