//! Error types for the data-loader crate.
//!
//! Only the ingestion layer can fail. Once a [`Dataset`](crate::Dataset) has
//! been built, the scoring engine treats every input as valid and substitutes
//! defaults instead of returning errors.

use thiserror::Error;

/// Errors that can occur while loading and validating a dataset file
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The dataset file is not valid JSON or does not match the expected shape
    ///
    /// Line and column come straight from serde_json and are 1-based.
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field} of '{item}': {value}")]
    InvalidValue {
        item: String,
        field: String,
        value: String,
    },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
