//! Error types for sweep-file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or parsing sweep files.
///
/// All of these are fatal to the run: a wrong or partial dataset must not
/// produce a misleadingly labeled report.
#[derive(Debug, Error)]
pub enum ParseError {
    /// I/O error reading a file or directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON or does not match the .asd schema.
    #[error("Invalid .asd format: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid value for a field.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },

    /// The sweep directory does not exist or is not a directory.
    #[error("Not a sweep directory: {0}")]
    NotADirectory(PathBuf),
}

impl ParseError {
    /// Create an invalid value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
