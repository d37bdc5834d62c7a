//! Error types for RF math.

use thiserror::Error;

/// Errors that can occur in the numeric transform.
#[derive(Debug, Error)]
pub enum RfError {
    /// Input length mismatch.
    #[error("Input length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type for RF math.
pub type RfResult<T> = Result<T, RfError>;
