//! Error types for the math crate.

use thiserror::Error;

/// Failures reported by math operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// The matrix has no inverse.
    #[error("singular matrix: {0}")]
    SingularMatrix(&'static str),
}

/// Result type alias for math operations.
pub type Result<T> = std::result::Result<T, MathError>;
