//! Error types for spectral sample handling.

use thiserror::Error;

/// Errors from malformed spectral sample arrays.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpectrumError {
    /// No samples were given.
    #[error("spectrum has no samples")]
    Empty,

    /// Wavelength and value arrays differ in length.
    #[error("{lambda} wavelengths but {values} values")]
    LengthMismatch {
        /// Number of wavelengths.
        lambda: usize,
        /// Number of values.
        values: usize,
    },
}

/// Result type for spectrum operations.
pub type Result<T> = std::result::Result<T, SpectrumError>;
