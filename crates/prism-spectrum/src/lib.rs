#![warn(missing_docs)]

//! Spectral radiance representations for the prism renderer.
//!
//! [`CoefficientSpectrum`] stores a fixed number of coefficients with
//! componentwise arithmetic; [`RgbSpectrum`] is its three-channel form.
//! The [`sampled`] helpers turn irregular `(wavelength, value)` tables into
//! averages over wavelength ranges.

mod coefficient;
mod error;
pub mod sampled;

pub use coefficient::{CoefficientSpectrum, RgbSpectrum};
pub use error::{Result, SpectrumError};
