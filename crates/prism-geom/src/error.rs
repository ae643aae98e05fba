//! Error types for rays, bounds and transforms.

use prism_math::{MathError, Point3f, Vector3f};
use thiserror::Error;

/// Errors that can occur while building transforms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Matrix inversion failed.
    #[error(transparent)]
    Math(#[from] MathError),

    /// `up` is parallel to the viewing direction, or the eye sits on the target.
    #[error("degenerate look-at: eye {eye}, look {look}, up {up}")]
    DegenerateLookAt {
        /// Camera position.
        eye: Point3f,
        /// Point looked at.
        look: Point3f,
        /// Requested up vector.
        up: Vector3f,
    },
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;
