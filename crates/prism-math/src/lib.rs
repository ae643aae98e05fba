#![warn(missing_docs)]

//! Math types for the prism renderer.
//!
//! Generic 2D/3D vectors, points and normals over integer or floating-point
//! components, plus the row-major [`Matrix4x4`] that backs every transform.
//! Points, vectors and normals are distinct types so that only the
//! geometrically meaningful operations type-check.

#[macro_use]
mod macros;

mod error;
mod float;
mod matrix;
mod normal;
mod point;
mod scalar;
mod vector;

pub use error::{MathError, Result};
pub use float::{clamp, consts, degrees, lerp, quadratic, radians, Float};
pub use matrix::Matrix4x4;
pub use normal::{Normal3, Normal3f};
pub use point::{Point2, Point2f, Point2i, Point3, Point3f, Point3i};
pub use scalar::{max_of, min_of, Real, Scalar};
pub use vector::{spherical_direction, Dot, Vector2, Vector2f, Vector2i, Vector3, Vector3f, Vector3i};
