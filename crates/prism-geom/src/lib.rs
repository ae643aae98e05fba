#![warn(missing_docs)]

//! Rays, bounding boxes and transforms for the prism renderer.
//!
//! # Architecture
//!
//! - [`Ray`] - origin, direction and a shrinkable parametric extent
//! - [`Bounds2`] / [`Bounds3`] - axis-aligned boxes with slab tests and
//!   integer lattice iteration
//! - [`Transform`] - matrix plus cached inverse, applied to points, vectors,
//!   normals, rays and boxes
//! - [`Medium`] / [`MediumInterface`] - opaque media referenced by rays
//!
//! # Example
//!
//! ```
//! use prism_geom::{Bounds3f, Ray, Transform};
//! use prism_math::{Point3f, Vector3f};
//!
//! let unit = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0));
//! let world = Transform::translate(&Vector3f::new(2.0, 0.0, 0.0)).apply_bounds(&unit);
//!
//! let ray = Ray::new(Point3f::new(0.0, 0.5, 0.5), Vector3f::new(1.0, 0.0, 0.0));
//! let (t0, t1) = world.intersect_p(&ray).unwrap();
//! assert_eq!((t0, t1), (2.0, 3.0));
//! ```

mod bounds;
mod error;
mod medium;
mod ray;
mod transform;

pub use bounds::{Bounds2, Bounds2f, Bounds2i, Bounds2iIter, Bounds3, Bounds3f, Bounds3i, Bounds3iIter};
pub use error::{GeomError, Result};
pub use medium::{Medium, MediumInterface};
pub use ray::Ray;
pub use transform::{Transform, Transformable};
