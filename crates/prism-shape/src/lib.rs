#![warn(missing_docs)]

//! Shapes for the prism renderer.
//!
//! A [`Shape`] borrows its object/world transforms from the scene and
//! reports an object-space bound. The world-space bound and the
//! existence-only intersection test are derived once, in the trait.
//! [`SurfaceInteraction`] carries the local differential geometry at a hit.

mod interaction;
mod shape;
mod sphere;

pub use interaction::{Interaction, Shading, SurfaceInteraction};
pub use shape::{Shape, ShapeBase};
pub use sphere::Sphere;
