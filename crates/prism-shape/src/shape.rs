//! The shape interface.

use std::fmt;

use prism_geom::{Bounds3f, Ray, Transform};
use prism_math::Float;

use crate::interaction::SurfaceInteraction;

/// Placement shared by every shape: borrowed object/world transforms and
/// orientation flags.
///
/// The transforms belong to the scene and outlive the shape.
#[derive(Debug, Clone, Copy)]
pub struct ShapeBase<'t> {
    /// Object space to world space.
    pub object_to_world: &'t Transform,
    /// World space to object space.
    pub world_to_object: &'t Transform,
    /// Flip surface normals.
    pub reverse_orientation: bool,
    /// Whether `object_to_world` mirrors. Computed once at construction.
    pub transform_swaps_handedness: bool,
}

impl<'t> ShapeBase<'t> {
    /// Capture the transforms and derive the handedness flag.
    pub fn new(
        object_to_world: &'t Transform,
        world_to_object: &'t Transform,
        reverse_orientation: bool,
    ) -> Self {
        Self {
            object_to_world,
            world_to_object,
            reverse_orientation,
            transform_swaps_handedness: object_to_world.swaps_handedness(),
        }
    }

    /// Whether generated normals must be negated.
    pub fn flips_normals(&self) -> bool {
        self.reverse_orientation ^ self.transform_swaps_handedness
    }
}

/// A geometric shape placed in the scene.
///
/// Implementors provide an object-space bound and a full intersection
/// routine; world bound and the existence-only test come for free.
pub trait Shape: Send + Sync + fmt::Debug {
    /// Transforms and orientation.
    fn base(&self) -> &ShapeBase<'_>;

    /// Axis-aligned bound in object space.
    fn object_bound(&self) -> Bounds3f;

    /// Axis-aligned bound in world space: the object bound pushed through
    /// `object_to_world`. Recomputed on every call.
    fn world_bound(&self) -> Bounds3f {
        self.base().object_to_world.apply_bounds(&self.object_bound())
    }

    /// Nearest hit before `ray.t_max()`, as the parametric distance and the
    /// surface description at the hit.
    fn intersect(
        &self,
        ray: &Ray<'_>,
        test_alpha_texture: bool,
    ) -> Option<(Float, SurfaceInteraction<'_>)>;

    /// Whether any hit exists before `ray.t_max()`.
    ///
    /// Runs [`Shape::intersect`] and drops the details. Shapes with a cheaper
    /// test may override it.
    fn intersect_p(&self, ray: &Ray<'_>, test_alpha_texture: bool) -> bool {
        self.intersect(ray, test_alpha_texture).is_some()
    }

    /// Surface area in object space.
    fn area(&self) -> Float;
}
