//! Spheres, optionally clipped in z and swept partway around in phi.

use prism_geom::{Bounds3f, Ray, Transform};
use prism_math::{clamp, consts, degrees, radians, Float, Point3f};
use tracing::debug;

use crate::interaction::SurfaceInteraction;
use crate::shape::{Shape, ShapeBase};

/// A sphere of radius `r` centered at the object-space origin, kept
/// between `z_min` and `z_max` and swept from `phi = 0` to `phi_max`.
#[derive(Debug, Clone)]
pub struct Sphere<'t> {
    base: ShapeBase<'t>,
    radius: Float,
    z_min: Float,
    z_max: Float,
    theta_z_min: Float,
    theta_z_max: Float,
    phi_max: Float,
}

impl<'t> Sphere<'t> {
    /// Build a sphere. `phi_max` is in degrees.
    ///
    /// The z range is reordered and clamped to `[-radius, radius]`, and
    /// `phi_max` is clamped to `[0, 360]`.
    pub fn new(
        object_to_world: &'t Transform,
        world_to_object: &'t Transform,
        reverse_orientation: bool,
        radius: Float,
        z_min: Float,
        z_max: Float,
        phi_max: Float,
    ) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        let lo = clamp(z_min.min(z_max), -radius, radius);
        let hi = clamp(z_min.max(z_max), -radius, radius);
        let phi_deg = clamp(phi_max, 0.0, 360.0);
        if lo != z_min.min(z_max) || hi != z_min.max(z_max) || phi_deg != phi_max {
            debug!(
                radius,
                z_min = lo,
                z_max = hi,
                phi_max = phi_deg,
                "clamped sphere parameters"
            );
        }

        Self {
            base: ShapeBase::new(object_to_world, world_to_object, reverse_orientation),
            radius,
            z_min: lo,
            z_max: hi,
            theta_z_min: clamp(lo / radius, -1.0, 1.0).acos(),
            theta_z_max: clamp(hi / radius, -1.0, 1.0).acos(),
            phi_max: radians(phi_deg),
        }
    }

    /// A complete sphere.
    pub fn full(object_to_world: &'t Transform, world_to_object: &'t Transform, radius: Float) -> Self {
        Self::new(object_to_world, world_to_object, false, radius, -radius, radius, 360.0)
    }

    /// Radius.
    pub fn radius(&self) -> Float {
        self.radius
    }

    /// Lower z clip.
    pub fn z_min(&self) -> Float {
        self.z_min
    }

    /// Upper z clip.
    pub fn z_max(&self) -> Float {
        self.z_max
    }

    /// Polar angle of the `z_min` clip, in radians.
    pub fn theta_z_min(&self) -> Float {
        self.theta_z_min
    }

    /// Polar angle of the `z_max` clip, in radians.
    pub fn theta_z_max(&self) -> Float {
        self.theta_z_max
    }

    /// Sweep angle in radians.
    pub fn phi_max(&self) -> Float {
        self.phi_max
    }
}

impl Shape for Sphere<'_> {
    fn base(&self) -> &ShapeBase<'_> {
        &self.base
    }

    /// Tight in x and y per quadrant of the phi sweep.
    ///
    /// | sweep         | x                  | y                  |
    /// |---------------|--------------------|--------------------|
    /// | up to 90°     | `[0, r]`           | `[0, r sin φ]`     |
    /// | up to 180°    | `[r cos φ, r]`     | `[0, r]`           |
    /// | up to 270°    | `[-r, r]`          | `[r sin φ, r]`     |
    /// | beyond        | `[-r, r]`          | `[-r, r]`          |
    fn object_bound(&self) -> Bounds3f {
        let r = self.radius;
        let (sin_phi, cos_phi) = self.phi_max.sin_cos();
        let ((x0, x1), (y0, y1)) = if self.phi_max <= consts::PI_OVER_2 {
            ((0.0, r), (0.0, r * sin_phi))
        } else if self.phi_max <= consts::PI {
            ((r * cos_phi, r), (0.0, r))
        } else if self.phi_max <= 1.5 * consts::PI {
            ((-r, r), (r * sin_phi, r))
        } else {
            ((-r, r), (-r, r))
        };
        Bounds3f::new(
            Point3f::new(x0, y0, self.z_min),
            Point3f::new(x1, y1, self.z_max),
        )
    }

    /// Always a miss: sphere hit-testing is not provided.
    fn intersect(&self, _ray: &Ray<'_>, _test_alpha_texture: bool) -> Option<(Float, SurfaceInteraction<'_>)> {
        None
    }

    fn area(&self) -> Float {
        self.phi_max * self.radius * (self.z_max - self.z_min)
    }
}

impl std::fmt::Display for Sphere<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sphere(r={}, z=[{}, {}], phi_max={}°)",
            self.radius,
            self.z_min,
            self.z_max,
            degrees(self.phi_max)
        )
    }
}
