//! Local geometry at a point where light meets a surface or medium.

use prism_geom::{MediumInterface, Transform, Transformable};
use prism_math::{Dot, Float, Normal3f, Point2f, Point3f, Vector3f};

use crate::shape::Shape;

/// Geometry common to surface and medium interactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction<'a> {
    /// Position.
    pub p: Point3f,
    /// Time of the ray that found this point.
    pub time: Float,
    /// Conservative bound on the floating-point error in `p`.
    pub p_error: Vector3f,
    /// Outgoing direction, toward the ray origin.
    pub wo: Vector3f,
    /// Surface normal. Zero for interactions inside a medium.
    pub n: Normal3f,
    /// Media on either side.
    pub medium_interface: MediumInterface<'a>,
}

impl<'a> Interaction<'a> {
    /// Collect the fields.
    pub fn new(
        p: Point3f,
        n: Normal3f,
        p_error: Vector3f,
        wo: Vector3f,
        time: Float,
        medium_interface: MediumInterface<'a>,
    ) -> Self {
        Self {
            p,
            time,
            p_error,
            wo,
            n,
            medium_interface,
        }
    }

    /// Whether this lies on a surface, i.e. carries a normal.
    pub fn is_surface_interaction(&self) -> bool {
        !self.n.is_zero()
    }
}

/// Perturbed geometry used for shading (bump or interpolated normals).
#[derive(Debug, Clone, Copy, Default)]
pub struct Shading {
    /// Shading normal, always in the hemisphere of the geometric normal.
    pub n: Normal3f,
    /// ∂p/∂u.
    pub dpdu: Vector3f,
    /// ∂p/∂v.
    pub dpdv: Vector3f,
    /// ∂n/∂u.
    pub dndu: Normal3f,
    /// ∂n/∂v.
    pub dndv: Normal3f,
}

/// A ray-surface hit with its parametric differential geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceInteraction<'a> {
    /// Position, normal, time and media.
    pub interaction: Interaction<'a>,
    /// Surface parameters of the hit.
    pub uv: Point2f,
    /// ∂p/∂u.
    pub dpdu: Vector3f,
    /// ∂p/∂v.
    pub dpdv: Vector3f,
    /// ∂n/∂u.
    pub dndu: Normal3f,
    /// ∂n/∂v.
    pub dndv: Normal3f,
    /// Shape that was hit.
    pub shape: Option<&'a dyn Shape>,
    /// Shading frame.
    pub shading: Shading,
}

impl<'a> SurfaceInteraction<'a> {
    /// Build from the parametric partials.
    ///
    /// The normal is `normalize(dpdu × dpdv)`, negated when the shape's
    /// orientation is reversed or its transform mirrors (not both).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p: Point3f,
        p_error: Vector3f,
        uv: Point2f,
        wo: Vector3f,
        dpdu: Vector3f,
        dpdv: Vector3f,
        dndu: Normal3f,
        dndv: Normal3f,
        time: Float,
        shape: Option<&'a dyn Shape>,
    ) -> Self {
        let mut n = Normal3f::from(dpdu.cross(&dpdv).normalize());
        if flips(shape) {
            n = -n;
        }
        Self {
            interaction: Interaction::new(p, n, p_error, wo, time, MediumInterface::default()),
            uv,
            dpdu,
            dpdv,
            dndu,
            dndv,
            shape,
            shading: Shading {
                n,
                dpdu,
                dpdv,
                dndu,
                dndv,
            },
        }
    }

    /// Replace the shading frame.
    ///
    /// The shading normal gets the same orientation flip as the geometric
    /// one. Then one of the two normals is flipped into the other's
    /// hemisphere: the geometric normal follows the shading normal when
    /// `orientation_is_authoritative`, otherwise the reverse.
    pub fn set_shading_geometry(
        &mut self,
        dpdus: Vector3f,
        dpdvs: Vector3f,
        dndus: Normal3f,
        dndvs: Normal3f,
        orientation_is_authoritative: bool,
    ) {
        let mut ns = Normal3f::from(dpdus.cross(&dpdvs)).normalize();
        if flips(self.shape) {
            ns = -ns;
        }
        if orientation_is_authoritative {
            self.interaction.n = self.interaction.n.face_forward(&ns);
        } else {
            ns = ns.face_forward(&self.interaction.n);
        }
        self.shading = Shading {
            n: ns,
            dpdu: dpdus,
            dpdv: dpdvs,
            dndu: dndus,
            dndv: dndvs,
        };
    }

    /// Geometric normal.
    pub fn n(&self) -> Normal3f {
        self.interaction.n
    }

    /// Position.
    pub fn p(&self) -> Point3f {
        self.interaction.p
    }
}

fn flips(shape: Option<&dyn Shape>) -> bool {
    shape.is_some_and(|s| s.base().flips_normals())
}

fn normalize_nonzero(n: Normal3f) -> Normal3f {
    if n.is_zero() {
        n
    } else {
        n.normalize()
    }
}

impl Transformable for SurfaceInteraction<'_> {
    /// Points map as points, partials as vectors and normals by the inverse
    /// transpose. The error bound grows by the absolute matrix, and the
    /// shading normal ends up in the geometric normal's hemisphere.
    fn transformed(&self, t: &Transform) -> Self {
        let it = &self.interaction;
        let wo = t.apply_vector(&it.wo);
        let wo = if wo.length_squared() > 0.0 { wo.normalize() } else { wo };
        let n = normalize_nonzero(t.apply_normal(&it.n));
        let shading_n = normalize_nonzero(t.apply_normal(&self.shading.n)).face_forward(&n);

        Self {
            interaction: Interaction {
                p: t.apply_point(&it.p),
                time: it.time,
                p_error: t.apply_vector_abs(&it.p_error),
                wo,
                n,
                medium_interface: it.medium_interface,
            },
            uv: self.uv,
            dpdu: t.apply_vector(&self.dpdu),
            dpdv: t.apply_vector(&self.dpdv),
            dndu: t.apply_normal(&self.dndu),
            dndv: t.apply_normal(&self.dndv),
            shape: self.shape,
            shading: Shading {
                n: shading_n,
                dpdu: t.apply_vector(&self.shading.dpdu),
                dpdv: t.apply_vector(&self.shading.dpdv),
                dndu: t.apply_normal(&self.shading.dndu),
                dndv: t.apply_normal(&self.shading.dndv),
            },
        }
    }
}
