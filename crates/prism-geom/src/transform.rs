//! Affine transforms with a cached inverse.
//!
//! A [`Transform`] stores its matrix together with the matrix inverse. The
//! named constructors supply the inverse analytically, so only
//! [`Transform::from_matrix`] and [`Transform::look_at`] pay for a
//! Gauss-Jordan inversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use prism_math::{radians, Float, Matrix4x4, Normal3f, Point3f, Vector3f};
use tracing::{debug, warn};

use crate::bounds::Bounds3f;
use crate::error::{GeomError, Result};
use crate::ray::Ray;

/// An affine (or projective) map and its inverse.
///
/// `m_inv` is trusted to be the inverse of `m`; [`Transform::with_inverse`]
/// does not check it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    m: Matrix4x4,
    m_inv: Matrix4x4,
}

/// Things a [`Transform`] can map.
pub trait Transformable {
    /// The image of `self` under `t`.
    fn transformed(&self, t: &Transform) -> Self;
}

impl Transform {
    /// The identity.
    pub fn identity() -> Self {
        Self {
            m: Matrix4x4::IDENTITY,
            m_inv: Matrix4x4::IDENTITY,
        }
    }

    /// Wrap `m`, computing its inverse.
    pub fn from_matrix(m: Matrix4x4) -> Result<Self> {
        match m.inverse() {
            Ok(m_inv) => {
                debug!("built transform by explicit inversion");
                Ok(Self { m, m_inv })
            }
            Err(err) => {
                warn!(matrix = %m, "cannot build transform: {err}");
                Err(err.into())
            }
        }
    }

    /// Pair `m` with a caller-supplied inverse.
    pub fn with_inverse(m: Matrix4x4, m_inv: Matrix4x4) -> Self {
        Self { m, m_inv }
    }

    /// Forward matrix.
    pub fn matrix(&self) -> &Matrix4x4 {
        &self.m
    }

    /// Inverse matrix.
    pub fn inverse_matrix(&self) -> &Matrix4x4 {
        &self.m_inv
    }

    /// The inverse transform. Swaps the stored pair; no arithmetic.
    pub fn inverse(&self) -> Self {
        Self {
            m: self.m_inv,
            m_inv: self.m,
        }
    }

    /// Transpose both matrices.
    pub fn transpose(&self) -> Self {
        Self {
            m: self.m.transpose(),
            m_inv: self.m_inv.transpose(),
        }
    }

    /// Whether the forward matrix is exactly the identity.
    pub fn is_identity(&self) -> bool {
        self.m.is_identity()
    }

    /// Whether some basis axis changes length by more than about 0.1%.
    pub fn has_scale(&self) -> bool {
        let la2 = self.apply_vector(&Vector3f::new(1.0, 0.0, 0.0)).length_squared();
        let lb2 = self.apply_vector(&Vector3f::new(0.0, 1.0, 0.0)).length_squared();
        let lc2 = self.apply_vector(&Vector3f::new(0.0, 0.0, 1.0)).length_squared();
        let not_one = |x: Float| !(0.999..=1.001).contains(&x);
        not_one(la2) || not_one(lb2) || not_one(lc2)
    }

    /// Whether the map mirrors: the linear part has negative determinant.
    pub fn swaps_handedness(&self) -> bool {
        self.m.determinant3x3() < 0.0
    }

    // -------------------------------------------------------------------------
    // Named constructors
    // -------------------------------------------------------------------------

    /// Translation by `delta`.
    pub fn translate(delta: &Vector3f) -> Self {
        let m = Matrix4x4::new(
            1.0, 0.0, 0.0, delta.x, //
            0.0, 1.0, 0.0, delta.y, //
            0.0, 0.0, 1.0, delta.z, //
            0.0, 0.0, 0.0, 1.0,
        );
        let m_inv = Matrix4x4::new(
            1.0, 0.0, 0.0, -delta.x, //
            0.0, 1.0, 0.0, -delta.y, //
            0.0, 0.0, 1.0, -delta.z, //
            0.0, 0.0, 0.0, 1.0,
        );
        Self { m, m_inv }
    }

    /// Non-uniform scale. Factors must be nonzero.
    pub fn scale(x: Float, y: Float, z: Float) -> Self {
        let m = Matrix4x4::new(
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        let m_inv = Matrix4x4::new(
            1.0 / x, 0.0, 0.0, 0.0, //
            0.0, 1.0 / y, 0.0, 0.0, //
            0.0, 0.0, 1.0 / z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        Self { m, m_inv }
    }

    /// Rotation about the x axis by `theta` degrees.
    pub fn rotate_x(theta: Float) -> Self {
        let (s, c) = radians(theta).sin_cos();
        let m = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        Self::orthogonal(m)
    }

    /// Rotation about the y axis by `theta` degrees.
    pub fn rotate_y(theta: Float) -> Self {
        let (s, c) = radians(theta).sin_cos();
        let m = Matrix4x4::new(
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        Self::orthogonal(m)
    }

    /// Rotation about the z axis by `theta` degrees.
    pub fn rotate_z(theta: Float) -> Self {
        let (s, c) = radians(theta).sin_cos();
        let m = Matrix4x4::new(
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        Self::orthogonal(m)
    }

    /// Rotation by `theta` degrees about `axis` through the origin.
    ///
    /// Uses Rodrigues' rotation formula. `axis` is normalized here.
    pub fn rotate(theta: Float, axis: &Vector3f) -> Self {
        let a = axis.normalize();
        let (s, c) = radians(theta).sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (a.x, a.y, a.z);
        let m = Matrix4x4::new(
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            0.0,
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            0.0,
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        );
        Self::orthogonal(m)
    }

    /// World-to-camera transform for a camera at `pos` looking at `look`.
    ///
    /// The camera frame's x axis is `normalize(up) × dir`, which points to
    /// the viewer's left; y is `dir × left` and z is the view direction.
    pub fn look_at(pos: &Point3f, look: &Point3f, up: &Vector3f) -> Result<Self> {
        let degenerate = || GeomError::DegenerateLookAt {
            eye: *pos,
            look: *look,
            up: *up,
        };
        let view = *look - *pos;
        if view.length_squared() == 0.0 || up.length_squared() == 0.0 {
            return Err(degenerate());
        }
        let dir = view.normalize();
        let left = up.normalize().cross(&dir);
        if left.length_squared() == 0.0 {
            return Err(degenerate());
        }
        let left = left.normalize();
        let new_up = dir.cross(&left);

        let camera_to_world = Matrix4x4::new(
            left.x, new_up.x, dir.x, pos.x, //
            left.y, new_up.y, dir.y, pos.y, //
            left.z, new_up.z, dir.z, pos.z, //
            0.0, 0.0, 0.0, 1.0,
        );
        let world_to_camera = camera_to_world.inverse()?;
        Ok(Self::with_inverse(world_to_camera, camera_to_world))
    }

    fn orthogonal(m: Matrix4x4) -> Self {
        Self {
            m,
            m_inv: m.transpose(),
        }
    }

    // -------------------------------------------------------------------------
    // Application
    // -------------------------------------------------------------------------

    /// Map a point, dividing by the homogeneous weight unless it is exactly 1.
    ///
    /// The weight must be non-zero: a projective bottom row that sends `p`
    /// to `w = 0` trips the point division assertion in debug builds.
    /// Affine transforms always give `w = 1`.
    pub fn apply_point(&self, p: &Point3f) -> Point3f {
        let m = &self.m.m;
        let (x, y, z) = (p.x, p.y, p.z);
        let xp = m[0][0] * x + m[0][1] * y + m[0][2] * z + m[0][3];
        let yp = m[1][0] * x + m[1][1] * y + m[1][2] * z + m[1][3];
        let zp = m[2][0] * x + m[2][1] * y + m[2][2] * z + m[2][3];
        let wp = m[3][0] * x + m[3][1] * y + m[3][2] * z + m[3][3];
        let q = Point3f::new(xp, yp, zp);
        if wp == 1.0 {
            q
        } else {
            q / wp
        }
    }

    /// Map a vector through the upper-left 3×3 block.
    pub fn apply_vector(&self, v: &Vector3f) -> Vector3f {
        let m = &self.m.m;
        let (x, y, z) = (v.x, v.y, v.z);
        Vector3f::new(
            m[0][0] * x + m[0][1] * y + m[0][2] * z,
            m[1][0] * x + m[1][1] * y + m[1][2] * z,
            m[2][0] * x + m[2][1] * y + m[2][2] * z,
        )
    }

    /// Map a normal through the transpose of the inverse's 3×3 block.
    pub fn apply_normal(&self, n: &Normal3f) -> Normal3f {
        let mi = &self.m_inv.m;
        let (x, y, z) = (n.x, n.y, n.z);
        Normal3f::new(
            mi[0][0] * x + mi[1][0] * y + mi[2][0] * z,
            mi[0][1] * x + mi[1][1] * y + mi[2][1] * z,
            mi[0][2] * x + mi[1][2] * y + mi[2][2] * z,
        )
    }

    /// Map a vector through the componentwise absolute value of the 3×3
    /// block. Bounds how far an error box around a point can grow.
    pub fn apply_vector_abs(&self, v: &Vector3f) -> Vector3f {
        let m = &self.m.m;
        let row = |r: usize| m[r][0].abs() * v.x + m[r][1].abs() * v.y + m[r][2].abs() * v.z;
        Vector3f::new(row(0), row(1), row(2))
    }

    /// Map origin and direction; extent, time and medium carry over.
    pub fn apply_ray<'m>(&self, r: &Ray<'m>) -> Ray<'m> {
        Ray::with(
            self.apply_point(&r.o),
            self.apply_vector(&r.d),
            r.t_max(),
            r.time,
            r.medium,
        )
    }

    /// Bound of the mapped box: the union of its eight mapped corners.
    pub fn apply_bounds(&self, b: &Bounds3f) -> Bounds3f {
        (0..8).fold(Bounds3f::default(), |acc, i| {
            acc.union_point(&self.apply_point(&b.corner(i)))
        })
    }

    /// Map anything [`Transformable`].
    pub fn apply<T: Transformable>(&self, x: &T) -> T {
        x.transformed(self)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for &Transform {
    type Output = Transform;

    /// `(a * b)` applies `b` first, then `a`.
    fn mul(self, rhs: &Transform) -> Transform {
        Transform {
            m: self.m * rhs.m,
            m_inv: rhs.m_inv * self.m_inv,
        }
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        &self * &rhs
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "t=")?;
        writeln!(f, "{}", self.m)?;
        writeln!(f, "inv=")?;
        write!(f, "{}", self.m_inv)
    }
}

impl Transformable for Point3f {
    fn transformed(&self, t: &Transform) -> Self {
        t.apply_point(self)
    }
}

impl Transformable for Vector3f {
    fn transformed(&self, t: &Transform) -> Self {
        t.apply_vector(self)
    }
}

impl Transformable for Normal3f {
    fn transformed(&self, t: &Transform) -> Self {
        t.apply_normal(self)
    }
}

impl Transformable for Bounds3f {
    fn transformed(&self, t: &Transform) -> Self {
        t.apply_bounds(self)
    }
}

impl Transformable for Ray<'_> {
    fn transformed(&self, t: &Transform) -> Self {
        t.apply_ray(self)
    }
}
