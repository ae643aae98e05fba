//! Displacement vectors in two and three dimensions.

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

use crate::scalar::{max_of, min_of, Real, Scalar};
use crate::Float;

/// Dot product between two tuple types.
///
/// Implemented for vector·vector, normal·normal, and the mixed
/// vector·normal pairs.
pub trait Dot<Rhs = Self> {
    /// Component type of the result.
    type Output: Scalar;

    /// Dot product.
    fn dot(&self, rhs: &Rhs) -> Self::Output;

    /// Absolute value of the dot product.
    fn abs_dot(&self, rhs: &Rhs) -> Self::Output {
        self.dot(rhs).abs()
    }

    /// Flip `self` so that it lies in the same hemisphere as `reference`.
    ///
    /// Only a strictly negative dot product flips; a zero dot product
    /// leaves `self` unchanged.
    fn face_forward(&self, reference: &Rhs) -> Self
    where
        Self: Copy + Neg<Output = Self>,
    {
        if self.dot(reference) < <<Self as Dot<Rhs>>::Output as Zero>::zero() {
            -*self
        } else {
            *self
        }
    }
}

// =============================================================================
// Vector2
// =============================================================================

/// A 2D vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

/// `Vector2` with [`Float`] components.
pub type Vector2f = Vector2<Float>;
/// `Vector2` with integer components.
pub type Vector2i = Vector2<i32>;

impl<T: Scalar> Vector2<T> {
    /// Create a vector. Components must not be NaN.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        let v = Self { x, y };
        debug_assert!(!v.has_nans(), "Vector2 has NaN component: {v}");
        v
    }

    /// Whether any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Squared length.
    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Componentwise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Smallest component.
    pub fn min_component(&self) -> T {
        min_of(self.x, self.y)
    }

    /// Largest component.
    pub fn max_component(&self) -> T {
        max_of(self.x, self.y)
    }

    /// Index of the largest component; ties go to `x`.
    pub fn max_dimension(&self) -> usize {
        if self.x >= self.y {
            0
        } else {
            1
        }
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(min_of(self.x, other.x), min_of(self.y, other.y))
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(max_of(self.x, other.x), max_of(self.y, other.y))
    }

    /// Reorder components: the result's `x` is `self[x]`, its `y` is `self[y]`.
    pub fn permute(&self, x: usize, y: usize) -> Self {
        Self::new(self[x], self[y])
    }

    /// Convert the component type.
    pub fn cast<U: Scalar>(&self) -> Vector2<U> {
        Vector2::new(U::from_f64(self.x.to_f64()), U::from_f64(self.y.to_f64()))
    }
}

impl<T: Real> Vector2<T> {
    /// Euclidean length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction. Zero-length input is a contract
    /// violation.
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Unit vector perpendicular to `self`, a quarter turn counter-clockwise.
    pub fn coordinate_system(&self) -> Self {
        Self::new(-self.y, self.x).normalize()
    }
}

impl<T: Scalar> Dot for Vector2<T> {
    type Output = T;

    #[inline]
    fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {} ]", self.x, self.y)
    }
}

impl_componentwise_ops!(Vector2 { x, y });
impl_component_index!(Vector2 { 0 => x, 1 => y });

// =============================================================================
// Vector3
// =============================================================================

/// A 3D vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

/// `Vector3` with [`Float`] components.
pub type Vector3f = Vector3<Float>;
/// `Vector3` with integer components.
pub type Vector3i = Vector3<i32>;

impl<T: Scalar> Vector3<T> {
    /// Create a vector. Components must not be NaN.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let v = Self { x, y, z };
        debug_assert!(!v.has_nans(), "Vector3 has NaN component: {v}");
        v
    }

    /// Whether any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Squared length.
    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Componentwise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Cross product, evaluated in `f64` and narrowed back to `T`.
    pub fn cross(&self, other: &Self) -> Self {
        let (ax, ay, az) = (self.x.to_f64(), self.y.to_f64(), self.z.to_f64());
        let (bx, by, bz) = (other.x.to_f64(), other.y.to_f64(), other.z.to_f64());
        Self::new(
            T::from_f64(ay * bz - az * by),
            T::from_f64(az * bx - ax * bz),
            T::from_f64(ax * by - ay * bx),
        )
    }

    /// Smallest component.
    pub fn min_component(&self) -> T {
        min_of(self.x, min_of(self.y, self.z))
    }

    /// Largest component.
    pub fn max_component(&self) -> T {
        max_of(self.x, max_of(self.y, self.z))
    }

    /// Index of the largest component. Ties go to the lower-numbered axis.
    pub fn max_dimension(&self) -> usize {
        if self.x >= self.y {
            if self.x >= self.z {
                0
            } else {
                2
            }
        } else if self.y >= self.z {
            1
        } else {
            2
        }
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            min_of(self.x, other.x),
            min_of(self.y, other.y),
            min_of(self.z, other.z),
        )
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            max_of(self.x, other.x),
            max_of(self.y, other.y),
            max_of(self.z, other.z),
        )
    }

    /// Reorder components by index.
    pub fn permute(&self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self[x], self[y], self[z])
    }

    /// Convert the component type.
    pub fn cast<U: Scalar>(&self) -> Vector3<U> {
        Vector3::new(
            U::from_f64(self.x.to_f64()),
            U::from_f64(self.y.to_f64()),
            U::from_f64(self.z.to_f64()),
        )
    }
}

impl<T: Real> Vector3<T> {
    /// Euclidean length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction. Zero-length input is a contract
    /// violation.
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Complete `self` (assumed normalized) to a right-handed orthonormal
    /// basis `(self, v2, v3)`.
    ///
    /// The helper vector is built from whichever of `x`/`y` has the larger
    /// magnitude so it never degenerates.
    pub fn coordinate_system(&self) -> (Self, Self) {
        let v2 = if self.x.abs() > self.y.abs() {
            Self::new(-self.z, T::zero(), self.x) / (self.x * self.x + self.z * self.z).sqrt()
        } else {
            Self::new(T::zero(), -self.z, self.y) / (self.y * self.y + self.z * self.z).sqrt()
        };
        let v3 = self.cross(&v2);
        (v2, v3)
    }
}

impl<T: Scalar> Dot for Vector3<T> {
    type Output = T;

    #[inline]
    fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl_componentwise_ops!(Vector3 { x, y, z });
impl_component_index!(Vector3 { 0 => x, 1 => y, 2 => z });

/// Unit direction from spherical coordinates, `theta` measured from +z and
/// `phi` from +x.
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}
