//! Surface normals.
//!
//! A normal is not a vector: under a non-rigid transform it maps with the
//! inverse transpose. Keeping it a distinct type stops the two from being
//! transformed the same way by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scalar::{Real, Scalar};
use crate::vector::{Dot, Vector3};
use crate::Float;

/// A 3D surface normal. Not necessarily unit length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

/// `Normal3` with [`Float`] components.
pub type Normal3f = Normal3<Float>;

impl<T: Scalar> Normal3<T> {
    /// Create a normal. Components must not be NaN.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let n = Self { x, y, z };
        debug_assert!(!n.has_nans(), "Normal3 has NaN component: {n}");
        n
    }

    /// Whether any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero() && self.z == T::zero()
    }

    /// Squared length.
    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Componentwise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }
}

impl<T: Real> Normal3<T> {
    /// Length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit normal in the same direction.
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }
}

impl<T: Scalar> From<Vector3<T>> for Normal3<T> {
    fn from(v: Vector3<T>) -> Self {
        Normal3::new(v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<Normal3<T>> for Vector3<T> {
    fn from(n: Normal3<T>) -> Self {
        Vector3::new(n.x, n.y, n.z)
    }
}

impl<T: Scalar> Dot for Normal3<T> {
    type Output = T;

    #[inline]
    fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<T: Scalar> Dot<Vector3<T>> for Normal3<T> {
    type Output = T;

    #[inline]
    fn dot(&self, rhs: &Vector3<T>) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<T: Scalar> Dot<Normal3<T>> for Vector3<T> {
    type Output = T;

    #[inline]
    fn dot(&self, rhs: &Normal3<T>) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<T: fmt::Display> fmt::Display for Normal3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl_componentwise_ops!(Normal3 { x, y, z });
impl_component_index!(Normal3 { 0 => x, 1 => y, 2 => z });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3f;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_vector_conversion() {
        let v = Vector3f::new(1.0, -2.0, 3.0);
        let n = Normal3f::from(v);
        assert_eq!(Vector3f::from(n), v);
    }

    #[test]
    fn test_mixed_dot_products() {
        let n = Normal3f::new(0.0, 0.0, 1.0);
        let v = Vector3f::new(3.0, 4.0, -2.0);
        assert_eq!(n.dot(&v), -2.0);
        assert_eq!(v.dot(&n), -2.0);
        assert_eq!(n.abs_dot(&v), 2.0);
        assert_eq!(n.dot(&n), 1.0);
    }

    #[test]
    fn test_face_forward_against_vector() {
        let n = Normal3f::new(0.0, 1.0, 0.0);
        let down = Vector3f::new(0.0, -1.0, 0.0);
        assert_eq!(n.face_forward(&down), Normal3f::new(0.0, -1.0, 0.0));
        let up = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(n.face_forward(&up), n);
    }

    #[test]
    fn test_normalize_and_zero() {
        let n = Normal3f::new(0.0, 3.0, 4.0).normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.y, 0.6, epsilon = 1e-6);
        assert!(Normal3f::default().is_zero());
        assert!(!n.is_zero());
    }

    #[test]
    fn test_componentwise_ops() {
        let a = Normal3f::new(1.0, 2.0, 3.0);
        let b = Normal3f::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Normal3f::new(1.5, 2.5, 3.5));
        assert_eq!(-a, Normal3f::new(-1.0, -2.0, -3.0));
        assert_eq!(2.0 * a, Normal3f::new(2.0, 4.0, 6.0));
        assert_eq!(a[2], 3.0);
    }
}
