//! Locations in two and three dimensions.
//!
//! Points and vectors share storage but not algebra: point − point is a
//! vector, point ± vector is a point. Point + point and point · scalar exist
//! only so weighted sums such as [`Point3::lerp`] can be written directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::scalar::{max_of, min_of, Real, Scalar};
use crate::vector::{Vector2, Vector3};
use crate::Float;

// =============================================================================
// Point2
// =============================================================================

/// A 2D point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

/// `Point2` with [`Float`] coordinates.
pub type Point2f = Point2<Float>;
/// `Point2` with integer coordinates.
pub type Point2i = Point2<i32>;

impl<T: Scalar> Point2<T> {
    /// Create a point. Coordinates must not be NaN.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        let p = Self { x, y };
        debug_assert!(!p.has_nans(), "Point2 has NaN coordinate: {p}");
        p
    }

    /// Whether any coordinate is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Squared distance to `other`.
    pub fn distance_squared(&self, other: &Self) -> T {
        (*other - *self).length_squared()
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(min_of(self.x, other.x), min_of(self.y, other.y))
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(max_of(self.x, other.x), max_of(self.y, other.y))
    }

    /// Componentwise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Reorder coordinates by index.
    pub fn permute(&self, x: usize, y: usize) -> Self {
        Self::new(self[x], self[y])
    }

    /// Convert the coordinate type.
    pub fn cast<U: Scalar>(&self) -> Point2<U> {
        Point2::new(U::from_f64(self.x.to_f64()), U::from_f64(self.y.to_f64()))
    }
}

impl<T: Real> Point2<T> {
    /// Distance to `other`.
    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    /// Affine interpolation: `p0` at `t = 0`, `p1` at `t = 1`.
    pub fn lerp(t: T, p0: &Self, p1: &Self) -> Self {
        *p0 * (T::one() - t) + *p1 * t
    }

    /// Componentwise floor.
    pub fn floor(&self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Componentwise ceiling.
    pub fn ceil(&self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }
}

impl<T: Scalar> Add<Vector2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vector2<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl<T: Scalar> AddAssign<Vector2<T>> for Point2<T> {
    #[inline]
    fn add_assign(&mut self, v: Vector2<T>) {
        self.x += v.x;
        self.y += v.y;
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn sub(self, p: Self) -> Vector2<T> {
        Vector2::new(self.x - p.x, self.y - p.y)
    }
}

impl<T: Scalar> Sub<Vector2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vector2<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl<T: Scalar> SubAssign<Vector2<T>> for Point2<T> {
    #[inline]
    fn sub_assign(&mut self, v: Vector2<T>) {
        self.x -= v.x;
        self.y -= v.y;
    }
}

impl<T: Scalar> Add for Point2<T> {
    type Output = Self;

    #[inline]
    fn add(self, p: Self) -> Self {
        Self::new(self.x + p.x, self.y + p.y)
    }
}

impl<T: Scalar> Mul<T> for Point2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl<T: Scalar> Div<T> for Point2<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        debug_assert!(s != T::zero(), "Point2 divided by zero");
        Self::new(self.x / s, self.y / s)
    }
}

impl<T: Scalar> Neg for Point2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> From<Point2<T>> for Vector2<T> {
    fn from(p: Point2<T>) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl<T: Scalar> From<Vector2<T>> for Point2<T> {
    fn from(v: Vector2<T>) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl<T: Scalar> From<Point3<T>> for Point2<T> {
    /// Drops `z`.
    fn from(p: Point3<T>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {} ]", self.x, self.y)
    }
}

impl_scalar_lhs_mul!(Point2, f32, f64, i32, i64);
impl_component_index!(Point2 { 0 => x, 1 => y });

// =============================================================================
// Point3
// =============================================================================

/// A 3D point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
    /// Z coordinate.
    pub z: T,
}

/// `Point3` with [`Float`] coordinates.
pub type Point3f = Point3<Float>;
/// `Point3` with integer coordinates.
pub type Point3i = Point3<i32>;

impl<T: Scalar> Point3<T> {
    /// Create a point. Coordinates must not be NaN.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let p = Self { x, y, z };
        debug_assert!(!p.has_nans(), "Point3 has NaN coordinate: {p}");
        p
    }

    /// The origin.
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Whether any coordinate is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Squared distance to `other`.
    pub fn distance_squared(&self, other: &Self) -> T {
        (*other - *self).length_squared()
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

    /// Componentwise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Reorder coordinates by index.
    pub fn permute(&self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self[x], self[y], self[z])
    }

    /// Convert the coordinate type.
    pub fn cast<U: Scalar>(&self) -> Point3<U> {
        Point3::new(
            U::from_f64(self.x.to_f64()),
            U::from_f64(self.y.to_f64()),
            U::from_f64(self.z.to_f64()),
        )
    }
}

impl<T: Real> Point3<T> {
    /// Distance to `other`.
    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    /// Affine interpolation: `p0` at `t = 0`, `p1` at `t = 1`.
    pub fn lerp(t: T, p0: &Self, p1: &Self) -> Self {
        *p0 * (T::one() - t) + *p1 * t
    }

    /// Componentwise floor.
    pub fn floor(&self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Componentwise ceiling.
    pub fn ceil(&self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }
}

impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vector3<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: Scalar> AddAssign<Vector3<T>> for Point3<T> {
    #[inline]
    fn add_assign(&mut self, v: Vector3<T>) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn sub(self, p: Self) -> Vector3<T> {
        Vector3::new(self.x - p.x, self.y - p.y, self.z - p.z)
    }
}

impl<T: Scalar> Sub<Vector3<T>> for Point3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vector3<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T: Scalar> SubAssign<Vector3<T>> for Point3<T> {
    #[inline]
    fn sub_assign(&mut self, v: Vector3<T>) {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
    }
}

impl<T: Scalar> Add for Point3<T> {
    type Output = Self;

    #[inline]
    fn add(self, p: Self) -> Self {
        Self::new(self.x + p.x, self.y + p.y, self.z + p.z)
    }
}

impl<T: Scalar> Mul<T> for Point3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Scalar> Div<T> for Point3<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        debug_assert!(s != T::zero(), "Point3 divided by zero");
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl<T: Scalar> Neg for Point3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> From<Point3<T>> for Vector3<T> {
    fn from(p: Point3<T>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl<T: Scalar> From<Vector3<T>> for Point3<T> {
    fn from(v: Vector3<T>) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl<T: fmt::Display> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl_scalar_lhs_mul!(Point3, f32, f64, i32, i64);
impl_component_index!(Point3 { 0 => x, 1 => y, 2 => z });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3f;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_vector_round_trip() {
        let p = Point3f::new(1.5, -2.0, 7.25);
        let v = Vector3f::new(0.1, 3.0, -4.5);
        let back = (p + v) - p;
        assert_relative_eq!(back.x, v.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, v.y, epsilon = 1e-5);
        assert_relative_eq!(back.z, v.z, epsilon = 1e-5);

        let q = (p - v) + v;
        assert_relative_eq!(q.x, p.x, epsilon = 1e-5);
        assert_relative_eq!(q.y, p.y, epsilon = 1e-5);
        assert_relative_eq!(q.z, p.z, epsilon = 1e-5);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Point3f::new(0.0, 2.0, -4.0);
        let b = Point3f::new(10.0, 4.0, 4.0);
        assert_eq!(Point3f::lerp(0.0, &a, &b), a);
        assert_eq!(Point3f::lerp(1.0, &a, &b), b);
        assert_eq!(Point3f::lerp(0.5, &a, &b), Point3f::new(5.0, 3.0, 0.0));

        let a2 = Point2f::new(-1.0, 1.0);
        let b2 = Point2f::new(3.0, 5.0);
        assert_eq!(Point2f::lerp(0.5, &a2, &b2), Point2f::new(1.0, 3.0));
        assert_eq!(Point2f::lerp(1.0, &a2, &b2), b2);
    }

    #[test]
    fn test_distance() {
        let a = Point3f::new(1.0, 1.0, 1.0);
        let b = Point3f::new(4.0, 5.0, 1.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(Point2i::new(0, 0).distance_squared(&Point2i::new(3, 4)), 25);
    }

    #[test]
    fn test_min_max_floor_ceil() {
        let a = Point3f::new(1.5, -2.5, 3.0);
        let b = Point3f::new(-1.0, 0.5, 3.0);
        assert_eq!(a.min(&b), Point3f::new(-1.0, -2.5, 3.0));
        assert_eq!(a.max(&b), Point3f::new(1.5, 0.5, 3.0));
        assert_eq!(a.floor(), Point3f::new(1.0, -3.0, 3.0));
        assert_eq!(a.ceil(), Point3f::new(2.0, -2.0, 3.0));
        assert_eq!(a.abs(), Point3f::new(1.5, 2.5, 3.0));
        assert_eq!(a.permute(1, 2, 0), Point3f::new(-2.5, 3.0, 1.5));
    }

    #[test]
    fn test_conversions() {
        let p = Point3f::new(1.9, -2.2, 3.0);
        assert_eq!(p.cast::<i32>(), Point3i::new(1, -2, 3));
        assert_eq!(Point2f::from(p), Point2f::new(1.9, -2.2));
        let v: Vector3f = p.into();
        assert_eq!(Point3f::from(v), p);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point3i::new(0, 1, 2).to_string(), "[ 0, 1, 2 ]");
    }
}
