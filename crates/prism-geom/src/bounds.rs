//! Axis-aligned bounding boxes.
//!
//! `Default` yields the inverted box (`p_min` at the numeric maximum,
//! `p_max` at the numeric minimum). It contains nothing, and folding points
//! or boxes into it with [`Bounds3::union_point`] / [`Bounds3::union`]
//! produces exactly their bound.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

use prism_math::{Float, Point2, Point2i, Point3, Point3f, Point3i, Real, Scalar, Vector2, Vector3, Vector3f};

use crate::ray::Ray;

#[inline]
fn lerp<T: Real>(t: T, a: T, b: T) -> T {
    (T::one() - t) * a + t * b
}

// =============================================================================
// Bounds2
// =============================================================================

/// A 2D axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2<T> {
    /// Lower corner.
    pub p_min: Point2<T>,
    /// Upper corner.
    pub p_max: Point2<T>,
}

/// `Bounds2` with [`Float`] coordinates.
pub type Bounds2f = Bounds2<Float>;
/// `Bounds2` with integer coordinates; iterable over its lattice points.
pub type Bounds2i = Bounds2<i32>;

impl<T: Scalar> Default for Bounds2<T> {
    fn default() -> Self {
        let (lo, hi) = (T::min_value(), T::max_value());
        Self {
            p_min: Point2 { x: hi, y: hi },
            p_max: Point2 { x: lo, y: lo },
        }
    }
}

impl<T: Scalar> Bounds2<T> {
    /// The box spanned by two corners, in either order.
    pub fn new(p1: Point2<T>, p2: Point2<T>) -> Self {
        Self {
            p_min: p1.min(&p2),
            p_max: p1.max(&p2),
        }
    }

    /// The degenerate box holding a single point.
    pub fn from_point(p: Point2<T>) -> Self {
        Self { p_min: p, p_max: p }
    }

    /// Corner `i` in `0..4`: bit 0 picks `x`, bit 1 picks `y`.
    pub fn corner(&self, i: usize) -> Point2<T> {
        debug_assert!(i < 4, "Bounds2 corner {i} out of range");
        Point2::new(self[i & 1].x, self[(i >> 1) & 1].y)
    }

    /// `p_max - p_min`.
    pub fn diagonal(&self) -> Vector2<T> {
        self.p_max - self.p_min
    }

    /// Width times height.
    pub fn area(&self) -> T {
        let d = self.diagonal();
        d.x * d.y
    }

    /// Index of the longer axis; ties go to `x`.
    pub fn maximum_extent(&self) -> usize {
        self.diagonal().max_dimension()
    }

    /// Position of `p` relative to the box, `p_min` at 0 and `p_max` at 1.
    /// Axes with zero extent are left unnormalized.
    pub fn offset(&self, p: &Point2<T>) -> Vector2<T> {
        let mut o = *p - self.p_min;
        if self.p_max.x > self.p_min.x {
            o.x /= self.p_max.x - self.p_min.x;
        }
        if self.p_max.y > self.p_min.y {
            o.y /= self.p_max.y - self.p_min.y;
        }
        o
    }

    /// Smallest box containing `self` and `p`.
    pub fn union_point(&self, p: &Point2<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, b: &Self) -> Self {
        Self {
            p_min: self.p_min.min(&b.p_min),
            p_max: self.p_max.max(&b.p_max),
        }
    }

    /// Overlap of the two boxes. Collapsed when they are disjoint.
    pub fn intersect(&self, b: &Self) -> Self {
        Self {
            p_min: self.p_min.max(&b.p_min),
            p_max: self.p_max.min(&b.p_max),
        }
    }

    /// Whether the boxes share any point, boundaries included.
    pub fn overlaps(&self, b: &Self) -> bool {
        let x = self.p_max.x >= b.p_min.x && self.p_min.x <= b.p_max.x;
        let y = self.p_max.y >= b.p_min.y && self.p_min.y <= b.p_max.y;
        x && y
    }

    /// Whether `p` lies in the closed box.
    pub fn contains(&self, p: &Point2<T>) -> bool {
        p.x >= self.p_min.x && p.x <= self.p_max.x && p.y >= self.p_min.y && p.y <= self.p_max.y
    }

    /// Whether `p` lies in the box with the upper faces excluded.
    pub fn contains_exclusive(&self, p: &Point2<T>) -> bool {
        p.x >= self.p_min.x && p.x < self.p_max.x && p.y >= self.p_min.y && p.y < self.p_max.y
    }

    /// Grow by `delta` on every side.
    pub fn expand(&self, delta: T) -> Self {
        let d = Vector2 { x: delta, y: delta };
        Self {
            p_min: self.p_min - d,
            p_max: self.p_max + d,
        }
    }

    /// Whether the box has no interior on some axis.
    pub fn is_collapsed(&self) -> bool {
        self.p_min.x >= self.p_max.x || self.p_min.y >= self.p_max.y
    }
}

impl<T: Real> Bounds2<T> {
    /// Per-axis interpolation between the corners.
    pub fn lerp(&self, t: &Point2<T>) -> Point2<T> {
        Point2::new(
            lerp(t.x, self.p_min.x, self.p_max.x),
            lerp(t.y, self.p_min.y, self.p_max.y),
        )
    }

    /// Circle around the box: `(center, radius)`. The radius is zero when
    /// the center falls outside, as for the default box.
    pub fn bounding_sphere(&self) -> (Point2<T>, T) {
        let center = (self.p_min + self.p_max) / (T::one() + T::one());
        let radius = if self.contains(&center) {
            center.distance(&self.p_max)
        } else {
            T::zero()
        };
        (center, radius)
    }
}

impl<T> Index<usize> for Bounds2<T> {
    type Output = Point2<T>;

    fn index(&self, i: usize) -> &Point2<T> {
        match i {
            0 => &self.p_min,
            1 => &self.p_max,
            _ => panic!("Bounds2 index {i} out of range"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Bounds2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} - {} ]", self.p_min, self.p_max)
    }
}

// =============================================================================
// Bounds3
// =============================================================================

/// A 3D axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3<T> {
    /// Lower corner.
    pub p_min: Point3<T>,
    /// Upper corner.
    pub p_max: Point3<T>,
}

/// `Bounds3` with [`Float`] coordinates.
pub type Bounds3f = Bounds3<Float>;
/// `Bounds3` with integer coordinates; iterable over its lattice points.
pub type Bounds3i = Bounds3<i32>;

impl<T: Scalar> Default for Bounds3<T> {
    fn default() -> Self {
        let (lo, hi) = (T::min_value(), T::max_value());
        Self {
            p_min: Point3 { x: hi, y: hi, z: hi },
            p_max: Point3 { x: lo, y: lo, z: lo },
        }
    }
}

impl<T: Scalar> Bounds3<T> {
    /// The box spanned by two corners, in either order.
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Self {
        Self {
            p_min: p1.min(&p2),
            p_max: p1.max(&p2),
        }
    }

    /// The degenerate box holding a single point.
    pub fn from_point(p: Point3<T>) -> Self {
        Self { p_min: p, p_max: p }
    }

    /// Corner `i` in `0..8`: bit 0 picks `x`, bit 1 `y`, bit 2 `z`
    /// (clear for `p_min`, set for `p_max`).
    pub fn corner(&self, i: usize) -> Point3<T> {
        debug_assert!(i < 8, "Bounds3 corner {i} out of range");
        Point3::new(self[i & 1].x, self[(i >> 1) & 1].y, self[(i >> 2) & 1].z)
    }

    /// `p_max - p_min`.
    pub fn diagonal(&self) -> Vector3<T> {
        self.p_max - self.p_min
    }

    /// Total area of the six faces.
    pub fn surface_area(&self) -> T {
        let d = self.diagonal();
        let two = T::one() + T::one();
        two * (d.x * d.y + d.y * d.z + d.z * d.x)
    }

    /// Enclosed volume.
    pub fn volume(&self) -> T {
        let d = self.diagonal();
        d.x * d.y * d.z
    }

    /// Index of the longest axis; ties go to the lower-numbered axis.
    pub fn maximum_extent(&self) -> usize {
        self.diagonal().max_dimension()
    }

    /// Position of `p` relative to the box, `p_min` at 0 and `p_max` at 1.
    /// Axes with zero extent are left unnormalized.
    pub fn offset(&self, p: &Point3<T>) -> Vector3<T> {
        let mut o = *p - self.p_min;
        if self.p_max.x > self.p_min.x {
            o.x /= self.p_max.x - self.p_min.x;
        }
        if self.p_max.y > self.p_min.y {
            o.y /= self.p_max.y - self.p_min.y;
        }
        if self.p_max.z > self.p_min.z {
            o.z /= self.p_max.z - self.p_min.z;
        }
        o
    }

    /// Smallest box containing `self` and `p`.
    pub fn union_point(&self, p: &Point3<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, b: &Self) -> Self {
        Self {
            p_min: self.p_min.min(&b.p_min),
            p_max: self.p_max.max(&b.p_max),
        }
    }

    /// Overlap of the two boxes. Collapsed when they are disjoint.
    pub fn intersect(&self, b: &Self) -> Self {
        Self {
            p_min: self.p_min.max(&b.p_min),
            p_max: self.p_max.min(&b.p_max),
        }
    }

    /// Whether the boxes share any point, boundaries included.
    pub fn overlaps(&self, b: &Self) -> bool {
        let x = self.p_max.x >= b.p_min.x && self.p_min.x <= b.p_max.x;
        let y = self.p_max.y >= b.p_min.y && self.p_min.y <= b.p_max.y;
        let z = self.p_max.z >= b.p_min.z && self.p_min.z <= b.p_max.z;
        x && y && z
    }

    /// Whether `p` lies in the closed box.
    pub fn contains(&self, p: &Point3<T>) -> bool {
        p.x >= self.p_min.x
            && p.x <= self.p_max.x
            && p.y >= self.p_min.y
            && p.y <= self.p_max.y
            && p.z >= self.p_min.z
            && p.z <= self.p_max.z
    }

    /// Whether `p` lies in the box with the upper faces excluded.
    pub fn contains_exclusive(&self, p: &Point3<T>) -> bool {
        p.x >= self.p_min.x
            && p.x < self.p_max.x
            && p.y >= self.p_min.y
            && p.y < self.p_max.y
            && p.z >= self.p_min.z
            && p.z < self.p_max.z
    }

    /// Grow by `delta` on every side.
    pub fn expand(&self, delta: T) -> Self {
        let d = Vector3 {
            x: delta,
            y: delta,
            z: delta,
        };
        Self {
            p_min: self.p_min - d,
            p_max: self.p_max + d,
        }
    }

    /// Whether the box has no interior on some axis.
    pub fn is_collapsed(&self) -> bool {
        self.p_min.x >= self.p_max.x || self.p_min.y >= self.p_max.y || self.p_min.z >= self.p_max.z
    }
}

impl<T: Real> Bounds3<T> {
    /// Per-axis interpolation between the corners.
    pub fn lerp(&self, t: &Point3<T>) -> Point3<T> {
        Point3::new(
            lerp(t.x, self.p_min.x, self.p_max.x),
            lerp(t.y, self.p_min.y, self.p_max.y),
            lerp(t.z, self.p_min.z, self.p_max.z),
        )
    }

    /// Sphere around the box: `(center, radius)`. The radius is zero when
    /// the center falls outside, as for the default box.
    pub fn bounding_sphere(&self) -> (Point3<T>, T) {
        let center = (self.p_min + self.p_max) / (T::one() + T::one());
        let radius = if self.contains(&center) {
            center.distance(&self.p_max)
        } else {
            T::zero()
        };
        (center, radius)
    }
}

impl Bounds3f {
    /// Slab test over `[0, ray.t_max()]`.
    ///
    /// Returns the parametric entry and exit `(t0, t1)` on a hit.
    pub fn intersect_p(&self, ray: &Ray<'_>) -> Option<(Float, Float)> {
        self.intersect_p_within(ray, 0.0, ray.t_max())
    }

    /// Slab test over the caller's `[t0, t1]`.
    ///
    /// Zero direction components give infinite slab distances, and a ray
    /// lying in a slab plane gives `0 * inf = NaN`. Every comparison is
    /// written so a NaN operand leaves the running interval unchanged.
    pub fn intersect_p_within(&self, ray: &Ray<'_>, t0: Float, t1: Float) -> Option<(Float, Float)> {
        let (mut t0, mut t1) = (t0, t1);
        for i in 0..3 {
            let inv_d = 1.0 / ray.d[i];
            let mut t_near = (self.p_min[i] - ray.o[i]) * inv_d;
            let mut t_far = (self.p_max[i] - ray.o[i]) * inv_d;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            t0 = if t_near > t0 { t_near } else { t0 };
            t1 = if t_far < t1 { t_far } else { t1 };
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }

    /// Slab test with the reciprocal direction and its signs computed once
    /// by the caller (see [`Ray::inv_dir`] and [`Ray::dir_is_neg`]).
    ///
    /// Hits only when the slab interval overlaps `(0, ray.t_max())`.
    pub fn intersect_p_precomputed(
        &self,
        ray: &Ray<'_>,
        inv_dir: &Vector3f,
        dir_is_neg: [usize; 3],
    ) -> bool {
        let mut t_min = (self[dir_is_neg[0]].x - ray.o.x) * inv_dir.x;
        let mut t_max = (self[1 - dir_is_neg[0]].x - ray.o.x) * inv_dir.x;
        let ty_min = (self[dir_is_neg[1]].y - ray.o.y) * inv_dir.y;
        let ty_max = (self[1 - dir_is_neg[1]].y - ray.o.y) * inv_dir.y;

        if t_min > ty_max || ty_min > t_max {
            return false;
        }
        // A ray lying in an x slab plane leaves NaN here; the next finite
        // axis replaces it.
        if ty_min > t_min || t_min.is_nan() {
            t_min = ty_min;
        }
        if ty_max < t_max || t_max.is_nan() {
            t_max = ty_max;
        }

        let tz_min = (self[dir_is_neg[2]].z - ray.o.z) * inv_dir.z;
        let tz_max = (self[1 - dir_is_neg[2]].z - ray.o.z) * inv_dir.z;

        if t_min > tz_max || tz_min > t_max {
            return false;
        }
        if tz_min > t_min || t_min.is_nan() {
            t_min = tz_min;
        }
        if tz_max < t_max || t_max.is_nan() {
            t_max = tz_max;
        }

        t_min < ray.t_max() && t_max > 0.0
    }
}

impl<T> Index<usize> for Bounds3<T> {
    type Output = Point3<T>;

    fn index(&self, i: usize) -> &Point3<T> {
        match i {
            0 => &self.p_min,
            1 => &self.p_max,
            _ => panic!("Bounds3 index {i} out of range"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Bounds3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} - {} ]", self.p_min, self.p_max)
    }
}

impl From<Bounds3i> for Bounds3f {
    fn from(b: Bounds3i) -> Self {
        Self {
            p_min: b.p_min.cast(),
            p_max: b.p_max.cast(),
        }
    }
}

impl From<Point3f> for Bounds3f {
    fn from(p: Point3f) -> Self {
        Self::from_point(p)
    }
}

// =============================================================================
// Lattice iteration
// =============================================================================

/// Iterator over the integer points of a [`Bounds2i`], `x` fastest.
/// `p_max` is exclusive on every axis.
#[derive(Debug, Clone)]
pub struct Bounds2iIter {
    bounds: Bounds2i,
    next: Option<Point2i>,
}

impl Iterator for Bounds2iIter {
    type Item = Point2i;

    fn next(&mut self) -> Option<Point2i> {
        let p = self.next?;
        let mut n = p;
        n.x += 1;
        if n.x == self.bounds.p_max.x {
            n.x = self.bounds.p_min.x;
            n.y += 1;
        }
        self.next = (n.y != self.bounds.p_max.y).then_some(n);
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(p) = self.next else {
            return (0, Some(0));
        };
        let b = &self.bounds;
        let width = span(b.p_min.x, b.p_max.x);
        let rows_after = span(p.y, b.p_max.y) - 1;
        exact_hint(rows_after * width + span(p.x, b.p_max.x))
    }
}

/// Lattice count from `lo` up to (excluding) `hi`, wide enough for any `i32` pair.
fn span(lo: i32, hi: i32) -> u128 {
    u128::from(lo.abs_diff(hi))
}

fn exact_hint(n: u128) -> (usize, Option<usize>) {
    match usize::try_from(n) {
        Ok(n) => (n, Some(n)),
        Err(_) => (usize::MAX, None),
    }
}

impl ExactSizeIterator for Bounds2iIter {}
impl FusedIterator for Bounds2iIter {}

impl Bounds2i {
    /// Iterate the lattice points, empty when collapsed.
    pub fn iter(&self) -> Bounds2iIter {
        Bounds2iIter {
            bounds: *self,
            next: (!self.is_collapsed()).then_some(self.p_min),
        }
    }
}

impl IntoIterator for &Bounds2i {
    type Item = Point2i;
    type IntoIter = Bounds2iIter;

    fn into_iter(self) -> Bounds2iIter {
        self.iter()
    }
}

/// Iterator over the integer points of a [`Bounds3i`], `x` fastest then `y`.
/// `p_max` is exclusive on every axis.
#[derive(Debug, Clone)]
pub struct Bounds3iIter {
    bounds: Bounds3i,
    next: Option<Point3i>,
}

impl Iterator for Bounds3iIter {
    type Item = Point3i;

    fn next(&mut self) -> Option<Point3i> {
        let p = self.next?;
        let b = &self.bounds;
        let mut n = p;
        n.x += 1;
        if n.x == b.p_max.x {
            n.x = b.p_min.x;
            n.y += 1;
            if n.y == b.p_max.y {
                n.y = b.p_min.y;
                n.z += 1;
            }
        }
        self.next = (n.z != b.p_max.z).then_some(n);
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(p) = self.next else {
            return (0, Some(0));
        };
        let b = &self.bounds;
        let width = span(b.p_min.x, b.p_max.x);
        let height = span(b.p_min.y, b.p_max.y);
        let slices_after = span(p.z, b.p_max.z) - 1;
        let rows_after = span(p.y, b.p_max.y) - 1;
        exact_hint(slices_after * width * height + rows_after * width + span(p.x, b.p_max.x))
    }
}

impl ExactSizeIterator for Bounds3iIter {}
impl FusedIterator for Bounds3iIter {}

impl Bounds3i {
    /// Iterate the lattice points, empty when collapsed.
    pub fn iter(&self) -> Bounds3iIter {
        Bounds3iIter {
            bounds: *self,
            next: (!self.is_collapsed()).then_some(self.p_min),
        }
    }
}

impl IntoIterator for &Bounds3i {
    type Item = Point3i;
    type IntoIter = Bounds3iIter;

    fn into_iter(self) -> Bounds3iIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prism_math::{Point2f, Vector3f};

    fn unit_box() -> Bounds3f {
        Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_new_orders_corners() {
        let b = Bounds3f::new(Point3f::new(1.0, -1.0, 5.0), Point3f::new(-2.0, 3.0, 0.0));
        assert_eq!(b.p_min, Point3f::new(-2.0, -1.0, 0.0));
        assert_eq!(b.p_max, Point3f::new(1.0, 3.0, 5.0));
    }

    #[test]
    fn test_default_is_union_identity() {
        let empty = Bounds3f::default();
        assert!(empty.is_collapsed());
        assert!(!empty.contains(&Point3f::new(0.0, 0.0, 0.0)));

        let p = Point3f::new(2.0, -3.0, 4.0);
        assert_eq!(empty.union_point(&p), Bounds3f::from_point(p));
        assert_eq!(empty.union(&unit_box()), unit_box());

        let folded = [Point3f::new(1.0, 2.0, 3.0), Point3f::new(-1.0, 0.0, 5.0)]
            .iter()
            .fold(Bounds3f::default(), |b, p| b.union_point(p));
        assert_eq!(
            folded,
            Bounds3f::new(Point3f::new(-1.0, 0.0, 3.0), Point3f::new(1.0, 2.0, 5.0))
        );
    }

    #[test]
    fn test_maximum_extent() {
        let b = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(3.0, 4.0, 5.0));
        assert_eq!(b.maximum_extent(), 2);
        let b = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(6.0, 4.0, 5.0));
        assert_eq!(b.maximum_extent(), 0);
        // Ties go to the lower axis.
        assert_eq!(unit_box().maximum_extent(), 0);
        let b = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 2.0, 2.0));
        assert_eq!(b.maximum_extent(), 1);
        let b2 = Bounds2f::new(Point2f::new(0.0, 0.0), Point2f::new(1.0, 3.0));
        assert_eq!(b2.maximum_extent(), 1);
    }

    #[test]
    fn test_measures() {
        let b = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 2.0, 3.0));
        assert_eq!(b.diagonal(), Vector3f::new(1.0, 2.0, 3.0));
        assert_eq!(b.surface_area(), 22.0);
        assert_eq!(b.volume(), 6.0);
        let b2 = Bounds2i::new(Point2i::new(0, 0), Point2i::new(4, 3));
        assert_eq!(b2.area(), 12);
    }

    #[test]
    fn test_corners_enumerate_all_eight() {
        let b = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 2.0, 3.0));
        assert_eq!(b.corner(0), b.p_min);
        assert_eq!(b.corner(7), b.p_max);
        assert_eq!(b.corner(1), Point3f::new(1.0, 0.0, 0.0));
        assert_eq!(b.corner(2), Point3f::new(0.0, 2.0, 0.0));
        assert_eq!(b.corner(4), Point3f::new(0.0, 0.0, 3.0));
        let rebuilt = (0..8).fold(Bounds3f::default(), |acc, i| acc.union_point(&b.corner(i)));
        assert_eq!(rebuilt, b);
        let b2 = Bounds2i::new(Point2i::new(0, 0), Point2i::new(2, 5));
        assert_eq!(b2.corner(3), Point2i::new(2, 5));
        assert_eq!(b2.corner(2), Point2i::new(0, 5));
    }

    #[test]
    fn test_lerp_and_offset() {
        let b = Bounds3f::new(Point3f::new(-1.0, 0.0, 2.0), Point3f::new(1.0, 4.0, 2.0));
        let mid = b.lerp(&Point3f::new(0.5, 0.25, 0.5));
        assert_eq!(mid, Point3f::new(0.0, 1.0, 2.0));

        let o = b.offset(&Point3f::new(0.0, 1.0, 3.0));
        assert_relative_eq!(o.x, 0.5);
        assert_relative_eq!(o.y, 0.25);
        // Zero-extent z axis is left unnormalized.
        assert_relative_eq!(o.z, 1.0);
        assert!(!o.has_nans());
    }

    #[test]
    fn test_union_properties() {
        let a = unit_box();
        let b = Bounds3f::new(Point3f::new(0.5, -1.0, 0.5), Point3f::new(2.0, 0.5, 0.7));
        let c = Bounds3f::new(Point3f::new(-3.0, 0.0, 0.0), Point3f::new(-2.0, 1.0, 9.0));
        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));

        let inside = Point3f::new(0.25, 0.5, 0.75);
        assert_eq!(a.union_point(&inside), a);
        let outside = Point3f::new(4.0, 0.5, 0.5);
        assert!(a.union_point(&outside).contains(&outside));
    }

    #[test]
    fn test_contains_inclusive_and_exclusive() {
        let b = unit_box();
        let corner = Point3f::new(1.0, 1.0, 1.0);
        assert!(b.contains(&corner));
        assert!(!b.contains_exclusive(&corner));
        assert!(b.contains_exclusive(&Point3f::new(0.0, 0.0, 0.0)));

        let b2 = Bounds2i::new(Point2i::new(0, 0), Point2i::new(2, 2));
        assert!(b2.contains(&Point2i::new(2, 1)));
        assert!(!b2.contains_exclusive(&Point2i::new(2, 1)));
    }

    #[test]
    fn test_expand_and_collapsed() {
        let b = unit_box().expand(0.5);
        assert_eq!(b.p_min, Point3f::new(-0.5, -0.5, -0.5));
        assert_eq!(b.p_max, Point3f::new(1.5, 1.5, 1.5));

        let flat = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 0.0, 1.0));
        assert!(flat.is_collapsed());
        assert!(!flat.expand(0.1).is_collapsed());
    }

    #[test]
    fn test_overlaps_checks_every_axis() {
        let a = unit_box();
        // Overlaps in x and y but sits entirely above in z.
        let above = Bounds3f::new(Point3f::new(0.2, 0.2, 2.0), Point3f::new(0.8, 0.8, 3.0));
        assert!(!a.overlaps(&above));
        let touching = Bounds3f::new(Point3f::new(1.0, 0.0, 0.0), Point3f::new(2.0, 1.0, 1.0));
        assert!(a.overlaps(&touching));

        let i = a.intersect(&touching);
        assert!(i.is_collapsed());
        let disjoint = a.intersect(&above);
        assert!(disjoint.is_collapsed());

        let b2 = Bounds2f::new(Point2f::new(0.0, 0.0), Point2f::new(1.0, 1.0));
        let far = Bounds2f::new(Point2f::new(3.0, 0.0), Point2f::new(4.0, 1.0));
        assert!(!b2.overlaps(&far));
    }

    #[test]
    fn test_bounding_sphere() {
        let (c, r) = Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0))
            .bounding_sphere();
        assert_eq!(c, Point3f::new(0.0, 0.0, 0.0));
        assert_relative_eq!(r, (3.0 as Float).sqrt(), epsilon = 1e-6);

        let (_, r) = Bounds3f::default().bounding_sphere();
        assert_eq!(r, 0.0);
    }

    #[test]
    fn test_index_corners() {
        let b = unit_box();
        assert_eq!(b[0], b.p_min);
        assert_eq!(b[1], b.p_max);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let b = unit_box();
        let _out_of_range = b[2];
    }

    #[test]
    fn test_slab_through_center_each_axis() {
        let b = unit_box();
        let cases = [
            (Point3f::new(-1.0, 0.5, 0.5), Vector3f::new(1.0, 0.0, 0.0)),
            (Point3f::new(0.5, -1.0, 0.5), Vector3f::new(0.0, 1.0, 0.0)),
            (Point3f::new(0.5, 0.5, -1.0), Vector3f::new(0.0, 0.0, 1.0)),
            (Point3f::new(2.0, 0.5, 0.5), Vector3f::new(-1.0, 0.0, 0.0)),
        ];
        for (o, d) in cases {
            let ray = Ray::new(o, d);
            let (t0, t1) = b.intersect_p(&ray).expect("axis ray through center hits");
            assert!(t0 < t1);
            assert_relative_eq!(t0, 1.0, epsilon = 1e-6);
            assert_relative_eq!(t1, 2.0, epsilon = 1e-6);
            assert!(b.intersect_p_precomputed(&ray, &ray.inv_dir(), ray.dir_is_neg()));
        }
    }

    #[test]
    fn test_slab_miss() {
        let b = unit_box();
        let ray = Ray::new(Point3f::new(-1.0, 5.0, 0.5), Vector3f::new(1.0, 0.0, 0.0));
        assert!(b.intersect_p(&ray).is_none());
        assert!(!b.intersect_p_precomputed(&ray, &ray.inv_dir(), ray.dir_is_neg()));

        // Pointing away.
        let away = Ray::new(Point3f::new(-1.0, 0.5, 0.5), Vector3f::new(-1.0, 0.0, 0.0));
        assert!(b.intersect_p(&away).is_none());
        assert!(!b.intersect_p_precomputed(&away, &away.inv_dir(), away.dir_is_neg()));
    }

    #[test]
    fn test_slab_origin_inside() {
        let b = unit_box();
        let ray = Ray::new(Point3f::new(0.5, 0.5, 0.5), Vector3f::new(0.3, -0.2, 1.0));
        let (t0, t1) = b
            .intersect_p_within(&ray, Float::NEG_INFINITY, Float::INFINITY)
            .expect("origin inside hits");
        assert!(t0 <= 0.0 && 0.0 <= t1);

        let (t0, _) = b.intersect_p(&ray).expect("origin inside hits");
        assert_eq!(t0, 0.0);
    }

    #[test]
    fn test_slab_respects_t_max() {
        let b = unit_box();
        let ray = Ray::new(Point3f::new(-1.0, 0.5, 0.5), Vector3f::new(1.0, 0.0, 0.0));
        ray.set_t_max(0.5);
        assert!(b.intersect_p(&ray).is_none());
        assert!(!b.intersect_p_precomputed(&ray, &ray.inv_dir(), ray.dir_is_neg()));
    }

    #[test]
    fn test_slab_ray_in_face_plane_is_nan_safe() {
        // Origin on the x = 0 face plane with zero x direction: (0 - 0) * inf = NaN.
        let b = unit_box();
        let ray = Ray::new(Point3f::new(0.0, 0.5, -1.0), Vector3f::new(0.0, 0.0, 1.0));
        let (t0, t1) = b.intersect_p(&ray).expect("grazing ray still hits");
        assert!(!t0.is_nan() && !t1.is_nan());
        assert_relative_eq!(t0, 1.0, epsilon = 1e-6);
        assert_relative_eq!(t1, 2.0, epsilon = 1e-6);
        assert!(b.intersect_p_precomputed(&ray, &ray.inv_dir(), ray.dir_is_neg()));

        // Same on the y face, and on both at once.
        let ray = Ray::new(Point3f::new(0.5, 1.0, -1.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(b.intersect_p(&ray).is_some());
        assert!(b.intersect_p_precomputed(&ray, &ray.inv_dir(), ray.dir_is_neg()));
        let ray = Ray::new(Point3f::new(0.0, 0.0, -1.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(b.intersect_p(&ray).is_some());
        assert!(b.intersect_p_precomputed(&ray, &ray.inv_dir(), ray.dir_is_neg()));
    }

    #[test]
    fn test_precomputed_uses_per_axis_signs() {
        // Mixed-sign direction: only correct if each axis uses its own sign.
        let b = unit_box();
        // Reusing the x sign for y would flip the y slab and report a miss.
        let ray = Ray::new(Point3f::new(-0.5, 1.2, 0.5), Vector3f::new(1.0, -1.0, 0.0));
        assert!(b.intersect_p(&ray).is_some());
        assert!(b.intersect_p_precomputed(&ray, &ray.inv_dir(), ray.dir_is_neg()));
    }

    #[test]
    fn test_lattice_iteration_order() {
        let b = Bounds2i::new(Point2i::new(0, 0), Point2i::new(2, 2));
        let pts: Vec<_> = b.iter().collect();
        assert_eq!(
            pts,
            vec![
                Point2i::new(0, 0),
                Point2i::new(1, 0),
                Point2i::new(0, 1),
                Point2i::new(1, 1),
            ]
        );

        let b3 = Bounds3i::new(Point3i::new(1, 1, 1), Point3i::new(3, 4, 2));
        let it = b3.iter();
        assert_eq!(it.len(), 6);
        let pts: Vec<_> = (&b3).into_iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point3i::new(1, 1, 1));
        assert_eq!(pts[1], Point3i::new(2, 1, 1));
        assert_eq!(pts[2], Point3i::new(1, 2, 1));
        assert_eq!(pts[5], Point3i::new(2, 3, 1));
    }

    #[test]
    fn test_collapsed_lattice_is_empty() {
        let flat = Bounds2i::new(Point2i::new(0, 3), Point2i::new(5, 3));
        assert_eq!(flat.iter().count(), 0);
        let flat3 = Bounds3i::new(Point3i::new(0, 0, 0), Point3i::new(4, 4, 0));
        assert_eq!(flat3.iter().count(), 0);
        assert_eq!(Bounds3i::default().iter().count(), 0);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let b = Bounds3i::new(Point3i::new(0, 0, 0), Point3i::new(2, 3, 4));
        let mut it = b.iter();
        assert_eq!(it.len(), 24);
        for expected in (0..24).rev() {
            it.next();
            assert_eq!(it.len(), expected);
        }
        assert!(it.next().is_none());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_size_hint_spans_full_i32_range() {
        let b = Bounds2i::new(Point2i::new(i32::MIN, 0), Point2i::new(i32::MAX, 1));
        assert_eq!(b.iter().len(), u32::MAX as usize);

        let b3 = Bounds3i::new(
            Point3i::new(i32::MIN, i32::MIN, i32::MIN),
            Point3i::new(i32::MAX, i32::MAX, i32::MAX),
        );
        assert_eq!(b3.iter().size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_integer_to_float_bounds() {
        let b = Bounds3f::from(Bounds3i::new(Point3i::new(0, 0, 0), Point3i::new(1, 2, 3)));
        assert_eq!(b.p_max, Point3f::new(1.0, 2.0, 3.0));
    }
}
