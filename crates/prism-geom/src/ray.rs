//! Ray representation.

use std::cell::Cell;
use std::fmt;

use prism_math::{consts, Float, Point3f, Vector3f};

use crate::medium::Medium;

/// A semi-infinite line `o + t * d` for `t` in `[0, t_max)`.
///
/// `t_max` sits in a [`Cell`] so intersection routines can shrink it
/// through a shared reference as closer hits are found. That makes a ray
/// a single-threaded accumulator: tests against the same ray must run one
/// after another.
#[derive(Debug, Clone)]
pub struct Ray<'m> {
    /// Origin.
    pub o: Point3f,
    /// Direction. Not required to be normalized.
    pub d: Vector3f,
    t_max: Cell<Float>,
    /// Time at which the ray is sampled.
    pub time: Float,
    /// Medium containing the origin, if any.
    pub medium: Option<&'m Medium>,
}

impl<'m> Ray<'m> {
    /// A ray with unbounded extent at time zero in vacuum.
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Self::with(o, d, consts::INFINITY, 0.0, None)
    }

    /// A ray with every field given.
    pub fn with(
        o: Point3f,
        d: Vector3f,
        t_max: Float,
        time: Float,
        medium: Option<&'m Medium>,
    ) -> Self {
        Self {
            o,
            d,
            t_max: Cell::new(t_max),
            time,
            medium,
        }
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }

    /// Current parametric extent.
    #[inline]
    pub fn t_max(&self) -> Float {
        self.t_max.get()
    }

    /// Replace the parametric extent.
    #[inline]
    pub fn set_t_max(&self, t: Float) {
        self.t_max.set(t);
    }

    /// Componentwise reciprocal of the direction. Zero components map to
    /// signed infinities.
    #[inline]
    pub fn inv_dir(&self) -> Vector3f {
        Vector3f {
            x: 1.0 / self.d.x,
            y: 1.0 / self.d.y,
            z: 1.0 / self.d.z,
        }
    }

    /// `1` for every axis whose inverse direction is negative, else `0`.
    ///
    /// Used as an index into `[p_min, p_max]` by the precomputed slab test.
    #[inline]
    pub fn dir_is_neg(&self) -> [usize; 3] {
        let inv = self.inv_dir();
        [
            usize::from(inv.x < 0.0),
            usize::from(inv.y < 0.0),
            usize::from(inv.z < 0.0),
        ]
    }

    /// Whether any field is NaN.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans() || self.t_max().is_nan()
    }
}

impl fmt::Display for Ray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[o={}, d={}, tMax={}, time={}]",
            self.o,
            self.d,
            self.t_max(),
            self.time
        )
    }
}
