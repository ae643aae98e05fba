//! Component types accepted by the tuple and bounds types.

use num_traits::{Bounded, Num};
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

/// A numeric component: integer or floating point.
pub trait Scalar:
    Num
    + Bounded
    + Copy
    + Default
    + PartialOrd
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + fmt::Debug
    + fmt::Display
    + 'static
{
    /// Whether this value is NaN. Always false for integers.
    fn is_nan(self) -> bool;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64` (truncating for integers).
    fn from_f64(v: f64) -> Self;
}

/// A floating-point [`Scalar`].
pub trait Real: Scalar {
    /// Square root.
    fn sqrt(self) -> Self;

    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;

    /// Smallest integer value not less than `self`.
    fn ceil(self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn is_nan(self) -> bool {
                false
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
        }

        impl Real for $t {
            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$t>::ceil(self)
            }
        }
    )*};
}

impl_scalar_int!(i32, i64);
impl_scalar_float!(f32, f64);

/// `std::min` semantics: returns `a` unless `b < a`.
#[inline]
pub fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// `std::max` semantics: returns `a` unless `a < b`.
#[inline]
pub fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}
