//! Fixed-size coefficient spectra.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use prism_math::{clamp, Float};

/// A spectrum stored as `N` coefficients, combined componentwise.
///
/// Coefficients must not be NaN; arithmetic checks this in debug builds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSpectrum<const N: usize> {
    c: [Float; N],
}

/// Three-channel linear RGB.
pub type RgbSpectrum = CoefficientSpectrum<3>;

impl<const N: usize> CoefficientSpectrum<N> {
    /// Number of coefficients.
    pub const SAMPLES: usize = N;

    /// Every coefficient set to `v`.
    pub fn new(v: Float) -> Self {
        let s = Self { c: [v; N] };
        debug_assert!(!s.has_nans());
        s
    }

    /// From explicit coefficients.
    pub fn from_array(c: [Float; N]) -> Self {
        let s = Self { c };
        debug_assert!(!s.has_nans());
        s
    }

    /// The coefficients.
    pub fn as_array(&self) -> &[Float; N] {
        &self.c
    }

    /// Whether every coefficient is zero.
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|&v| v == 0.0)
    }

    /// Whether any coefficient is NaN.
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Componentwise square root.
    pub fn sqrt(&self) -> Self {
        self.map(Float::sqrt)
    }

    /// Componentwise clamp into `[low, high]`.
    pub fn clamp(&self, low: Float, high: Float) -> Self {
        self.map(|v| clamp(v, low, high))
    }

    /// Largest coefficient.
    pub fn max_component_value(&self) -> Float {
        self.c.iter().copied().fold(Float::NEG_INFINITY, Float::max)
    }

    /// `(1 - t) * s1 + t * s2`.
    pub fn lerp(t: Float, s1: &Self, s2: &Self) -> Self {
        *s1 * (1.0 - t) + *s2 * t
    }

    /// Apply `f` to every coefficient.
    pub fn map(&self, f: impl Fn(Float) -> Float) -> Self {
        let mut c = self.c;
        for v in &mut c {
            *v = f(*v);
        }
        Self::from_array(c)
    }

    fn zip(&self, rhs: &Self, f: impl Fn(Float, Float) -> Float) -> Self {
        let mut c = self.c;
        for (v, r) in c.iter_mut().zip(rhs.c.iter()) {
            *v = f(*v, *r);
        }
        Self::from_array(c)
    }
}

impl RgbSpectrum {
    /// From red, green and blue.
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        Self::from_array([r, g, b])
    }

    /// Red, green and blue.
    pub fn to_rgb(&self) -> [Float; 3] {
        self.c
    }
}

impl<const N: usize> Default for CoefficientSpectrum<N> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<const N: usize> Index<usize> for CoefficientSpectrum<N> {
    type Output = Float;

    fn index(&self, i: usize) -> &Float {
        assert!(i < N, "spectrum index {i} out of range for {N} samples");
        &self.c[i]
    }
}

impl<const N: usize> IndexMut<usize> for CoefficientSpectrum<N> {
    fn index_mut(&mut self, i: usize) -> &mut Float {
        assert!(i < N, "spectrum index {i} out of range for {N} samples");
        &mut self.c[i]
    }
}

impl<const N: usize> Neg for CoefficientSpectrum<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

macro_rules! impl_spectrum_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt) => {
        impl<const N: usize> $op for CoefficientSpectrum<N> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.zip(&rhs, |a, b| a $sym b)
            }
        }

        impl<const N: usize> $op<Float> for CoefficientSpectrum<N> {
            type Output = Self;

            fn $method(self, s: Float) -> Self {
                self.map(|a| a $sym s)
            }
        }

        impl<const N: usize> $assign for CoefficientSpectrum<N> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = self.zip(&rhs, |a, b| a $sym b);
            }
        }

        impl<const N: usize> $assign<Float> for CoefficientSpectrum<N> {
            fn $assign_method(&mut self, s: Float) {
                *self = self.map(|a| a $sym s);
            }
        }
    };
}

impl_spectrum_op!(Add, add, AddAssign, add_assign, +);
impl_spectrum_op!(Sub, sub, SubAssign, sub_assign, -);
impl_spectrum_op!(Mul, mul, MulAssign, mul_assign, *);

impl<const N: usize> Div for CoefficientSpectrum<N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        debug_assert!(rhs.c.iter().all(|&v| v != 0.0), "spectrum divided by zero coefficient");
        self.zip(&rhs, |a, b| a / b)
    }
}

impl<const N: usize> Div<Float> for CoefficientSpectrum<N> {
    type Output = Self;

    fn div(self, s: Float) -> Self {
        debug_assert!(s != 0.0, "spectrum divided by zero");
        self.map(|a| a / s)
    }
}

impl<const N: usize> DivAssign for CoefficientSpectrum<N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const N: usize> DivAssign<Float> for CoefficientSpectrum<N> {
    fn div_assign(&mut self, s: Float) {
        *self = *self / s;
    }
}

impl<const N: usize> Mul<CoefficientSpectrum<N>> for Float {
    type Output = CoefficientSpectrum<N>;

    fn mul(self, s: CoefficientSpectrum<N>) -> CoefficientSpectrum<N> {
        s * self
    }
}

impl<const N: usize> fmt::Display for CoefficientSpectrum<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (i, v) in self.c.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, " ]")
    }
}
