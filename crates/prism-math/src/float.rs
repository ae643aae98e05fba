//! The renderer's floating-point type and scalar helper functions.

/// Floating-point type used throughout the renderer.
///
/// `f32` by default; enabling the `double` feature switches to `f64`.
#[cfg(not(feature = "double"))]
pub type Float = f32;

/// Floating-point type used throughout the renderer.
///
/// `f32` by default; enabling the `double` feature switches to `f64`.
#[cfg(feature = "double")]
pub type Float = f64;

/// Mathematical constants expressed in [`Float`].
pub mod consts {
    use super::Float;

    /// π
    pub const PI: Float = std::f64::consts::PI as Float;
    /// 1 / π
    pub const INV_PI: Float = std::f64::consts::FRAC_1_PI as Float;
    /// 1 / 2π
    pub const INV_2_PI: Float = 0.159_154_943_091_895_335_77_f64 as Float;
    /// 1 / 4π
    pub const INV_4_PI: Float = 0.079_577_471_545_947_667_88_f64 as Float;
    /// π / 2
    pub const PI_OVER_2: Float = std::f64::consts::FRAC_PI_2 as Float;
    /// π / 4
    pub const PI_OVER_4: Float = std::f64::consts::FRAC_PI_4 as Float;
    /// √2
    pub const SQRT_2: Float = std::f64::consts::SQRT_2 as Float;
    /// Largest finite value.
    pub const MAX_FLOAT: Float = Float::MAX;
    /// Smallest positive normal value.
    pub const MIN_FLOAT: Float = Float::MIN_POSITIVE;
    /// Positive infinity.
    pub const INFINITY: Float = Float::INFINITY;
}

/// Linear interpolation between `a` (at `t = 0`) and `b` (at `t = 1`).
#[inline]
pub fn lerp(t: Float, a: Float, b: Float) -> Float {
    (1.0 - t) * a + t * b
}

/// Clamp `val` into `[low, high]`.
#[inline]
pub fn clamp<T: PartialOrd>(val: T, low: T, high: T) -> T {
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Degrees to radians.
#[inline]
pub fn radians(deg: Float) -> Float {
    (consts::PI / 180.0) * deg
}

/// Radians to degrees.
#[inline]
pub fn degrees(rad: Float) -> Float {
    (180.0 / consts::PI) * rad
}

/// Solve `a*t^2 + b*t + c = 0`.
///
/// Returns the two real roots in ascending order, or `None` when the
/// discriminant is negative. The discriminant and the intermediate `q` are
/// evaluated in `f64` to limit cancellation.
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
    let discrim = b * b - 4.0 * a * c;
    if discrim < 0.0 {
        return None;
    }
    let root_discrim = discrim.sqrt();
    let q = if b < 0.0 {
        -0.5 * (b - root_discrim)
    } else {
        -0.5 * (b + root_discrim)
    };
    let mut t0 = (q / a) as Float;
    let mut t1 = (c / q) as Float;
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    Some((t0, t1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 2.0, 6.0), 2.0);
        assert_eq!(lerp(1.0, 2.0, 6.0), 6.0);
        assert_eq!(lerp(0.5, 2.0, 6.0), 4.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(radians(180.0), consts::PI, epsilon = 1e-6);
        assert_relative_eq!(degrees(consts::PI_OVER_2), 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_quadratic_roots_sorted() {
        // (t - 1)(t - 3) = t^2 - 4t + 3
        let (t0, t1) = quadratic(1.0, -4.0, 3.0).unwrap();
        assert_relative_eq!(t0, 1.0, epsilon = 1e-6);
        assert_relative_eq!(t1, 3.0, epsilon = 1e-6);

        // Negative leading coefficient still yields ascending order
        let (t0, t1) = quadratic(-1.0, 4.0, -3.0).unwrap();
        assert!(t0 <= t1);
    }

    #[test]
    fn test_quadratic_no_real_roots() {
        assert!(quadratic(1.0, 0.0, 1.0).is_none());
    }
}
