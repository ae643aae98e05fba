//! Helpers for spectra given as `(wavelength, value)` tables.
//!
//! Wavelengths are in nanometers. Tables need not be evenly spaced; values
//! between samples are linearly interpolated and held constant beyond the
//! first and last sample.

use prism_math::{lerp, Float};

use crate::error::{Result, SpectrumError};

/// Whether `lambda` is in non-decreasing order.
pub fn spectrum_samples_sorted(lambda: &[Float]) -> bool {
    lambda.windows(2).all(|w| w[0] <= w[1])
}

/// Sort `lambda` ascending, permuting `values` alongside.
pub fn sort_spectrum_samples(lambda: &mut [Float], values: &mut [Float]) -> Result<()> {
    check_lengths(lambda, values)?;
    let mut pairs: Vec<(Float, Float)> = lambda.iter().copied().zip(values.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (i, (l, v)) in pairs.into_iter().enumerate() {
        lambda[i] = l;
        values[i] = v;
    }
    Ok(())
}

/// Average of the piecewise-linear spectrum over `[lambda_start, lambda_end]`.
///
/// `lambda` must be sorted. Ranges entirely outside the table return the
/// nearest end value, and a single sample is treated as constant.
pub fn average_spectrum_samples(
    lambda: &[Float],
    values: &[Float],
    lambda_start: Float,
    lambda_end: Float,
) -> Result<Float> {
    check_lengths(lambda, values)?;
    debug_assert!(spectrum_samples_sorted(lambda), "wavelengths must be sorted");
    debug_assert!(lambda_start <= lambda_end);

    let n = lambda.len();
    if lambda_end <= lambda[0] {
        return Ok(values[0]);
    }
    if lambda_start >= lambda[n - 1] {
        return Ok(values[n - 1]);
    }
    if n == 1 {
        return Ok(values[0]);
    }

    let mut sum = 0.0;
    // Constant extension before the first and after the last sample.
    if lambda_start < lambda[0] {
        sum += values[0] * (lambda[0] - lambda_start);
    }
    if lambda_end > lambda[n - 1] {
        sum += values[n - 1] * (lambda_end - lambda[n - 1]);
    }

    // First segment whose upper end reaches the range start.
    let mut i = 0;
    while i + 1 < n - 1 && lambda_start > lambda[i + 1] {
        i += 1;
    }

    let interp = |w: Float, i: usize| {
        lerp(
            (w - lambda[i]) / (lambda[i + 1] - lambda[i]),
            values[i],
            values[i + 1],
        )
    };
    while i + 1 < n && lambda_end >= lambda[i] {
        let seg_start = lambda_start.max(lambda[i]);
        let seg_end = lambda_end.min(lambda[i + 1]);
        if seg_end > seg_start {
            sum += 0.5 * (interp(seg_start, i) + interp(seg_end, i)) * (seg_end - seg_start);
        }
        i += 1;
    }
    Ok(sum / (lambda_end - lambda_start))
}

fn check_lengths(lambda: &[Float], values: &[Float]) -> Result<()> {
    if lambda.len() != values.len() {
        return Err(SpectrumError::LengthMismatch {
            lambda: lambda.len(),
            values: values.len(),
        });
    }
    if lambda.is_empty() {
        return Err(SpectrumError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_check() {
        assert!(spectrum_samples_sorted(&[]));
        assert!(spectrum_samples_sorted(&[400.0, 500.0, 500.0, 700.0]));
        assert!(!spectrum_samples_sorted(&[400.0, 700.0, 500.0]));
    }

    #[test]
    fn test_sort_keeps_pairs() {
        let mut lambda = [700.0, 400.0, 550.0];
        let mut values = [3.0, 1.0, 2.0];
        sort_spectrum_samples(&mut lambda, &mut values).unwrap();
        assert_eq!(lambda, [400.0, 550.0, 700.0]);
        assert_eq!(values, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_rejects_mismatch() {
        let mut lambda = [400.0, 500.0];
        let mut values = [1.0];
        assert_eq!(
            sort_spectrum_samples(&mut lambda, &mut values),
            Err(SpectrumError::LengthMismatch { lambda: 2, values: 1 })
        );
    }

    #[test]
    fn test_average_outside_table_returns_end_values() {
        let lambda = [400.0, 500.0, 600.0];
        let values = [1.0, 2.0, 5.0];
        assert_eq!(average_spectrum_samples(&lambda, &values, 300.0, 350.0), Ok(1.0));
        assert_eq!(average_spectrum_samples(&lambda, &values, 650.0, 700.0), Ok(5.0));
    }

    #[test]
    fn test_average_single_sample_is_constant() {
        assert_eq!(average_spectrum_samples(&[500.0], &[0.3], 400.0, 600.0), Ok(0.3));
    }

    #[test]
    fn test_average_of_linear_ramp() {
        // v = (λ - 400) / 100 on [400, 600]; mean over [450, 550] is 1.
        let lambda = [400.0, 500.0, 600.0];
        let values = [0.0, 1.0, 2.0];
        let avg = average_spectrum_samples(&lambda, &values, 450.0, 550.0).unwrap();
        assert_relative_eq!(avg, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_average_within_first_segment() {
        let lambda = [400.0, 500.0, 600.0];
        let values = [0.0, 1.0, 0.0];
        let avg = average_spectrum_samples(&lambda, &values, 400.0, 500.0).unwrap();
        assert_relative_eq!(avg, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_average_extends_ends_constantly() {
        // [300, 400] holds 2, [400, 500] averages 3: mean 2.5.
        let lambda = [400.0, 500.0];
        let values = [2.0, 4.0];
        let avg = average_spectrum_samples(&lambda, &values, 300.0, 500.0).unwrap();
        assert_relative_eq!(avg, 2.5, epsilon = 1e-5);

        // [400, 500] averages 3, [500, 700] holds 4: (300 + 800) / 300.
        let avg = average_spectrum_samples(&lambda, &values, 400.0, 700.0).unwrap();
        assert_relative_eq!(avg, 1100.0 / 300.0, epsilon = 1e-5);
    }

    #[test]
    fn test_average_errors() {
        assert_eq!(
            average_spectrum_samples(&[], &[], 400.0, 500.0),
            Err(SpectrumError::Empty)
        );
        assert!(average_spectrum_samples(&[400.0], &[1.0, 2.0], 400.0, 500.0).is_err());
    }
}
