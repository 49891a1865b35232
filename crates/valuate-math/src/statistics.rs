//! Descriptive statistics over return series.
//!
//! Thin, shape-checked wrappers over [`statrs::statistics::Statistics`]
//! and [`nalgebra::DVector`]. All dispersion measures are population
//! measures (denominator `N`).

use crate::error::{MathError, MathResult};
use nalgebra::DVector;
use statrs::statistics::Statistics;

/// Arithmetic mean of `values`.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] if `values` is empty.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    require_non_empty(values)?;
    Ok(values.iter().mean())
}

/// Population standard deviation of `values` (denominator `N`).
///
/// A single observation has zero dispersion.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] if `values` is empty.
pub fn population_std_dev(values: &[f64]) -> MathResult<f64> {
    require_non_empty(values)?;
    Ok(values.iter().population_std_dev())
}

/// Pearson correlation coefficient between two series of equal length.
///
/// Computed as `cov(x, y) / (σx · σy)` using population moments. A series
/// with zero dispersion gives a non-finite coefficient, which is returned
/// as-is.
///
/// # Errors
///
/// - [`MathError::LengthMismatch`] if the series differ in length
/// - [`MathError::InsufficientData`] if the series are empty
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> MathResult<f64> {
    if x.len() != y.len() {
        return Err(MathError::length_mismatch(x.len(), y.len()));
    }
    require_non_empty(x)?;

    let covariance = x.iter().population_covariance(y.iter());
    let sigma_x = x.iter().population_std_dev();
    let sigma_y = y.iter().population_std_dev();

    Ok(covariance / (sigma_x * sigma_y))
}

/// Dot product (sum-product) of two vectors of equal length.
///
/// # Errors
///
/// Returns [`MathError::LengthMismatch`] if the vectors differ in length.
pub fn dot(a: &[f64], b: &[f64]) -> MathResult<f64> {
    if a.len() != b.len() {
        return Err(MathError::length_mismatch(a.len(), b.len()));
    }
    Ok(DVector::from_column_slice(a).dot(&DVector::from_column_slice(b)))
}

fn require_non_empty(values: &[f64]) -> MathResult<()> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert!(matches!(
            mean(&[]),
            Err(MathError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_population_std_dev_uses_n() {
        // Population variance of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 4.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_std_dev(&values).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_std_dev_single_value() {
        assert_relative_eq!(population_std_dev(&[42.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_correlation_perfect() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-12);

        let z = [8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(pearson_correlation(&x, &z).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_known_value() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        // cov = 1.6, var_x = var_y = 2.0
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_constant_series_is_not_finite() {
        let x = [1.0, 1.0, 1.0];
        let y = [1.0, 2.0, 3.0];
        assert!(!pearson_correlation(&x, &y).unwrap().is_finite());
    }

    #[test]
    fn test_correlation_length_mismatch() {
        let err = pearson_correlation(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, MathError::length_mismatch(2, 1));
    }

    #[test]
    fn test_dot() {
        assert_relative_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert_relative_eq!(dot(&[], &[]).unwrap(), 0.0);
        assert!(dot(&[1.0], &[1.0, 2.0]).is_err());
    }
}
