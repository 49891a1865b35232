//! Period-over-period percent returns.

use crate::error::{AssetError, AssetResult};

/// A single percent return. `None` marks an undefined step, where the
/// previous value was zero.
pub type PercentReturn = Option<f64>;

/// Converts a value series into percent changes.
///
/// The first element is always `Some(0.0)`; element `i` is
/// `(values[i] - values[i-1]) / values[i-1] * 100`, or `None` when
/// `values[i-1] == 0`. An empty input yields an empty output.
///
/// ```rust
/// use valuate_core::types::percent_changes;
///
/// assert_eq!(percent_changes(&[100.0, 150.0]), vec![Some(0.0), Some(50.0)]);
/// assert_eq!(percent_changes(&[0.0, 5.0]), vec![Some(0.0), None]);
/// ```
#[must_use]
pub fn percent_changes(values: &[f64]) -> Vec<PercentReturn> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut changes = Vec::with_capacity(values.len());
    changes.push(Some(0.0));
    changes.extend(values.windows(2).map(|pair| {
        let (previous, next) = (pair[0], pair[1]);
        if previous == 0.0 {
            None
        } else {
            Some((next - previous) / previous * 100.0)
        }
    }));
    changes
}

/// Unwraps a percent-return series for numeric consumers.
///
/// # Errors
///
/// Returns [`AssetError::UndefinedReturn`] naming the first undefined
/// step (1-indexed period).
pub fn resolve_percent_returns(series: &[PercentReturn]) -> AssetResult<Vec<f64>> {
    series
        .iter()
        .enumerate()
        .map(|(index, value)| value.ok_or(AssetError::UndefinedReturn { period: index + 1 }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_single_value() {
        assert_eq!(percent_changes(&[250.0]), vec![Some(0.0)]);
    }

    #[test]
    fn test_empty() {
        assert!(percent_changes(&[]).is_empty());
    }

    #[test]
    fn test_growth_and_decline() {
        let changes = percent_changes(&[100.0, 150.0, 75.0]);
        assert_eq!(changes.len(), 3);
        assert_relative_eq!(changes[1].unwrap(), 50.0);
        assert_relative_eq!(changes[2].unwrap(), -50.0);
    }

    #[test]
    fn test_zero_previous_is_undefined() {
        let changes = percent_changes(&[10.0, 0.0, 20.0, 30.0]);
        assert_eq!(changes[1], Some(-100.0));
        assert_eq!(changes[2], None);
        assert_relative_eq!(changes[3].unwrap(), 50.0);
    }

    #[test]
    fn test_resolve() {
        let resolved = resolve_percent_returns(&[Some(0.0), Some(5.0)]).unwrap();
        assert_eq!(resolved, vec![0.0, 5.0]);

        let err = resolve_percent_returns(&[Some(0.0), Some(-100.0), None]).unwrap_err();
        assert_eq!(err, AssetError::UndefinedReturn { period: 3 });
    }

    proptest! {
        #[test]
        fn prop_changes_track_input_length(
            values in prop::collection::vec(1.0f64..1000.0, 1..40)
        ) {
            let changes = percent_changes(&values);
            prop_assert_eq!(changes.len(), values.len());
            prop_assert_eq!(changes[0], Some(0.0));
            prop_assert!(changes.iter().all(Option::is_some));
        }
    }
}
