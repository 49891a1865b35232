//! Uniform sampling on a closed interval.

use crate::error::{MathError, MathResult};
use rand::Rng;

/// Draws one value uniformly from `[lower, upper]`.
///
/// `lower == upper` is allowed and always returns that value.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if either bound is not finite
/// - [`MathError::InvalidInterval`] if `lower > upper`
pub fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, lower: f64, upper: f64) -> MathResult<f64> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(MathError::invalid_input(format!(
            "sampling bounds must be finite, got [{lower}, {upper}]"
        )));
    }
    if lower > upper {
        return Err(MathError::InvalidInterval { lower, upper });
    }

    let value = rng.gen_range(lower..=upper);
    tracing::trace!(lower, upper, value, "uniform draw");
    Ok(value)
}
