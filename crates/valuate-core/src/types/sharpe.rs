//! Sharpe ratio with its inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Sharpe ratio together with the mean and volatility it was built from.
///
/// `ratio = average_return / volatility`. Zero volatility is not guarded,
/// so `ratio` may be infinite or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharpeBreakdown {
    /// Mean of the return series.
    pub average_return: f64,
    /// Population standard deviation of the return series.
    pub volatility: f64,
    /// Mean divided by volatility.
    pub ratio: f64,
}

impl SharpeBreakdown {
    /// Builds a breakdown from a mean and a volatility.
    #[must_use]
    pub fn new(average_return: f64, volatility: f64) -> Self {
        Self {
            average_return,
            volatility,
            ratio: average_return / volatility,
        }
    }

    /// Returns true if the ratio is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.ratio.is_finite()
    }
}

impl fmt::Display for SharpeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Return: {}", self.average_return)?;
        writeln!(f, "Volatility: {}", self.volatility)?;
        write!(f, "Sharpe Ratio: {}", self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let sharpe = SharpeBreakdown::new(0.12, 0.04);
        assert!((sharpe.ratio - 3.0).abs() < 1e-12);
        assert!(sharpe.is_finite());
    }

    #[test]
    fn test_zero_volatility_propagates() {
        assert!(SharpeBreakdown::new(0.1, 0.0).ratio.is_infinite());
        assert!(SharpeBreakdown::new(0.0, 0.0).ratio.is_nan());
    }

    #[test]
    fn test_display() {
        let text = SharpeBreakdown::new(1.0, 2.0).to_string();
        assert!(text.contains("Average Return: 1"));
        assert!(text.contains("Volatility: 2"));
        assert!(text.contains("Sharpe Ratio: 0.5"));
    }
}
