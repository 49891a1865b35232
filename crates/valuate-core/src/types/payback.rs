//! Payback period outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a payback period calculation.
///
/// Failing to recover the initial capital within the horizon is a valid
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "period", rename_all = "snake_case")]
pub enum PaybackPeriod {
    /// Capital recovered in this 1-indexed period.
    Recovered(usize),
    /// Cumulative discounted cash flow never reached the initial capital.
    NotRecovered,
}

impl PaybackPeriod {
    /// Returns the recovery period, if any.
    #[must_use]
    pub fn period(&self) -> Option<usize> {
        match self {
            Self::Recovered(period) => Some(*period),
            Self::NotRecovered => None,
        }
    }

    /// Returns true if the initial capital was recovered.
    #[must_use]
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered(_))
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recovered(period) => write!(f, "{period}"),
            Self::NotRecovered => {
                write!(f, "Initial capital not recovered within the given cash flows.")
            }
        }
    }
}
