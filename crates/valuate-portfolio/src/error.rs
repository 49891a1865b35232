//! Error types for portfolio analytics.
//!
//! This module defines the error types used throughout the portfolio crate.

use thiserror::Error;
use valuate_core::AssetError;
use valuate_math::MathError;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Division by zero in aggregation.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that failed.
        operation: String,
    },

    /// Two return series cannot be compared element by element.
    #[error(
        "Incompatible series length: '{first}' has {first_len} returns, '{second}' has {second_len}"
    )]
    IncompatibleSeriesLength {
        /// Name of the first asset.
        first: String,
        /// Length of the first series.
        first_len: usize,
        /// Name of the second asset.
        second: String,
        /// Length of the second series.
        second_len: usize,
    },

    /// A portfolio definition could not be parsed or validated.
    #[error("Invalid portfolio definition: {reason}")]
    InvalidDefinition {
        /// The reason the definition was rejected.
        reason: String,
    },

    /// Writing a report failed.
    #[error("Report output failed: {reason}")]
    Output {
        /// The underlying I/O failure.
        reason: String,
    },

    /// An asset-level metric failed.
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// A statistics computation failed.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl PortfolioError {
    /// Create a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Create an invalid definition error.
    #[must_use]
    pub fn invalid_definition(reason: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for PortfolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            reason: err.to_string(),
        }
    }
}
