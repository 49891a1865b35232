//! Error types for asset construction and metrics.

use thiserror::Error;
use valuate_math::MathError;

/// A specialized Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors that can occur while building an asset or computing its metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The asset parameters are inconsistent or out of range.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// A metric was requested without the series it needs.
    #[error("Missing data: {reason}")]
    MissingData {
        /// What was missing.
        reason: String,
    },

    /// A percent return could not be computed because the previous
    /// cash flow was zero.
    #[error("Undefined return at period {period}: previous cash flow is zero")]
    UndefinedReturn {
        /// 1-indexed period of the undefined step.
        period: usize,
    },

    /// Underlying numeric failure.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl AssetError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Creates a missing data error.
    #[must_use]
    pub fn missing_data(reason: impl Into<String>) -> Self {
        Self::MissingData {
            reason: reason.into(),
        }
    }
}
