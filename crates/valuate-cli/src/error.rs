//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Definition file with an extension we cannot parse.
    #[error("Unsupported definition file: {0}. Use .toml or .json.")]
    UnsupportedFormat(String),

    /// Portfolio definition without assets.
    #[error("Portfolio definition {0} lists no assets")]
    EmptyPortfolio(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Asset construction or metric failure.
    #[error(transparent)]
    Asset(#[from] valuate_core::AssetError),

    /// Portfolio loading or metric failure.
    #[error(transparent)]
    Portfolio(#[from] valuate_portfolio::PortfolioError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
