//! # Valuate Portfolio
//!
//! Cross-asset statistics over [`valuate_core::Asset`]s.
//!
//! A [`Portfolio`] is an ordered collection of shared assets. Everything it
//! reports is derived from each asset's effective return series and
//! initial capital.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: analytics take assets and configuration and return values
//! - **Shared assets**: assets are held through `Arc`, never copied
//! - **Presentation apart**: [`report`] formats results; analytics never print
//! - **Config-driven parallelism**: optional rayon support with threshold-based switching
//!
//! ## Features
//!
//! - **Weights**: capital share of each asset
//! - **Expected Return**: capital-weighted average of average returns
//! - **Dispersion**: population standard deviation per asset
//! - **Correlation**: Pearson coefficient for every asset pair
//! - **Definitions**: portfolios loaded from TOML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use valuate_core::Asset;
//! use valuate_portfolio::prelude::*;
//!
//! let abc = Asset::builder("ABC")
//!     .initial_capital(2100.0)
//!     .discount(0.17)
//!     .returns(vec![0.09, 0.07, 0.11, 0.13])
//!     .build()?;
//! let xyz = Asset::builder("XYZ")
//!     .initial_capital(3600.0)
//!     .discount(0.14)
//!     .returns(vec![0.10, 0.08, 0.12, 0.15])
//!     .build()?;
//!
//! let portfolio = PortfolioBuilder::new()
//!     .name("Equities")
//!     .add_asset(abc)
//!     .add_asset(xyz)
//!     .build();
//!
//! let weights = portfolio.weights()?;
//! assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//!
//! let breakdown = portfolio.expected_return_breakdown()?;
//! assert_eq!(breakdown.weights.len(), 2);
//! # Ok::<(), valuate_portfolio::PortfolioError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Correlation, standard deviation, expected return
//! - [`portfolio`] - Portfolio, builder and file definitions
//! - [`report`] - Text reports
//! - [`types`] - Configuration
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

pub mod analytics;
pub mod error;
pub mod portfolio;
pub mod report;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};

pub use types::AnalyticsConfig;

pub use portfolio::{Portfolio, PortfolioBuilder, PortfolioDefinition};

pub use analytics::{
    all_correlations, all_standard_deviations, maybe_parallel_map, AssetWeight, CorrelationEntry,
    ExpectedReturnBreakdown, StandardDeviationEntry,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use valuate_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};

    pub use crate::types::AnalyticsConfig;

    pub use crate::portfolio::{Portfolio, PortfolioBuilder, PortfolioDefinition};

    pub use crate::analytics::{
        AssetWeight, CorrelationEntry, ExpectedReturnBreakdown, StandardDeviationEntry,
    };

    pub use valuate_core::{Asset, AssetBuilder, AssetDefinition};
}
