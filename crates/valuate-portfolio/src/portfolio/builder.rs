//! Portfolio builder for fluent construction.

use crate::types::AnalyticsConfig;
use crate::Portfolio;
use std::sync::Arc;
use valuate_core::Asset;

/// Builder for constructing a [`Portfolio`].
///
/// # Example
///
/// ```rust
/// use valuate_core::Asset;
/// use valuate_portfolio::PortfolioBuilder;
///
/// let stock = Asset::builder("ABC")
///     .initial_capital(2100.0)
///     .discount(0.17)
///     .returns(vec![0.09, 0.07, 0.11])
///     .build()
///     .unwrap();
///
/// let portfolio = PortfolioBuilder::new()
///     .name("Equities")
///     .add_asset(stock)
///     .build();
///
/// assert_eq!(portfolio.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    name: Option<String>,
    assets: Vec<Arc<Asset>>,
    config: AnalyticsConfig,
}

impl PortfolioBuilder {
    /// Creates a new portfolio builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds an asset to the portfolio.
    #[must_use]
    pub fn add_asset(mut self, asset: impl Into<Arc<Asset>>) -> Self {
        self.assets.push(asset.into());
        self
    }

    /// Adds multiple assets to the portfolio.
    #[must_use]
    pub fn add_assets<A>(mut self, assets: impl IntoIterator<Item = A>) -> Self
    where
        A: Into<Arc<Asset>>,
    {
        self.assets.extend(assets.into_iter().map(Into::into));
        self
    }

    /// Sets the analytics configuration.
    #[must_use]
    pub fn config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the portfolio.
    #[must_use]
    pub fn build(self) -> Portfolio {
        let mut portfolio = Portfolio {
            name: self.name,
            assets: Vec::with_capacity(self.assets.len()),
            config: self.config,
        };
        for asset in self.assets {
            portfolio.add(asset);
        }
        portfolio
    }
}
