//! Portfolio struct and core methods.

use crate::analytics::{correlation, expected_return, standard_deviation};
use crate::analytics::{CorrelationEntry, ExpectedReturnBreakdown, StandardDeviationEntry};
use crate::types::AnalyticsConfig;
use crate::{PortfolioError, PortfolioResult};
use std::sync::Arc;
use valuate_core::Asset;

/// An ordered collection of assets.
///
/// Assets are shared, not copied: the same [`Asset`] can sit in several
/// portfolios, or twice in one. Insertion order is kept and determines the
/// order of every per-asset and per-pair result.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    /// Optional display name.
    pub name: Option<String>,

    /// Held assets, in insertion order.
    pub assets: Vec<Arc<Asset>>,

    /// Analytics configuration.
    pub config: AnalyticsConfig,
}

impl Portfolio {
    /// Creates an empty portfolio with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder() -> super::PortfolioBuilder {
        super::PortfolioBuilder::new()
    }

    /// Appends an asset. No deduplication is performed.
    pub fn add(&mut self, asset: impl Into<Arc<Asset>>) {
        let asset = asset.into();
        tracing::debug!(asset = %asset.name(), position = self.assets.len(), "asset added");
        self.assets.push(asset);
    }

    /// Returns the number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the portfolio holds no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterates over the held assets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter().map(Arc::as_ref)
    }

    /// Sum of the initial capital of every held asset. Zero when empty.
    #[must_use]
    pub fn total_money_invested(&self) -> f64 {
        self.iter().map(Asset::initial_capital).sum()
    }

    /// Capital weight of each asset: `initial_capital / total_money_invested`.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::DivisionByZero`] if the portfolio is empty
    /// or the total invested capital is zero.
    pub fn weights(&self) -> PortfolioResult<Vec<f64>> {
        let total = self.total_money_invested();
        if self.is_empty() || total == 0.0 {
            return Err(PortfolioError::division_by_zero("portfolio weights"));
        }
        Ok(self
            .iter()
            .map(|asset| asset.initial_capital() / total)
            .collect())
    }

    /// Pearson correlation between two assets' effective returns.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::IncompatibleSeriesLength`] when the series
    /// differ in length, or an asset error if a series cannot be formed.
    pub fn correlation(&self, first: &Asset, second: &Asset) -> PortfolioResult<f64> {
        correlation::correlation(first, second)
    }

    /// Correlation of every unordered pair `(i, j)` with `i < j`, in
    /// enumeration order `(0,1), (0,2), …, (1,2), …`.
    pub fn return_all_correlation_coefficients(&self) -> PortfolioResult<Vec<CorrelationEntry>> {
        correlation::all_correlations(&self.assets, &self.config)
    }

    /// Bare coefficients of [`return_all_correlation_coefficients`](Self::return_all_correlation_coefficients).
    pub fn correlation_coefficients(&self) -> PortfolioResult<Vec<f64>> {
        Ok(self
            .return_all_correlation_coefficients()?
            .into_iter()
            .map(|entry| entry.coefficient)
            .collect())
    }

    /// Population standard deviation of an asset's effective returns.
    pub fn standard_deviation(&self, asset: &Asset) -> PortfolioResult<f64> {
        standard_deviation::standard_deviation(asset)
    }

    /// Standard deviation of every asset, in insertion order.
    pub fn return_all_standard_deviations(&self) -> PortfolioResult<Vec<StandardDeviationEntry>> {
        standard_deviation::all_standard_deviations(&self.assets, &self.config)
    }

    /// Capital-weighted average of the assets' average returns.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::DivisionByZero`] if there are no assets or
    /// no invested capital.
    pub fn expected_return(&self) -> PortfolioResult<f64> {
        Ok(self.expected_return_breakdown()?.expected_return)
    }

    /// Expected return together with the weights and averages behind it.
    pub fn expected_return_breakdown(&self) -> PortfolioResult<ExpectedReturnBreakdown> {
        expected_return::expected_return(self)
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Arc<Asset>;
    type IntoIter = std::slice::Iter<'a, Arc<Asset>>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn asset(name: &str, capital: f64, returns: Vec<f64>) -> Asset {
        Asset::builder(name)
            .initial_capital(capital)
            .discount(0.1)
            .returns(returns)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_portfolio() {
        let portfolio = Portfolio::new();
        assert!(portfolio.is_empty());
        assert_eq!(portfolio.total_money_invested(), 0.0);
        assert!(matches!(
            portfolio.weights(),
            Err(PortfolioError::DivisionByZero { .. })
        ));
        assert!(matches!(
            portfolio.expected_return(),
            Err(PortfolioError::DivisionByZero { .. })
        ));
        assert!(portfolio.return_all_correlation_coefficients().unwrap().is_empty());
        assert!(portfolio.return_all_standard_deviations().unwrap().is_empty());
    }

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let shared = Arc::new(asset("A", 100.0, vec![0.1, 0.2]));
        let mut portfolio = Portfolio::new();
        portfolio.add(Arc::clone(&shared));
        portfolio.add(asset("B", 300.0, vec![0.3, 0.1]));
        portfolio.add(Arc::clone(&shared));

        let names: Vec<&str> = portfolio.iter().map(Asset::name).collect();
        assert_eq!(names, vec!["A", "B", "A"]);
        assert_eq!(portfolio.total_money_invested(), 500.0);
        assert_eq!(Arc::strong_count(&shared), 3);
    }

    #[test]
    fn test_shared_between_portfolios() {
        let shared = Arc::new(asset("A", 100.0, vec![0.1, 0.2]));
        let mut first = Portfolio::new();
        let mut second = Portfolio::new();
        first.add(Arc::clone(&shared));
        second.add(Arc::clone(&shared));

        assert!(Arc::ptr_eq(&first.assets[0], &second.assets[0]));
    }

    #[test]
    fn test_weights() {
        let mut portfolio = Portfolio::new();
        portfolio.add(asset("A", 100.0, vec![0.1]));
        portfolio.add(asset("B", 300.0, vec![0.1]));

        let weights = portfolio.weights().unwrap();
        assert_relative_eq!(weights[0], 0.25);
        assert_relative_eq!(weights[1], 0.75);
    }

    #[test]
    fn test_zero_capital_weights() {
        let mut portfolio = Portfolio::new();
        portfolio.add(asset("A", 0.0, vec![0.1]));
        assert!(matches!(
            portfolio.weights(),
            Err(PortfolioError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_correlation_coefficients_order() {
        let mut portfolio = Portfolio::new();
        portfolio.add(asset("A", 1.0, vec![1.0, 2.0, 3.0]));
        portfolio.add(asset("B", 1.0, vec![2.0, 4.0, 6.0]));
        portfolio.add(asset("C", 1.0, vec![3.0, 2.0, 1.0]));

        let coefficients = portfolio.correlation_coefficients().unwrap();
        assert_eq!(coefficients.len(), 3);
        assert_relative_eq!(coefficients[0], 1.0, epsilon = 1e-12); // A-B
        assert_relative_eq!(coefficients[1], -1.0, epsilon = 1e-12); // A-C
        assert_relative_eq!(coefficients[2], -1.0, epsilon = 1e-12); // B-C
    }
}
