//! Pairwise correlation of asset returns.

use super::parallel::maybe_parallel_map;
use crate::types::AnalyticsConfig;
use crate::{PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use valuate_core::Asset;
use valuate_math::statistics::pearson_correlation;

/// Correlation coefficient of one asset pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEntry {
    /// Name of the earlier asset in insertion order.
    pub first: String,
    /// Name of the later asset in insertion order.
    pub second: String,
    /// Pearson correlation of their effective returns.
    pub coefficient: f64,
}

/// Pearson correlation between two assets' effective returns.
///
/// No alignment is attempted: series of different lengths are rejected.
/// A constant series has zero dispersion and yields a non-finite value.
///
/// # Errors
///
/// - [`PortfolioError::IncompatibleSeriesLength`] if the lengths differ
/// - [`PortfolioError::Asset`] if either asset has no usable series
pub fn correlation(first: &Asset, second: &Asset) -> PortfolioResult<f64> {
    let x = first.effective_returns()?;
    let y = second.effective_returns()?;
    correlate_series(first.name(), &x, second.name(), &y)
}

/// Correlation of every unordered pair `(i, j)`, `i < j`, in enumeration
/// order `(0,1), (0,2), …, (1,2), …`.
///
/// Each asset's series is computed once and reused across its pairs.
pub fn all_correlations(
    assets: &[Arc<Asset>],
    config: &AnalyticsConfig,
) -> PortfolioResult<Vec<CorrelationEntry>> {
    let series = maybe_parallel_map(assets, config, |asset| asset.effective_returns())
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let pairs: Vec<(usize, usize)> = (0..assets.len())
        .flat_map(|i| (i + 1..assets.len()).map(move |j| (i, j)))
        .collect();

    tracing::debug!(assets = assets.len(), pairs = pairs.len(), "computing correlations");

    maybe_parallel_map(&pairs, config, |&(i, j)| {
        let coefficient =
            correlate_series(assets[i].name(), &series[i], assets[j].name(), &series[j])?;
        Ok(CorrelationEntry {
            first: assets[i].name().to_string(),
            second: assets[j].name().to_string(),
            coefficient,
        })
    })
    .into_iter()
    .collect()
}

fn correlate_series(
    first_name: &str,
    x: &[f64],
    second_name: &str,
    y: &[f64],
) -> PortfolioResult<f64> {
    if x.len() != y.len() {
        return Err(PortfolioError::IncompatibleSeriesLength {
            first: first_name.to_string(),
            first_len: x.len(),
            second: second_name.to_string(),
            second_len: y.len(),
        });
    }
    Ok(pearson_correlation(x, y)?)
}
