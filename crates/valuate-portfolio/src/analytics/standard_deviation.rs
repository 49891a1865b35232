//! Dispersion of asset returns.

use super::parallel::maybe_parallel_map;
use crate::types::AnalyticsConfig;
use crate::PortfolioResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use valuate_core::Asset;
use valuate_math::statistics::population_std_dev;

/// Standard deviation of one asset's returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardDeviationEntry {
    /// Asset name.
    pub asset: String,
    /// Population standard deviation of the effective returns.
    pub standard_deviation: f64,
}

/// Population standard deviation (divisor `n`) of an asset's effective returns.
///
/// # Errors
///
/// Returns [`PortfolioError::Asset`](crate::PortfolioError::Asset) if the
/// asset has no usable series.
pub fn standard_deviation(asset: &Asset) -> PortfolioResult<f64> {
    let series = asset.effective_returns()?;
    Ok(population_std_dev(&series)?)
}

/// Standard deviation of every asset, in the order given.
pub fn all_standard_deviations(
    assets: &[Arc<Asset>],
    config: &AnalyticsConfig,
) -> PortfolioResult<Vec<StandardDeviationEntry>> {
    maybe_parallel_map(assets, config, |asset| {
        Ok(StandardDeviationEntry {
            asset: asset.name().to_string(),
            standard_deviation: standard_deviation(asset)?,
        })
    })
    .into_iter()
    .collect()
}
