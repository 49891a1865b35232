//! Capital-weighted expected return.

use super::parallel::maybe_parallel_map;
use crate::{Portfolio, PortfolioResult};
use serde::{Deserialize, Serialize};
use valuate_math::statistics::dot;

/// One asset's contribution to the expected return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetWeight {
    /// Asset name.
    pub asset: String,
    /// Share of total invested capital.
    pub weight: f64,
    /// Mean of the asset's effective returns.
    pub average_return: f64,
}

/// Expected return with the weights and averages it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedReturnBreakdown {
    /// `Σ weight_i · average_return_i`.
    pub expected_return: f64,
    /// Per-asset inputs, in insertion order.
    pub weights: Vec<AssetWeight>,
    /// Sum of the weights; 1 up to rounding.
    pub weight_sum: f64,
}

/// Computes the portfolio's expected return.
///
/// # Errors
///
/// - [`PortfolioError::DivisionByZero`](crate::PortfolioError::DivisionByZero)
///   for an empty portfolio or zero invested capital
/// - [`PortfolioError::Asset`](crate::PortfolioError::Asset) if an asset
///   has no usable return series
pub fn expected_return(portfolio: &Portfolio) -> PortfolioResult<ExpectedReturnBreakdown> {
    let weights = portfolio.weights()?;
    let averages = maybe_parallel_map(&portfolio.assets, &portfolio.config, |asset| {
        asset.average_return()
    })
    .into_iter()
    .collect::<Result<Vec<_>, _>>()?;

    let expected_return = dot(&weights, &averages)?;
    let weight_sum: f64 = weights.iter().sum();

    tracing::debug!(
        assets = portfolio.len(),
        expected_return,
        weight_sum,
        "expected return computed"
    );

    let weights = portfolio
        .iter()
        .zip(weights.iter().zip(&averages))
        .map(|(asset, (&weight, &average_return))| AssetWeight {
            asset: asset.name().to_string(),
            weight,
            average_return,
        })
        .collect();

    Ok(ExpectedReturnBreakdown {
        expected_return,
        weights,
        weight_sum,
    })
}
