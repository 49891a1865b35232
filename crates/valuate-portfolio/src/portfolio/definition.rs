//! Portfolio definitions loaded from TOML or JSON.

use crate::types::AnalyticsConfig;
use crate::{Portfolio, PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use valuate_core::AssetDefinition;

/// Plain-data description of a portfolio.
///
/// ```toml
/// name = "Equities"
///
/// [config]
/// parallel = false
///
/// [[assets]]
/// name = "ABC"
/// initial_capital = 2100.0
/// discount = 0.17
/// returns = [0.09, 0.07, 0.11]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioDefinition {
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Analytics configuration; defaults when omitted.
    #[serde(default)]
    pub config: AnalyticsConfig,
    /// Assets in insertion order.
    #[serde(default)]
    pub assets: Vec<AssetDefinition>,
}

impl PortfolioDefinition {
    /// Parses a TOML document.
    pub fn from_toml_str(input: &str) -> PortfolioResult<Self> {
        toml::from_str(input).map_err(|e| PortfolioError::invalid_definition(e.to_string()))
    }

    /// Parses a JSON document.
    pub fn from_json_str(input: &str) -> PortfolioResult<Self> {
        serde_json::from_str(input).map_err(|e| PortfolioError::invalid_definition(e.to_string()))
    }

    /// Reads a definition file, choosing the format by extension.
    ///
    /// `.json` is parsed as JSON; anything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| {
            PortfolioError::invalid_definition(format!("cannot read {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), json = is_json, "loading portfolio definition");

        if is_json {
            Self::from_json_str(&input)
        } else {
            Self::from_toml_str(&input)
        }
    }

    /// Validates every asset and builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Asset`] naming the first asset that fails
    /// validation.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let mut portfolio = Portfolio {
            name: self.name,
            assets: Vec::with_capacity(self.assets.len()),
            config: self.config,
        };
        for definition in self.assets {
            portfolio.add(definition.build()?);
        }
        Ok(portfolio)
    }
}

impl TryFrom<PortfolioDefinition> for Portfolio {
    type Error = PortfolioError;

    fn try_from(definition: PortfolioDefinition) -> PortfolioResult<Self> {
        definition.build()
    }
}
