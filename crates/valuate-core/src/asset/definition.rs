//! Serializable asset definitions.

use super::{Asset, AssetBuilder};
use crate::error::{AssetError, AssetResult};
use serde::{Deserialize, Serialize};

/// Plain-data description of an asset, as found in configuration files.
///
/// Optional fields mirror the builder: omitted series stay empty and
/// `years` is inferred. Converting to an [`Asset`] runs the same validation
/// as [`AssetBuilder::build`].
///
/// ```toml
/// name = "Duplex"
/// initial_capital = 250000.0
/// discount = 0.08
/// cash_flows = [24000.0, 24500.0, 25000.0]
/// lower_expense_weight = 0.25
/// upper_expense_weight = 0.40
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetDefinition {
    /// Display name.
    pub name: String,
    /// Upfront investment.
    pub initial_capital: f64,
    /// Periodic discount rate.
    pub discount: f64,
    /// Holding period; inferred when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<usize>,
    /// Known periodic returns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Vec<f64>>,
    /// Periodic nominal cash flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_flows: Option<Vec<f64>>,
    /// Lower bound of the expense band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_expense_weight: Option<f64>,
    /// Upper bound of the expense band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_expense_weight: Option<f64>,
}

impl AssetDefinition {
    /// Converts the definition into a builder with every given field set.
    #[must_use]
    pub fn into_builder(self) -> AssetBuilder {
        let mut builder = Asset::builder(self.name)
            .initial_capital(self.initial_capital)
            .discount(self.discount);

        if let Some(years) = self.years {
            builder = builder.years(years);
        }
        if let Some(returns) = self.returns {
            builder = builder.returns(returns);
        }
        if let Some(cash_flows) = self.cash_flows {
            builder = builder.cash_flows(cash_flows);
        }
        if let Some(lower) = self.lower_expense_weight {
            builder = builder.lower_expense_weight(lower);
        }
        if let Some(upper) = self.upper_expense_weight {
            builder = builder.upper_expense_weight(upper);
        }
        builder
    }

    /// Validates and builds the asset.
    pub fn build(self) -> AssetResult<Asset> {
        self.into_builder().build()
    }
}

impl TryFrom<AssetDefinition> for Asset {
    type Error = AssetError;

    fn try_from(definition: AssetDefinition) -> AssetResult<Self> {
        definition.build()
    }
}
