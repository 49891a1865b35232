//! Human-readable asset report.
//!
//! [`AssetSummary`] collects the metrics that make up an asset's report.
//! A metric that fails for this asset (for example annual worth with a zero
//! holding period) is recorded as absent instead of aborting the report.

use crate::asset::Asset;
use crate::types::PaybackPeriod;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Snapshot of an asset's report metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSummary {
    /// Asset name.
    pub name: String,
    /// Upfront investment.
    pub initial_capital: f64,
    /// Mean of the effective returns, if computable.
    pub average_return: Option<f64>,
    /// Periodic discount rate.
    pub discount: f64,
    /// Explicit returns (empty if not provided).
    pub returns: Vec<f64>,
    /// Nominal cash flows (empty if not provided).
    pub cash_flows: Vec<f64>,
    /// Holding period.
    pub years: usize,
    /// Payback outcome.
    pub payback_period: PaybackPeriod,
    /// Annual worth, if computable.
    pub annual_worth: Option<f64>,
    /// Discounted cash flows.
    pub discounted_cash_flows: Vec<f64>,
    /// Discounted cash flows after one expense draw.
    pub adjusted_cash_flows: Option<Vec<f64>>,
    /// Lower bound of the expense band.
    pub lower_expense_weight: f64,
    /// Upper bound of the expense band.
    pub upper_expense_weight: f64,
}

impl AssetSummary {
    /// Computes the report for `asset`, drawing the expense weight from `rng`.
    pub fn from_asset<R: Rng + ?Sized>(asset: &Asset, rng: &mut R) -> Self {
        Self {
            name: asset.name().to_string(),
            initial_capital: asset.initial_capital(),
            average_return: asset.average_return().ok(),
            discount: asset.discount(),
            returns: asset.returns().to_vec(),
            cash_flows: asset.cash_flows().to_vec(),
            years: asset.years(),
            payback_period: asset.payback_period(),
            annual_worth: asset.annual_worth().ok(),
            discounted_cash_flows: asset.discount_cash_flow(),
            adjusted_cash_flows: asset.adjust_for_expenses_with(rng).ok(),
            lower_expense_weight: asset.lower_expense_weight(),
            upper_expense_weight: asset.upper_expense_weight(),
        }
    }
}

fn series(values: &[f64]) -> String {
    if values.is_empty() {
        "Not Provided".to_string()
    } else {
        format!("{values:?}")
    }
}

fn metric(value: Option<f64>) -> String {
    value.map_or_else(|| "Not Available".to_string(), |v| v.to_string())
}

impl fmt::Display for AssetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = "#".repeat(80);
        let narrow = "#".repeat(40);

        writeln!(f, "{wide}")?;
        writeln!(f, "Asset: {}", self.name)?;
        writeln!(f, "Initial Capital: {}", self.initial_capital)?;
        writeln!(f, "Average Return: {}", metric(self.average_return))?;
        writeln!(f, "Discount rate: {}", self.discount)?;
        writeln!(f, "Returns: {}", series(&self.returns))?;
        writeln!(f, "Cash Flows: {}", series(&self.cash_flows))?;
        writeln!(f, "Years Planned to Hold: {}", self.years)?;
        writeln!(f, "Payback Period: {}", self.payback_period)?;
        writeln!(f, "Annual Worth: {}", metric(self.annual_worth))?;
        writeln!(f, "{narrow}")?;
        writeln!(
            f,
            "Annual Cash Flows (discounted): {:?}",
            self.discounted_cash_flows
        )?;
        writeln!(f, "{narrow}")?;
        match &self.adjusted_cash_flows {
            Some(adjusted) => writeln!(f, "Incomes Adjusted for Expenses: {adjusted:?}.")?,
            None => writeln!(f, "Incomes Adjusted for Expenses: Not Available.")?,
        }
        writeln!(f, "Expense Weights:")?;
        writeln!(
            f,
            "Lower: {} Upper: {}",
            self.lower_expense_weight, self.upper_expense_weight
        )?;
        write!(f, "{wide}")
    }
}
