//! Asset struct and single-asset metrics.

use crate::error::{AssetError, AssetResult};
use crate::summary::AssetSummary;
use crate::types::{
    percent_changes, resolve_percent_returns, PaybackPeriod, PercentReturn, SharpeBreakdown,
};
use rand::Rng;
use serde::Serialize;
use valuate_math::sampling::sample_uniform;
use valuate_math::statistics::{mean, population_std_dev};

/// A single investment.
///
/// An asset is described by its upfront capital, a discount rate and at
/// least one of:
///
/// - `returns`: periodic returns that are already known
/// - `cash_flows`: periodic nominal cash amounts, paired with an expense
///   band `[lower_expense_weight, upper_expense_weight]`
///
/// Assets are immutable once built; see [`AssetBuilder`](super::AssetBuilder).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub(super) name: String,
    pub(super) initial_capital: f64,
    pub(super) discount: f64,
    pub(super) years: usize,
    pub(super) returns: Vec<f64>,
    pub(super) cash_flows: Vec<f64>,
    pub(super) lower_expense_weight: f64,
    pub(super) upper_expense_weight: f64,
}

impl Asset {
    /// Creates a new asset builder with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::AssetBuilder {
        super::AssetBuilder::new().name(name)
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the upfront investment.
    #[must_use]
    pub fn initial_capital(&self) -> f64 {
        self.initial_capital
    }

    /// Returns the periodic discount rate.
    #[must_use]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Returns the holding period in periods.
    #[must_use]
    pub fn years(&self) -> usize {
        self.years
    }

    /// Returns the known periodic returns (empty if none were given).
    #[must_use]
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    /// Returns the nominal cash flows (empty if none were given).
    #[must_use]
    pub fn cash_flows(&self) -> &[f64] {
        &self.cash_flows
    }

    /// Returns the lower bound of the expense band.
    #[must_use]
    pub fn lower_expense_weight(&self) -> f64 {
        self.lower_expense_weight
    }

    /// Returns the upper bound of the expense band.
    #[must_use]
    pub fn upper_expense_weight(&self) -> f64 {
        self.upper_expense_weight
    }

    /// Returns true if explicit returns were supplied.
    #[must_use]
    pub fn has_returns(&self) -> bool {
        !self.returns.is_empty()
    }

    /// Returns true if cash flows were supplied.
    #[must_use]
    pub fn has_cash_flows(&self) -> bool {
        !self.cash_flows.is_empty()
    }

    /// Period-over-period percent change of the cash flows.
    ///
    /// See [`percent_changes`] for the exact rules.
    #[must_use]
    pub fn percent_returns(&self) -> Vec<PercentReturn> {
        percent_changes(&self.cash_flows)
    }

    /// Discounted value of each cash flow.
    ///
    /// Period `k` (1-indexed) is `cash_flows[k-1] / (1 + discount)^k`.
    /// Only the first `min(cash_flows.len(), years)` periods are produced.
    #[must_use]
    pub fn discount_cash_flow(&self) -> Vec<f64> {
        let growth = 1.0 + self.discount;
        self.cash_flows
            .iter()
            .take(self.years)
            .scan(1.0_f64, |factor, cash| {
                *factor *= growth;
                Some(cash / *factor)
            })
            .collect()
    }

    /// Net present value: discounted cash flows minus the initial capital.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::MissingData`] if the asset has no cash flows.
    pub fn net_present_value(&self) -> AssetResult<f64> {
        if !self.has_cash_flows() {
            return Err(AssetError::missing_data(
                "net present value requires cash flows",
            ));
        }
        let discounted: f64 = self.discount_cash_flow().iter().sum();
        Ok(discounted - self.initial_capital)
    }

    /// Discounted cash flows scaled by one random expense draw, using the
    /// thread-local RNG.
    ///
    /// Every call draws a fresh weight, so results differ between calls.
    pub fn adjust_for_expenses(&self) -> AssetResult<Vec<f64>> {
        self.adjust_for_expenses_with(&mut rand::thread_rng())
    }

    /// Discounted cash flows scaled by `(1 - w)` where `w` is drawn
    /// uniformly from the expense band using `rng`.
    pub fn adjust_for_expenses_with<R: Rng + ?Sized>(&self, rng: &mut R) -> AssetResult<Vec<f64>> {
        let weight = sample_uniform(rng, self.lower_expense_weight, self.upper_expense_weight)?;
        tracing::debug!(asset = %self.name, expense_weight = weight, "expense weight drawn");

        Ok(self
            .discount_cash_flow()
            .into_iter()
            .map(|cash| cash * (1.0 - weight))
            .collect())
    }

    /// The return series every cross-period metric is computed from.
    ///
    /// Explicit `returns` when present, otherwise the cash-flow percent
    /// returns (including the leading zero).
    ///
    /// # Errors
    ///
    /// - [`AssetError::MissingData`] if the asset has neither series
    /// - [`AssetError::UndefinedReturn`] if a derived step divides by zero
    pub fn effective_returns(&self) -> AssetResult<Vec<f64>> {
        if self.has_returns() {
            return Ok(self.returns.clone());
        }
        if !self.has_cash_flows() {
            return Err(AssetError::missing_data(format!(
                "asset '{}' has neither returns nor cash flows",
                self.name
            )));
        }
        resolve_percent_returns(&self.percent_returns())
    }

    /// Arithmetic mean of [`effective_returns`](Self::effective_returns).
    pub fn average_return(&self) -> AssetResult<f64> {
        Ok(mean(&self.effective_returns()?)?)
    }

    /// Sharpe ratio using the thread-local RNG for the expense draw.
    pub fn sharpe_ratio(&self) -> AssetResult<f64> {
        Ok(self.sharpe_breakdown()?.ratio)
    }

    /// Sharpe ratio using `rng` for the expense draw.
    pub fn sharpe_ratio_with<R: Rng + ?Sized>(&self, rng: &mut R) -> AssetResult<f64> {
        Ok(self.sharpe_breakdown_with(rng)?.ratio)
    }

    /// Sharpe ratio with its inputs, using the thread-local RNG.
    pub fn sharpe_breakdown(&self) -> AssetResult<SharpeBreakdown> {
        self.sharpe_breakdown_with(&mut rand::thread_rng())
    }

    /// Sharpe ratio with its inputs.
    ///
    /// Uses explicit returns when present. Otherwise the series is the
    /// percent change of the expense-adjusted discounted cash flows, without
    /// the leading zero; only that path consumes randomness.
    ///
    /// Zero volatility is not an error: the ratio is non-finite.
    ///
    /// # Errors
    ///
    /// - [`AssetError::MissingData`] if no return series can be formed
    /// - [`AssetError::UndefinedReturn`] if a derived step divides by zero
    pub fn sharpe_breakdown_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> AssetResult<SharpeBreakdown> {
        let returns = if self.has_returns() {
            self.returns.clone()
        } else {
            let adjusted = self.adjust_for_expenses_with(rng)?;
            let mut derived = resolve_percent_returns(&percent_changes(&adjusted))?;
            if !derived.is_empty() {
                derived.remove(0);
            }
            derived
        };

        if returns.is_empty() {
            return Err(AssetError::missing_data(format!(
                "Sharpe ratio for '{}' needs returns or at least two cash flows",
                self.name
            )));
        }

        let breakdown = SharpeBreakdown::new(mean(&returns)?, population_std_dev(&returns)?);
        if !breakdown.is_finite() {
            tracing::warn!(
                asset = %self.name,
                volatility = breakdown.volatility,
                "Sharpe ratio is not finite"
            );
        }
        Ok(breakdown)
    }

    /// First period at which cumulative discounted cash flow reaches the
    /// initial capital.
    #[must_use]
    pub fn payback_period(&self) -> PaybackPeriod {
        let mut cumulative = 0.0;
        for (index, cash) in self.discount_cash_flow().into_iter().enumerate() {
            cumulative += cash;
            if cumulative >= self.initial_capital {
                return PaybackPeriod::Recovered(index + 1);
            }
        }
        PaybackPeriod::NotRecovered
    }

    /// Level annual amount equivalent to the initial capital over `years`
    /// at the discount rate.
    ///
    /// `initial_capital / ((1 - (1 + d)^-n) / d)`. A zero discount rate
    /// uses the limit of the annuity factor, `n`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::InvalidConfiguration`] if `years == 0`.
    pub fn annual_worth(&self) -> AssetResult<f64> {
        if self.years == 0 {
            return Err(AssetError::invalid_configuration(
                "annual worth requires a holding period of at least one year",
            ));
        }

        let periods = self.years as f64;
        let annuity_factor = if self.discount == 0.0 {
            periods
        } else {
            (1.0 - (1.0 + self.discount).powf(-periods)) / self.discount
        };

        Ok(self.initial_capital / annuity_factor)
    }

    /// Report of this asset's metrics, using the thread-local RNG.
    #[must_use]
    pub fn summary(&self) -> AssetSummary {
        AssetSummary::from_asset(self, &mut rand::thread_rng())
    }

    /// Report of this asset's metrics, using `rng` for the expense draw.
    #[must_use]
    pub fn summary_with<R: Rng + ?Sized>(&self, rng: &mut R) -> AssetSummary {
        AssetSummary::from_asset(self, rng)
    }
}
