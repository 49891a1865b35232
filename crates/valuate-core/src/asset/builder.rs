//! Asset builder for validated construction.

use super::Asset;
use crate::error::{AssetError, AssetResult};

/// Builder for constructing an [`Asset`].
///
/// All cross-field rules are checked once, in [`AssetBuilder::build`]:
///
/// - `discount` must be finite and non-negative
/// - supplying `cash_flows` requires both expense weights
/// - expense weights must lie in `[0, 1]` with `lower <= upper`
/// - `years` defaults to the cash-flow count, else the return count, else 0
///
/// # Example
///
/// ```rust
/// use valuate_core::Asset;
///
/// let stock = Asset::builder("ABC")
///     .initial_capital(2100.0)
///     .discount(0.17)
///     .returns(vec![0.09, 0.07, 0.11])
///     .build()
///     .unwrap();
///
/// assert_eq!(stock.years(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetBuilder {
    name: Option<String>,
    initial_capital: Option<f64>,
    discount: Option<f64>,
    years: Option<usize>,
    returns: Option<Vec<f64>>,
    cash_flows: Option<Vec<f64>>,
    lower_expense_weight: Option<f64>,
    upper_expense_weight: Option<f64>,
}

impl AssetBuilder {
    /// Creates a new, empty asset builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the asset name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the upfront investment.
    #[must_use]
    pub fn initial_capital(mut self, capital: f64) -> Self {
        self.initial_capital = Some(capital);
        self
    }

    /// Sets the periodic discount rate.
    #[must_use]
    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Sets the holding period explicitly.
    #[must_use]
    pub fn years(mut self, years: usize) -> Self {
        self.years = Some(years);
        self
    }

    /// Sets the known periodic returns.
    #[must_use]
    pub fn returns(mut self, returns: Vec<f64>) -> Self {
        self.returns = Some(returns);
        self
    }

    /// Sets the periodic nominal cash flows.
    #[must_use]
    pub fn cash_flows(mut self, cash_flows: Vec<f64>) -> Self {
        self.cash_flows = Some(cash_flows);
        self
    }

    /// Sets the lower bound of the expense-ratio band.
    #[must_use]
    pub fn lower_expense_weight(mut self, weight: f64) -> Self {
        self.lower_expense_weight = Some(weight);
        self
    }

    /// Sets the upper bound of the expense-ratio band.
    #[must_use]
    pub fn upper_expense_weight(mut self, weight: f64) -> Self {
        self.upper_expense_weight = Some(weight);
        self
    }

    /// Sets both expense weights.
    #[must_use]
    pub fn expense_weights(self, lower: f64, upper: f64) -> Self {
        self.lower_expense_weight(lower).upper_expense_weight(upper)
    }

    /// Builds the asset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields (name, initial_capital, discount) are missing
    /// - The discount rate is negative or not finite
    /// - Cash flows are given without both expense weights
    /// - An expense weight is outside `[0, 1]` or the band is inverted
    pub fn build(self) -> AssetResult<Asset> {
        let name = self.name.ok_or_else(|| AssetError::missing_field("name"))?;
        let initial_capital = self
            .initial_capital
            .ok_or_else(|| AssetError::missing_field("initial_capital"))?;
        let discount = self
            .discount
            .ok_or_else(|| AssetError::missing_field("discount"))?;

        if !initial_capital.is_finite() {
            return Err(AssetError::invalid_configuration(format!(
                "initial capital must be finite, got {initial_capital}"
            )));
        }
        if !discount.is_finite() || discount < 0.0 {
            return Err(AssetError::invalid_configuration(format!(
                "discount cannot be negative, got {discount}"
            )));
        }

        if self.cash_flows.is_some()
            && (self.lower_expense_weight.is_none() || self.upper_expense_weight.is_none())
        {
            return Err(AssetError::invalid_configuration(
                "expense weights are required when cash flows are supplied",
            ));
        }

        let lower = self.lower_expense_weight.unwrap_or(0.0);
        let upper = self.upper_expense_weight.unwrap_or(0.0);
        for (label, weight) in [("lower", lower), ("upper", upper)] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(AssetError::invalid_configuration(format!(
                    "{label} expense weight must be within [0, 1], got {weight}"
                )));
            }
        }
        if lower > upper {
            return Err(AssetError::invalid_configuration(format!(
                "lower expense weight {lower} exceeds upper expense weight {upper}"
            )));
        }

        let years = self
            .years
            .or_else(|| self.cash_flows.as_ref().map(Vec::len))
            .or_else(|| self.returns.as_ref().map(Vec::len))
            .unwrap_or(0);

        let asset = Asset {
            name,
            initial_capital,
            discount,
            years,
            returns: self.returns.unwrap_or_default(),
            cash_flows: self.cash_flows.unwrap_or_default(),
            lower_expense_weight: lower,
            upper_expense_weight: upper,
        };

        tracing::debug!(
            asset = %asset.name,
            years = asset.years,
            returns = asset.returns.len(),
            cash_flows = asset.cash_flows.len(),
            "asset constructed"
        );

        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AssetBuilder {
        AssetBuilder::new()
            .name("Test")
            .initial_capital(1000.0)
            .discount(0.1)
    }

    #[test]
    fn test_basic_build() {
        let asset = base().build().unwrap();
        assert_eq!(asset.name(), "Test");
        assert_eq!(asset.years(), 0);
        assert!(asset.returns().is_empty());
        assert!(asset.cash_flows().is_empty());
        assert_eq!(asset.lower_expense_weight(), 0.0);
        assert_eq!(asset.upper_expense_weight(), 0.0);
    }

    #[test]
    fn test_missing_fields() {
        let err = AssetBuilder::new().initial_capital(1.0).discount(0.1).build();
        assert_eq!(err.unwrap_err(), AssetError::missing_field("name"));

        let err = AssetBuilder::new().name("X").discount(0.1).build();
        assert!(err.unwrap_err().to_string().contains("initial_capital"));

        let err = AssetBuilder::new().name("X").initial_capital(1.0).build();
        assert!(err.unwrap_err().to_string().contains("discount"));
    }

    #[test]
    fn test_negative_discount_rejected() {
        let err = base().discount(-0.01).build().unwrap_err();
        assert!(matches!(err, AssetError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_nan_discount_rejected() {
        assert!(base().discount(f64::NAN).build().is_err());
    }

    #[test]
    fn test_cash_flows_require_both_weights() {
        let err = base().cash_flows(vec![100.0]).build().unwrap_err();
        assert!(matches!(err, AssetError::InvalidConfiguration { .. }));

        let err = base()
            .cash_flows(vec![100.0])
            .lower_expense_weight(0.1)
            .build()
            .unwrap_err();
        assert!(matches!(err, AssetError::InvalidConfiguration { .. }));

        assert!(base()
            .cash_flows(vec![100.0])
            .expense_weights(0.1, 0.2)
            .build()
            .is_ok());
    }

    #[test]
    fn test_weight_range_and_order() {
        assert!(base().expense_weights(-0.1, 0.2).build().is_err());
        assert!(base().expense_weights(0.1, 1.2).build().is_err());
        assert!(base().expense_weights(0.3, 0.2).build().is_err());
        assert!(base().expense_weights(0.2, 0.2).build().is_ok());
    }

    #[test]
    fn test_years_inference() {
        let asset = base()
            .cash_flows(vec![1.0, 2.0, 3.0])
            .returns(vec![0.1, 0.2])
            .expense_weights(0.0, 0.0)
            .build()
            .unwrap();
        assert_eq!(asset.years(), 3);

        let asset = base().returns(vec![0.1, 0.2]).build().unwrap();
        assert_eq!(asset.years(), 2);

        let asset = base()
            .years(10)
            .cash_flows(vec![1.0, 2.0])
            .expense_weights(0.0, 0.0)
            .build()
            .unwrap();
        assert_eq!(asset.years(), 10);
    }
}
