//! Domain types for asset valuation.
//!
//! - [`PercentReturn`]: one period-over-period change, possibly undefined
//! - [`PaybackPeriod`]: recovery period or the "not recovered" sentinel
//! - [`SharpeBreakdown`]: Sharpe ratio with its mean and volatility inputs

mod payback;
mod returns;
mod sharpe;

pub use payback::PaybackPeriod;
pub use returns::{percent_changes, resolve_percent_returns, PercentReturn};
pub use sharpe::SharpeBreakdown;
