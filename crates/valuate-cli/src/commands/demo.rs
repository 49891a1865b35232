//! Demo command implementation.
//!
//! Builds the two-stock sample portfolio and reports on it.

use anyhow::Result;
use clap::Args;

use valuate_core::Asset;
use valuate_portfolio::{Portfolio, PortfolioBuilder};

use crate::cli::GlobalOptions;
use crate::commands::portfolio;
use crate::error::CliResult;

const ABC_RETURNS: [f64; 10] = [0.09, 0.07, 0.11, 0.13, 0.10, 0.06, 0.05, 0.14, 0.19, 0.20];
const XYZ_RETURNS: [f64; 10] = [0.05, 0.17, 0.13, -0.05, 0.20, 0.16, 0.09, 0.11, 0.12, 0.04];

/// Arguments for the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Also report each stock individually
    #[arg(long)]
    pub assets: bool,

    /// Print the plain-text reports instead of formatted output
    #[arg(long)]
    pub report: bool,
}

/// Execute the demo command.
pub fn execute(args: DemoArgs, options: GlobalOptions) -> Result<()> {
    let portfolio = sample_portfolio()?;
    portfolio::render(&portfolio, args.assets, args.report, options)
}

/// ABC and XYZ with ten periods of known returns each.
pub fn sample_portfolio() -> CliResult<Portfolio> {
    let abc = Asset::builder("ABC")
        .initial_capital(2100.0)
        .discount(0.17)
        .returns(ABC_RETURNS.to_vec())
        .build()?;
    let xyz = Asset::builder("XYZ")
        .initial_capital(3600.0)
        .discount(0.14)
        .returns(XYZ_RETURNS.to_vec())
        .build()?;

    Ok(PortfolioBuilder::new()
        .name("Demo Portfolio")
        .add_asset(abc)
        .add_asset(xyz)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_portfolio_weights() {
        let portfolio = sample_portfolio().unwrap();
        let weights = portfolio.weights().unwrap();
        assert!((weights[0] - 2100.0 / 5700.0).abs() < 1e-12);
        assert!((weights[1] - 3600.0 / 5700.0).abs() < 1e-12);
    }
}
