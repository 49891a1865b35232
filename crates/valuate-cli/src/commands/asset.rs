//! Asset command implementation.
//!
//! Values a single investment from its returns or cash flows.

use anyhow::Result;
use clap::Args;
use rand::Rng;
use serde::Serialize;
use tabled::Tabled;

use valuate_core::{Asset, AssetSummary, SharpeBreakdown};

use crate::cli::{GlobalOptions, OutputFormat};
use crate::commands::make_rng;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_optional, format_series, print_header, print_output, print_single, print_warning,
    Headline, KeyValue,
};

/// Arguments for the asset command.
#[derive(Args, Debug)]
pub struct AssetArgs {
    /// Asset name
    #[arg(short, long)]
    pub name: String,

    /// Upfront investment
    #[arg(short, long)]
    pub capital: f64,

    /// Periodic discount rate (e.g., 0.1 for 10%)
    #[arg(short, long)]
    pub discount: f64,

    /// Holding period. Defaults to the number of cash flows or returns.
    #[arg(short, long)]
    pub years: Option<usize>,

    /// Known periodic returns, comma separated
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub returns: Option<Vec<f64>>,

    /// Nominal cash flows, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Option<Vec<f64>>,

    /// Lower bound of the expense ratio band (0 to 1)
    #[arg(long)]
    pub lower_expense: Option<f64>,

    /// Upper bound of the expense ratio band (0 to 1)
    #[arg(long)]
    pub upper_expense: Option<f64>,

    /// Print the plain-text summary report instead of formatted output
    #[arg(long)]
    pub report: bool,
}

impl AssetArgs {
    /// Builds the asset, enforcing that at least one series is given.
    pub fn to_asset(&self) -> CliResult<Asset> {
        if self.returns.is_none() && self.cash_flows.is_none() {
            return Err(CliError::MissingArgument(
                "--returns or --cash-flows".to_string(),
            ));
        }

        let mut builder = Asset::builder(&self.name)
            .initial_capital(self.capital)
            .discount(self.discount);
        if let Some(years) = self.years {
            builder = builder.years(years);
        }
        if let Some(returns) = &self.returns {
            builder = builder.returns(returns.clone());
        }
        if let Some(cash_flows) = &self.cash_flows {
            builder = builder.cash_flows(cash_flows.clone());
        }
        if let Some(lower) = self.lower_expense {
            builder = builder.lower_expense_weight(lower);
        }
        if let Some(upper) = self.upper_expense {
            builder = builder.upper_expense_weight(upper);
        }
        Ok(builder.build()?)
    }
}

/// Execute the asset command.
pub fn execute(args: AssetArgs, options: GlobalOptions) -> Result<()> {
    let asset = args.to_asset()?;
    let mut rng = make_rng(options.seed);

    if args.report {
        println!("{}", asset.summary_with(&mut rng));
        return Ok(());
    }
    render(&asset, &mut rng, options)
}

/// Everything reported for one asset.
#[derive(Debug, Serialize)]
pub struct AssetReport {
    #[serde(flatten)]
    pub summary: AssetSummary,
    pub net_present_value: Option<f64>,
    pub sharpe: Option<SharpeBreakdown>,
}

impl AssetReport {
    /// NPV when the asset has cash flows, otherwise its average return.
    pub fn headline(&self) -> Option<f64> {
        self.net_present_value.or(self.summary.average_return)
    }
}

/// One period of the cash flow schedule.
#[derive(Debug, Serialize, Tabled)]
struct CashFlowRow {
    #[tabled(rename = "Period")]
    period: usize,
    #[tabled(rename = "Nominal")]
    nominal: String,
    #[tabled(rename = "Discounted")]
    discounted: String,
    #[tabled(rename = "After Expenses")]
    adjusted: String,
}

/// Computes every reported metric for an asset.
///
/// A missing Sharpe ratio is reported as a warning unless `quiet` is set.
pub fn build_report<R: Rng + ?Sized>(asset: &Asset, rng: &mut R, quiet: bool) -> AssetReport {
    let summary = asset.summary_with(rng);
    let sharpe = match asset.sharpe_breakdown_with(rng) {
        Ok(breakdown) => Some(breakdown),
        Err(e) => {
            if !quiet {
                print_warning(&format!("Sharpe ratio unavailable for {}: {e}", asset.name()));
            }
            None
        }
    };
    AssetReport {
        net_present_value: asset.net_present_value().ok(),
        sharpe,
        summary,
    }
}

/// Renders an asset's metrics in the requested format.
pub fn render<R: Rng + ?Sized>(asset: &Asset, rng: &mut R, options: GlobalOptions) -> Result<()> {
    let report = build_report(asset, rng, options.quiet);

    match options.format {
        OutputFormat::Table => {
            if !options.quiet {
                print_header(&format!("Asset: {}", asset.name()));
            }
            print_output(&metrics(&report), options.format)?;

            let schedule = schedule(asset, &report.summary);
            if !schedule.is_empty() {
                if !options.quiet {
                    print_header("Cash Flow Schedule");
                }
                print_output(&schedule, options.format)?;
            }
        }
        OutputFormat::Json => print_single(&report)?,
        OutputFormat::Csv => print_output(&metrics(&report), options.format)?,
        OutputFormat::Minimal => {
            print_output(&[Headline::new(report.headline(), 6)], options.format)?;
        }
    }

    Ok(())
}

fn metrics(report: &AssetReport) -> Vec<KeyValue> {
    let summary = &report.summary;
    let mut rows = vec![
        KeyValue::from_f64("Initial Capital", summary.initial_capital, 2),
        KeyValue::from_f64("Discount Rate", summary.discount, 4),
        KeyValue::new("Years Planned to Hold", summary.years.to_string()),
        KeyValue::new("Returns", format_series(&summary.returns)),
        KeyValue::new("Cash Flows", format_series(&summary.cash_flows)),
        KeyValue::new("Average Return", format_optional(summary.average_return, 6)),
        KeyValue::new(
            "Net Present Value",
            format_optional(report.net_present_value, 2),
        ),
        KeyValue::new("Payback Period", summary.payback_period.to_string()),
        KeyValue::new("Annual Worth", format_optional(summary.annual_worth, 2)),
    ];

    if let Some(sharpe) = &report.sharpe {
        rows.push(KeyValue::from_f64("Volatility", sharpe.volatility, 6));
        rows.push(KeyValue::from_f64("Sharpe Ratio", sharpe.ratio, 4));
    }
    rows.push(KeyValue::new(
        "Expense Band",
        format!(
            "{} - {}",
            summary.lower_expense_weight, summary.upper_expense_weight
        ),
    ));
    rows
}

fn schedule(asset: &Asset, summary: &AssetSummary) -> Vec<CashFlowRow> {
    let adjusted = summary.adjusted_cash_flows.as_deref().unwrap_or_default();
    asset
        .cash_flows()
        .iter()
        .zip(&summary.discounted_cash_flows)
        .enumerate()
        .map(|(i, (nominal, discounted))| CashFlowRow {
            period: i + 1,
            nominal: format!("{nominal:.2}"),
            discounted: format!("{discounted:.2}"),
            adjusted: format_optional(adjusted.get(i).copied(), 2),
        })
        .collect()
}
