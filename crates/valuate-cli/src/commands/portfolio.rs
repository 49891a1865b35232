//! Portfolio command implementation.
//!
//! Loads a TOML or JSON portfolio definition and reports weights, expected
//! return, dispersion and pairwise correlation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use valuate_portfolio::{
    CorrelationEntry, ExpectedReturnBreakdown, Portfolio, PortfolioDefinition, PortfolioError,
    StandardDeviationEntry,
};

use crate::cli::{GlobalOptions, OutputFormat};
use crate::commands::asset::{self, AssetReport};
use crate::commands::make_rng;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_optional, format_percent, print_header, print_output, print_single, print_warning,
    Headline, KeyValue,
};

/// Arguments for the portfolio command.
#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// Portfolio definition file (.toml or .json)
    pub file: PathBuf,

    /// Also report every asset individually
    #[arg(long)]
    pub assets: bool,

    /// Print the plain-text reports instead of formatted output
    #[arg(long)]
    pub report: bool,
}

/// Execute the portfolio command.
pub fn execute(args: PortfolioArgs, options: GlobalOptions) -> Result<()> {
    let portfolio = load(&args.file)?;
    tracing::info!(
        file = %args.file.display(),
        assets = portfolio.len(),
        "portfolio loaded"
    );
    render(&portfolio, args.assets, args.report, options)
}

/// Loads and validates a portfolio definition file.
pub fn load(path: &Path) -> CliResult<Portfolio> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml") || ext.eq_ignore_ascii_case("json"));
    if !supported {
        return Err(CliError::UnsupportedFormat(path.display().to_string()));
    }

    let definition = PortfolioDefinition::from_path(path)?;
    if definition.assets.is_empty() {
        return Err(CliError::EmptyPortfolio(path.display().to_string()));
    }
    Ok(definition.build()?)
}

/// Everything reported for a portfolio.
#[derive(Debug, Serialize)]
struct PortfolioReport {
    name: Option<String>,
    total_money_invested: f64,
    expected_return: ExpectedReturnBreakdown,
    standard_deviations: Vec<StandardDeviationEntry>,
    correlations: Option<Vec<CorrelationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assets: Option<Vec<AssetReport>>,
}

/// Per-asset row combining weight, average return and dispersion.
#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Average Return")]
    average_return: String,
    #[tabled(rename = "Std Dev")]
    standard_deviation: String,
}

/// Asset row extended with the single-asset metrics, for `--assets`.
#[derive(Debug, Serialize, Tabled)]
struct AssetDetailRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Average Return")]
    average_return: String,
    #[tabled(rename = "Std Dev")]
    standard_deviation: String,
    #[tabled(rename = "NPV")]
    net_present_value: String,
    #[tabled(rename = "Payback")]
    payback_period: String,
    #[tabled(rename = "Annual Worth")]
    annual_worth: String,
    #[tabled(rename = "Sharpe")]
    sharpe_ratio: String,
}

/// One correlation pair.
#[derive(Debug, Serialize, Tabled)]
struct CorrelationRow {
    #[tabled(rename = "First")]
    first: String,
    #[tabled(rename = "Second")]
    second: String,
    #[tabled(rename = "Correlation")]
    coefficient: String,
}

/// Renders a portfolio's statistics in the requested format.
///
/// Every format except the table writes a single document; with
/// `per_asset` the asset reports are folded into it. Minimal output
/// ignores `per_asset`.
pub fn render(
    portfolio: &Portfolio,
    per_asset: bool,
    plain_report: bool,
    options: GlobalOptions,
) -> Result<()> {
    let per_asset = per_asset && options.format != OutputFormat::Minimal;
    let mut rng = make_rng(options.seed);

    if plain_report {
        if per_asset {
            for held in portfolio {
                println!("{}", held.summary_with(&mut rng));
            }
        }
        portfolio.print_expected_return_data()?;
        portfolio.print_all_standard_deviations()?;
        if let Err(e) = portfolio.print_all_correlation_coefficients() {
            skip_correlations(e, options.quiet)?;
        }
        return Ok(());
    }

    if per_asset && options.format == OutputFormat::Table {
        for held in portfolio {
            asset::render(held, &mut rng, options)?;
        }
    }

    let assets = (per_asset && options.format != OutputFormat::Table).then(|| {
        portfolio
            .iter()
            .map(|held| asset::build_report(held, &mut rng, options.quiet))
            .collect::<Vec<_>>()
    });

    let report = PortfolioReport {
        name: portfolio.name.clone(),
        total_money_invested: portfolio.total_money_invested(),
        expected_return: portfolio.expected_return_breakdown()?,
        standard_deviations: portfolio.return_all_standard_deviations()?,
        correlations: correlations(portfolio, options.quiet)?,
        assets,
    };

    match options.format {
        OutputFormat::Table => {
            if !options.quiet {
                let title = report.name.as_deref().unwrap_or("Portfolio");
                print_header(title);
            }
            let summary = vec![
                KeyValue::from_f64("Total Invested", report.total_money_invested, 2),
                KeyValue::from_percent("Expected Return", report.expected_return.expected_return),
                KeyValue::from_f64("Sum of Weights", report.expected_return.weight_sum, 6),
            ];
            print_output(&summary, options.format)?;

            if !options.quiet {
                print_header("Assets");
            }
            print_output(&asset_rows(&report), options.format)?;

            if let Some(correlations) = &report.correlations {
                if !options.quiet {
                    print_header("Correlations");
                }
                print_output(&correlation_rows(correlations), options.format)?;
            }
        }
        OutputFormat::Json => print_single(&report)?,
        OutputFormat::Csv => match &report.assets {
            Some(details) => print_output(&asset_detail_rows(&report, details), options.format)?,
            None => print_output(&asset_rows(&report), options.format)?,
        },
        OutputFormat::Minimal => {
            let headline = Headline::new(Some(report.expected_return.expected_return), 6);
            print_output(&[headline], options.format)?;
        }
    }

    Ok(())
}

/// Correlations are skipped with a warning when the series cannot be paired.
fn correlations(portfolio: &Portfolio, quiet: bool) -> Result<Option<Vec<CorrelationEntry>>> {
    match portfolio.return_all_correlation_coefficients() {
        Ok(entries) => Ok(Some(entries)),
        Err(e) => skip_correlations(e, quiet).map(|()| None),
    }
}

/// Swallows a length mismatch with a warning; any other error is returned.
fn skip_correlations(error: PortfolioError, quiet: bool) -> Result<()> {
    if !matches!(error, PortfolioError::IncompatibleSeriesLength { .. }) {
        return Err(error.into());
    }
    tracing::warn!(error = %error, "correlations skipped");
    if !quiet {
        print_warning(&format!("Correlations unavailable: {error}"));
    }
    Ok(())
}

fn asset_rows(report: &PortfolioReport) -> Vec<AssetRow> {
    report
        .expected_return
        .weights
        .iter()
        .zip(&report.standard_deviations)
        .map(|(weight, dispersion)| AssetRow {
            asset: weight.asset.clone(),
            weight: format!("{:.6}", weight.weight),
            average_return: format_percent(weight.average_return),
            standard_deviation: format!("{:.6}", dispersion.standard_deviation),
        })
        .collect()
}

fn asset_detail_rows(report: &PortfolioReport, details: &[AssetReport]) -> Vec<AssetDetailRow> {
    asset_rows(report)
        .into_iter()
        .zip(details)
        .map(|(row, detail)| AssetDetailRow {
            asset: row.asset,
            weight: row.weight,
            average_return: row.average_return,
            standard_deviation: row.standard_deviation,
            net_present_value: format_optional(detail.net_present_value, 2),
            payback_period: detail.summary.payback_period.to_string(),
            annual_worth: format_optional(detail.summary.annual_worth, 2),
            sharpe_ratio: format_optional(detail.sharpe.as_ref().map(|s| s.ratio), 4),
        })
        .collect()
}

fn correlation_rows(entries: &[CorrelationEntry]) -> Vec<CorrelationRow> {
    entries
        .iter()
        .map(|entry| CorrelationRow {
            first: entry.first.clone(),
            second: entry.second.clone(),
            coefficient: format!("{:.6}", entry.coefficient),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_definition(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml() {
        let file = write_definition(
            ".toml",
            r#"
            [[assets]]
            name = "ABC"
            initial_capital = 2100.0
            discount = 0.17
            returns = [0.09, 0.07, 0.11]
            "#,
        );
        let portfolio = load(file.path()).unwrap();
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn test_load_rejects_extension() {
        let file = write_definition(".yaml", "assets: []");
        assert!(matches!(
            load(file.path()),
            Err(CliError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_rejects_empty() {
        let file = write_definition(".json", r#"{ "name": "Nothing" }"#);
        assert!(matches!(load(file.path()), Err(CliError::EmptyPortfolio(_))));
    }

    #[test]
    fn test_correlation_skipped_on_mismatch() {
        let file = write_definition(
            ".toml",
            r#"
            [[assets]]
            name = "A"
            initial_capital = 1.0
            discount = 0.1
            returns = [0.1, 0.2, 0.3]

            [[assets]]
            name = "B"
            initial_capital = 1.0
            discount = 0.1
            returns = [0.1, 0.2]
            "#,
        );
        let portfolio = load(file.path()).unwrap();
        assert!(correlations(&portfolio, true).unwrap().is_none());
    }
}
