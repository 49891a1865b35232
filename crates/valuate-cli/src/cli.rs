//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AssetArgs, DemoArgs, PortfolioArgs};

/// Valuate - Investment valuation and portfolio statistics CLI
#[derive(Parser)]
#[command(name = "valuate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed for the expense-weight draw (random when omitted)
    #[arg(long, global = true, env = "VALUATE_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Value a single asset (DCF, NPV, payback, annual worth, Sharpe)
    Asset(AssetArgs),

    /// Load a portfolio definition and report its statistics
    Portfolio(PortfolioArgs),

    /// Run the built-in two-stock demonstration
    Demo(DemoArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}

/// Settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Skip headers and warnings.
    pub quiet: bool,
    /// RNG seed for expense draws.
    pub seed: Option<u64>,
}

impl Cli {
    /// Extracts the options every command needs.
    pub fn options(&self) -> GlobalOptions {
        GlobalOptions {
            format: self.format,
            quiet: self.quiet,
            seed: self.seed,
        }
    }
}
