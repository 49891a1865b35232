//! Valuate CLI - Command-line interface for investment valuation.
//!
//! # Usage
//!
//! ```bash
//! # Value a rental property from its cash flows
//! valuate asset --name Rental --capital 1000 --discount 0.1 \
//!     --cash-flows 300,300,300,300,300 --lower-expense 0.1 --upper-expense 0.3
//!
//! # Value a stock from known returns, as JSON
//! valuate asset --name ABC --capital 2100 --discount 0.17 --returns 0.09,0.07,0.11 -f json
//!
//! # Report on a portfolio definition
//! valuate portfolio holdings.toml
//!
//! # Run the built-in demonstration with a fixed seed
//! valuate demo --seed 7
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let options = cli.options();

    match cli.command {
        Commands::Asset(args) => commands::asset::execute(args, options)?,
        Commands::Portfolio(args) => commands::portfolio::execute(args, options)?,
        Commands::Demo(args) => commands::demo::execute(args, options)?,
    }

    Ok(())
}

/// Logs go to stderr so report output on stdout stays clean.
fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "valuate=debug"
    } else if quiet {
        "valuate=error"
    } else {
        "valuate=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
