//! Text reports over portfolio analytics.
//!
//! The analytics types implement [`Display`](fmt::Display) with the report
//! line format; the `write_*` methods on [`Portfolio`] render whole reports
//! to any [`io::Write`], and the `print_*` variants target stdout.

use crate::analytics::{CorrelationEntry, ExpectedReturnBreakdown, StandardDeviationEntry};
use crate::{Portfolio, PortfolioResult};
use std::fmt;
use std::io::{self, Write};

impl fmt::Display for CorrelationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Correlation between {} and {}: {}",
            self.first, self.second, self.coefficient
        )
    }
}

impl fmt::Display for StandardDeviationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Standard deviation for {}: {}",
            self.asset, self.standard_deviation
        )
    }
}

impl fmt::Display for ExpectedReturnBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "*".repeat(40);
        writeln!(f, "{rule}")?;
        writeln!(f, "Expected Return: {}%", self.expected_return * 100.0)?;
        writeln!(f, "Sum of weights: {}", self.weight_sum)?;
        write!(f, "{rule}")?;
        for entry in &self.weights {
            writeln!(f)?;
            writeln!(f, "{}:", entry.asset)?;
            writeln!(f, "Weight: {}", entry.weight)?;
            writeln!(f, "Average Return: {:.4}%", entry.average_return * 100.0)?;
            write!(f, "{}", "*".repeat(26))?;
        }
        Ok(())
    }
}

impl Portfolio {
    /// Writes one correlation line per asset pair.
    pub fn write_all_correlation_coefficients<W: Write>(&self, out: &mut W) -> PortfolioResult<()> {
        for entry in self.return_all_correlation_coefficients()? {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }

    /// Prints one correlation line per asset pair to stdout.
    pub fn print_all_correlation_coefficients(&self) -> PortfolioResult<()> {
        self.write_all_correlation_coefficients(&mut io::stdout().lock())
    }

    /// Writes one standard deviation line per asset.
    pub fn write_all_standard_deviations<W: Write>(&self, out: &mut W) -> PortfolioResult<()> {
        for entry in self.return_all_standard_deviations()? {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }

    /// Prints one standard deviation line per asset to stdout.
    pub fn print_all_standard_deviations(&self) -> PortfolioResult<()> {
        self.write_all_standard_deviations(&mut io::stdout().lock())
    }

    /// Writes the expected return report.
    ///
    /// The figures are recomputed on every call.
    pub fn write_expected_return_data<W: Write>(&self, out: &mut W) -> PortfolioResult<()> {
        writeln!(out, "{}", self.expected_return_breakdown()?)?;
        Ok(())
    }

    /// Prints the expected return report to stdout.
    pub fn print_expected_return_data(&self) -> PortfolioResult<()> {
        self.write_expected_return_data(&mut io::stdout().lock())
    }
}
