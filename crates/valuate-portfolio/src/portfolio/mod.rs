//! Portfolio representation and construction.
//!
//! This module provides the core [`Portfolio`] type, [`PortfolioBuilder`]
//! for fluent construction, and [`PortfolioDefinition`] for loading
//! portfolios from TOML or JSON.

mod builder;
mod definition;
#[allow(clippy::module_inception)]
mod portfolio;

pub use builder::PortfolioBuilder;
pub use definition::PortfolioDefinition;
pub use portfolio::Portfolio;
