//! Portfolio-level analytics.
//!
//! This module provides aggregated analytics for portfolios, including:
//! - Pairwise correlation of asset returns
//! - Per-asset standard deviation of returns
//! - Capital weights and expected return
//!
//! All functions are pure - they take assets and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

pub mod correlation;
pub mod expected_return;
mod parallel;
pub mod standard_deviation;

pub use correlation::{all_correlations, CorrelationEntry};
pub use expected_return::{AssetWeight, ExpectedReturnBreakdown};
pub use parallel::maybe_parallel_map;
pub use standard_deviation::{all_standard_deviations, StandardDeviationEntry};
