//! # Valuate Core
//!
//! Single-asset valuation for the Valuate investment analytics library.
//!
//! An [`Asset`] models one investment either as a series of periodic
//! returns, as a series of nominal cash flows, or both. From that data it
//! derives:
//!
//! - **Percent returns**: period-over-period change of the cash flows
//! - **Discounted cash flows** and **net present value**
//! - **Expense-adjusted cash flows**: DCFs scaled by a random expense ratio
//! - **Sharpe ratio**, **payback period**, **annual worth**, **average return**
//!
//! ## Design Philosophy
//!
//! - **Validated construction**: [`AssetBuilder`] enforces every cross-field
//!   invariant once; the resulting [`Asset`] is immutable
//! - **Pure metrics**: no metric prints; presentation lives in [`AssetSummary`]
//! - **Injectable randomness**: every randomized metric has a `*_with` variant
//!   taking any [`rand::Rng`]
//!
//! ## Example
//!
//! ```rust
//! use valuate_core::prelude::*;
//!
//! let asset = Asset::builder("Rental")
//!     .initial_capital(1000.0)
//!     .discount(0.1)
//!     .cash_flows(vec![300.0; 5])
//!     .expense_weights(0.0, 0.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(asset.years(), 5);
//! assert_eq!(asset.payback_period(), PaybackPeriod::Recovered(5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]

pub mod asset;
pub mod error;
pub mod summary;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::asset::{Asset, AssetBuilder, AssetDefinition};
    pub use crate::error::{AssetError, AssetResult};
    pub use crate::summary::AssetSummary;
    pub use crate::types::{percent_changes, PaybackPeriod, PercentReturn, SharpeBreakdown};
}

// Re-export commonly used types at crate root
pub use asset::{Asset, AssetBuilder, AssetDefinition};
pub use error::{AssetError, AssetResult};
pub use summary::AssetSummary;
pub use types::{PaybackPeriod, PercentReturn, SharpeBreakdown};
