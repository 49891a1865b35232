//! # Valuate Math
//!
//! Numeric primitives for the Valuate investment analytics library.
//!
//! This crate provides:
//!
//! - **Statistics**: Arithmetic mean, population standard deviation,
//!   Pearson correlation and dot products over return series
//! - **Sampling**: Closed-interval uniform draws from any [`rand::Rng`]
//!
//! ## Design Philosophy
//!
//! - **Population statistics**: Dispersion uses denominator `N`, never `N - 1`
//! - **Explicit shape checks**: Paired series must have equal length
//! - **Degenerate values propagate**: Zero dispersion yields a non-finite
//!   ratio instead of an error, so callers decide how to surface it

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod sampling;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::sampling::sample_uniform;
    pub use crate::statistics::{dot, mean, pearson_correlation, population_std_dev};
}

pub use error::{MathError, MathResult};
