//! Asset representation and construction.
//!
//! This module provides the [`Asset`] value object, the validating
//! [`AssetBuilder`], and the serde-friendly [`AssetDefinition`] used to load
//! assets from configuration files.

#[allow(clippy::module_inception)]
mod asset;
mod builder;
mod definition;

pub use asset::Asset;
pub use builder::AssetBuilder;
pub use definition::AssetDefinition;
