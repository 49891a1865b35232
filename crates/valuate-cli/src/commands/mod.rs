//! CLI command implementations.

pub mod asset;
pub mod demo;
pub mod portfolio;

// Re-export submodules for convenience
pub use asset::AssetArgs;
pub use demo::DemoArgs;
pub use portfolio::PortfolioArgs;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded RNG when a seed is given, otherwise one seeded from entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded expense draws");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
