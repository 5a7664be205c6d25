//! Short-code generation for the Zipline URL shortener.
//!
//! This crate provides the generator seam and the production base-66
//! generator, which encodes a randomly drawn seed with the alphabet
//! defined in `zipline-core`.

pub mod base66;
pub mod seed;

pub use base66::Base66Generator;
pub use seed::{FixedSeeds, SeedSource, ThreadRngSeeds};

use zipline_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
///
/// Implementations can vary from simple random generators to
/// distributed ID generators (e.g., Snowflake, UUID, etc.)
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;
    /// Generates a type that can be converted into a short code.
    fn generate(&self) -> Self::Output;
}
