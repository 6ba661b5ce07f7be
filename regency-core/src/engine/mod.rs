//! Generation engine.
//!
//! Resolves each rule of a compiled sequence, in order, and concatenates the
//! results. Randomness comes from an explicit `RandomSource` so runs can be
//! seeded and concurrent generations never share state implicitly.

/// High-level generator and the `generate` entry point.
pub mod generator;

/// Range expression expansion into candidate characters.
pub mod range;

/// Seedable random source with unbiased bounded draws.
pub mod random;
