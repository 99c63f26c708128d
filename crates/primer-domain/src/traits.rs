//! Trait definitions for example producers
//!
//! The composer treats anything that can produce tagged examples on demand
//! as a source. Implementations live in other crates.

use crate::example::TaggedExample;

/// Produces training examples on demand
///
/// Implemented by the synthesizer layer (question generator, curated sets)
pub trait ExampleGenerator {
    /// Source name used in ratios and statistics
    fn name(&self) -> &str;

    /// Number of distinct examples the generator yields before it starts
    /// cycling; `0` when unbounded
    fn natural_size(&self) -> usize;

    /// Produce exactly `count` examples, deterministically for a given seed
    fn generate(&self, count: usize, seed: u64) -> Result<Vec<TaggedExample>, String>;
}
