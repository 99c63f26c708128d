//! Primer Composer
//!
//! Assembles a training corpus from several named sources at target ratios.
//!
//! # Overview
//!
//! Composition runs in four steps:
//! - **Apportion**: ratios are normalized and the target size is split into
//!   integer quotas by largest remainder
//! - **Draw**: pre-built sources are sampled without replacement, generator
//!   sources produce exactly their quota from a derived seed
//! - **Shuffle**: one Fisher–Yates pass over the concatenation
//! - **Pad**: any gap left by undersupplied sources is filled by resampling
//!   with replacement from the shuffled pool, within the [`PaddingPolicy`]
//!
//! Shortfalls are warnings unless the policy is
//! [`PaddingPolicy::FailOnShortfall`]. Every run returns
//! [`CompositionStats`] next to the corpus, and the same seed always
//! reproduces the same corpus.
//!
//! # Usage
//!
//! ```
//! use primer_composer::{Composer, ComposerConfig, Source};
//! use primer_domain::{TaggedExample, TrainingExample};
//! use std::collections::BTreeMap;
//!
//! let example = TaggedExample::new(TrainingExample::pair("Hi", "Hello!").unwrap(), "general");
//! let sources = vec![Source::examples("curated", vec![example; 4])];
//!
//! let composer = Composer::new(ComposerConfig::reproducible(42)).unwrap();
//! let composition = composer.compose(sources, &BTreeMap::new(), None).unwrap();
//! assert_eq!(composition.corpus.len(), 4);
//! println!("{}", composition.stats.summary());
//! ```

#![warn(missing_docs)]

mod composer;
mod config;
mod error;
mod source;
mod stats;

pub use composer::{Composer, Composition};
pub use config::{ComposerConfig, PaddingPolicy, DEFAULT_MAX_DUPLICATE_FRACTION};
pub use error::ComposerError;
pub use source::Source;
pub use stats::{CompositionStats, SourceStats};
