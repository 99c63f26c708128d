//! Primer Synthesizer
//!
//! Produces question/answer examples for the corpus.
//!
//! # Overview
//!
//! Every business question category maps onto a template family. A family's
//! template holds a goal phrase, a pool of feature steps and a closing bonus
//! clause; an answer is six steps drawn from the pool in random order.
//!
//! # Architecture
//!
//! ```text
//! Question bank ─┐
//!                ├─→ QuestionGenerator ─→ TaggedExample ─→ Composer
//! Templates ─→ Synthesizer ─┘
//! Curated sets ─→ CuratedSource ─────────→ TaggedExample ─→ Composer
//! ```
//!
//! # Example Usage
//!
//! ```
//! use primer_domain::ExampleGenerator;
//! use primer_synthesizer::{QuestionGenerator, SynthesizerConfig};
//!
//! let generator = QuestionGenerator::new(&SynthesizerConfig::default()).unwrap();
//! let examples = generator.generate(23, 42).unwrap();
//! assert_eq!(examples.len(), 23);
//! ```

#![warn(missing_docs)]

mod config;
mod curated;
mod error;
mod generator;
pub mod questions;
mod synthesizer;
mod template;


pub use config::SynthesizerConfig;
pub use curated::{CuratedSet, CuratedSource};
pub use error::SynthesizerError;
pub use generator::{QuestionGenerator, QUESTION_SOURCE_NAME};
pub use synthesizer::Synthesizer;
pub use template::{ResponseTemplate, TemplateRegistry, STEPS_PER_ANSWER};
