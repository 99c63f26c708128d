//! Primer Domain Layer
//!
//! Core model for building an instruction-tuning corpus for a WhatsApp
//! Business assistant. Depends only on `serde` for persisting examples as
//! JSONL and defines the concepts every other crate builds on.
//!
//! ## Key Concepts
//!
//! - **TrainingExample**: an ordered conversation of system/user/assistant turns
//! - **Topic**: the closed set of product subjects an answer can be about
//! - **TopicClassifier**: ordered keyword rules mapping text to a topic
//! - **ResourceResolver**: help-center references per topic
//! - **QuestionCategory**: business question categories and their template families
//! - **Corpus**: the composed, category-tallied set of examples
//!
//! ## Architecture
//!
//! - Pure logic, no I/O
//! - Validation returns `Result<_, String>`; callers wrap it in their own errors
//! - `ExampleGenerator` is the seam between synthesis and composition

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod classifier;
pub mod corpus;
pub mod example;
pub mod message;
pub mod resource;
pub mod topic;
pub mod traits;

// Re-exports for convenience
pub use category::{QuestionCategory, TemplateFamily};
pub use classifier::TopicClassifier;
pub use corpus::Corpus;
pub use example::{check_turn_order, TaggedExample, TrainingExample};
pub use message::{Message, Role};
pub use resource::{default_resource_sets, ResourceResolver, ResourceSet};
pub use topic::{default_rules, Topic, TopicRule};
pub use traits::ExampleGenerator;
