//! Primer Normalizer
//!
//! Converts raw or generated records into the strict output schema before
//! they are persisted.
//!
//! The Normalizer provides:
//! - Record validation with 1-based line numbers
//! - Metadata stripping (only `messages` survives by default)
//! - Help-center citations as message fields or an inline block
//! - System prompt policies
//! - Streaming JSONL normalization with a run report
//! - Help-center article conversion
//!
//! # Examples
//!
//! ```
//! use primer_normalizer::{NormalizeConfig, Normalizer};
//! use std::io::Cursor;
//!
//! let input = r#"{"messages":[{"role":"user","content":"Hi"},{"role":"assistant","content":"Hello!"}],"metadata":{"category":"general"}}"#;
//! let normalizer = Normalizer::new(NormalizeConfig::default()).unwrap();
//! let mut output = Vec::new();
//! let report = normalizer.normalize_stream(Cursor::new(input), &mut output).unwrap();
//! assert_eq!(report.written, 1);
//! assert_eq!(report.metadata_stripped, 1);
//! ```

#![warn(missing_docs)]

mod article;
mod citation;
mod config;
mod error;
mod normalizer;
mod prompt;
mod report;
mod stream;
mod validator;

pub use article::{convert_articles, parse_articles, Article};
pub use citation::{append_block, has_block, render_block, strip_block, CitationStyle, CITATION_MARKER};
pub use config::{NormalizeConfig, ValidationMode};
pub use error::NormalizeError;
pub use normalizer::{Normalized, NormalizedMessage, NormalizedRecord, Normalizer};
pub use prompt::{SystemPromptPolicy, ARTICLE_SYSTEM_PROMPT, ASSISTANT_SYSTEM_PROMPT};
pub use report::NormalizeReport;
pub use validator::{parse_record, validate_value, ParsedRecord, RejectionReason};
