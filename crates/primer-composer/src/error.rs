//! Error types for corpus composition

use thiserror::Error;

/// Errors that can occur while composing a corpus
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComposerError {
    /// Invalid sources, ratios, target size or padding policy
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generator source failed to produce examples
    #[error("Source '{name}' failed: {message}")]
    Source {
        /// Source name
        name: String,
        /// Generator error
        message: String,
    },

    /// Supply fell short and the padding policy forbids filling the gap
    #[error("Shortfall: {available} examples available, {requested} requested")]
    Shortfall {
        /// Target size
        requested: usize,
        /// Examples drawn from all sources
        available: usize,
    },
}
