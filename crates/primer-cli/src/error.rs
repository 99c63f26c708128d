//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Synthesizer error
    #[error("Synthesizer error: {0}")]
    Synthesizer(#[from] primer_synthesizer::SynthesizerError),

    /// Normalizer error
    #[error("Normalizer error: {0}")]
    Normalize(#[from] primer_normalizer::NormalizeError),

    /// Composer error
    #[error("Composer error: {0}")]
    Composer(#[from] primer_composer::ComposerError),

    /// An example source failed to produce examples
    #[error("Generation error: {0}")]
    Generation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
