//! Error types for the Synthesizer

use thiserror::Error;

/// Errors that can occur during synthesis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesizerError {
    /// A template failed registration checks
    #[error("Invalid template for family '{family}': {reason}")]
    InvalidTemplate {
        /// Template family being registered
        family: String,
        /// Which check failed
        reason: String,
    },

    /// No template is registered for the requested family
    #[error("No template registered for family '{0}'")]
    MissingTemplate(String),

    /// Synthesized conversation was rejected by the domain model
    #[error("Invalid example: {0}")]
    InvalidExample(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
