//! Normalizer error types

use crate::validator::RejectionReason;
use thiserror::Error;

/// Errors that can occur during normalization
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// A record failed validation
    #[error("Validation error on line {line}: {reason}")]
    Validation {
        /// 1-based input line (or array position for articles)
        line: usize,
        /// What was wrong with the record
        reason: RejectionReason,
    },

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NormalizeError {
    /// Line number of a validation failure
    pub fn line(&self) -> Option<usize> {
        match self {
            NormalizeError::Validation { line, .. } => Some(*line),
            _ => None,
        }
    }
}
