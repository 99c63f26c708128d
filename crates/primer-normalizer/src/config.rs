//! Normalizer configuration

use crate::citation::CitationStyle;
use crate::prompt::SystemPromptPolicy;
use serde::{Deserialize, Serialize};

/// What to do with a record that fails validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Abort on the first invalid record
    #[default]
    Strict,
    /// Skip invalid records and count them
    Lenient,
}

/// Configuration for record normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Drop every top-level field except `messages`
    pub strip_metadata: bool,

    /// Attach help-center references to assistant messages
    pub attach_resources: bool,

    /// How references are attached
    pub citation_style: CitationStyle,

    /// Only attach references when the assistant content mentions this phrase
    /// (case-insensitive)
    pub attach_only_when: Option<String>,

    /// Invalid record handling
    pub mode: ValidationMode,

    /// Leading system message handling
    pub system_prompt: SystemPromptPolicy,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            strip_metadata: true,
            attach_resources: false,
            citation_style: CitationStyle::MetadataUrls,
            attach_only_when: None,
            mode: ValidationMode::Strict,
            system_prompt: SystemPromptPolicy::Keep,
        }
    }
}

impl NormalizeConfig {
    /// Strict preset: abort on the first bad record (same as default)
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient preset: skip and count bad records
    pub fn lenient() -> Self {
        Self {
            mode: ValidationMode::Lenient,
            ..Self::default()
        }
    }

    /// Enable citations in the given style
    pub fn with_citations(mut self, style: CitationStyle) -> Self {
        self.attach_resources = true;
        self.citation_style = style;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(phrase) = &self.attach_only_when {
            if phrase.trim().is_empty() {
                return Err("attach_only_when must not be blank when set".to_string());
            }
            if !self.attach_resources {
                return Err("attach_only_when requires attach_resources".to_string());
            }
        }
        self.system_prompt.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
