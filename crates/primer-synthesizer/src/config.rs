//! Configuration for the Synthesizer

use serde::{Deserialize, Serialize};

/// Configuration for answer synthesis and question generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// Product named in every synthesized answer
    pub product_name: String,

    /// Number of business-type variations produced per question template
    pub variations_per_template: usize,

    /// System prompt prepended to generated conversations, if any
    pub system_prompt: Option<String>,
}

impl SynthesizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.product_name.trim().is_empty() {
            return Err("product_name must not be empty".to_string());
        }
        if self.variations_per_template == 0 {
            return Err("variations_per_template must be greater than 0".to_string());
        }
        if let Some(prompt) = &self.system_prompt {
            if prompt.trim().is_empty() {
                return Err("system_prompt must not be blank when set".to_string());
            }
        }
        Ok(())
    }

    /// Attach a system prompt to generated conversations
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
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

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            product_name: "WhatsApp Business".to_string(),
            variations_per_template: 5,
            system_prompt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SynthesizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_variations_rejected() {
        let config = SynthesizerConfig {
            variations_per_template: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_product_rejected() {
        let config = SynthesizerConfig {
            product_name: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_system_prompt_rejected() {
        let config = SynthesizerConfig::default().with_system_prompt("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SynthesizerConfig::default().with_system_prompt("You help businesses.");
        let toml_str = config.to_toml().unwrap();
        let parsed = SynthesizerConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = SynthesizerConfig::from_toml("variations_per_template = 2").unwrap();
        assert_eq!(parsed.variations_per_template, 2);
        assert_eq!(parsed.product_name, "WhatsApp Business");
    }
}
