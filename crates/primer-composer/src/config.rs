//! Configuration for corpus composition
//!
//! Controls the random seed and how a supply shortfall is handled.

use serde::{Deserialize, Serialize};

/// Default ceiling on padded duplicates, as a fraction of the target size
pub const DEFAULT_MAX_DUPLICATE_FRACTION: f64 = 0.25;

/// What to do when the sources cannot supply the target size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingPolicy {
    /// Resample with replacement from the shuffled pool, up to
    /// [`ComposerConfig::max_duplicate_fraction`] of the target size
    #[default]
    WithReplacement,
    /// Never pad; the corpus may end up smaller than requested
    Disabled,
    /// Fail the composition instead of padding
    FailOnShortfall,
}

/// Configuration for the Composer
///
/// # Examples
///
/// ```
/// use primer_composer::{ComposerConfig, PaddingPolicy};
///
/// let config = ComposerConfig::reproducible(42);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.max_padding(100), 25);
///
/// let config = ComposerConfig::strict();
/// assert_eq!(config.padding, PaddingPolicy::FailOnShortfall);
/// assert_eq!(config.max_padding(100), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Seed for sampling, shuffling and padding; drawn from entropy when absent
    pub seed: Option<u64>,

    /// Shortfall handling
    pub padding: PaddingPolicy,

    /// Ceiling on padded duplicates relative to the target size, in [0, 1]
    pub max_duplicate_fraction: f64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            padding: PaddingPolicy::WithReplacement,
            max_duplicate_fraction: DEFAULT_MAX_DUPLICATE_FRACTION,
        }
    }
}

impl ComposerConfig {
    /// Fixed-seed configuration
    pub fn reproducible(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Fail rather than pad
    pub fn strict() -> Self {
        Self {
            padding: PaddingPolicy::FailOnShortfall,
            ..Self::default()
        }
    }

    /// Most duplicates padding may add for a target size
    pub fn max_padding(&self, target_size: usize) -> usize {
        match self.padding {
            PaddingPolicy::WithReplacement => {
                (self.max_duplicate_fraction * target_size as f64).floor() as usize
            }
            PaddingPolicy::Disabled | PaddingPolicy::FailOnShortfall => 0,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.max_duplicate_fraction) {
            return Err(format!(
                "max_duplicate_fraction must be within [0, 1], got {}",
                self.max_duplicate_fraction
            ));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ComposerConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.padding, PaddingPolicy::WithReplacement);
        assert_eq!(config.max_duplicate_fraction, 0.25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fraction_bounds() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let config = ComposerConfig {
                max_duplicate_fraction: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_max_padding() {
        let config = ComposerConfig::default();
        assert_eq!(config.max_padding(100), 25);
        assert_eq!(config.max_padding(3), 0);

        let disabled = ComposerConfig {
            padding: PaddingPolicy::Disabled,
            ..Default::default()
        };
        assert_eq!(disabled.max_padding(100), 0);
        assert_eq!(ComposerConfig::strict().max_padding(100), 0);
    }

    #[test]
    fn test_toml_round_trip() {
        for config in [
            ComposerConfig::default(),
            ComposerConfig::reproducible(7),
            ComposerConfig::strict(),
        ] {
            let toml_str = config.to_toml().unwrap();
            let parsed = ComposerConfig::from_toml(&toml_str).unwrap();
            assert_eq!(config, parsed);
        }
    }

    #[test]
    fn test_toml_partial() {
        let parsed = ComposerConfig::from_toml("seed = 3\npadding = \"disabled\"").unwrap();
        assert_eq!(parsed.seed, Some(3));
        assert_eq!(parsed.padding, PaddingPolicy::Disabled);
        assert_eq!(parsed.max_duplicate_fraction, DEFAULT_MAX_DUPLICATE_FRACTION);
    }
}
