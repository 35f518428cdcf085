//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Lowest accepted sampling temperature
pub const MIN_TEMPERATURE: f64 = 0.0;

/// Highest accepted sampling temperature
pub const MAX_TEMPERATURE: f64 = 1.0;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Temperature used when the caller does not choose one
    pub default_temperature: f64,

    /// Generation length used when the caller does not choose one
    pub default_max_tokens: u32,

    /// Maximum opinion length embedded in a prompt (characters)
    pub max_text_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.default_temperature) {
            return Err(format!(
                "default_temperature must be within {}..={}",
                MIN_TEMPERATURE, MAX_TEMPERATURE
            ));
        }
        if self.default_max_tokens == 0 {
            return Err("default_max_tokens must be greater than 0".to_string());
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            default_temperature: 0.3,
            default_max_tokens: 1500,
            max_text_length: 400_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_temperature() {
        let config = ExtractorConfig {
            default_temperature: 1.5,
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_max_tokens() {
        let config = ExtractorConfig {
            default_max_tokens: 0,
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml("default_max_tokens = 900").unwrap();
        assert_eq!(parsed.default_max_tokens, 900);
        assert_eq!(parsed.default_temperature, 0.3);
    }
}
