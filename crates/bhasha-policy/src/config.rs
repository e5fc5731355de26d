//! Configuration for policy and fact checking

use serde::{Deserialize, Serialize};

/// Configuration for the policy checker and fact checker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Minimum characters before a text policy check is attempted
    pub policy_min_chars: usize,

    /// Minimum characters before a statement is sent for fact checking;
    /// shorter statements come back unverifiable without any calls
    pub fact_min_chars: usize,

    /// Maximum news articles passed to the fact-check prompt
    pub max_articles: usize,

    /// Sampling temperature for text policy assessment
    pub policy_temperature: f32,

    /// Sampling temperature for image policy assessment
    pub image_temperature: f32,

    /// Sampling temperature for the fact-check verdict
    pub fact_temperature: f32,
}

impl PolicyConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.policy_min_chars == 0 {
            return Err("policy_min_chars must be greater than 0".to_string());
        }
        if self.fact_min_chars == 0 {
            return Err("fact_min_chars must be greater than 0".to_string());
        }
        if self.max_articles == 0 {
            return Err("max_articles must be greater than 0".to_string());
        }
        for (name, value) in [
            ("policy_temperature", self.policy_temperature),
            ("image_temperature", self.image_temperature),
            ("fact_temperature", self.fact_temperature),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within [0.0, 1.0]", name));
            }
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            policy_min_chars: 20,
            fact_min_chars: 5,
            max_articles: 5,
            policy_temperature: 0.2,
            image_temperature: 0.1,
            fact_temperature: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PolicyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_max_articles_rejected() {
        let mut config = PolicyConfig::default();
        config.max_articles = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PolicyConfig::default();
        let parsed = PolicyConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.max_articles, config.max_articles);
        assert_eq!(parsed.policy_min_chars, config.policy_min_chars);
    }
}
