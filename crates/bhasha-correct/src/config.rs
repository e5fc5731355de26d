//! Configuration for the correction engine

use serde::{Deserialize, Serialize};

/// Configuration for the correction engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectConfig {
    /// Minimum characters before language detection is attempted; shorter
    /// input is classified `other` without a completion call
    pub detection_min_chars: usize,

    /// Minimum characters accepted for summarization
    pub summary_min_chars: usize,

    /// Sampling temperature for summarization (correction and detection
    /// always run near zero)
    pub summary_temperature: f32,
}

impl CorrectConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.detection_min_chars == 0 {
            return Err("detection_min_chars must be greater than 0".to_string());
        }
        if self.summary_min_chars == 0 {
            return Err("summary_min_chars must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.summary_temperature) {
            return Err("summary_temperature must be within [0.0, 1.0]".to_string());
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

impl Default for CorrectConfig {
    fn default() -> Self {
        Self {
            detection_min_chars: 50,
            summary_min_chars: 50,
            summary_temperature: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CorrectConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_detection_min_rejected() {
        let mut config = CorrectConfig::default();
        config.detection_min_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let mut config = CorrectConfig::default();
        config.summary_temperature = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CorrectConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = CorrectConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed.detection_min_chars, config.detection_min_chars);
        assert_eq!(parsed.summary_min_chars, config.summary_min_chars);
    }
}
