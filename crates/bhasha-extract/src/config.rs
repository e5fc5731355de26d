//! Configuration for content extraction

use serde::{Deserialize, Serialize};

/// Configuration for the content extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Minimum extracted characters below which a page is treated as
    /// unparseable rather than returned as a near-empty article
    pub min_content_chars: usize,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Sampling temperature for image text extraction
    pub ocr_temperature: f32,
}

impl ExtractConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_content_chars == 0 {
            return Err("min_content_chars must be greater than 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.ocr_temperature) {
            return Err("ocr_temperature must be within [0.0, 1.0]".to_string());
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

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_content_chars: 100,
            timeout_secs: 30,
            ocr_temperature: 0.1,
        }
    }
}
