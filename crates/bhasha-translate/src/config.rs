//! Configuration for the chunked translator

use serde::{Deserialize, Serialize};

/// Configuration for the chunked translator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Chunk size ceiling in characters; chunks are packed greedily up to
    /// this limit, but a single longer paragraph still becomes one chunk
    pub max_chunk_chars: usize,

    /// Sampling temperature for translation calls
    pub temperature: f32,
}

impl TranslateConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_chars == 0 {
            return Err("max_chunk_chars must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err("temperature must be within [0.0, 1.0]".to_string());
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

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: 2_500,
            temperature: 0.2,
        }
    }
}
