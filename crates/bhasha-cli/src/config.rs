//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use bhasha_correct::CorrectConfig;
use bhasha_extract::ExtractConfig;
use bhasha_policy::PolicyConfig;
use bhasha_translate::TranslateConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API credentials and model selection
    #[serde(default)]
    pub api: ApiConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Correction engine settings
    #[serde(default)]
    pub correct: CorrectConfig,

    /// Translator settings
    #[serde(default)]
    pub translate: TranslateConfig,

    /// Content extractor settings
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Policy and fact-check settings
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// API credentials. Environment variables override the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Completion service API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,

    /// News search API key (needed only for fact checking)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serpapi_api_key: Option<String>,

    /// Model identifier; the built-in default is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".bhasha").join("config.toml"))
    }

    /// Load configuration from the default path or fall back to defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Validate every engine section.
    pub fn validate(&self) -> Result<()> {
        self.correct.validate().map_err(CliError::Config)?;
        self.translate.validate().map_err(CliError::Config)?;
        self.extract.validate().map_err(CliError::Config)?;
        self.policy.validate().map_err(CliError::Config)?;
        Ok(())
    }

    /// Resolve the completion API key: environment first, then the file.
    pub fn gemini_key(&self) -> Result<String> {
        resolve_key("GEMINI_API_KEY", self.api.gemini_api_key.as_deref()).ok_or_else(|| {
            CliError::Config(
                "No completion API key. Set GEMINI_API_KEY or add gemini_api_key to the [api] \
                 section of the config file."
                    .into(),
            )
        })
    }

    /// Resolve the news search API key, if any.
    pub fn serpapi_key(&self) -> Option<String> {
        resolve_key("SERPAPI_API_KEY", self.api.serpapi_api_key.as_deref())
    }
}

fn resolve_key(env_var: &str, file_value: Option<&str>) -> Option<String> {
    std::env::var(env_var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            file_value
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.to_string())
        })
}
