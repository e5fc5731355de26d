//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Completion service error
    #[error("Completion error: {0}")]
    Llm(#[from] bhasha_llm::LlmError),

    /// Correction error
    #[error(transparent)]
    Correct(#[from] bhasha_correct::CorrectError),

    /// Translation error
    #[error(transparent)]
    Translate(#[from] bhasha_translate::TranslateError),

    /// Extraction error
    #[error(transparent)]
    Extract(#[from] bhasha_extract::ExtractError),

    /// Bulk check error
    #[error(transparent)]
    Bulk(#[from] bhasha_bulk::BulkError),

    /// Policy or fact-check error
    #[error(transparent)]
    Policy(#[from] bhasha_policy::PolicyError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
