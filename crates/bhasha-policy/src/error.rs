//! Error types for policy and fact checking

use bhasha_llm::LlmError;
use thiserror::Error;

/// Errors that can occur during policy and fact checks
#[derive(Error, Debug)]
pub enum PolicyError {
    /// Input was below the minimum length for a meaningful check
    #[error("Input is too short to check (minimum {min} characters)")]
    InputTooShort {
        /// The configured minimum
        min: usize,
    },

    /// The supplied image was not a valid data URI
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// The model returned neither findings nor an all-clear
    #[error("The model returned no usable assessment")]
    EmptyAssessment,

    /// A news search request failed
    #[error("News search failed: {0}")]
    Search(String),

    /// Translating the statement for searching failed
    #[error("Translation failed: {0}")]
    Translation(String),

    /// No search API key configured
    #[error("Missing news search API credentials")]
    MissingCredentials,

    /// A completion call failed
    #[error("Completion error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<LlmError> for PolicyError {
    fn from(err: LlmError) -> Self {
        PolicyError::Llm(err.to_string())
    }
}
