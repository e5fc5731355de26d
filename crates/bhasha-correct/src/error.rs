//! Error types for the correction engine

use thiserror::Error;

/// Errors surfaced by the correction engine
///
/// Correction itself fails soft and never returns these; they come from the
/// operations where no fallback is meaningful (detection, summarization,
/// unsupported language targets).
#[derive(Error, Debug)]
pub enum CorrectError {
    /// The requested language cannot be corrected (e.g. `other`)
    #[error("Language '{0}' is not a valid correction target")]
    UnsupportedLanguage(String),

    /// Input is below the documented minimum for this operation
    #[error("Input too short: at least {min} characters required")]
    InputTooShort {
        /// The minimum character count for the operation
        min: usize,
    },

    /// Completion service error with no meaningful fallback
    #[error("Completion error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bhasha_llm::LlmError> for CorrectError {
    fn from(e: bhasha_llm::LlmError) -> Self {
        CorrectError::Llm(e.to_string())
    }
}
