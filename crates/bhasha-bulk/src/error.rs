//! Error types for bulk and single-URL checking

use thiserror::Error;

/// Errors that abort a bulk check before any URL is processed
///
/// Per-URL failures never surface here; they become `FetchError` entries in
/// the result list. Single-URL checks have no result list to fold failures
/// into, so their fetch and correction errors propagate directly.
#[derive(Error, Debug)]
pub enum BulkError {
    /// The requested check language is not a valid correction target
    #[error("Unsupported language for bulk checking: {0}")]
    UnsupportedLanguage(String),

    /// The article is confidently in a different language than requested
    #[error("The article appears to be in {detected}. You selected {expected}. Please select the correct language.")]
    LanguageMismatch {
        /// Display name of the language the article was detected as
        detected: String,
        /// Display name of the language the caller selected
        expected: String,
    },

    /// Fetching or extracting the URL's content failed
    #[error(transparent)]
    Extract(#[from] bhasha_extract::ExtractError),

    /// A correction or detection call failed
    #[error(transparent)]
    Correct(#[from] bhasha_correct::CorrectError),
}
