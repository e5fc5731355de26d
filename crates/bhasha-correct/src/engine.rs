//! Core correction engine implementation

use crate::config::CorrectConfig;
use crate::error::CorrectError;
use crate::prompt;
use crate::shapes::{CorrectionResponse, DetectionResponse, SpellingResponse, SummaryResponse};
use bhasha_domain::{
    CorrectionOutcome, CorrectionResult, LanguageCode, SpellingError,
};
use bhasha_llm::{complete_json, CompletionClient, CompletionRequest};
use std::sync::Arc;
use tracing::{debug, warn};

/// Temperature for language detection calls
const DETECTION_TEMPERATURE: f32 = 0.1;

/// Outcome of a language-detection call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDetection {
    /// The detected primary language, `Other` when uncertain
    pub language: LanguageCode,
    /// Whether the model was reasonably confident
    pub confident: bool,
}

/// Stateless per-language correction engine
///
/// Holds an injected completion client; every call is independent.
pub struct CorrectionEngine<C: CompletionClient> {
    client: Arc<C>,
    config: CorrectConfig,
}

impl<C: CompletionClient> CorrectionEngine<C> {
    /// Create a new engine over the given completion client
    pub fn new(client: Arc<C>, config: CorrectConfig) -> Self {
        Self { client, config }
    }

    /// Correct spelling and grammar in `text`
    ///
    /// Empty or whitespace-only input returns unchanged without a
    /// completion call. Transport failures and malformed model output fail
    /// soft to the original text with no corrections. The only error is an
    /// invalid target language (`Other`).
    pub async fn correct(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<CorrectionResult, CorrectError> {
        if !language.is_correctable() {
            return Err(CorrectError::UnsupportedLanguage(
                language.as_str().to_string(),
            ));
        }

        if text.trim().is_empty() {
            return Ok(CorrectionResult::unchanged(text));
        }

        match language {
            LanguageCode::English => {
                let errors = self.check_spelling(text).await;
                Ok(CorrectionResult {
                    corrected_text: text.to_string(),
                    corrections: CorrectionOutcome::EnglishSpelling(errors).into_items(),
                })
            }
            _ => Ok(self.correct_language(text, language).await),
        }
    }

    /// Run the check appropriate for `language` and return its native shape
    ///
    /// Used by callers that merge heterogeneous results (bulk checks); both
    /// shapes flatten through [`CorrectionOutcome::into_items`].
    pub async fn outcome(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<CorrectionOutcome, CorrectError> {
        if !language.is_correctable() {
            return Err(CorrectError::UnsupportedLanguage(
                language.as_str().to_string(),
            ));
        }

        Ok(match language {
            LanguageCode::English => {
                CorrectionOutcome::EnglishSpelling(self.check_spelling(text).await)
            }
            _ => CorrectionOutcome::LanguageCorrection(
                self.correct_language(text, language).await.corrections,
            ),
        })
    }

    /// Full-correction path for the four Indic languages
    async fn correct_language(&self, text: &str, language: LanguageCode) -> CorrectionResult {
        let request = CompletionRequest::new(prompt::correction_prompt(language, text));

        let response: CorrectionResponse = match complete_json(&*self.client, request).await {
            Ok(r) => r,
            Err(e) => {
                warn!(language = language.as_str(), error = %e, "correction call failed, returning original text");
                return CorrectionResult::unchanged(text);
            }
        };

        let Some(corrections) = response.corrections else {
            warn!(
                language = language.as_str(),
                "correction response missing corrections array, returning original text"
            );
            return CorrectionResult::unchanged(text);
        };

        let raw_count = corrections.len();
        let valid: Vec<_> = corrections.into_iter().filter(|c| !c.is_noop()).collect();

        // A model that proposed even one no-op correction cannot be trusted
        // for its free-text rewrite either; fall back to the caller's text.
        let corrected_text = if valid.len() == raw_count {
            response.corrected_text.unwrap_or_else(|| text.to_string())
        } else {
            debug!(
                dropped = raw_count - valid.len(),
                "dropped no-op corrections, reverting corrected text"
            );
            text.to_string()
        };

        CorrectionResult {
            corrected_text,
            corrections: valid,
        }
    }

    /// English spelling check; fails soft to an empty error list
    pub async fn check_spelling(&self, text: &str) -> Vec<SpellingError> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let request = CompletionRequest::new(prompt::spelling_prompt(text));
        let response: SpellingResponse = match complete_json(&*self.client, request).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "spelling check failed, returning no errors");
                return Vec::new();
            }
        };

        response
            .errors_found
            .unwrap_or_default()
            .into_iter()
            .filter(|e| !e.is_noop())
            .collect()
    }

    /// Detect the primary language of `text`
    ///
    /// Input below the configured minimum is classified `Other` without a
    /// completion call.
    pub async fn detect_language(&self, text: &str) -> Result<LanguageDetection, CorrectError> {
        if text.chars().count() < self.config.detection_min_chars {
            return Ok(LanguageDetection {
                language: LanguageCode::Other,
                confident: false,
            });
        }

        let request = CompletionRequest::new(prompt::detection_prompt(text))
            .with_temperature(DETECTION_TEMPERATURE);
        let response: DetectionResponse = complete_json(&*self.client, request).await?;

        Ok(LanguageDetection {
            language: response.detected_language,
            confident: response.is_confident,
        })
    }

    /// Summarize `text` in `language`
    ///
    /// Errors on short input or completion failure; there is no meaningful
    /// partial summary to fall back to.
    pub async fn summarize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<String, CorrectError> {
        if text.chars().count() < self.config.summary_min_chars {
            return Err(CorrectError::InputTooShort {
                min: self.config.summary_min_chars,
            });
        }

        let request = CompletionRequest::new(prompt::summary_prompt(text, language))
            .with_temperature(self.config.summary_temperature);
        let response: SummaryResponse = complete_json(&*self.client, request).await?;
        Ok(response.summary)
    }
}
