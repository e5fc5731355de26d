//! Single-URL article checking

use crate::error::BulkError;
use bhasha_correct::{CorrectionEngine, LanguageDetection};
use bhasha_domain::{CorrectionResult, LanguageCode, SpellingError};
use bhasha_extract::ContentSource;
use bhasha_llm::CompletionClient;
use std::sync::Arc;
use tracing::info;

/// Everything a single-URL check produced
#[derive(Debug, Clone)]
pub struct UrlCheckReport {
    /// The checked URL
    pub url: String,
    /// The extracted article text the checks ran over
    pub text: String,
    /// What the language detector said about the text
    pub detection: LanguageDetection,
    /// The correction result for the requested language
    pub result: CorrectionResult,
    /// English spelling errors found alongside a non-English check
    pub english_errors: Vec<SpellingError>,
}

/// Checks one URL's article in a chosen language
///
/// Unlike the bulk checker this pipeline verifies the language choice
/// first: an article the detector confidently places in a different
/// language is rejected rather than corrected against the wrong rules.
pub struct UrlChecker<C: CompletionClient> {
    engine: CorrectionEngine<C>,
    source: Arc<dyn ContentSource>,
}

impl<C: CompletionClient> UrlChecker<C> {
    /// Create a checker over the given correction engine and content source
    pub fn new(engine: CorrectionEngine<C>, source: Arc<dyn ContentSource>) -> Self {
        Self { engine, source }
    }

    /// Extract `url`, verify its language, and run the full check
    ///
    /// The detector's verdict gates the check only when it is confident and
    /// names one of the five supported languages; an `Other` or tentative
    /// verdict lets the caller's choice stand. Non-English articles get an
    /// extra English spelling pass for mixed-script content.
    pub async fn check_url(
        &self,
        url: &str,
        language: LanguageCode,
    ) -> Result<UrlCheckReport, BulkError> {
        if !language.is_correctable() {
            return Err(BulkError::UnsupportedLanguage(
                language.as_str().to_string(),
            ));
        }

        let text = self.source.fetch_content(url).await?;
        info!(url, chars = text.chars().count(), "Fetched article for URL check");

        let detection = self.engine.detect_language(&text).await?;
        if detection.confident
            && detection.language != language
            && detection.language != LanguageCode::Other
        {
            return Err(BulkError::LanguageMismatch {
                detected: detection.language.display_name().to_string(),
                expected: language.display_name().to_string(),
            });
        }

        let (result, english_errors) = if language == LanguageCode::English {
            (self.engine.correct(&text, language).await, Vec::new())
        } else {
            tokio::join!(
                self.engine.correct(&text, language),
                self.engine.check_spelling(&text)
            )
        };

        Ok(UrlCheckReport {
            url: url.to_string(),
            text,
            detection,
            result: result?,
            english_errors,
        })
    }
}
