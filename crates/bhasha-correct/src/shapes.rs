//! Wire shapes for structured model output
//!
//! Optional fields model the ways a probabilistic service can come back
//! half-empty; the engine decides what each absence means.

use bhasha_domain::{CorrectionItem, LanguageCode, SpellingError};
use serde::Deserialize;

/// Full-correction response: `{correctedText, corrections}`
#[derive(Debug, Deserialize)]
pub(crate) struct CorrectionResponse {
    #[serde(rename = "correctedText")]
    pub corrected_text: Option<String>,
    pub corrections: Option<Vec<CorrectionItem>>,
}

/// English spelling response: `{errorsFound}`
#[derive(Debug, Deserialize)]
pub(crate) struct SpellingResponse {
    #[serde(rename = "errorsFound")]
    pub errors_found: Option<Vec<SpellingError>>,
}

/// Language detection response
#[derive(Debug, Deserialize)]
pub(crate) struct DetectionResponse {
    #[serde(rename = "detectedLanguage")]
    pub detected_language: LanguageCode,
    #[serde(rename = "isConfident")]
    pub is_confident: bool,
}

/// Summary response
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryResponse {
    pub summary: String,
}
