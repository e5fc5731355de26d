//! Correction module - model-proposed fixes and their validity invariant

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Kind of a correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionKind {
    /// A misspelled word or phrase
    Spelling,
    /// A grammatical error
    Grammar,
}

/// A single correction proposed by the model
///
/// Invariant: `original` and `corrected` must differ after normalization.
/// An item where they are equivalent is a no-op correction and is invalid
/// by construction; the engines filter such items out before returning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionItem {
    /// The original incorrect word or phrase
    pub original: String,

    /// The suggested replacement
    pub corrected: String,

    /// Brief description of the change (e.g. "Misspelled word")
    pub description: String,

    /// Whether this is a spelling or grammar fix
    #[serde(rename = "type")]
    pub kind: CorrectionKind,
}

impl CorrectionItem {
    /// Whether this item is a no-op: original and corrected are equivalent
    /// after NFC normalization, trimming, and case folding
    pub fn is_noop(&self) -> bool {
        normalize_term(&self.original) == normalize_term(&self.corrected)
    }
}

/// Canonicalize a term for equivalence comparison
///
/// Unicode NFC first, so that composed and decomposed Indic or accented
/// sequences compare equal, then trim and lowercase. Lowercasing only
/// affects scripts that have case, so it is safe across all five languages.
pub fn normalize_term(term: &str) -> String {
    term.nfc().collect::<String>().trim().to_lowercase()
}

/// Result of running one unit of text through the correction engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// The full text with corrections applied, or the caller's original
    /// text when the model's rewrite could not be trusted
    pub corrected_text: String,

    /// The validated corrections (no-op items already filtered)
    pub corrections: Vec<CorrectionItem>,
}

impl CorrectionResult {
    /// An untouched result: the input text with no corrections
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            corrected_text: text.into(),
            corrections: Vec::new(),
        }
    }
}

/// The two correction shapes the engines produce
///
/// Per-language correction returns full `CorrectionItem`s; the English
/// spelling pass returns word/suggestion pairs. Both are flattened into
/// `CorrectionItem`s through [`CorrectionOutcome::into_items`] before any
/// merging or dedup, so downstream code never branches on the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionOutcome {
    /// Full language-specific correction (Malayalam, Tamil, Kannada, Hindi)
    LanguageCorrection(Vec<CorrectionItem>),
    /// English spelling check (word/suggestion pairs)
    EnglishSpelling(Vec<SpellingError>),
}

/// A spelling error found by the English checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingError {
    /// The misspelled word
    pub word: String,
    /// The suggested correction
    pub suggestion: String,
}

impl SpellingError {
    /// Whether this error is a no-op after normalization
    pub fn is_noop(&self) -> bool {
        normalize_term(&self.word) == normalize_term(&self.suggestion)
    }
}

impl CorrectionOutcome {
    /// Flatten either shape into a uniform list of correction items
    pub fn into_items(self) -> Vec<CorrectionItem> {
        match self {
            CorrectionOutcome::LanguageCorrection(items) => items,
            CorrectionOutcome::EnglishSpelling(errors) => errors
                .into_iter()
                .map(|e| CorrectionItem {
                    original: e.word,
                    corrected: e.suggestion,
                    description: "Misspelled word".to_string(),
                    kind: CorrectionKind::Spelling,
                })
                .collect(),
        }
    }
}

/// De-duplicate corrections by their `original` term, keeping the first
/// occurrence and preserving order
pub fn dedup_by_original(items: Vec<CorrectionItem>) -> Vec<CorrectionItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.original.clone()))
        .collect()
}
