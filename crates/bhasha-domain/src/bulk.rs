//! Bulk module - per-URL results of a bulk content check

use crate::correction::CorrectionItem;
use serde::{Deserialize, Serialize};

/// Platform a bulk check targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Video titles via the oEmbed endpoint
    YouTube,
    /// Post captions via page markup
    Meta,
}

impl Platform {
    /// Platform name for messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Meta => "Meta",
        }
    }
}

/// Terminal status of one URL in a bulk check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkStatus {
    /// Content was fetched and no errors were found
    Ok,
    /// Content was fetched and at least one correction remains after dedup
    ErrorsFound,
    /// The content could not be fetched; `details` carries the reason
    FetchError,
}

impl BulkStatus {
    /// Human-readable status label
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkStatus::Ok => "Checked - OK",
            BulkStatus::ErrorsFound => "Checked - Errors Found",
            BulkStatus::FetchError => "Fetch Error",
        }
    }
}

/// Result for a single URL in a bulk check
///
/// One instance per input URL, independent of all siblings. A failure here
/// never aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkCheckResult {
    /// The input URL
    pub url: String,

    /// The fetched title or caption, if the fetch succeeded
    pub content: Option<String>,

    /// Terminal status for this URL
    pub status: BulkStatus,

    /// Corrections found, or a message explaining the status
    pub details: BulkDetails,
}

/// Details accompanying a bulk result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BulkDetails {
    /// A status or error message
    Message(String),
    /// Deduplicated corrections for this URL's content
    Corrections(Vec<CorrectionItem>),
}

impl BulkCheckResult {
    /// A fetch failure for this URL only
    pub fn fetch_error(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: None,
            status: BulkStatus::FetchError,
            details: BulkDetails::Message(reason.into()),
        }
    }

    /// A clean result: content fetched, nothing to correct
    pub fn ok(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: Some(content.into()),
            status: BulkStatus::Ok,
            details: BulkDetails::Message("No errors found.".to_string()),
        }
    }

    /// A result carrying deduplicated corrections
    pub fn errors_found(
        url: impl Into<String>,
        content: impl Into<String>,
        corrections: Vec<CorrectionItem>,
    ) -> Self {
        Self {
            url: url.into(),
            content: Some(content.into()),
            status: BulkStatus::ErrorsFound,
            details: BulkDetails::Corrections(corrections),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::CorrectionKind;

    #[test]
    fn test_fetch_error_has_no_content() {
        let result = BulkCheckResult::fetch_error("https://example.com", "timed out");
        assert_eq!(result.status, BulkStatus::FetchError);
        assert!(result.content.is_none());
        assert_eq!(
            result.details,
            BulkDetails::Message("timed out".to_string())
        );
    }

    #[test]
    fn test_errors_found_carries_corrections() {
        let corrections = vec![CorrectionItem {
            original: "teh".to_string(),
            corrected: "the".to_string(),
            description: "Misspelled word".to_string(),
            kind: CorrectionKind::Spelling,
        }];
        let result = BulkCheckResult::errors_found("u", "title", corrections.clone());
        assert_eq!(result.status, BulkStatus::ErrorsFound);
        assert_eq!(result.details, BulkDetails::Corrections(corrections));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(BulkStatus::Ok.as_str(), "Checked - OK");
        assert_eq!(BulkStatus::ErrorsFound.as_str(), "Checked - Errors Found");
        assert_eq!(BulkStatus::FetchError.as_str(), "Fetch Error");
    }
}
