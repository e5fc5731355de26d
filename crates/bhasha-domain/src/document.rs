//! Document module - extracted page content

/// Plain text extracted from a remote page
///
/// Transient: produced by the content extractor and consumed immediately by
/// a correction or translation step, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// The cleaned plain text (whitespace collapsed, boilerplate removed)
    pub text: String,

    /// The URL the text was extracted from
    pub source_url: String,
}

impl ExtractedDocument {
    /// Create a new extracted document
    pub fn new(text: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_url: source_url.into(),
        }
    }
}
