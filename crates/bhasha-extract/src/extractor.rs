//! Article extraction pipeline

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::fetch::PageFetcher;
use crate::page::extract_main_text;
use bhasha_domain::ExtractedDocument;
use tracing::info;

/// Fetches a page and extracts its article text
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    fetcher: PageFetcher,
    config: ExtractConfig,
}

impl ContentExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: ExtractConfig) -> Result<Self, ExtractError> {
        config.validate().map_err(ExtractError::Config)?;
        Ok(Self {
            fetcher: PageFetcher::new(config.timeout_secs)?,
            config,
        })
    }

    /// Fetch `url` and return its cleaned article text
    ///
    /// Fails when the extracted text does not clear the minimum length;
    /// a page that yields almost nothing is treated as unparseable rather
    /// than passed downstream as a one-line article.
    pub async fn extract(&self, url: &str) -> Result<ExtractedDocument, ExtractError> {
        let html = self.fetcher.fetch_html(url).await?;
        let text = extract_main_text(&html);
        self.check_length(&text)?;

        info!(url, chars = text.chars().count(), "Extracted article text");
        Ok(ExtractedDocument::new(text, url))
    }

    /// Check extracted text against the minimum-length gate
    pub(crate) fn check_length(&self, text: &str) -> Result<(), ExtractError> {
        if text.chars().count() <= self.config.min_content_chars {
            return Err(ExtractError::TooLittleContent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ContentExtractor {
        ContentExtractor::new(ExtractConfig::default()).unwrap()
    }

    #[test]
    fn test_length_gate_rejects_99_chars() {
        let text = "x".repeat(99);
        assert!(matches!(
            extractor().check_length(&text),
            Err(ExtractError::TooLittleContent)
        ));
    }

    #[test]
    fn test_length_gate_rejects_exactly_100_chars() {
        let text = "x".repeat(100);
        assert!(extractor().check_length(&text).is_err());
    }

    #[test]
    fn test_length_gate_accepts_101_chars() {
        let text = "x".repeat(101);
        assert!(extractor().check_length(&text).is_ok());
    }

    #[test]
    fn test_length_gate_counts_chars_not_bytes() {
        // 101 Malayalam characters, far more than 101 bytes
        let text = "\u{0d05}".repeat(101);
        assert!(extractor().check_length(&text).is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ExtractConfig::default();
        config.min_content_chars = 0;
        assert!(ContentExtractor::new(config).is_err());
    }
}
