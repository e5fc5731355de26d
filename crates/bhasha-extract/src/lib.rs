//! Bhasha Content Extraction
//!
//! Turns remote pages into plain text the correction and translation
//! engines can consume:
//!
//! - [`ContentExtractor`]: article body extraction from news pages
//! - [`VideoTitleClient`]: video titles via the oEmbed endpoint
//! - [`CaptionScraper`]: post captions from share metadata
//! - [`ImageTextExtractor`]: text in images, via multimodal completion
//!
//! All fetchers share one crawler identity and timeout policy
//! ([`fetch::PageFetcher`]). The [`ContentSource`] trait is the seam the
//! bulk checker fans out over; tests substitute stub sources for real
//! network fetchers.

#![warn(missing_docs)]

pub mod caption;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod ocr;
pub mod page;
pub mod video;

use async_trait::async_trait;

pub use caption::CaptionScraper;
pub use config::ExtractConfig;
pub use error::ExtractError;
pub use extractor::ContentExtractor;
pub use ocr::ImageTextExtractor;
pub use page::extract_main_text;
pub use video::VideoTitleClient;

/// A source of checkable text for one URL
///
/// Implementations fetch whatever a platform exposes for a URL (a video
/// title, a post caption) and reduce it to plain text.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the text content behind `url`
    async fn fetch_content(&self, url: &str) -> Result<String, ExtractError>;
}

#[async_trait]
impl ContentSource for VideoTitleClient {
    async fn fetch_content(&self, url: &str) -> Result<String, ExtractError> {
        self.fetch_title(url).await
    }
}

#[async_trait]
impl ContentSource for CaptionScraper {
    async fn fetch_content(&self, url: &str) -> Result<String, ExtractError> {
        self.fetch_caption(url).await
    }
}

#[async_trait]
impl ContentSource for ContentExtractor {
    async fn fetch_content(&self, url: &str) -> Result<String, ExtractError> {
        Ok(self.extract(url).await?.text)
    }
}
