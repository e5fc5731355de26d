//! Post caption extraction from social share metadata
//!
//! Post pages require a login wall for the full document, but the caption
//! is mirrored into the `og:description` share tag, wrapped in engagement
//! boilerplate that has to be peeled off.

use crate::error::ExtractError;
use crate::fetch::PageFetcher;
use scraper::{Html, Selector};
use tracing::debug;

/// Fetches post captions from share metadata
#[derive(Debug, Clone)]
pub struct CaptionScraper {
    fetcher: PageFetcher,
}

impl CaptionScraper {
    /// Create a scraper with the given request timeout
    pub fn new(timeout_secs: u64) -> Result<Self, ExtractError> {
        Ok(Self {
            fetcher: PageFetcher::new(timeout_secs)?,
        })
    }

    /// Fetch the caption of the post or reel at `url`
    pub async fn fetch_caption(&self, url: &str) -> Result<String, ExtractError> {
        if !is_post_url(url) {
            return Err(ExtractError::InvalidUrl(format!(
                "{url} is not a recognized post or reel URL"
            )));
        }

        debug!(url, "Fetching post caption");
        let html = self.fetcher.fetch_html(url).await?;
        let description = og_description(&html).ok_or(ExtractError::CaptionNotFound)?;

        let caption = clean_caption(&description);
        if caption.is_empty() {
            return Err(ExtractError::CaptionNotFound);
        }
        Ok(caption)
    }
}

/// Accepts post and reel permalinks
fn is_post_url(url: &str) -> bool {
    url.contains("instagram.com/p/") || url.contains("instagram.com/reel/")
}

/// Pull the `og:description` content attribute out of a page
fn og_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[property="og:description"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.to_string())
}

/// Strip engagement boilerplate from a share description
///
/// Descriptions look like
/// `"12 likes, 3 comments - someuser on Instagram: \u{201c}the caption\u{201d}"`.
/// Everything up to the platform marker is dropped and any surrounding
/// quote pair is removed. A description without the marker is returned
/// trimmed as-is.
fn clean_caption(description: &str) -> String {
    let caption = match description.split_once(" on Instagram:") {
        Some((_, rest)) => rest.trim(),
        None => description.trim(),
    };
    strip_quote_pair(caption).to_string()
}

/// Remove one matching pair of straight or curly quotes
fn strip_quote_pair(text: &str) -> &str {
    const PAIRS: &[(char, char)] = &[('"', '"'), ('\u{201c}', '\u{201d}'), ('\u{2018}', '\u{2019}')];
    for &(open, close) in PAIRS {
        if let Some(inner) = text
            .strip_prefix(open)
            .and_then(|t| t.strip_suffix(close))
        {
            return inner;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_post_and_reel_urls() {
        assert!(is_post_url("https://www.instagram.com/p/Cabc123/"));
        assert!(is_post_url("https://www.instagram.com/reel/Cxyz789/"));
        assert!(!is_post_url("https://www.instagram.com/someuser/"));
    }

    #[test]
    fn test_clean_caption_strips_boilerplate() {
        let description =
            "120 likes, 4 comments - newsdesk on Instagram: \u{201c}Breaking update from the coast.\u{201d}";
        assert_eq!(clean_caption(description), "Breaking update from the coast.");
    }

    #[test]
    fn test_clean_caption_straight_quotes() {
        let description = "5 likes, 0 comments - someone on Instagram: \"hello world\"";
        assert_eq!(clean_caption(description), "hello world");
    }

    #[test]
    fn test_clean_caption_without_marker() {
        assert_eq!(clean_caption("  just a plain description  "), "just a plain description");
    }

    #[test]
    fn test_unmatched_quote_left_alone() {
        let description = "x on Instagram: \u{201c}unterminated";
        assert_eq!(clean_caption(description), "\u{201c}unterminated");
    }

    #[test]
    fn test_og_description_parsing() {
        let html = r#"<html><head>
            <meta property="og:description" content="1 like - a on Instagram: &quot;hi&quot;" />
        </head><body></body></html>"#;
        assert_eq!(og_description(html).unwrap(), "1 like - a on Instagram: \"hi\"");
    }

    #[test]
    fn test_og_description_missing() {
        assert!(og_description("<html><head></head></html>").is_none());
    }

    #[tokio::test]
    async fn test_invalid_url_fails_without_request() {
        let scraper = CaptionScraper::new(5).unwrap();
        let result = scraper.fetch_caption("https://example.com/p/abc/").await;
        assert!(matches!(result, Err(ExtractError::InvalidUrl(_))));
    }
}
