//! HTTP page fetching
//!
//! News sites frequently serve reduced or blocked pages to unknown clients,
//! so requests go out with a crawler user agent and uncached headers.

use crate::error::ExtractError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, USER_AGENT};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Crawler identity used for article fetches
const CRAWLER_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

/// Default headers sent with every page fetch
pub(crate) fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(CRAWLER_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers
}

/// Build an HTTP client with the crawler headers and a request timeout
pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client, ExtractError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .default_headers(browser_headers())
        .build()?)
}

/// Fetches raw HTML for a page URL
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout_secs: u64) -> Result<Self, ExtractError> {
        Ok(Self {
            client: http_client(timeout_secs)?,
        })
    }

    /// Fetch the HTML body of `url`
    ///
    /// Rejects anything that is not an absolute http(s) URL, and maps
    /// non-success statuses to a fetch error carrying the status code.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ExtractError> {
        let parsed =
            Url::parse(url).map_err(|_| ExtractError::InvalidUrl(url.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ExtractError::InvalidUrl(url.to_string()));
        }

        debug!(url = %parsed, "Fetching page");
        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Fetch {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reject_relative_url() {
        let fetcher = PageFetcher::new(5).unwrap();
        let result = fetcher.fetch_html("not-a-url").await;
        assert!(matches!(result, Err(ExtractError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_reject_non_http_scheme() {
        let fetcher = PageFetcher::new(5).unwrap();
        let result = fetcher.fetch_html("ftp://example.com/article").await;
        assert!(matches!(result, Err(ExtractError::InvalidUrl(_))));
    }

    #[test]
    fn test_crawler_headers_present() {
        let headers = browser_headers();
        assert_eq!(
            headers.get(USER_AGENT).unwrap().to_str().unwrap(),
            CRAWLER_USER_AGENT
        );
        assert!(headers.contains_key(CACHE_CONTROL));
    }
}
