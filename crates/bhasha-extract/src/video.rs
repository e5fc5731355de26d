//! Video title lookup via the oEmbed endpoint
//!
//! Titles come from the public oEmbed API rather than the watch page, so
//! no HTML scraping or API key is involved. The endpoint is injectable for
//! testing against a local server.

use crate::error::ExtractError;
use crate::fetch::http_client;
use serde::Deserialize;
use tracing::debug;

const OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: String,
}

/// Fetches video titles through oEmbed
#[derive(Debug, Clone)]
pub struct VideoTitleClient {
    client: reqwest::Client,
    endpoint: String,
}

impl VideoTitleClient {
    /// Create a client against the public oEmbed endpoint
    pub fn new(timeout_secs: u64) -> Result<Self, ExtractError> {
        Ok(Self {
            client: http_client(timeout_secs)?,
            endpoint: OEMBED_ENDPOINT.to_string(),
        })
    }

    /// Override the oEmbed endpoint (for tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fetch the title of the video at `url`
    ///
    /// The two host forms (full and shortened) are both accepted; anything
    /// else is rejected before a request goes out. Lookup failures map to
    /// distinct errors so a user can tell a deleted video from a private
    /// one or a rate limit.
    pub async fn fetch_title(&self, url: &str) -> Result<String, ExtractError> {
        if !is_video_url(url) {
            return Err(ExtractError::InvalidUrl(format!(
                "{url} is not a recognized video URL"
            )));
        }

        debug!(url, "Fetching video title");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url), ("format", "json")])
            .send()
            .await?;

        match response.status().as_u16() {
            404 => return Err(ExtractError::VideoNotFound),
            401 | 403 => return Err(ExtractError::VideoUnavailable),
            429 => return Err(ExtractError::RateLimited),
            status if !(200..300).contains(&status) => {
                return Err(ExtractError::Fetch { status });
            }
            _ => {}
        }

        let body: OembedResponse = response
            .json()
            .await
            .map_err(|e| ExtractError::Network(format!("Malformed oEmbed response: {e}")))?;
        Ok(body.title)
    }
}

/// Accepts watch-page and shortened video URLs
fn is_video_url(url: &str) -> bool {
    url.contains("youtube.com/") || url.contains("youtu.be/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_watch_url() {
        assert!(is_video_url("https://www.youtube.com/watch?v=abc123"));
    }

    #[test]
    fn test_accepts_short_url() {
        assert!(is_video_url("https://youtu.be/abc123"));
    }

    #[test]
    fn test_rejects_other_hosts() {
        assert!(!is_video_url("https://example.com/watch?v=abc123"));
    }

    #[tokio::test]
    async fn test_invalid_url_fails_without_request() {
        let client = VideoTitleClient::new(5).unwrap();
        let result = client.fetch_title("https://example.com/video").await;
        assert!(matches!(result, Err(ExtractError::InvalidUrl(_))));
    }

    /// Serve one HTTP response on a local port and return the endpoint URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn lookup_against(status: &'static str, body: &'static str) -> Result<String, ExtractError> {
        let endpoint = serve_once(status, body).await;
        let client = VideoTitleClient::new(5).unwrap().with_endpoint(endpoint);
        client.fetch_title("https://youtu.be/abc123").await
    }

    #[tokio::test]
    async fn test_success_returns_title() {
        let result = lookup_against("200 OK", r#"{"title":"My Video"}"#).await;
        assert_eq!(result.unwrap(), "My Video");
    }

    #[tokio::test]
    async fn test_missing_video_maps_to_not_found() {
        let result = lookup_against("404 Not Found", "Not Found").await;
        assert!(matches!(result, Err(ExtractError::VideoNotFound)));
    }

    #[tokio::test]
    async fn test_forbidden_maps_to_unavailable() {
        let result = lookup_against("403 Forbidden", "Forbidden").await;
        assert!(matches!(result, Err(ExtractError::VideoUnavailable)));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_unavailable() {
        let result = lookup_against("401 Unauthorized", "Unauthorized").await;
        assert!(matches!(result, Err(ExtractError::VideoUnavailable)));
    }

    #[tokio::test]
    async fn test_too_many_requests_maps_to_rate_limited() {
        let result = lookup_against("429 Too Many Requests", "slow down").await;
        assert!(matches!(result, Err(ExtractError::RateLimited)));
    }

    #[tokio::test]
    async fn test_other_failure_carries_status() {
        let result = lookup_against("500 Internal Server Error", "boom").await;
        assert!(matches!(result, Err(ExtractError::Fetch { status: 500 })));
    }
}
