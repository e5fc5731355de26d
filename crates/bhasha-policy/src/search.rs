//! News search for fact-check research
//!
//! The [`NewsSearch`] trait is the seam between the fact checker and the
//! search provider; tests substitute in-memory stubs for the HTTP client.

use crate::error::PolicyError;
use crate::report::NewsArticle;
use async_trait::async_trait;
use bhasha_domain::LanguageCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://serpapi.com/search.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A provider of news coverage for a query
#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Search news in the locale of `language`
    async fn search(
        &self,
        query: &str,
        language: LanguageCode,
    ) -> Result<Vec<NewsArticle>, PolicyError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    news_results: Vec<NewsResult>,
}

#[derive(Debug, Deserialize)]
struct NewsResult {
    title: Option<String>,
    link: Option<String>,
    source: Option<NewsSource>,
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsSource {
    name: Option<String>,
}

/// News search backed by the SerpApi Google News engine
#[derive(Debug, Clone)]
pub struct SerpApiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SerpApiClient {
    /// Create a client; fails when the API key is empty
    pub fn new(api_key: impl Into<String>) -> Result<Self, PolicyError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(PolicyError::MissingCredentials);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| PolicyError::Search(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
        })
    }

    /// Override the API endpoint (for tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Interface-language and region parameters for a search locale
///
/// All five supported languages are searched within the same region; only
/// the interface language varies.
pub(crate) fn locale_params(language: LanguageCode) -> (&'static str, &'static str) {
    let hl = match language {
        LanguageCode::English => "en",
        LanguageCode::Malayalam => "ml",
        LanguageCode::Tamil => "ta",
        LanguageCode::Kannada => "kn",
        LanguageCode::Hindi => "hi",
        LanguageCode::Other => "en",
    };
    (hl, "in")
}

#[async_trait]
impl NewsSearch for SerpApiClient {
    async fn search(
        &self,
        query: &str,
        language: LanguageCode,
    ) -> Result<Vec<NewsArticle>, PolicyError> {
        let (hl, gl) = locale_params(language);
        debug!(query, hl, gl, "Searching news");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("engine", "google_news"),
                ("q", query),
                ("hl", hl),
                ("gl", gl),
                ("api_key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| PolicyError::Search(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PolicyError::Search(format!(
                "search returned status {}",
                status.as_u16()
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| PolicyError::Search(format!("malformed search response: {e}")))?;

        Ok(body
            .news_results
            .into_iter()
            .filter_map(|result| {
                Some(NewsArticle {
                    title: result.title?,
                    link: result.link?,
                    source: result.source.and_then(|s| s.name),
                    snippet: result.snippet,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            SerpApiClient::new("  "),
            Err(PolicyError::MissingCredentials)
        ));
    }

    #[test]
    fn test_locale_params_per_language() {
        assert_eq!(locale_params(LanguageCode::Malayalam), ("ml", "in"));
        assert_eq!(locale_params(LanguageCode::English), ("en", "in"));
        assert_eq!(locale_params(LanguageCode::Other), ("en", "in"));
    }

    #[test]
    fn test_results_without_links_are_dropped() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"news_results":[
                {"title":"Has link","link":"https://a","source":{"name":"S"}},
                {"title":"No link"}
            ]}"#,
        )
        .unwrap();
        let articles: Vec<NewsArticle> = body
            .news_results
            .into_iter()
            .filter_map(|r| {
                Some(NewsArticle {
                    title: r.title?,
                    link: r.link?,
                    source: r.source.and_then(|s| s.name),
                    snippet: r.snippet,
                })
            })
            .collect();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source.as_deref(), Some("S"));
    }
}
