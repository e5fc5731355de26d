//! Gemini Client Implementation
//!
//! Talks to the Google Generative Language HTTP API. Every call requests
//! JSON output mode, since all engine prompts expect schema-conforming
//! structured responses.
//!
//! # Features
//!
//! - Async HTTP communication with the generateContent endpoint
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff
//! - Timeout handling

use crate::{CompletionClient, CompletionRequest, LlmError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Completion client backed by the Google Generative Language API
pub struct GeminiClient {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a new client for the given API key and model
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingCredentials`] if the key is empty; a
    /// client is never constructed in a half-configured state.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingCredentials);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key,
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create a client using the default model
    pub fn default_model(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(api_key, DEFAULT_MODEL)
    }

    /// Override the API endpoint (for tests or proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn build_body(&self, request: &CompletionRequest) -> GenerateContentRequest {
        let mut parts = vec![Part::Text {
            text: request.prompt.clone(),
        }];

        if let Some(media) = &request.media {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: media.mime_type.clone(),
                    data: media.data.clone(),
                },
            });
        }

        GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type: "application/json",
            },
        }
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
        response
            .candidates
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .and_then(|c| c.content.parts)
            .and_then(|mut p| if p.is_empty() { None } else { p.remove(0).text })
            .ok_or_else(|| {
                LlmError::InvalidResponse("Completion response contained no text".to_string())
            })
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );
        let body = self.build_body(&request);

        debug!(prompt_len = request.prompt.len(), "sending completion request");

        // Retry with exponential backoff on transient failures
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let parsed = response
                            .json::<GenerateContentResponse>()
                            .await
                            .map_err(|e| {
                                LlmError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                ))
                            })?;
                        return Self::extract_text(parsed);
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                warn!(attempt = attempts, "completion call failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaPart;

    #[test]
    fn test_client_rejects_empty_key() {
        let result = GeminiClient::new("", DEFAULT_MODEL);
        assert!(matches!(result, Err(LlmError::MissingCredentials)));
    }

    #[test]
    fn test_client_configuration() {
        let client = GeminiClient::default_model("key").unwrap().with_max_retries(5);
        assert_eq!(client.model, DEFAULT_MODEL);
        assert_eq!(client.max_retries, 5);
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_body_includes_media_part() {
        let client = GeminiClient::default_model("key").unwrap();
        let request = CompletionRequest::new("describe this")
            .with_media(MediaPart::from_data_uri("data:image/png;base64,aGk=").unwrap());
        let body = client.build_body(&request);
        assert_eq!(body.contents[0].parts.len(), 2);
    }

    #[test]
    fn test_extract_text_empty_candidates() {
        let response = GenerateContentResponse { candidates: None };
        assert!(matches!(
            GeminiClient::extract_text(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let client = GeminiClient::default_model("key")
            .unwrap()
            .with_endpoint("http://127.0.0.1:9")
            .with_max_retries(1);
        let result = client.complete(CompletionRequest::new("test")).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
