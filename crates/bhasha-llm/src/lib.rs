//! Bhasha Completion Client Layer
//!
//! The single abstraction wrapping calls to an external text-completion
//! service. Engines are generic over [`CompletionClient`] and receive an
//! explicitly constructed client instance; no ambient/global state.
//!
//! # Providers
//!
//! - [`MockClient`]: deterministic mock for testing, with call counting
//! - [`GeminiClient`]: Google Generative Language API over HTTP
//!
//! # Examples
//!
//! ```
//! use bhasha_llm::{CompletionClient, CompletionRequest, MockClient};
//!
//! # async fn example() {
//! let client = MockClient::new(r#"{"ok":true}"#);
//! let response = client
//!     .complete(CompletionRequest::new("test prompt"))
//!     .await
//!     .unwrap();
//! assert_eq!(response, r#"{"ok":true}"#);
//! assert_eq!(client.call_count(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod json;
pub mod request;

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiClient;
pub use json::complete_json;
pub use request::{CompletionRequest, MediaPart};

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The service answered but the payload was unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API credentials configured
    #[error("Missing API credentials")]
    MissingCredentials,

    /// Generic error
    #[error("Completion error: {0}")]
    Other(String),
}

/// The completion-service boundary
///
/// One structured request in, one raw completion string out. Schema
/// enforcement happens in [`json::complete_json`], which layers JSON
/// repair and deserialization on top of this contract.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion call
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

/// Deterministic mock completion client for testing
///
/// Responses are matched by substring against the request prompt, so tests
/// can key on a fragment of the input (a chunk's text, a URL's title)
/// without reproducing the full prompt. Every request is recorded for
/// call-count and temperature assertions.
#[derive(Debug, Clone)]
pub struct MockClient {
    default_response: String,
    responses: Arc<Mutex<Vec<(String, String)>>>,
    errors: Arc<Mutex<Vec<String>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockClient {
    /// Create a mock returning a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            errors: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Respond with `response` whenever the prompt contains `marker`
    pub fn add_response(&self, marker: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push((marker.into(), response.into()));
    }

    /// Fail with a communication error whenever the prompt contains `marker`
    pub fn add_error(&self, marker: impl Into<String>) {
        self.errors.lock().unwrap().push(marker.into());
    }

    /// Number of completion calls made so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Temperatures of all requests, in call order
    pub fn temperatures(&self) -> Vec<f32> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.temperature)
            .collect()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new("{}")
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());

        for marker in self.errors.lock().unwrap().iter() {
            if request.prompt.contains(marker.as_str()) {
                return Err(LlmError::Communication(format!(
                    "mock error for marker '{}'",
                    marker
                )));
            }
        }

        let responses = self.responses.lock().unwrap();
        for (marker, response) in responses.iter() {
            if request.prompt.contains(marker.as_str()) {
                return Ok(response.clone());
            }
        }

        Ok(self.default_response.clone())
    }
}
