//! Typed completion requests
//!
//! The natural-language instructions are opaque configuration data carried
//! by the request; control flow never depends on prompt contents.

use crate::LlmError;

/// A structured input for one completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The full prompt text
    pub prompt: String,

    /// Sampling temperature; 0 for deterministic correction tasks, higher
    /// for generative ones
    pub temperature: f32,

    /// Optional inline media (image) for multimodal calls
    pub media: Option<MediaPart>,
}

impl CompletionRequest {
    /// Create a deterministic (temperature 0) request
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.0,
            media: None,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Attach inline media
    pub fn with_media(mut self, media: MediaPart) -> Self {
        self.media = Some(media);
        self
    }
}

/// Inline media for multimodal interpretation
///
/// Parsed from a self-describing embedded-data string of the form
/// `data:<mimetype>;base64,<encoded>`. The bytes are never decoded here;
/// they are passed opaquely to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPart {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,

    /// Base64-encoded payload, still encoded
    pub data: String,
}

impl MediaPart {
    /// Parse a `data:` URI into its MIME type and base64 payload
    pub fn from_data_uri(uri: &str) -> Result<Self, LlmError> {
        let rest = uri.strip_prefix("data:").ok_or_else(|| {
            LlmError::InvalidResponse(
                "Media must be a data URI of the form 'data:<mimetype>;base64,<encoded_data>'"
                    .to_string(),
            )
        })?;

        let (mime_type, data) = rest.split_once(";base64,").ok_or_else(|| {
            LlmError::InvalidResponse("Data URI is missing the ';base64,' marker".to_string())
        })?;

        if mime_type.is_empty() || data.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Data URI has an empty MIME type or payload".to_string(),
            ));
        }

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_data_uri() {
        let media = MediaPart::from_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(media.mime_type, "image/png");
        assert_eq!(media.data, "iVBORw0KGgo=");
    }

    #[test]
    fn test_reject_missing_prefix() {
        assert!(MediaPart::from_data_uri("image/png;base64,abc").is_err());
    }

    #[test]
    fn test_reject_missing_base64_marker() {
        assert!(MediaPart::from_data_uri("data:image/png,abc").is_err());
    }

    #[test]
    fn test_reject_empty_payload() {
        assert!(MediaPart::from_data_uri("data:image/png;base64,").is_err());
    }

    #[test]
    fn test_request_builder_defaults() {
        let request = CompletionRequest::new("hello");
        assert_eq!(request.temperature, 0.0);
        assert!(request.media.is_none());
    }
}
