//! Text extraction from images via multimodal completion

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use bhasha_domain::LanguageCode;
use bhasha_llm::{complete_json, CompletionClient, CompletionRequest, MediaPart};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
struct ExtractedTextResponse {
    #[serde(rename = "extractedText")]
    extracted_text: Option<String>,
}

/// Reads visible text out of an image with a multimodal completion call
pub struct ImageTextExtractor<C: CompletionClient> {
    client: Arc<C>,
    config: ExtractConfig,
}

impl<C: CompletionClient> ImageTextExtractor<C> {
    /// Create an extractor over the given completion client
    pub fn new(client: Arc<C>, config: ExtractConfig) -> Self {
        Self { client, config }
    }

    /// Extract all readable text from an image supplied as a data URI
    ///
    /// `language` hints at the script expected in the image so mixed-script
    /// posters transcribe correctly. Returns an empty string when the image
    /// genuinely contains no text.
    pub async fn extract_text(
        &self,
        image_data_uri: &str,
        language: LanguageCode,
    ) -> Result<String, ExtractError> {
        let media = MediaPart::from_data_uri(image_data_uri)
            .map_err(|e| ExtractError::InvalidUrl(e.to_string()))?;

        let request = CompletionRequest::new(ocr_prompt(language))
            .with_temperature(self.config.ocr_temperature)
            .with_media(media);

        let response: ExtractedTextResponse = complete_json(&*self.client, request).await?;
        let text = response.extracted_text.unwrap_or_default();
        info!(chars = text.chars().count(), "Extracted text from image");
        Ok(text)
    }
}

fn ocr_prompt(language: LanguageCode) -> String {
    format!(
        "You are an expert Optical Character Recognition (OCR) system. \
         Extract ALL text visible in the provided image exactly as it appears, \
         preserving line breaks between separate lines of text.\n\n\
         The text is expected to be primarily in {language} ({code}), possibly \
         mixed with English. Transcribe every script faithfully; do not \
         translate, summarize, or correct anything.\n\n\
         If the image contains no readable text, return an empty string.\n\n\
         Respond with JSON: {{\"extractedText\": \"<the text>\"}}",
        language = language.display_name(),
        code = language.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhasha_llm::MockClient;

    const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[tokio::test]
    async fn test_extracts_text_from_image() {
        let client = Arc::new(MockClient::new(
            r#"{"extractedText": "Poster headline text"}"#,
        ));
        let extractor = ImageTextExtractor::new(client.clone(), ExtractConfig::default());

        let text = extractor
            .extract_text(PNG_URI, LanguageCode::Malayalam)
            .await
            .unwrap();
        assert_eq!(text, "Poster headline text");
        assert_eq!(client.call_count(), 1);
        assert_eq!(client.temperatures(), vec![0.1]);
    }

    #[tokio::test]
    async fn test_attaches_media_part() {
        let client = Arc::new(MockClient::new(r#"{"extractedText": "x"}"#));
        let extractor = ImageTextExtractor::new(client.clone(), ExtractConfig::default());
        extractor
            .extract_text(PNG_URI, LanguageCode::Hindi)
            .await
            .unwrap();

        let request = client.last_request().unwrap();
        let media = request.media.unwrap();
        assert_eq!(media.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_textless_image_yields_empty_string() {
        let client = Arc::new(MockClient::new(r#"{"extractedText": null}"#));
        let extractor = ImageTextExtractor::new(client, ExtractConfig::default());
        let text = extractor
            .extract_text(PNG_URI, LanguageCode::Tamil)
            .await
            .unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_rejects_non_data_uri() {
        let client = Arc::new(MockClient::default());
        let extractor = ImageTextExtractor::new(client.clone(), ExtractConfig::default());
        let result = extractor
            .extract_text("https://example.com/image.png", LanguageCode::Malayalam)
            .await;
        assert!(result.is_err());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let client = Arc::new(MockClient::default());
        client.add_error("OCR");
        let extractor = ImageTextExtractor::new(client, ExtractConfig::default());
        let result = extractor
            .extract_text(PNG_URI, LanguageCode::Malayalam)
            .await;
        assert!(matches!(result, Err(ExtractError::Llm(_))));
    }
}
