//! Structured completion output
//!
//! Models sometimes wrap their JSON in markdown code fences even when asked
//! not to. This module strips the wrapper and deserializes into the
//! caller's typed response shape; a payload that still fails to parse is an
//! [`LlmError::InvalidResponse`].

use crate::{CompletionClient, CompletionRequest, LlmError};
use serde::de::DeserializeOwned;

/// Run a completion call and deserialize its output into `T`
pub async fn complete_json<C, T>(client: &C, request: CompletionRequest) -> Result<T, LlmError>
where
    C: CompletionClient + ?Sized,
    T: DeserializeOwned,
{
    let raw = client.complete(request).await?;
    parse_response(&raw)
}

/// Deserialize a raw completion payload into `T`, tolerating code fences
pub fn parse_response<T: DeserializeOwned>(raw: &str) -> Result<T, LlmError> {
    let json = strip_code_fences(raw);
    serde_json::from_str(json.trim())
        .map_err(|e| LlmError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// Remove a surrounding ```json / ``` fence if present
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        value: String,
    }

    #[test]
    fn test_parse_plain_json() {
        let parsed: Sample = parse_response(r#"{"value":"ok"}"#).unwrap();
        assert_eq!(parsed.value, "ok");
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"value\":\"ok\"}\n```";
        let parsed: Sample = parse_response(raw).unwrap();
        assert_eq!(parsed.value, "ok");
    }

    #[test]
    fn test_parse_fenced_without_language_tag() {
        let raw = "```\n{\"value\":\"ok\"}\n```";
        let parsed: Sample = parse_response(raw).unwrap();
        assert_eq!(parsed.value, "ok");
    }

    #[test]
    fn test_parse_garbage_is_invalid_response() {
        let result: Result<Sample, _> = parse_response("not json at all");
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_complete_json_end_to_end() {
        let client = crate::MockClient::new(r#"{"value":"typed"}"#);
        let parsed: Sample = complete_json(&client, CompletionRequest::new("p"))
            .await
            .unwrap();
        assert_eq!(parsed.value, "typed");
    }
}
