//! Content policy checking for text and images

use crate::config::PolicyConfig;
use crate::error::PolicyError;
use crate::prompt;
use crate::report::{PolicyReport, PolicyViolation};
use bhasha_domain::LanguageCode;
use bhasha_llm::{complete_json, CompletionClient, CompletionRequest, MediaPart};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

const DEFAULT_ALL_CLEAR: &str = "No policy violations were found in this content.";

/// Wire shape of a policy assessment; every field optional because the
/// model may omit whichever side it considers empty
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolicyResponse {
    violations: Option<Vec<PolicyViolation>>,
    visual_concerns: Option<Vec<String>>,
    no_violation_message: Option<String>,
}

/// Checks content against platform community guidelines
pub struct PolicyChecker<C: CompletionClient> {
    client: Arc<C>,
    config: PolicyConfig,
}

impl<C: CompletionClient> PolicyChecker<C> {
    /// Create a checker over the given completion client
    pub fn new(client: Arc<C>, config: PolicyConfig) -> Self {
        Self { client, config }
    }

    /// Check a piece of text for policy violations
    pub async fn check_text(
        &self,
        content: &str,
        language: LanguageCode,
    ) -> Result<PolicyReport, PolicyError> {
        if content.trim().chars().count() < self.config.policy_min_chars {
            return Err(PolicyError::InputTooShort {
                min: self.config.policy_min_chars,
            });
        }

        let request = CompletionRequest::new(prompt::policy_prompt(content, language))
            .with_temperature(self.config.policy_temperature);
        let response: PolicyResponse = complete_json(&*self.client, request).await?;
        self.normalize(response)
    }

    /// Check an image (supplied as a data URI) for policy violations
    pub async fn check_image(&self, image_data_uri: &str) -> Result<PolicyReport, PolicyError> {
        let media = MediaPart::from_data_uri(image_data_uri)
            .map_err(|e| PolicyError::InvalidImage(e.to_string()))?;

        let request = CompletionRequest::new(prompt::image_policy_prompt())
            .with_temperature(self.config.image_temperature)
            .with_media(media);
        let response: PolicyResponse = complete_json(&*self.client, request).await?;
        self.normalize(response)
    }

    /// Reduce a wire response to a report honoring the exclusivity rule:
    /// an all-clear message exists exactly when there are no findings
    fn normalize(&self, response: PolicyResponse) -> Result<PolicyReport, PolicyError> {
        if response.violations.is_none()
            && response.visual_concerns.is_none()
            && response.no_violation_message.is_none()
        {
            return Err(PolicyError::EmptyAssessment);
        }

        let violations = response.violations.unwrap_or_default();
        let visual_concerns = response.visual_concerns.unwrap_or_default();

        if violations.is_empty() && visual_concerns.is_empty() {
            let message = response
                .no_violation_message
                .unwrap_or_else(|| DEFAULT_ALL_CLEAR.to_string());
            info!("Policy check clean");
            Ok(PolicyReport::clean(message))
        } else {
            info!(
                violations = violations.len(),
                visual_concerns = visual_concerns.len(),
                "Policy check found issues"
            );
            Ok(PolicyReport::flagged(violations, visual_concerns))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhasha_llm::MockClient;

    fn checker(client: &Arc<MockClient>) -> PolicyChecker<MockClient> {
        PolicyChecker::new(Arc::clone(client), PolicyConfig::default())
    }

    const LONG_ENOUGH: &str = "This is a post that is clearly long enough to review.";

    #[tokio::test]
    async fn test_short_input_rejected_without_call() {
        let client = Arc::new(MockClient::default());
        let result = checker(&client)
            .check_text("too short", LanguageCode::English)
            .await;
        assert!(matches!(result, Err(PolicyError::InputTooShort { min: 20 })));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_clean_content_gets_all_clear() {
        let client = Arc::new(MockClient::new(
            r#"{"violations":[],"noViolationMessage":"Looks fine."}"#,
        ));
        let report = checker(&client)
            .check_text(LONG_ENOUGH, LanguageCode::English)
            .await
            .unwrap();
        assert!(report.is_clean());
        assert_eq!(report.no_violation_message.as_deref(), Some("Looks fine."));
        assert_eq!(client.temperatures(), vec![0.2]);
    }

    #[tokio::test]
    async fn test_missing_message_filled_in_when_clean() {
        let client = Arc::new(MockClient::new(r#"{"violations":[]}"#));
        let report = checker(&client)
            .check_text(LONG_ENOUGH, LanguageCode::Hindi)
            .await
            .unwrap();
        assert_eq!(
            report.no_violation_message.as_deref(),
            Some(DEFAULT_ALL_CLEAR)
        );
    }

    #[tokio::test]
    async fn test_findings_suppress_contradictory_message() {
        // A model that flags a passage and still sends an all-clear is
        // internally inconsistent; the findings win.
        let client = Arc::new(MockClient::new(
            r#"{"violations":[{"content":"bad part","policyCategory":"Harassment","explanation":"targets a person","suggestion":"remove it"}],
                "noViolationMessage":"all good"}"#,
        ));
        let report = checker(&client)
            .check_text(LONG_ENOUGH, LanguageCode::English)
            .await
            .unwrap();
        assert_eq!(report.violations.len(), 1);
        assert!(report.no_violation_message.is_none());
    }

    #[tokio::test]
    async fn test_empty_assessment_is_an_error() {
        let client = Arc::new(MockClient::new("{}"));
        let result = checker(&client)
            .check_text(LONG_ENOUGH, LanguageCode::English)
            .await;
        assert!(matches!(result, Err(PolicyError::EmptyAssessment)));
    }

    #[tokio::test]
    async fn test_image_check_attaches_media() {
        let client = Arc::new(MockClient::new(
            r#"{"violations":[],"visualConcerns":[],"noViolationMessage":"Clean image."}"#,
        ));
        let report = checker(&client)
            .check_image("data:image/jpeg;base64,/9j/4AAQ")
            .await
            .unwrap();
        assert!(report.is_clean());

        let request = client.last_request().unwrap();
        assert_eq!(request.media.unwrap().mime_type, "image/jpeg");
        assert_eq!(client.temperatures(), vec![0.1]);
    }

    #[tokio::test]
    async fn test_image_check_rejects_plain_url() {
        let client = Arc::new(MockClient::default());
        let result = checker(&client)
            .check_image("https://example.com/image.png")
            .await;
        assert!(matches!(result, Err(PolicyError::InvalidImage(_))));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_visual_concerns_alone_flag_the_report() {
        let client = Arc::new(MockClient::new(
            r#"{"violations":[],"visualConcerns":["graphic depiction of injury"]}"#,
        ));
        let report = checker(&client)
            .check_image("data:image/png;base64,iVBOR")
            .await
            .unwrap();
        assert!(!report.is_clean());
        assert_eq!(report.visual_concerns.len(), 1);
    }
}
