//! Report types for policy and fact checks

use serde::{Deserialize, Serialize};

/// One flagged passage in a policy check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyViolation {
    /// The exact passage that was flagged
    pub content: String,

    /// Which guideline area it falls under (e.g. "Hate speech")
    pub policy_category: String,

    /// Why the passage was flagged
    pub explanation: String,

    /// A suggested rewording that would comply
    pub suggestion: String,
}

/// Outcome of a policy check over text or an image
///
/// Invariant: `no_violation_message` is present exactly when both findings
/// lists are empty. The checker enforces this locally; it is never left to
/// the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyReport {
    /// Flagged passages, empty when the content is clean
    pub violations: Vec<PolicyViolation>,

    /// Concerns about imagery (for image checks), empty when clean
    pub visual_concerns: Vec<String>,

    /// All-clear message, present only when nothing was flagged
    pub no_violation_message: Option<String>,
}

impl PolicyReport {
    /// A clean report carrying an all-clear message
    pub fn clean(message: impl Into<String>) -> Self {
        Self {
            violations: Vec::new(),
            visual_concerns: Vec::new(),
            no_violation_message: Some(message.into()),
        }
    }

    /// A report with findings; any all-clear message is dropped
    pub fn flagged(violations: Vec<PolicyViolation>, visual_concerns: Vec<String>) -> Self {
        Self {
            violations,
            visual_concerns,
            no_violation_message: None,
        }
    }

    /// Whether nothing was flagged
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.visual_concerns.is_empty()
    }
}

/// Fact-check verdict for a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Supported by the found coverage
    Accurate,
    /// Contradicted by the found coverage
    Inaccurate,
    /// Technically true but framed to deceive
    Misleading,
    /// Coverage was absent or insufficient to judge
    Unverifiable,
}

/// How strongly the coverage supports the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Multiple consistent sources
    High,
    /// Partial or single-source support
    Medium,
    /// Little or no usable coverage
    Low,
}

/// One news article found while researching a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Headline
    pub title: String,

    /// Canonical article URL; also the dedup key
    pub link: String,

    /// Publisher name, when known
    pub source: Option<String>,

    /// Short excerpt, when the search provides one
    pub snippet: Option<String>,
}

/// Outcome of fact-checking one statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckReport {
    /// The verdict on the statement
    pub verdict: Verdict,

    /// Confidence in the verdict
    pub confidence: Confidence,

    /// Reasoning behind the verdict, in plain language
    pub explanation: String,

    /// The articles the verdict was based on
    pub sources: Vec<NewsArticle>,
}

impl FactCheckReport {
    /// A locally constructed unverifiable verdict, used when no research
    /// could be done (statement too short, no coverage found)
    pub fn unverifiable(explanation: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Unverifiable,
            confidence: Confidence::Low,
            explanation: explanation.into(),
            sources: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report_has_message_and_no_findings() {
        let report = PolicyReport::clean("all good");
        assert!(report.is_clean());
        assert_eq!(report.no_violation_message.as_deref(), Some("all good"));
    }

    #[test]
    fn test_flagged_report_never_carries_message() {
        let report = PolicyReport::flagged(Vec::new(), vec!["graphic imagery".to_string()]);
        assert!(!report.is_clean());
        assert!(report.no_violation_message.is_none());
    }

    #[test]
    fn test_verdict_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Verdict::Misleading).unwrap(),
            "\"misleading\""
        );
        let parsed: Confidence = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, Confidence::High);
    }

    #[test]
    fn test_unverifiable_report_shape() {
        let report = FactCheckReport::unverifiable("no coverage");
        assert_eq!(report.verdict, Verdict::Unverifiable);
        assert_eq!(report.confidence, Confidence::Low);
        assert!(report.sources.is_empty());
    }
}
