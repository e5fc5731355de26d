//! Prompt construction for policy assessment and fact checking

use crate::report::NewsArticle;
use bhasha_domain::LanguageCode;

/// Build the text policy-assessment prompt
pub(crate) fn policy_prompt(content: &str, language: LanguageCode) -> String {
    format!(
        r#"You are a social media content policy reviewer. Analyze the following {language} content against common platform community guidelines (hate speech, harassment, violence, misinformation, adult content, spam).

- Quote the exact passage in 'content' for every violation you find.
- Classify each violation under 'policyCategory' and explain it in 'explanation'.
- Provide a compliant rewording in 'suggestion'.
- If the content is fully compliant, return an empty 'violations' array and set 'noViolationMessage' to a short all-clear sentence.

Content to Review:
"{content}""#,
        language = language.display_name(),
        content = content,
    )
}

/// Build the image policy-assessment prompt
pub(crate) fn image_policy_prompt() -> String {
    r#"You are a social media content policy reviewer. Analyze the provided image, including any text visible in it, against common platform community guidelines (graphic violence, hate symbols, adult content, dangerous activities, misinformation in overlaid text).

- List each problem with visible text under 'violations', quoting the text in 'content' with 'policyCategory', 'explanation', and 'suggestion'.
- List concerns about the imagery itself as plain sentences in 'visualConcerns'.
- If the image is fully compliant, return empty arrays and set 'noViolationMessage' to a short all-clear sentence."#
        .to_string()
}

/// Build the fact-check verdict prompt over found coverage
pub(crate) fn fact_prompt(statement: &str, articles: &[NewsArticle]) -> String {
    let mut coverage = String::new();
    for (i, article) in articles.iter().enumerate() {
        coverage.push_str(&format!("{}. {}", i + 1, article.title));
        if let Some(source) = &article.source {
            coverage.push_str(&format!(" ({})", source));
        }
        if let Some(snippet) = &article.snippet {
            coverage.push_str(&format!("\n   {}", snippet));
        }
        coverage.push('\n');
    }

    format!(
        r#"You are a meticulous fact-checker. Judge the statement below strictly against the news coverage provided; do not rely on outside knowledge.

Statement:
"{statement}"

News Coverage:
{coverage}
Return a JSON object with:
- 'verdict': one of "accurate", "inaccurate", "misleading", "unverifiable"
- 'confidence': one of "high", "medium", "low"
- 'explanation': a short plain-language justification citing the coverage

If the coverage does not address the statement, the verdict must be "unverifiable"."#,
        statement = statement,
        coverage = coverage,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_prompt_quotes_content() {
        let prompt = policy_prompt("some post text", LanguageCode::Hindi);
        assert!(prompt.contains("some post text"));
        assert!(prompt.contains("Hindi"));
        assert!(prompt.contains("noViolationMessage"));
    }

    #[test]
    fn test_fact_prompt_numbers_articles() {
        let articles = vec![NewsArticle {
            title: "Headline".to_string(),
            link: "https://example.com/a".to_string(),
            source: Some("The Paper".to_string()),
            snippet: Some("An excerpt.".to_string()),
        }];
        let prompt = fact_prompt("the claim", &articles);
        assert!(prompt.contains("1. Headline (The Paper)"));
        assert!(prompt.contains("An excerpt."));
        assert!(prompt.contains("the claim"));
    }
}
