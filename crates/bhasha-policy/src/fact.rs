//! Statement fact-checking against live news coverage

use crate::config::PolicyConfig;
use crate::error::PolicyError;
use crate::prompt;
use crate::report::{Confidence, FactCheckReport, NewsArticle, Verdict};
use crate::search::NewsSearch;
use bhasha_domain::LanguageCode;
use bhasha_llm::{complete_json, CompletionClient, CompletionRequest};
use bhasha_translate::{TranslateConfig, Translator};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

const TOO_SHORT_EXPLANATION: &str =
    "The statement is too short to be meaningfully fact-checked.";
const NO_COVERAGE_EXPLANATION: &str =
    "No recent news coverage was found for this statement, so it cannot be verified.";

#[derive(Debug, Deserialize)]
struct FactResponse {
    verdict: Option<Verdict>,
    confidence: Option<Confidence>,
    explanation: Option<String>,
}

/// Fact-checks statements by researching news coverage and asking the
/// model for a verdict grounded in what was found
///
/// Non-English statements are searched twice: in their own locale as
/// written, and in English after translation, since coverage of regional
/// stories is often split across both.
pub struct FactChecker<C: CompletionClient> {
    client: Arc<C>,
    translator: Translator<C>,
    search: Arc<dyn NewsSearch>,
    config: PolicyConfig,
}

impl<C: CompletionClient> FactChecker<C> {
    /// Create a checker over the given completion client and news source
    pub fn new(client: Arc<C>, search: Arc<dyn NewsSearch>, config: PolicyConfig) -> Self {
        let translator = Translator::new(Arc::clone(&client), TranslateConfig::default());
        Self {
            client,
            translator,
            search,
            config,
        }
    }

    /// Fact-check `statement`, written in `language`
    ///
    /// A statement too short to research, or one with no coverage at all,
    /// comes back unverifiable with low confidence; neither case spends a
    /// completion call on a verdict.
    pub async fn check(
        &self,
        statement: &str,
        language: LanguageCode,
    ) -> Result<FactCheckReport, PolicyError> {
        let statement = statement.trim();
        if statement.chars().count() < self.config.fact_min_chars {
            return Ok(FactCheckReport::unverifiable(TOO_SHORT_EXPLANATION));
        }

        let articles = self.research(statement, language).await?;
        if articles.is_empty() {
            info!("No coverage found, statement is unverifiable");
            return Ok(FactCheckReport::unverifiable(NO_COVERAGE_EXPLANATION));
        }

        let request = CompletionRequest::new(prompt::fact_prompt(statement, &articles))
            .with_temperature(self.config.fact_temperature);
        let response: FactResponse = complete_json(&*self.client, request).await?;

        let Some(verdict) = response.verdict else {
            return Err(PolicyError::EmptyAssessment);
        };

        Ok(FactCheckReport {
            verdict,
            confidence: response.confidence.unwrap_or(Confidence::Low),
            explanation: response.explanation.unwrap_or_default(),
            sources: articles,
        })
    }

    /// Gather coverage for the statement, deduplicated by link and capped
    /// at the configured article budget
    async fn research(
        &self,
        statement: &str,
        language: LanguageCode,
    ) -> Result<Vec<NewsArticle>, PolicyError> {
        let mut found = if language == LanguageCode::English {
            self.search_soft(statement, language).await
        } else {
            let english_query = self
                .translator
                .translate_and_correct(statement, LanguageCode::English)
                .await
                .map_err(|e| PolicyError::Translation(e.to_string()))?;

            let (regional, english) = tokio::join!(
                self.search_soft(statement, language),
                self.search_soft(&english_query, LanguageCode::English)
            );
            let mut all = regional;
            all.extend(english);
            all
        };

        let mut seen = HashSet::new();
        found.retain(|article| seen.insert(article.link.clone()));
        found.truncate(self.config.max_articles);
        Ok(found)
    }

    /// One search; provider failures degrade to no results
    async fn search_soft(&self, query: &str, language: LanguageCode) -> Vec<NewsArticle> {
        match self.search.search(query, language).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!(language = language.as_str(), error = %e, "news search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bhasha_llm::MockClient;
    use std::sync::Mutex;

    struct StubSearch {
        articles: Vec<NewsArticle>,
        queries: Mutex<Vec<(String, LanguageCode)>>,
        fail: bool,
    }

    impl StubSearch {
        fn with_articles(articles: Vec<NewsArticle>) -> Arc<Self> {
            Arc::new(Self {
                articles,
                queries: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                articles: Vec::new(),
                queries: Mutex::new(Vec::new()),
                fail: true,
            })
        }

        fn queries(&self) -> Vec<(String, LanguageCode)> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NewsSearch for StubSearch {
        async fn search(
            &self,
            query: &str,
            language: LanguageCode,
        ) -> Result<Vec<NewsArticle>, PolicyError> {
            self.queries
                .lock()
                .unwrap()
                .push((query.to_string(), language));
            if self.fail {
                return Err(PolicyError::Search("stub outage".to_string()));
            }
            Ok(self.articles.clone())
        }
    }

    fn article(title: &str, link: &str) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            link: link.to_string(),
            source: None,
            snippet: None,
        }
    }

    fn checker(
        client: &Arc<MockClient>,
        search: Arc<dyn NewsSearch>,
    ) -> FactChecker<MockClient> {
        FactChecker::new(Arc::clone(client), search, PolicyConfig::default())
    }

    const VERDICT_JSON: &str =
        r#"{"verdict":"accurate","confidence":"high","explanation":"matches coverage"}"#;

    #[tokio::test]
    async fn test_short_statement_is_unverifiable_without_any_calls() {
        let search = StubSearch::with_articles(vec![article("a", "https://a")]);
        let client = Arc::new(MockClient::default());
        let checker = checker(&client, search.clone());

        let report = checker.check("hm", LanguageCode::English).await.unwrap();
        assert_eq!(report.verdict, Verdict::Unverifiable);
        assert_eq!(report.confidence, Confidence::Low);
        assert_eq!(client.call_count(), 0);
        assert!(search.queries().is_empty());
    }

    #[tokio::test]
    async fn test_no_coverage_is_unverifiable_without_verdict_call() {
        let search = StubSearch::with_articles(Vec::new());
        let client = Arc::new(MockClient::default());
        let checker = checker(&client, search);

        let report = checker
            .check("the bridge opened in 2020", LanguageCode::English)
            .await
            .unwrap();
        assert_eq!(report.verdict, Verdict::Unverifiable);
        assert!(report.sources.is_empty());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_english_statement_searches_once() {
        let search = StubSearch::with_articles(vec![article("coverage", "https://a")]);
        let client = Arc::new(MockClient::new(VERDICT_JSON));
        let checker = checker(&client, search.clone());

        let report = checker
            .check("the bridge opened in 2020", LanguageCode::English)
            .await
            .unwrap();
        assert_eq!(report.verdict, Verdict::Accurate);
        assert_eq!(report.confidence, Confidence::High);
        assert_eq!(report.sources.len(), 1);

        let queries = search.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0],
            ("the bridge opened in 2020".to_string(), LanguageCode::English)
        );
        assert_eq!(client.temperatures(), vec![0.2]);
    }

    #[tokio::test]
    async fn test_regional_statement_searches_both_locales() {
        let search = StubSearch::with_articles(vec![article("coverage", "https://a")]);
        let client = Arc::new(MockClient::default());
        client.add_response(
            "CRITICAL",
            r#"{"convertedArticleText":"translated claim"}"#,
        );
        client.add_response("fact-checker", VERDICT_JSON);
        let checker = checker(&client, search.clone());

        let report = checker
            .check("some malayalam claim", LanguageCode::Malayalam)
            .await
            .unwrap();
        assert_eq!(report.verdict, Verdict::Accurate);

        let queries = search.queries();
        assert_eq!(queries.len(), 2);
        assert!(queries
            .contains(&("some malayalam claim".to_string(), LanguageCode::Malayalam)));
        assert!(queries.contains(&("translated claim".to_string(), LanguageCode::English)));
    }

    #[tokio::test]
    async fn test_duplicate_links_are_merged_and_capped() {
        // Both locales return the same three articles plus extras; the
        // verdict prompt must see each link once, at most five total.
        let articles: Vec<NewsArticle> = (0..7)
            .map(|i| article(&format!("t{i}"), &format!("https://a/{i}")))
            .collect();
        let search = StubSearch::with_articles(articles);
        let client = Arc::new(MockClient::default());
        client.add_response("CRITICAL", r#"{"convertedArticleText":"claim"}"#);
        client.add_response("fact-checker", VERDICT_JSON);
        let checker = checker(&client, search);

        let report = checker
            .check("a tamil claim", LanguageCode::Tamil)
            .await
            .unwrap();
        assert_eq!(report.sources.len(), 5);
        let links: HashSet<_> = report.sources.iter().map(|a| a.link.clone()).collect();
        assert_eq!(links.len(), 5);
    }

    #[tokio::test]
    async fn test_search_outage_degrades_to_unverifiable() {
        let search = StubSearch::failing();
        let client = Arc::new(MockClient::default());
        let checker = checker(&client, search);

        let report = checker
            .check("a statement long enough", LanguageCode::English)
            .await
            .unwrap();
        assert_eq!(report.verdict, Verdict::Unverifiable);
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_verdict_is_an_error() {
        let search = StubSearch::with_articles(vec![article("a", "https://a")]);
        let client = Arc::new(MockClient::new(r#"{"explanation":"no verdict here"}"#));
        let checker = checker(&client, search);

        let result = checker
            .check("a checkable statement", LanguageCode::English)
            .await;
        assert!(matches!(result, Err(PolicyError::EmptyAssessment)));
    }
}
