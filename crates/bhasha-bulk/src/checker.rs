//! Concurrent multi-URL content checking

use crate::error::BulkError;
use bhasha_correct::CorrectionEngine;
use bhasha_domain::{dedup_by_original, BulkCheckResult, CorrectionOutcome, LanguageCode};
use bhasha_extract::ContentSource;
use bhasha_llm::CompletionClient;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};

/// Checks a batch of URLs for spelling and grammar errors
///
/// The content source decides what text a URL yields (a video title, a post
/// caption); the checker only fans out, corrects, and aggregates. Results
/// come back in input order, one per URL, regardless of individual failures.
pub struct BulkChecker<C: CompletionClient> {
    engine: CorrectionEngine<C>,
    source: Arc<dyn ContentSource>,
}

impl<C: CompletionClient> BulkChecker<C> {
    /// Create a checker over the given correction engine and content source
    pub fn new(engine: CorrectionEngine<C>, source: Arc<dyn ContentSource>) -> Self {
        Self { engine, source }
    }

    /// Check every URL concurrently and return one result per URL
    ///
    /// A fetch or check failure on one URL is recorded in that URL's entry
    /// and never aborts its siblings.
    pub async fn check_urls(
        &self,
        urls: &[String],
        language: LanguageCode,
    ) -> Result<Vec<BulkCheckResult>, BulkError> {
        if !language.is_correctable() {
            return Err(BulkError::UnsupportedLanguage(
                language.as_str().to_string(),
            ));
        }

        info!(count = urls.len(), language = language.as_str(), "Starting bulk check");
        let results = join_all(urls.iter().map(|url| self.check_one(url, language))).await;

        let failed = results
            .iter()
            .filter(|r| r.content.is_none())
            .count();
        if failed > 0 {
            warn!(failed, total = urls.len(), "Some URLs could not be fetched");
        }
        Ok(results)
    }

    /// Check a single URL; failures are folded into the result
    async fn check_one(&self, url: &str, language: LanguageCode) -> BulkCheckResult {
        let content = match self.source.fetch_content(url).await {
            Ok(content) => content,
            Err(e) => {
                warn!(url, error = %e, "Fetch failed");
                return BulkCheckResult::fetch_error(url, e.to_string());
            }
        };

        // Non-English content is checked twice: once in its own language and
        // once for stray English spelling errors, since titles and captions
        // routinely mix scripts.
        let (outcome, english_extras) = if language == LanguageCode::English {
            (self.engine.outcome(&content, language).await, Vec::new())
        } else {
            tokio::join!(
                self.engine.outcome(&content, language),
                self.engine.check_spelling(&content)
            )
        };

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => return BulkCheckResult::fetch_error(url, e.to_string()),
        };

        let mut items = outcome.into_items();
        items.extend(CorrectionOutcome::EnglishSpelling(english_extras).into_items());
        let items = dedup_by_original(items);

        if items.is_empty() {
            BulkCheckResult::ok(url, content)
        } else {
            BulkCheckResult::errors_found(url, content, items)
        }
    }
}
