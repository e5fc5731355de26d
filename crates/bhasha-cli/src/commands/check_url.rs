//! Check-url command implementation.

use crate::cli::CheckUrlArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bhasha_bulk::UrlChecker;
use bhasha_correct::CorrectionEngine;
use bhasha_extract::{ContentExtractor, ContentSource};
use bhasha_llm::GeminiClient;
use std::sync::Arc;

/// Execute the check-url command.
pub async fn execute_check_url(
    args: CheckUrlArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let source: Arc<dyn ContentSource> =
        Arc::new(ContentExtractor::new(config.extract.clone())?);
    let engine = CorrectionEngine::new(client, config.correct.clone());
    let checker = UrlChecker::new(engine, source);

    let report = checker.check_url(&args.url, args.language.into()).await?;
    println!("{}", formatter.url_check(&report)?);
    Ok(())
}
