//! Bulk-check command implementation.

use crate::cli::BulkCheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bhasha_bulk::BulkChecker;
use bhasha_correct::CorrectionEngine;
use bhasha_domain::Platform;
use bhasha_extract::{CaptionScraper, ContentSource, VideoTitleClient};
use bhasha_llm::GeminiClient;
use std::sync::Arc;
use tracing::info;

/// Execute the bulk-check command.
pub async fn execute_bulk_check(
    args: BulkCheckArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let platform: Platform = args.platform.into();
    info!(platform = platform.as_str(), urls = args.urls.len(), "bulk check");
    let source: Arc<dyn ContentSource> = match platform {
        Platform::YouTube => Arc::new(VideoTitleClient::new(config.extract.timeout_secs)?),
        Platform::Meta => Arc::new(CaptionScraper::new(config.extract.timeout_secs)?),
    };

    let engine = CorrectionEngine::new(client, config.correct.clone());
    let checker = BulkChecker::new(engine, source);
    let results = checker.check_urls(&args.urls, args.language.into()).await?;
    println!("{}", formatter.bulk(&results)?);
    Ok(())
}
