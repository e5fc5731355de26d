//! Summarize command implementation.

use crate::cli::SummarizeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bhasha_correct::CorrectionEngine;
use bhasha_llm::GeminiClient;
use std::sync::Arc;

/// Execute the summarize command.
pub async fn execute_summarize(
    args: SummarizeArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let engine = CorrectionEngine::new(client, config.correct.clone());
    let summary = engine.summarize(&args.text, args.language.into()).await?;
    println!("{}", formatter.text("summary", &summary)?);
    Ok(())
}
