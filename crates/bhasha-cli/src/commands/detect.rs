//! Detect command implementation.

use crate::cli::DetectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bhasha_correct::CorrectionEngine;
use bhasha_llm::GeminiClient;
use std::sync::Arc;

/// Execute the detect command.
pub async fn execute_detect(
    args: DetectArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let engine = CorrectionEngine::new(client, config.correct.clone());
    let detection = engine.detect_language(&args.text).await?;
    println!("{}", formatter.detection(&detection)?);
    Ok(())
}
