//! Correct command implementation.

use crate::cli::CorrectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bhasha_correct::CorrectionEngine;
use bhasha_llm::GeminiClient;
use std::sync::Arc;

/// Execute the correct command.
pub async fn execute_correct(
    args: CorrectArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let engine = CorrectionEngine::new(client, config.correct.clone());
    let result = engine.correct(&args.text, args.language.into()).await?;
    println!("{}", formatter.correction(&result)?);
    Ok(())
}
