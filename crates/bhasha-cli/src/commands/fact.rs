//! Fact-check command implementation.

use crate::cli::FactCheckArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bhasha_llm::GeminiClient;
use bhasha_policy::{FactChecker, SerpApiClient};
use std::sync::Arc;

/// Execute the fact-check command.
pub async fn execute_fact_check(
    args: FactCheckArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let serpapi_key = config.serpapi_key().ok_or_else(|| {
        CliError::Config(
            "No news search API key. Set SERPAPI_API_KEY or add serpapi_api_key to the [api] \
             section of the config file."
                .into(),
        )
    })?;
    let search = Arc::new(SerpApiClient::new(serpapi_key)?);

    let checker = FactChecker::new(client, search, config.policy.clone());
    let report = checker.check(&args.statement, args.language.into()).await?;
    println!("{}", formatter.fact(&report)?);
    Ok(())
}
