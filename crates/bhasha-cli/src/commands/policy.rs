//! Policy and image-policy command implementations.

use crate::cli::{ImagePolicyArgs, PolicyArgs};
use crate::commands::image_data_uri;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bhasha_llm::GeminiClient;
use bhasha_policy::PolicyChecker;
use std::sync::Arc;

/// Execute the policy command.
pub async fn execute_policy(
    args: PolicyArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let checker = PolicyChecker::new(client, config.policy.clone());
    let report = checker.check_text(&args.text, args.language.into()).await?;
    println!("{}", formatter.policy(&report)?);
    Ok(())
}

/// Execute the image-policy command.
pub async fn execute_image_policy(
    args: ImagePolicyArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let data_uri = image_data_uri(&args.image)?;
    let checker = PolicyChecker::new(client, config.policy.clone());
    let report = checker.check_image(&data_uri).await?;
    println!("{}", formatter.policy(&report)?);
    Ok(())
}
