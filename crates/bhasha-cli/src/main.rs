//! Bhasha CLI - Spelling, grammar, and content checks for five languages.

use bhasha_cli::commands;
use bhasha_cli::{Cli, Command, Config, Formatter};
use bhasha_llm::GeminiClient;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> bhasha_cli::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.validate()?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        // Commands that never touch the completion service
        Command::Health => commands::execute_health(&config),
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter).await,

        // Everything else needs a completion client
        cmd => {
            let client = Arc::new(build_client(&config)?);
            match cmd {
                Command::Correct(args) => {
                    commands::execute_correct(args, client, &config, &formatter).await
                }
                Command::CheckUrl(args) => {
                    commands::execute_check_url(args, client, &config, &formatter).await
                }
                Command::Detect(args) => {
                    commands::execute_detect(args, client, &config, &formatter).await
                }
                Command::Translate(args) => {
                    commands::execute_translate(args, client, &config, &formatter).await
                }
                Command::Summarize(args) => {
                    commands::execute_summarize(args, client, &config, &formatter).await
                }
                Command::ImageText(args) => {
                    commands::execute_image_text(args, client, &config, &formatter).await
                }
                Command::BulkCheck(args) => {
                    commands::execute_bulk_check(args, client, &config, &formatter).await
                }
                Command::Policy(args) => {
                    commands::execute_policy(args, client, &config, &formatter).await
                }
                Command::ImagePolicy(args) => {
                    commands::execute_image_policy(args, client, &config, &formatter).await
                }
                Command::FactCheck(args) => {
                    commands::execute_fact_check(args, client, &config, &formatter).await
                }
                Command::Health | Command::Extract(_) => unreachable!(),
            }
        }
    }
}

fn build_client(config: &Config) -> bhasha_cli::Result<GeminiClient> {
    let key = config.gemini_key()?;
    let client = match &config.api.model {
        Some(model) => GeminiClient::new(key, model.clone())?,
        None => GeminiClient::default_model(key)?,
    };
    Ok(client)
}
