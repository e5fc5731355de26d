//! Translate command implementation.

use crate::cli::TranslateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bhasha_llm::GeminiClient;
use bhasha_translate::Translator;
use std::sync::Arc;

/// Execute the translate command.
pub async fn execute_translate(
    args: TranslateArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let translator = Translator::new(client, config.translate.clone());
    let translated = translator
        .translate_and_correct(&args.text, args.to.into())
        .await?;
    println!("{}", formatter.text("translatedText", &translated)?);
    Ok(())
}
