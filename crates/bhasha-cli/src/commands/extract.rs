//! Extract and image-text command implementations.

use crate::cli::{ExtractArgs, ImageTextArgs};
use crate::commands::image_data_uri;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bhasha_extract::{ContentExtractor, ImageTextExtractor};
use bhasha_llm::GeminiClient;
use std::sync::Arc;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let extractor = ContentExtractor::new(config.extract.clone())?;
    let document = extractor.extract(&args.url).await?;
    println!("{}", formatter.document(&document)?);
    Ok(())
}

/// Execute the image-text command.
pub async fn execute_image_text(
    args: ImageTextArgs,
    client: Arc<GeminiClient>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let data_uri = image_data_uri(&args.image)?;
    let extractor = ImageTextExtractor::new(client, config.extract.clone());
    let text = extractor.extract_text(&data_uri, args.language.into()).await?;
    println!("{}", formatter.text("extractedText", &text)?);
    Ok(())
}
