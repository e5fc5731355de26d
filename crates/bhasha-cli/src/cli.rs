//! CLI command definitions and argument parsing.

use bhasha_domain::{LanguageCode, Platform};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bhasha CLI - Spelling, grammar, and content checks for five languages.
#[derive(Debug, Parser)]
#[command(name = "bhasha")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

/// Language argument shared by most commands.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LanguageArg {
    /// English
    English,
    /// Malayalam
    Malayalam,
    /// Tamil
    Tamil,
    /// Kannada
    Kannada,
    /// Hindi
    Hindi,
}

impl From<LanguageArg> for LanguageCode {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => LanguageCode::English,
            LanguageArg::Malayalam => LanguageCode::Malayalam,
            LanguageArg::Tamil => LanguageCode::Tamil,
            LanguageArg::Kannada => LanguageCode::Kannada,
            LanguageArg::Hindi => LanguageCode::Hindi,
        }
    }
}

/// Platform argument for bulk checks.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PlatformArg {
    /// Video titles via the oEmbed endpoint
    Youtube,
    /// Post captions via page markup
    Meta,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Youtube => Platform::YouTube,
            PlatformArg::Meta => Platform::Meta,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Correct spelling and grammar in text
    Correct(CorrectArgs),

    /// Detect the primary language of text
    Detect(DetectArgs),

    /// Translate text into a target language
    Translate(TranslateArgs),

    /// Summarize text in its own language
    Summarize(SummarizeArgs),

    /// Extract the article text from a web page
    Extract(ExtractArgs),

    /// Extract an article from a URL and check it in one step
    CheckUrl(CheckUrlArgs),

    /// Extract the readable text from an image
    ImageText(ImageTextArgs),

    /// Check a batch of URLs for spelling and grammar errors
    BulkCheck(BulkCheckArgs),

    /// Check text against platform community guidelines
    Policy(PolicyArgs),

    /// Check an image against platform community guidelines
    ImagePolicy(ImagePolicyArgs),

    /// Fact-check a statement against recent news coverage
    FactCheck(FactCheckArgs),

    /// Report whether API credentials are configured
    Health,
}

/// Arguments for the correct command.
#[derive(Debug, Parser)]
pub struct CorrectArgs {
    /// The text to correct
    pub text: String,

    /// Language of the text
    #[arg(short, long, value_enum)]
    pub language: LanguageArg,
}

/// Arguments for the detect command.
#[derive(Debug, Parser)]
pub struct DetectArgs {
    /// The text to analyze
    pub text: String,
}

/// Arguments for the translate command.
#[derive(Debug, Parser)]
pub struct TranslateArgs {
    /// The text to translate
    pub text: String,

    /// Target language
    #[arg(short, long, value_enum)]
    pub to: LanguageArg,
}

/// Arguments for the summarize command.
#[derive(Debug, Parser)]
pub struct SummarizeArgs {
    /// The text to summarize
    pub text: String,

    /// Language the summary should be written in
    #[arg(short, long, value_enum)]
    pub language: LanguageArg,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// The page URL to extract from
    pub url: String,
}

/// Arguments for the check-url command.
#[derive(Debug, Parser)]
pub struct CheckUrlArgs {
    /// The article URL to fetch and check
    pub url: String,

    /// Language the article is expected to be in
    #[arg(short, long, value_enum)]
    pub language: LanguageArg,
}

/// Arguments for the image-text command.
#[derive(Debug, Parser)]
pub struct ImageTextArgs {
    /// Path to the image file (png, jpg, webp, or gif)
    pub image: PathBuf,

    /// Language expected in the image
    #[arg(short, long, value_enum)]
    pub language: LanguageArg,
}

/// Arguments for the bulk-check command.
#[derive(Debug, Parser)]
pub struct BulkCheckArgs {
    /// URLs to check
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Language to check the fetched content in
    #[arg(short, long, value_enum)]
    pub language: LanguageArg,

    /// Which platform the URLs belong to
    #[arg(short, long, value_enum)]
    pub platform: PlatformArg,
}

/// Arguments for the policy command.
#[derive(Debug, Parser)]
pub struct PolicyArgs {
    /// The text to review
    pub text: String,

    /// Language of the text
    #[arg(short, long, value_enum)]
    pub language: LanguageArg,
}

/// Arguments for the image-policy command.
#[derive(Debug, Parser)]
pub struct ImagePolicyArgs {
    /// Path to the image file (png, jpg, webp, or gif)
    pub image: PathBuf,
}

/// Arguments for the fact-check command.
#[derive(Debug, Parser)]
pub struct FactCheckArgs {
    /// The statement to fact-check
    pub statement: String,

    /// Language the statement is written in
    #[arg(short, long, value_enum)]
    pub language: LanguageArg,
}
