//! Error types for content extraction

use bhasha_llm::LlmError;
use thiserror::Error;

/// Errors that can occur while fetching or extracting remote content
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The URL could not be parsed or points at the wrong kind of page
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The transport layer failed before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The remote site answered with a non-success status
    #[error("Failed to fetch URL: {status}. The website may be blocking automated access.")]
    Fetch {
        /// The HTTP status code returned by the site
        status: u16,
    },

    /// The page was fetched but no meaningful article body was found
    #[error(
        "Could not extract a significant amount of article content from the page. \
         It might be structured in a way that's hard to parse, or it may be behind a paywall."
    )]
    TooLittleContent,

    /// The video does not exist or its URL is wrong
    #[error("Video not found. It may have been deleted or the URL may be incorrect.")]
    VideoNotFound,

    /// The video exists but its metadata is off limits
    #[error("This video is private or has embedding disabled, so its title cannot be fetched.")]
    VideoUnavailable,

    /// The post page carried no caption metadata
    #[error(
        "Could not find a caption for this post. It may be private, age-restricted, \
         or the page may have changed."
    )]
    CaptionNotFound,

    /// The platform asked us to slow down
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    /// A completion call failed during image text extraction
    #[error("Completion error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<LlmError> for ExtractError {
    fn from(err: LlmError) -> Self {
        ExtractError::Llm(err.to_string())
    }
}

impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        ExtractError::Network(err.to_string())
    }
}
