//! Health command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};

/// Execute the health command: report which credentials are configured.
///
/// Exits nonzero when the completion API key is missing, since nothing
/// works without it. The news search key is optional and only reported.
pub fn execute_health(config: &Config) -> Result<()> {
    let serpapi = config.serpapi_key();
    match serpapi {
        Some(key) => println!("News search API key: configured ({})", preview(&key)),
        None => println!("News search API key: not configured (fact-check unavailable)"),
    }

    match config.gemini_key() {
        Ok(key) => {
            println!("Completion API key: configured ({})", preview(&key));
            Ok(())
        }
        Err(_) => {
            println!("Completion API key: MISSING");
            Err(CliError::Config(
                "No completion API key configured. Set GEMINI_API_KEY.".into(),
            ))
        }
    }
}

/// Show just enough of a key to recognize it without leaking it.
fn preview(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return "***".to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
