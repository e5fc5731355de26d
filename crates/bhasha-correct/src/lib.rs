//! Bhasha Correction Engine
//!
//! Per-language spelling and grammar correction with validation and repair
//! of probabilistic model output.
//!
//! # Overview
//!
//! The engine sends text to the completion service with strict fidelity
//! instructions, then validates the structured response: any correction
//! whose `original` and `corrected` are equivalent after Unicode
//! normalization is a no-op and gets dropped. If even one no-op had to be
//! filtered, the model's full-text rewrite is discarded as well and the
//! caller's original text is returned instead - a model that hallucinates
//! invalid corrections cannot be trusted for its free-text rewrite either.
//!
//! Transport failures and malformed responses fail soft: the caller gets
//! the original text with no corrections, never an error.
//!
//! # Example
//!
//! ```
//! use bhasha_correct::{CorrectConfig, CorrectionEngine};
//! use bhasha_domain::LanguageCode;
//! use bhasha_llm::MockClient;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let client = Arc::new(MockClient::new(
//!     r#"{"correctedText":"fixed","corrections":[]}"#,
//! ));
//! let engine = CorrectionEngine::new(client, CorrectConfig::default());
//! let result = engine.correct("text", LanguageCode::Malayalam).await.unwrap();
//! assert_eq!(result.corrected_text, "fixed");
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod prompt;
mod shapes;

pub use config::CorrectConfig;
pub use engine::{CorrectionEngine, LanguageDetection};
pub use error::CorrectError;
