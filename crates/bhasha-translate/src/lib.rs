//! Bhasha Chunked Translator
//!
//! Translates arbitrary-length documents by splitting them into
//! paragraph-respecting, size-bounded chunks, translating every chunk
//! concurrently, and stitching the results back together in order.
//!
//! # Guarantees
//!
//! - Paragraph integrity outranks the size ceiling: a single paragraph
//!   longer than the ceiling becomes its own oversized chunk rather than
//!   being split mid-paragraph.
//! - Per-chunk failure isolation: a chunk whose completion call fails is
//!   substituted with its original untranslated text; the operation always
//!   completes with a best-effort document.
//! - Output chunk order strictly matches input order; concurrency never
//!   reorders results.
//!
//! # Example
//!
//! ```
//! use bhasha_translate::{TranslateConfig, Translator};
//! use bhasha_domain::LanguageCode;
//! use bhasha_llm::MockClient;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let client = Arc::new(MockClient::new(
//!     r#"{"convertedArticleText":"translated"}"#,
//! ));
//! let translator = Translator::new(client, TranslateConfig::default());
//! let document = translator
//!     .translate_and_correct("Hello.", LanguageCode::Malayalam)
//!     .await
//!     .unwrap();
//! assert_eq!(document, "translated");
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod splitter;
mod translator;

pub use config::TranslateConfig;
pub use splitter::{join_outcomes, split_paragraphs, ChunkSplitter};
pub use translator::{TranslateError, Translator};
