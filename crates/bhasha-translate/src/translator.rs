//! Concurrent chunk translation with per-chunk failure isolation

use crate::config::TranslateConfig;
use crate::splitter::{join_outcomes, ChunkSplitter};
use bhasha_domain::{ChunkOutcome, LanguageCode, TextChunk};
use bhasha_llm::{complete_json, CompletionClient, CompletionRequest};
use futures::future::join_all;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from the translator's outer boundary
///
/// Per-chunk failures never surface here; they become fallback
/// substitutions inside the document.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// The requested target language cannot be translated into
    #[error("Language '{0}' is not a valid translation target")]
    UnsupportedLanguage(String),
}

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    #[serde(rename = "convertedArticleText")]
    converted_article_text: Option<String>,
}

/// Translates documents chunk-by-chunk with an all-settle join
pub struct Translator<C: CompletionClient> {
    client: Arc<C>,
    config: TranslateConfig,
}

impl<C: CompletionClient> Translator<C> {
    /// Create a new translator over the given completion client
    pub fn new(client: Arc<C>, config: TranslateConfig) -> Self {
        Self { client, config }
    }

    /// Translate `text` into `target` and proofread the result
    ///
    /// Always returns a complete document: chunks whose completion call
    /// failed are carried through untranslated. Empty input is returned
    /// unchanged without any completion call.
    pub async fn translate_and_correct(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<String, TranslateError> {
        if !target.is_correctable() {
            return Err(TranslateError::UnsupportedLanguage(
                target.as_str().to_string(),
            ));
        }

        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let chunks = ChunkSplitter::new(self.config.max_chunk_chars).split(text);
        info!(
            chars = text.chars().count(),
            chunks = chunks.len(),
            target = target.as_str(),
            "split document for translation"
        );

        // One guarded future per chunk; failures become data, never
        // propagate, and join_all preserves input order.
        let outcomes = join_all(
            chunks
                .iter()
                .map(|chunk| self.translate_chunk(chunk, target)),
        )
        .await;

        let failed = outcomes.iter().filter(|o| o.failed).count();
        if failed > 0 {
            warn!(failed, total = outcomes.len(), "some chunks fell back to original text");
        }

        Ok(join_outcomes(&outcomes))
    }

    /// Translate one chunk; any failure yields the original chunk text
    async fn translate_chunk(&self, chunk: &TextChunk, target: LanguageCode) -> ChunkOutcome {
        debug!(
            index = chunk.index,
            chars = chunk.content.chars().count(),
            "translating chunk"
        );

        let request = CompletionRequest::new(chunk_prompt(&chunk.content, target))
            .with_temperature(self.config.temperature);

        let response: Result<TranslationResponse, _> =
            complete_json(&*self.client, request).await;
        match response {
            Ok(TranslationResponse {
                converted_article_text: Some(translated),
            }) if !translated.is_empty() => ChunkOutcome::translated(chunk.index, translated),
            Ok(_) => {
                warn!(index = chunk.index, "translation came back empty, keeping original chunk");
                ChunkOutcome::fallback(chunk)
            }
            Err(e) => {
                warn!(index = chunk.index, error = %e, "chunk translation failed, keeping original chunk");
                ChunkOutcome::fallback(chunk)
            }
        }
    }
}

fn chunk_prompt(chunk: &str, target: LanguageCode) -> String {
    format!(
        r#"You are an expert linguist specializing in high-fidelity translation and proofreading. Your task is to perform a two-step process on the provided "Text Chunk":
1. First, translate the ENTIRE text chunk into {language}.
2. Second, meticulously proofread the translated text for any spelling or grammatical errors and correct them.

**CRITICAL RULES:**
1.  **COMPLETE CONVERSION:** It is a CRITICAL FAILURE to summarize, shorten, or omit any part of the original text. Your final output must be a complete and faithful conversion of the *entire* text chunk. You must process from the very first word to the very last.
2.  **PRESERVE STRUCTURE:** The input chunk may contain multiple paragraphs separated by blank lines. You MUST preserve this structure exactly in your output.
3.  **ONLY OUTPUT FINAL TEXT:** Your final response must contain ONLY the fully translated and corrected text in the 'convertedArticleText' field. Do not include explanations, apologies, or any other conversational text.

**Text Chunk to Convert:**
"{chunk}"

**Target Language:** {language}"#,
        language = target.display_name(),
        chunk = chunk,
    )
}
