//! Chunk module - units of the chunked translation pipeline

/// A paragraph-aligned, size-bounded piece of a larger document
///
/// Chunks are owned by a single translation request and never persisted.
/// `index` is the chunk's position in the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Position in the original document (0-based)
    pub index: usize,

    /// The chunk's text, one or more whole paragraphs
    pub content: String,
}

/// Terminal state of one chunk after translation
///
/// On completion-call failure `text` holds the original untranslated chunk
/// content and `failed` is true. The document is never dropped because of a
/// single chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOutcome {
    /// Position in the original document (0-based)
    pub index: usize,

    /// Translated text, or the original chunk text on failure
    pub text: String,

    /// Whether the fallback substitution was applied
    pub failed: bool,
}

impl ChunkOutcome {
    /// A successful outcome carrying translated text
    pub fn translated(index: usize, text: String) -> Self {
        Self {
            index,
            text,
            failed: false,
        }
    }

    /// The fallback substitution: the original chunk text, flagged as failed
    pub fn fallback(chunk: &TextChunk) -> Self {
        Self {
            index: chunk.index,
            text: chunk.content.clone(),
            failed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_preserves_original_content() {
        let chunk = TextChunk {
            index: 3,
            content: "Some paragraph.".to_string(),
        };
        let outcome = ChunkOutcome::fallback(&chunk);
        assert_eq!(outcome.index, 3);
        assert_eq!(outcome.text, "Some paragraph.");
        assert!(outcome.failed);
    }

    #[test]
    fn test_translated_outcome_is_not_failed() {
        let outcome = ChunkOutcome::translated(0, "translated".to_string());
        assert!(!outcome.failed);
    }
}
