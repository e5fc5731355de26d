//! Paragraph-aligned text chunking

use bhasha_domain::{ChunkOutcome, TextChunk};

/// Split text into paragraphs on blank-line boundaries
///
/// A line containing only whitespace separates paragraphs; empty paragraphs
/// are dropped. Paragraph-internal single newlines are preserved.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

/// Packs paragraphs into size-bounded chunks
pub struct ChunkSplitter {
    max_chunk_chars: usize,
}

impl ChunkSplitter {
    /// Create a splitter with the given chunk ceiling (in characters)
    pub fn new(max_chunk_chars: usize) -> Self {
        Self { max_chunk_chars }
    }

    /// Split `text` into ordered, paragraph-aligned chunks
    ///
    /// Consecutive paragraphs are packed greedily while the chunk stays
    /// under the ceiling. A single paragraph longer than the ceiling gets
    /// its own chunk; paragraphs are never split internally.
    pub fn split(&self, text: &str) -> Vec<TextChunk> {
        let mut chunks: Vec<TextChunk> = Vec::new();
        let mut current = String::new();

        for paragraph in split_paragraphs(text) {
            let current_len = current.chars().count();
            let paragraph_len = paragraph.chars().count();

            // +2 accounts for the blank-line separator that joining adds
            if !current.is_empty() && current_len + paragraph_len + 2 > self.max_chunk_chars {
                chunks.push(TextChunk {
                    index: chunks.len(),
                    content: std::mem::take(&mut current),
                });
            }

            if current.is_empty() {
                current = paragraph;
            } else {
                current.push_str("\n\n");
                current.push_str(&paragraph);
            }
        }

        if !current.is_empty() {
            chunks.push(TextChunk {
                index: chunks.len(),
                content: current,
            });
        }

        chunks
    }
}

/// Join chunk outcomes back into one document, in order, with blank-line
/// separators
pub fn join_outcomes(outcomes: &[ChunkOutcome]) -> String {
    outcomes
        .iter()
        .map(|o| o.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paragraphs_on_blank_lines() {
        let text = "First paragraph.\n\nSecond paragraph.\n   \nThird paragraph.";
        let paragraphs = split_paragraphs(text);
        assert_eq!(
            paragraphs,
            vec!["First paragraph.", "Second paragraph.", "Third paragraph."]
        );
    }

    #[test]
    fn test_split_paragraphs_keeps_internal_newlines() {
        let text = "line one\nline two\n\nnext";
        let paragraphs = split_paragraphs(text);
        assert_eq!(paragraphs, vec!["line one\nline two", "next"]);
    }

    #[test]
    fn test_split_paragraphs_empty_input() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("  \n\n   \n").is_empty());
    }

    #[test]
    fn test_small_text_is_one_chunk() {
        let splitter = ChunkSplitter::new(100);
        let chunks = splitter.split("Short text.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].content, "Short text.");
    }

    #[test]
    fn test_greedy_packing_respects_ceiling() {
        let splitter = ChunkSplitter::new(30);
        let text = "aaaaaaaaaa\n\nbbbbbbbbbb\n\ncccccccccc\n\ndddddddddd";
        let chunks = splitter.split(text);

        // Two 10-char paragraphs plus separator fit in 30; a third does not
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].content, "aaaaaaaaaa\n\nbbbbbbbbbb");
        assert_eq!(chunks[1].content, "cccccccccc\n\ndddddddddd");
        assert_eq!(chunks[1].index, 1);
    }

    #[test]
    fn test_oversized_paragraph_kept_whole() {
        let splitter = ChunkSplitter::new(20);
        let long = "x".repeat(50);
        let text = format!("small\n\n{}\n\nalso small", long);
        let chunks = splitter.split(&text);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].content, long);
    }

    #[test]
    fn test_round_trip_preserves_paragraphs() {
        // Identity transform: splitting then rejoining must preserve the
        // paragraph sequence exactly.
        let text = "One.\n\nTwo has\ntwo lines.\n\nThree.\n\nFour.";
        let splitter = ChunkSplitter::new(15);
        let chunks = splitter.split(text);

        let outcomes: Vec<_> = chunks
            .iter()
            .map(|c| bhasha_domain::ChunkOutcome::translated(c.index, c.content.clone()))
            .collect();
        let rejoined = join_outcomes(&outcomes);

        assert_eq!(split_paragraphs(&rejoined), split_paragraphs(text));
    }

    #[test]
    fn test_chunk_indices_are_sequential() {
        let splitter = ChunkSplitter::new(5);
        let chunks = splitter.split("aaaaaa\n\nbbbbbb\n\ncccccc");
        let indices: Vec<_> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
