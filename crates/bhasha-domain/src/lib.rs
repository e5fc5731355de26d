//! Bhasha Domain Layer
//!
//! This crate contains the core value types shared by all Bhasha engines.
//! It carries no I/O of any kind: prompts, HTTP, and model calls live in
//! the infrastructure crates that depend on this one.
//!
//! ## Key Concepts
//!
//! - **CorrectionItem**: a single model-proposed fix with the no-op invariant
//!   (original and corrected must differ after Unicode normalization)
//! - **CorrectionOutcome**: tagged union over the two correction shapes the
//!   engines produce (per-language vs English spelling), with one adapter
//!   that flattens both into `CorrectionItem`s before merging
//! - **TextChunk / ChunkOutcome**: units of the chunked translation pipeline
//! - **BulkCheckResult**: one per input URL in a bulk check, independent of
//!   its siblings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bulk;
pub mod chunk;
pub mod correction;
pub mod document;
pub mod language;

// Re-exports for convenience
pub use bulk::{BulkCheckResult, BulkDetails, BulkStatus, Platform};
pub use chunk::{ChunkOutcome, TextChunk};
pub use correction::{
    dedup_by_original, normalize_term, CorrectionItem, CorrectionKind, CorrectionOutcome,
    CorrectionResult, SpellingError,
};
pub use document::ExtractedDocument;
pub use language::LanguageCode;
