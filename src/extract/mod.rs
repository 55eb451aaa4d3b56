//! Per-chunk fact extraction: record types and the extraction stage.

pub mod extractor;
pub mod types;

pub use extractor::Extractor;
pub use types::{ChunkExtraction, ExtractedActionItem, ExtractedDecision, ExtractedDeliverable};
