//! Transcript handling: normalization, chunking, speaker detection,
//! metadata heuristics, and input validation.

pub mod chunker;
pub mod metadata;
pub mod normalize;
pub mod speakers;
pub mod validate;

pub use chunker::{chunk, get_chunk_count, ChunkOptions, TranscriptChunk};
pub use metadata::{extract_metadata, TranscriptMetadata};
pub use normalize::normalize;
pub use speakers::detect_speakers;
pub use validate::validate_transcript;
