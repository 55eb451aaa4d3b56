//! Boundary-aware transcript chunking.

use crate::transcript::normalize::normalize;
use crate::transcript::speakers::detect_speakers;

/// Target maximum characters per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 4000;

/// Characters of trailing context copied into each chunk's overlap field.
pub const DEFAULT_OVERLAP_SIZE: usize = 200;

/// Chunking configuration.
#[derive(Debug, Clone)]
pub struct ChunkOptions {
    /// Target max characters per chunk.
    pub chunk_size: usize,

    /// Characters from the start of the next chunk repeated in
    /// `overlap_content`.
    pub overlap_size: usize,

    /// Prefer ending chunks at line breaks instead of mid-utterance.
    pub preserve_speaker_context: bool,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap_size: DEFAULT_OVERLAP_SIZE,
            preserve_speaker_context: true,
        }
    }
}

/// One chunk of the normalized transcript.
///
/// Offsets are character positions into the normalized text; consecutive
/// chunks tile it exactly (`start_offset[i] == end_offset[i-1]`).
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptChunk {
    pub index: usize,
    pub content: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub has_overlap: bool,
    pub overlap_content: Option<String>,
    pub speakers_present: Vec<String>,
}

/// Split a transcript into overlapping chunks.
///
/// Transcripts no longer than `chunk_size` come back as a single chunk whose
/// content is the normalized input. An empty transcript yields one empty
/// chunk rather than an error; rejecting empty input is the caller's job.
pub fn chunk(transcript: &str, options: &ChunkOptions) -> Vec<TranscriptChunk> {
    let normalized = normalize(transcript);
    let chars: Vec<char> = normalized.chars().collect();
    let boundaries = compute_boundaries(&chars, options);

    let total = boundaries.len() - 1;
    let mut chunks = Vec::with_capacity(total);
    for index in 0..total {
        let start = boundaries[index];
        let end = boundaries[index + 1];
        let content: String = chars[start..end].iter().collect();
        let content = content.trim().to_string();

        let has_overlap = index + 1 < total;
        let overlap_content = if has_overlap {
            let overlap_end = (end + options.overlap_size).min(chars.len());
            Some(chars[end..overlap_end].iter().collect())
        } else {
            None
        };

        let speakers_present = detect_speakers(&content);
        chunks.push(TranscriptChunk {
            index,
            content,
            start_offset: start,
            end_offset: end,
            has_overlap,
            overlap_content,
            speakers_present,
        });
    }

    chunks
}

/// Number of chunks `chunk()` would produce for this transcript.
pub fn get_chunk_count(transcript: &str, options: &ChunkOptions) -> usize {
    let normalized = normalize(transcript);
    let chars: Vec<char> = normalized.chars().collect();
    compute_boundaries(&chars, options).len() - 1
}

// Boundary positions tiling the text: [0, b1, .., len]. Always at least one
// window, even for empty text.
fn compute_boundaries(chars: &[char], options: &ChunkOptions) -> Vec<usize> {
    let chunk_size = options.chunk_size.max(1);
    let mut boundaries = vec![0];

    if chars.len() <= chunk_size {
        boundaries.push(chars.len());
        return boundaries;
    }

    let mut start = 0;
    while start < chars.len() {
        let window_end = (start + chunk_size).min(chars.len());
        let end = if window_end == chars.len() || !options.preserve_speaker_context {
            window_end
        } else {
            find_line_break(chars, start, window_end, chunk_size).unwrap_or(window_end)
        };
        boundaries.push(end);
        start = end;
    }

    boundaries
}

// Last line break within the window, looking back at most half a window so a
// pathological boundary-free stretch still gets a hard cut.
fn find_line_break(
    chars: &[char],
    start: usize,
    window_end: usize,
    chunk_size: usize,
) -> Option<usize> {
    let floor = start + chunk_size / 2;
    (floor..window_end)
        .rev()
        .find(|&position| chars[position] == '\n')
        .map(|position| position + 1)
}
