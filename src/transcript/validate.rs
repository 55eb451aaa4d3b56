//! Transcript input validation, applied before the pipeline runs.

use crate::pipeline::error::PipelineError;

/// Transcripts shorter than this cannot produce meaningful intelligence.
pub const MIN_TRANSCRIPT_CHARS: usize = 100;

/// Reject empty, too-short, or binary-looking input.
///
/// The chunker itself never fails; this guard keeps garbage from reaching
/// the model stages, with a transcript-tagged error naming the problem.
pub fn validate_transcript(raw: &str) -> Result<(), PipelineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::transcript("Transcript is empty"));
    }

    if looks_binary(raw) {
        return Err(PipelineError::transcript(
            "Transcript contains binary data; expected plain text",
        ));
    }

    let chars = trimmed.chars().count();
    if chars < MIN_TRANSCRIPT_CHARS {
        return Err(PipelineError::transcript(&format!(
            "Transcript is too short ({} characters; need at least {})",
            chars, MIN_TRANSCRIPT_CHARS
        )));
    }

    Ok(())
}

// NUL or control characters outside common whitespace mark binary input.
fn looks_binary(raw: &str) -> bool {
    raw.chars()
        .any(|c| c == '\0' || (c.is_control() && !matches!(c, '\n' | '\r' | '\t')))
}
