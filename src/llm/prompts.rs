//! Prompt builders for the extraction, refinement, and PRD model calls.

use crate::transcript::TranscriptChunk;

/// System prompt for per-chunk fact extraction.
pub fn extraction_system_prompt() -> &'static str {
    "You extract structured facts from one segment of a meeting transcript.\n\
Rules:\n\
- Record only what the segment actually says; never invent facts.\n\
- Every decision, action item, and deliverable must carry a short verbatim \
supporting quote from the segment.\n\
- Use null for any field the segment does not state (owner, deadline, \
madeBy, timeline); do not guess.\n\
- keyPoints are short, concrete bullets.\n\
- summaryForNextChunk is 1-2 sentences of context the next segment needs \
to stay coherent (who was speaking, what thread is open)."
}

/// Build the user prompt for extracting facts from one chunk.
pub fn build_extraction_prompt(
    chunk: &TranscriptChunk,
    total_chunks: usize,
    carry_over: &str,
) -> String {
    let mut prompt = format!(
        "Segment {} of {} of a meeting transcript.\n",
        chunk.index + 1,
        total_chunks
    );

    if !chunk.speakers_present.is_empty() {
        prompt.push_str(&format!(
            "Speakers in this segment: {}\n",
            chunk.speakers_present.join(", ")
        ));
    }

    if !carry_over.is_empty() {
        prompt.push_str(&format!("Context from the previous segment: {}\n", carry_over));
    }

    prompt.push_str("\nSegment:\n");
    prompt.push_str(&chunk.content);
    prompt
}

/// System prompt encoding the consolidation merge policy.
pub fn refinement_system_prompt() -> &'static str {
    "You consolidate per-chunk meeting extractions into one coherent record.\n\
Rules:\n\
- Merge facts that refer to the same topic even when worded differently; \
keep the most complete wording.\n\
- When facts conflict, later mentions (higher chunkIndex) supersede earlier \
ones.\n\
- Among conflicting deadlines, prefer the most specific and most recent.\n\
- Among conflicting owners, prefer the most explicit assignment.\n\
- attendees is the union of all speakers across chunks, deduplicated, with \
consistent name formatting.\n\
- openQuestions keeps only questions still unresolved at the end of the \
transcript; drop anything answered in a later chunk.\n\
- Keep every quote verbatim from the input extractions; never fabricate or \
edit quotes.\n\
- meetingSummary is 2-4 sentences covering the meeting as a whole."
}

/// Build the user prompt for the consolidation call. `facts_json` is the
/// flattened per-chunk facts, each tagged with its chunk index.
pub fn build_refinement_prompt(facts_json: &str) -> String {
    format!(
        "Consolidate these per-chunk meeting extractions into a single \
deduplicated record:\n\n{}",
        facts_json
    )
}

/// System prompt for PRD generation.
pub fn prd_system_prompt() -> &'static str {
    "You write a product requirements document from consolidated meeting \
intelligence.\n\
Rules:\n\
- Derive requirements only from the deliverables and the decisions, action \
items, and open questions related to them.\n\
- Prioritize with MoSCoW: mustHave, shouldHave, couldHave.\n\
- Each requirement is one testable statement; put reasoning in rationale \
or use null when the meeting gave none.\n\
- overview is a short paragraph describing what is being built and why.\n\
- openQuestions carries forward unresolved questions that block requirements."
}

/// Build the user prompt for the PRD call. `refined_json` is the
/// consolidated meeting record.
pub fn build_prd_prompt(refined_json: &str) -> String {
    format!(
        "Write a PRD for the deliverables in this consolidated meeting \
record:\n\n{}",
        refined_json
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{chunk, ChunkOptions};

    #[test]
    fn extraction_prompt_includes_segment_position_and_carry_over() {
        let chunks = chunk("John: hello everyone", &ChunkOptions::default());
        let prompt = build_extraction_prompt(&chunks[0], 3, "Sarah was presenting the roadmap.");

        assert!(prompt.contains("Segment 1 of 3"));
        assert!(prompt.contains("Speakers in this segment: John"));
        assert!(prompt.contains("Sarah was presenting the roadmap."));
        assert!(prompt.contains("John: hello everyone"));
    }

    #[test]
    fn extraction_prompt_omits_empty_carry_over() {
        let chunks = chunk("John: hello everyone", &ChunkOptions::default());
        let prompt = build_extraction_prompt(&chunks[0], 1, "");
        assert!(!prompt.contains("previous segment"));
    }
}
