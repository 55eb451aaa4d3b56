//! Consolidation of per-chunk extractions into one meeting record.

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};

use crate::extract::ChunkExtraction;
use crate::llm::{prompts, schemas, CallOptions, LlmProvider, StructuredRequest};
use crate::pipeline::error::{wrap_error, ErrorContext, PipelineError, Stage};
use crate::pipeline::timeout::call_with_timeout;
use crate::refine::types::{RefinedMeeting, RefinementResult};

/// Summary used when there are no extractions to consolidate.
pub const EMPTY_MEETING_SUMMARY: &str =
    "No meeting content was extracted, so there is nothing to summarize.";

/// Refinement stage: one consolidation call over all per-chunk facts.
pub struct Refiner {
    provider: Arc<dyn LlmProvider>,
    options: CallOptions,
}

impl Refiner {
    pub fn new(provider: Arc<dyn LlmProvider>, options: CallOptions) -> Self {
        Self { provider, options }
    }

    /// Consolidate chunk extractions into one deduplicated meeting record.
    ///
    /// Extractions must be supplied in chunk order; this stage does not
    /// re-sort them. An empty slice short-circuits to an empty record with a
    /// placeholder summary and no model call. Failure is all-or-nothing: no
    /// partial refinement is returned.
    pub async fn refine(
        &self,
        extractions: &[ChunkExtraction],
    ) -> Result<RefinementResult, PipelineError> {
        let started = Instant::now();

        if extractions.is_empty() {
            return Ok(RefinementResult {
                refined: RefinedMeeting {
                    meeting_summary: EMPTY_MEETING_SUMMARY.to_string(),
                    ..RefinedMeeting::default()
                },
                input_extraction_count: 0,
                processing_time_ms: started.elapsed().as_millis() as u64,
            });
        }

        let context = ErrorContext::for_model(self.provider.model(), self.provider.provider_id());
        let facts = flatten_extractions(extractions);
        let facts_json = serde_json::to_string_pretty(&facts)
            .map_err(|err| wrap_error(err.into(), Stage::Refinement, context.clone()))?;
        let prompt = prompts::build_refinement_prompt(&facts_json);
        let schema = schemas::refined_meeting_schema();

        let response = call_with_timeout(
            self.options.timeout_ms,
            Stage::Refinement,
            context.clone(),
            self.provider.generate_structured(StructuredRequest {
                system_prompt: Some(prompts::refinement_system_prompt()),
                prompt: &prompt,
                schema: &schema,
                temperature: self.options.temperature,
                max_output_tokens: self.options.max_output_tokens,
            }),
        )
        .await?;

        let mut refined: RefinedMeeting = serde_json::from_value(response.object)
            .map_err(|err| wrap_error(err.into(), Stage::Refinement, context))?;
        assign_ids(&mut refined);

        tracing::info!(
            "Refined {} extraction(s) in {}ms ({} decisions, {} action items, {} deliverables)",
            extractions.len(),
            started.elapsed().as_millis(),
            refined.decisions.len(),
            refined.action_items.len(),
            refined.deliverables.len()
        );

        Ok(RefinementResult {
            refined,
            input_extraction_count: extractions.len(),
            processing_time_ms: started.elapsed().as_millis() as u64,
        })
    }
}

// Flatten per-chunk facts into the consolidation payload, tagging each group
// with its originating chunk index for traceability and recency ordering.
fn flatten_extractions(extractions: &[ChunkExtraction]) -> Value {
    let chunks: Vec<Value> = extractions
        .iter()
        .enumerate()
        .map(|(index, extraction)| {
            json!({
                "chunkIndex": index,
                "decisions": extraction.decisions,
                "actionItems": extraction.action_items,
                "deliverables": extraction.deliverables,
                "keyPoints": extraction.key_points,
            })
        })
        .collect();
    Value::Array(chunks)
}

// Dense, stable per-category numbering, regardless of what the model put in
// the response.
fn assign_ids(refined: &mut RefinedMeeting) {
    for (i, decision) in refined.decisions.iter_mut().enumerate() {
        decision.id = format!("D{}", i + 1);
    }
    for (i, item) in refined.action_items.iter_mut().enumerate() {
        item.id = format!("A{}", i + 1);
    }
    for (i, deliverable) in refined.deliverables.iter_mut().enumerate() {
        deliverable.id = format!("DEL{}", i + 1);
    }
}
