//! Sequential per-chunk fact extraction.

use std::sync::Arc;
use std::time::Instant;

use crate::extract::types::ChunkExtraction;
use crate::llm::{prompts, schemas, CallOptions, LlmProvider, StructuredRequest};
use crate::pipeline::error::{wrap_error, ErrorContext, PipelineError, Stage};
use crate::pipeline::timeout::call_with_timeout;
use crate::transcript::TranscriptChunk;

/// Extraction stage: one schema-constrained model call per chunk.
///
/// Chunks are processed in index order so each extraction's carry-over
/// summary can feed the next chunk's prompt.
pub struct Extractor {
    provider: Arc<dyn LlmProvider>,
    options: CallOptions,
}

impl Extractor {
    pub fn new(provider: Arc<dyn LlmProvider>, options: CallOptions) -> Self {
        Self { provider, options }
    }

    pub async fn extract(
        &self,
        chunks: &[TranscriptChunk],
    ) -> Result<Vec<ChunkExtraction>, PipelineError> {
        let total = chunks.len();
        let mut extractions = Vec::with_capacity(total);
        let mut carry_over = String::new();

        for chunk in chunks {
            let context =
                ErrorContext::for_model(self.provider.model(), self.provider.provider_id())
                    .with_chunk(chunk.index, total);
            let started = Instant::now();
            let prompt = prompts::build_extraction_prompt(chunk, total, &carry_over);
            let schema = schemas::chunk_extraction_schema();

            let response = call_with_timeout(
                self.options.timeout_ms,
                Stage::Extraction,
                context.clone(),
                self.provider.generate_structured(StructuredRequest {
                    system_prompt: Some(prompts::extraction_system_prompt()),
                    prompt: &prompt,
                    schema: &schema,
                    temperature: self.options.temperature,
                    max_output_tokens: self.options.max_output_tokens,
                }),
            )
            .await?;

            let extraction: ChunkExtraction = serde_json::from_value(response.object)
                .map_err(|err| wrap_error(err.into(), Stage::Extraction, context))?;

            tracing::debug!(
                "Extracted chunk {}/{} in {}ms ({} decisions, {} action items, {} deliverables)",
                chunk.index + 1,
                total,
                started.elapsed().as_millis(),
                extraction.decisions.len(),
                extraction.action_items.len(),
                extraction.deliverables.len()
            );

            carry_over = extraction.summary_for_next_chunk.clone();
            extractions.push(extraction);
        }

        Ok(extractions)
    }
}
