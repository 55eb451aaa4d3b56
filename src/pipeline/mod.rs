//! Pipeline control: stage-tagged errors, per-call timeouts, and the
//! end-to-end orchestration used by the CLI.

pub mod error;
pub mod timeout;

pub use error::{wrap_error, ErrorContext, ErrorKind, PipelineError, Stage};
pub use timeout::{call_with_timeout, effective_timeout_ms, DEFAULT_TIMEOUT_MS, MIN_TIMEOUT_MS};

use std::sync::Arc;

use serde::Serialize;

use crate::extract::Extractor;
use crate::generate::{Generator, GeneratorOptions, GeneratorResult};
use crate::llm::{CallOptions, LlmProvider};
use crate::refine::{RefinedMeeting, Refiner};
use crate::transcript::{
    chunk, extract_metadata, validate_transcript, ChunkOptions, TranscriptMetadata,
};

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    pub metadata: TranscriptMetadata,
    pub chunk_count: usize,
    pub input_extraction_count: usize,
    pub refined: RefinedMeeting,
    pub generated: GeneratorResult,
}

/// The full transcript-to-documents pipeline.
///
/// Each stage consumes an immutable snapshot of the previous stage's output;
/// nothing is shared or mutated across stages, and nothing survives the run.
pub struct Pipeline {
    provider: Arc<dyn LlmProvider>,
    chunk_options: ChunkOptions,
    call_options: CallOptions,
}

impl Pipeline {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        chunk_options: ChunkOptions,
        call_options: CallOptions,
    ) -> Self {
        Self {
            provider,
            chunk_options,
            call_options,
        }
    }

    /// Run validate -> chunk -> extract -> refine -> generate.
    pub async fn run(
        &self,
        transcript: &str,
        options: &GeneratorOptions,
    ) -> Result<PipelineRun, PipelineError> {
        validate_transcript(transcript)?;

        let metadata = extract_metadata(transcript);
        let chunks = chunk(transcript, &self.chunk_options);
        tracing::info!(
            "Chunked transcript into {} chunk(s), {} speaker(s) detected",
            chunks.len(),
            metadata.attendees.len()
        );

        let extractor = Extractor::new(self.provider.clone(), self.call_options.clone());
        let extractions = extractor.extract(&chunks).await?;

        let refiner = Refiner::new(self.provider.clone(), self.call_options.clone());
        let refinement = refiner.refine(&extractions).await?;

        let generator = Generator::new(self.provider.clone(), self.call_options.clone());
        let generated = generator.generate(&refinement.refined, options).await?;

        Ok(PipelineRun {
            metadata,
            chunk_count: chunks.len(),
            input_extraction_count: refinement.input_extraction_count,
            refined: refinement.refined,
            generated,
        })
    }
}
