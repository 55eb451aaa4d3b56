//! Document generation from a refined meeting.

use std::sync::Arc;
use std::time::Instant;

use crate::generate::markdown::render_markdown;
use crate::generate::types::{
    GeneratedResources, GeneratorOptions, GeneratorResult, MeetingNotes, PrdDocument,
};
use crate::llm::{prompts, schemas, CallOptions, LlmProvider, StructuredRequest};
use crate::pipeline::error::{wrap_error, ErrorContext, PipelineError, Stage};
use crate::pipeline::timeout::call_with_timeout;
use crate::refine::RefinedMeeting;

const FALLBACK_TITLE: &str = "Meeting Notes";
const TITLE_MAX_CHARS: usize = 50;

/// Generation stage: pure notes mapping plus an optional PRD model call.
pub struct Generator {
    provider: Arc<dyn LlmProvider>,
    options: CallOptions,
}

impl Generator {
    pub fn new(provider: Arc<dyn LlmProvider>, options: CallOptions) -> Self {
        Self { provider, options }
    }

    /// Map a refined meeting into presentation notes. Pure; no model call.
    pub fn generate_meeting_notes(refined: &RefinedMeeting) -> MeetingNotes {
        MeetingNotes {
            title: infer_title(refined),
            summary: refined.meeting_summary.clone(),
            attendees: refined.attendees.clone(),
            decisions: refined.decisions.clone(),
            action_items: refined.action_items.clone(),
            deliverables: refined.deliverables.clone(),
            open_questions: refined.open_questions.clone(),
        }
    }

    /// Produce notes, optionally a PRD, and the rendered markdown.
    ///
    /// The PRD is skipped when disabled or when the meeting produced no
    /// deliverables. A failed PRD call propagates; it is never downgraded to
    /// "no PRD".
    pub async fn generate(
        &self,
        refined: &RefinedMeeting,
        options: &GeneratorOptions,
    ) -> Result<GeneratorResult, PipelineError> {
        let started = Instant::now();
        let notes = Self::generate_meeting_notes(refined);

        let prd = if options.generate_prd && !refined.deliverables.is_empty() {
            Some(self.generate_prd(refined).await?)
        } else {
            tracing::debug!(
                "Skipping PRD generation (enabled: {}, deliverables: {})",
                options.generate_prd,
                refined.deliverables.len()
            );
            None
        };

        let prd_generated = prd.is_some();
        let resources = GeneratedResources { notes, prd };
        let markdown = render_markdown(&resources);

        Ok(GeneratorResult {
            resources,
            markdown,
            processing_time_ms: started.elapsed().as_millis() as u64,
            prd_generated,
        })
    }

    async fn generate_prd(&self, refined: &RefinedMeeting) -> Result<PrdDocument, PipelineError> {
        let context = ErrorContext::for_model(self.provider.model(), self.provider.provider_id());
        let refined_json = serde_json::to_string_pretty(refined)
            .map_err(|err| wrap_error(err.into(), Stage::Generation, context.clone()))?;
        let prompt = prompts::build_prd_prompt(&refined_json);
        let schema = schemas::prd_schema();

        let response = call_with_timeout(
            self.options.timeout_ms,
            Stage::Generation,
            context.clone(),
            self.provider.generate_structured(StructuredRequest {
                system_prompt: Some(prompts::prd_system_prompt()),
                prompt: &prompt,
                schema: &schema,
                temperature: self.options.temperature,
                max_output_tokens: self.options.max_output_tokens,
            }),
        )
        .await?;

        let mut prd: PrdDocument = serde_json::from_value(response.object)
            .map_err(|err| wrap_error(err.into(), Stage::Generation, context))?;
        assign_requirement_ids(&mut prd);
        Ok(prd)
    }
}

// Title preference: first deliverable name, else the first decision
// (truncated), else a generic fallback.
fn infer_title(refined: &RefinedMeeting) -> String {
    if let Some(deliverable) = refined.deliverables.first() {
        return deliverable.name.clone();
    }
    if let Some(decision) = refined.decisions.first() {
        return truncate(&decision.description, TITLE_MAX_CHARS);
    }
    FALLBACK_TITLE.to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars - 3).collect();
        format!("{}...", cut.trim_end())
    }
}

fn assign_requirement_ids(prd: &mut PrdDocument) {
    for (i, requirement) in prd.must_have.iter_mut().enumerate() {
        requirement.id = format!("M{}", i + 1);
    }
    for (i, requirement) in prd.should_have.iter_mut().enumerate() {
        requirement.id = format!("S{}", i + 1);
    }
    for (i, requirement) in prd.could_have.iter_mut().enumerate() {
        requirement.id = format!("C{}", i + 1);
    }
}
