//! End-to-end pipeline tests over a scripted in-process provider.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use debrief::generate::GeneratorOptions;
use debrief::llm::{CallOptions, LlmProvider, StructuredRequest, StructuredResponse};
use debrief::pipeline::{ErrorKind, Pipeline, Stage};
use debrief::transcript::ChunkOptions;

/// Provider that answers calls from a queue, in order.
struct QueueProvider {
    responses: Mutex<VecDeque<Result<Value>>>,
}

impl QueueProvider {
    fn new(responses: Vec<Result<Value>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
        })
    }

    fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for QueueProvider {
    async fn generate_structured(
        &self,
        _request: StructuredRequest<'_>,
    ) -> Result<StructuredResponse> {
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected extra model call");
        Ok(StructuredResponse {
            object: response?,
            usage: None,
        })
    }

    fn provider_id(&self) -> &str {
        "queue"
    }

    fn model(&self) -> &str {
        "queue-model"
    }
}

/// Provider whose calls never complete; exercises the timeout path.
struct StuckProvider;

#[async_trait]
impl LlmProvider for StuckProvider {
    async fn generate_structured(
        &self,
        _request: StructuredRequest<'_>,
    ) -> Result<StructuredResponse> {
        std::future::pending::<()>().await;
        unreachable!()
    }

    fn provider_id(&self) -> &str {
        "stuck"
    }

    fn model(&self) -> &str {
        "stuck-model"
    }
}

fn sample_transcript() -> String {
    "\
# Onboarding Revamp Sync

Meeting held on 2024-03-05.

Sarah: I think we have alignment, let's rebuild the onboarding flow this quarter.
John: Agreed. I'll draft the migration plan by Friday.
Sarah: Great. The main deliverable is the new guided checklist experience.
John: One open question, who reviews the copy for the new screens?
"
    .to_string()
}

fn extraction_json() -> Value {
    json!({
        "decisions": [{
            "description": "Rebuild the onboarding flow this quarter",
            "madeBy": "Sarah",
            "quote": "let's rebuild the onboarding flow this quarter"
        }],
        "actionItems": [{
            "description": "Draft the migration plan",
            "owner": "John",
            "deadline": "Friday",
            "quote": "I'll draft the migration plan by Friday"
        }],
        "deliverables": [{
            "name": "Guided checklist experience",
            "description": "New guided checklist for onboarding",
            "timeline": null,
            "quote": "the main deliverable is the new guided checklist experience"
        }],
        "keyPoints": ["onboarding is being rebuilt"],
        "summaryForNextChunk": "Onboarding rebuild agreed; John owns the migration plan."
    })
}

fn empty_extraction_json() -> Value {
    json!({
        "decisions": [],
        "actionItems": [],
        "deliverables": [],
        "keyPoints": [],
        "summaryForNextChunk": ""
    })
}

fn refined_json() -> Value {
    json!({
        "decisions": [{
            "description": "Rebuild the onboarding flow this quarter",
            "madeBy": "Sarah",
            "quote": "let's rebuild the onboarding flow this quarter"
        }],
        "actionItems": [{
            "description": "Draft the migration plan",
            "owner": "John",
            "deadline": "Friday",
            "quote": "I'll draft the migration plan by Friday"
        }],
        "deliverables": [{
            "name": "Guided checklist experience",
            "description": "New guided checklist for onboarding",
            "timeline": null,
            "quote": "the main deliverable is the new guided checklist experience"
        }],
        "meetingSummary": "The team agreed to rebuild onboarding this quarter. John drafts the migration plan by Friday.",
        "attendees": ["Sarah", "John"],
        "openQuestions": ["Who reviews the copy for the new screens?"]
    })
}

fn empty_refined_json() -> Value {
    json!({
        "decisions": [],
        "actionItems": [],
        "deliverables": [],
        "meetingSummary": "A short meeting with no recorded outcomes.",
        "attendees": ["Sarah", "John"],
        "openQuestions": []
    })
}

fn prd_json() -> Value {
    json!({
        "title": "Guided checklist experience",
        "overview": "Rebuild onboarding around a guided checklist.",
        "mustHave": [{
            "description": "Guided first-run checklist",
            "rationale": "Decided in the meeting"
        }],
        "shouldHave": [],
        "couldHave": [],
        "openQuestions": ["Who reviews the copy for the new screens?"]
    })
}

fn pipeline_for(provider: Arc<dyn LlmProvider>) -> Pipeline {
    Pipeline::new(provider, ChunkOptions::default(), CallOptions::default())
}

#[tokio::test]
async fn single_chunk_transcript_runs_end_to_end() {
    let provider = QueueProvider::new(vec![
        Ok(extraction_json()),
        Ok(refined_json()),
        Ok(prd_json()),
    ]);
    let pipeline = pipeline_for(provider.clone());

    let run = pipeline
        .run(&sample_transcript(), &GeneratorOptions::default())
        .await
        .unwrap();

    assert_eq!(run.chunk_count, 1);
    assert_eq!(run.input_extraction_count, 1);
    assert_eq!(run.metadata.title.as_deref(), Some("Onboarding Revamp Sync"));
    assert_eq!(run.metadata.attendees, vec!["Sarah", "John"]);

    assert_eq!(run.refined.decisions[0].id, "D1");
    assert_eq!(run.refined.action_items[0].id, "A1");
    assert_eq!(run.refined.deliverables[0].id, "DEL1");

    assert!(run.generated.prd_generated);
    assert!(run.generated.markdown.contains("# Guided checklist experience"));
    assert!(run.generated.markdown.contains("# PRD: Guided checklist experience"));
    assert!(run.generated.markdown.contains("- [ ] Who reviews the copy for the new screens?"));
    assert_eq!(provider.remaining(), 0);
}

#[tokio::test]
async fn empty_facts_still_refine_but_skip_the_prd() {
    let provider = QueueProvider::new(vec![
        Ok(empty_extraction_json()),
        Ok(empty_refined_json()),
    ]);
    let pipeline = pipeline_for(provider.clone());

    let run = pipeline
        .run(&sample_transcript(), &GeneratorOptions::default())
        .await
        .unwrap();

    assert!(run.refined.decisions.is_empty());
    assert!(run.refined.deliverables.is_empty());
    assert!(!run.refined.meeting_summary.is_empty());
    assert!(!run.generated.prd_generated);
    assert!(run.generated.resources.prd.is_none());
    assert_eq!(provider.remaining(), 0, "no PRD call expected");
}

#[tokio::test]
async fn prd_can_be_disabled_explicitly() {
    let provider = QueueProvider::new(vec![Ok(extraction_json()), Ok(refined_json())]);
    let pipeline = pipeline_for(provider.clone());

    let run = pipeline
        .run(
            &sample_transcript(),
            &GeneratorOptions {
                generate_prd: false,
            },
        )
        .await
        .unwrap();

    assert!(!run.generated.prd_generated);
    assert_eq!(provider.remaining(), 0);
}

#[tokio::test]
async fn refinement_failure_propagates_with_stage_and_suggestions() {
    let provider = QueueProvider::new(vec![
        Ok(extraction_json()),
        Err(anyhow::anyhow!("429 Too Many Requests: rate limit exceeded")),
    ]);
    let pipeline = pipeline_for(provider);

    let err = pipeline
        .run(&sample_transcript(), &GeneratorOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.stage, Stage::Refinement);
    assert!(err.suggestions.iter().any(|s| s.contains("rate limiting")));
}

#[tokio::test]
async fn stuck_provider_times_out_with_chunk_context() {
    let pipeline = Pipeline::new(
        Arc::new(StuckProvider),
        ChunkOptions::default(),
        CallOptions {
            timeout_ms: 1_000,
            ..CallOptions::default()
        },
    );

    let err = pipeline
        .run(&sample_transcript(), &GeneratorOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Timeout);
    assert_eq!(err.stage, Stage::Extraction);
    assert_eq!(err.context.chunk_index, Some(0));
    assert_eq!(err.context.total_chunks, Some(1));
    assert!(err.to_string().contains("(chunk 1/1)"), "got: {}", err);
}

#[tokio::test]
async fn transcript_validation_fails_before_any_model_call() {
    let provider = QueueProvider::new(vec![]);
    let pipeline = pipeline_for(provider.clone());

    let err = pipeline
        .run("John: hi", &GeneratorOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Transcript);
    assert_eq!(err.stage, Stage::Chunking);
    assert_eq!(provider.remaining(), 0);
}
