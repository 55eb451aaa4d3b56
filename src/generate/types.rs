//! Presentation-oriented documents derived from a refined meeting.

use serde::{Deserialize, Serialize};

use crate::refine::{RefinedActionItem, RefinedDecision, RefinedDeliverable};

/// Meeting notes: a 1:1 presentation view of the refined record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingNotes {
    pub title: String,
    pub summary: String,
    pub attendees: Vec<String>,
    pub decisions: Vec<RefinedDecision>,
    pub action_items: Vec<RefinedActionItem>,
    pub deliverables: Vec<RefinedDeliverable>,
    pub open_questions: Vec<String>,
}

/// One PRD requirement. `id` is `M1`/`S1`/`C1` style, assigned per priority
/// group after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrdRequirement {
    #[serde(default)]
    pub id: String,
    pub description: String,
    pub rationale: Option<String>,
}

/// A MoSCoW-prioritized product requirements document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrdDocument {
    pub title: String,
    pub overview: String,
    pub must_have: Vec<PrdRequirement>,
    pub should_have: Vec<PrdRequirement>,
    pub could_have: Vec<PrdRequirement>,
    pub open_questions: Vec<String>,
}

/// Documents produced by one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedResources {
    pub notes: MeetingNotes,
    pub prd: Option<PrdDocument>,
}

/// Generation switches.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Generate a PRD when the meeting produced deliverables.
    pub generate_prd: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { generate_prd: true }
    }
}

/// Outcome of one `generate()` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorResult {
    pub resources: GeneratedResources,
    pub markdown: String,
    pub processing_time_ms: u64,
    pub prd_generated: bool,
}
