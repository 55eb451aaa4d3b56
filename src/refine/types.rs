//! Consolidated meeting records.

use serde::{Deserialize, Serialize};

/// A deduplicated decision. `id` is `D1`, `D2`, ... assigned after
/// consolidation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedDecision {
    #[serde(default)]
    pub id: String,
    pub description: String,
    pub made_by: Option<String>,
    pub quote: String,
}

/// A deduplicated action item. `id` is `A1`, `A2`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedActionItem {
    #[serde(default)]
    pub id: String,
    pub description: String,
    pub owner: Option<String>,
    pub deadline: Option<String>,
    pub quote: String,
}

/// A deduplicated deliverable. `id` is `DEL1`, `DEL2`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedDeliverable {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub timeline: Option<String>,
    pub quote: String,
}

/// The consolidated record for one meeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedMeeting {
    pub decisions: Vec<RefinedDecision>,
    pub action_items: Vec<RefinedActionItem>,
    pub deliverables: Vec<RefinedDeliverable>,
    pub meeting_summary: String,
    pub attendees: Vec<String>,
    pub open_questions: Vec<String>,
}

/// Outcome of one `refine()` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefinementResult {
    pub refined: RefinedMeeting,
    pub input_extraction_count: usize,
    pub processing_time_ms: u64,
}
