//! Per-chunk extraction records.
//!
//! Optional fields are `Option`s carried as explicit JSON nulls at the model
//! boundary, so `None` means "the transcript did not say", never "the field
//! was dropped".

use serde::{Deserialize, Serialize};

/// A decision recorded in one chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDecision {
    pub description: String,
    pub made_by: Option<String>,

    /// Verbatim supporting text from the transcript.
    pub quote: String,
}

/// An action item recorded in one chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedActionItem {
    pub description: String,
    pub owner: Option<String>,
    pub deadline: Option<String>,
    pub quote: String,
}

/// A deliverable recorded in one chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDeliverable {
    pub name: String,
    pub description: String,
    pub timeline: Option<String>,
    pub quote: String,
}

/// Everything extracted from one transcript chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkExtraction {
    pub decisions: Vec<ExtractedDecision>,
    pub action_items: Vec<ExtractedActionItem>,
    pub deliverables: Vec<ExtractedDeliverable>,
    pub key_points: Vec<String>,

    /// Short carry-over context handed to the next chunk's extraction.
    pub summary_for_next_chunk: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_round_trip_as_nulls() {
        let extraction = ChunkExtraction {
            decisions: vec![ExtractedDecision {
                description: "Ship the beta".to_string(),
                made_by: None,
                quote: "let's just ship the beta".to_string(),
            }],
            ..ChunkExtraction::default()
        };

        let json = serde_json::to_value(&extraction).unwrap();
        assert!(json["decisions"][0]["madeBy"].is_null());

        let back: ChunkExtraction = serde_json::from_value(json).unwrap();
        assert_eq!(back, extraction);
    }

    #[test]
    fn model_shaped_json_deserializes() {
        let json = serde_json::json!({
            "decisions": [],
            "actionItems": [{
                "description": "Send the deck",
                "owner": "Sarah",
                "deadline": null,
                "quote": "Sarah will send the deck"
            }],
            "deliverables": [],
            "keyPoints": ["deck needs legal review"],
            "summaryForNextChunk": "Sarah owns the deck follow-up."
        });

        let extraction: ChunkExtraction = serde_json::from_value(json).unwrap();
        assert_eq!(extraction.action_items[0].owner.as_deref(), Some("Sarah"));
        assert_eq!(extraction.action_items[0].deadline, None);
    }
}
