//! Response schemas for the structured model calls, in Gemini's dialect.
//!
//! Optional fields are declared `nullable` and still required, so the model
//! returns explicit nulls instead of omitting properties.

use serde_json::{json, Value};

/// Schema for one chunk's extraction.
pub fn chunk_extraction_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "decisions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "description": { "type": "string" },
                        "madeBy": { "type": "string", "nullable": true },
                        "quote": { "type": "string" }
                    },
                    "required": ["description", "madeBy", "quote"]
                }
            },
            "actionItems": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "description": { "type": "string" },
                        "owner": { "type": "string", "nullable": true },
                        "deadline": { "type": "string", "nullable": true },
                        "quote": { "type": "string" }
                    },
                    "required": ["description", "owner", "deadline", "quote"]
                }
            },
            "deliverables": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "timeline": { "type": "string", "nullable": true },
                        "quote": { "type": "string" }
                    },
                    "required": ["name", "description", "timeline", "quote"]
                }
            },
            "keyPoints": {
                "type": "array",
                "items": { "type": "string" }
            },
            "summaryForNextChunk": { "type": "string" }
        },
        "required": [
            "decisions",
            "actionItems",
            "deliverables",
            "keyPoints",
            "summaryForNextChunk"
        ]
    })
}

/// Schema for the consolidated meeting record. IDs are assigned
/// deterministically after the call, so they are absent here.
pub fn refined_meeting_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "decisions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "description": { "type": "string" },
                        "madeBy": { "type": "string", "nullable": true },
                        "quote": { "type": "string" }
                    },
                    "required": ["description", "madeBy", "quote"]
                }
            },
            "actionItems": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "description": { "type": "string" },
                        "owner": { "type": "string", "nullable": true },
                        "deadline": { "type": "string", "nullable": true },
                        "quote": { "type": "string" }
                    },
                    "required": ["description", "owner", "deadline", "quote"]
                }
            },
            "deliverables": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "timeline": { "type": "string", "nullable": true },
                        "quote": { "type": "string" }
                    },
                    "required": ["name", "description", "timeline", "quote"]
                }
            },
            "meetingSummary": { "type": "string" },
            "attendees": {
                "type": "array",
                "items": { "type": "string" }
            },
            "openQuestions": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": [
            "decisions",
            "actionItems",
            "deliverables",
            "meetingSummary",
            "attendees",
            "openQuestions"
        ]
    })
}

/// Schema for the PRD call.
pub fn prd_schema() -> Value {
    let requirement = json!({
        "type": "object",
        "properties": {
            "description": { "type": "string" },
            "rationale": { "type": "string", "nullable": true }
        },
        "required": ["description", "rationale"]
    });

    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "overview": { "type": "string" },
            "mustHave": { "type": "array", "items": requirement.clone() },
            "shouldHave": { "type": "array", "items": requirement.clone() },
            "couldHave": { "type": "array", "items": requirement },
            "openQuestions": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": [
            "title",
            "overview",
            "mustHave",
            "shouldHave",
            "couldHave",
            "openQuestions"
        ]
    })
}
