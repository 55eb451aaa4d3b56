//! Consolidation of chunk extractions into one refined meeting record.

pub mod refiner;
pub mod types;

pub use refiner::{Refiner, EMPTY_MEETING_SUMMARY};
pub use types::{
    RefinedActionItem, RefinedDecision, RefinedDeliverable, RefinedMeeting, RefinementResult,
};
