//! debrief - Turn raw meeting transcripts into structured meeting
//! intelligence: decisions, action items, deliverables, open questions, and
//! derived documents (meeting notes, PRD).

pub mod cli;
pub mod config;
pub mod extract;
pub mod generate;
pub mod llm;
pub mod pipeline;
pub mod refine;
pub mod transcript;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "debrief";
