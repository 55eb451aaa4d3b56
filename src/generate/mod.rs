//! Document generation: meeting notes, the optional PRD, and markdown
//! rendering.

pub mod generator;
pub mod markdown;
pub mod types;

pub use generator::Generator;
pub use markdown::render_markdown;
pub use types::{
    GeneratedResources, GeneratorOptions, GeneratorResult, MeetingNotes, PrdDocument,
    PrdRequirement,
};
