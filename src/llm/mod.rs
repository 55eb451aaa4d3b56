//! LLM provider abstraction, prompts, and response schemas.

pub mod client;
pub mod gemini;
pub mod prompts;
pub mod schemas;

pub use client::{
    build_provider, CallOptions, LlmProvider, StructuredRequest, StructuredResponse, TokenUsage,
};
pub use gemini::GeminiClient;
