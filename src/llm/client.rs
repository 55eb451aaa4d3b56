use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

/// One schema-constrained generation request.
pub struct StructuredRequest<'a> {
    pub system_prompt: Option<&'a str>,
    pub prompt: &'a str,

    /// Response schema in the provider's dialect; the returned object must
    /// conform to it, with optional fields present as nulls.
    pub schema: &'a Value,

    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Token accounting reported by the provider, when available.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

/// A schema-conforming object plus optional usage numbers.
pub struct StructuredResponse {
    pub object: Value,
    pub usage: Option<TokenUsage>,
}

/// Generation settings shared by the model-calling stages.
#[derive(Debug, Clone)]
pub struct CallOptions {
    pub timeout_ms: u64,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            timeout_ms: crate::pipeline::timeout::DEFAULT_TIMEOUT_MS,
            temperature: 0.2,
            max_output_tokens: 8192,
        }
    }
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate an object conforming to the request's schema, or fail.
    async fn generate_structured(
        &self,
        request: StructuredRequest<'_>,
    ) -> Result<StructuredResponse>;

    /// Stable lowercase identifier for this provider (e.g. "gemini").
    fn provider_id(&self) -> &str;

    /// Model name requests are issued against.
    fn model(&self) -> &str;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Arc<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ),
    }
}
