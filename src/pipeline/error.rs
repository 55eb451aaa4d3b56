//! Stage-tagged error type for the analysis pipeline.

use thiserror::Error;

/// Ordered pipeline stages. Every error is tagged with the stage it
/// originated in so messages can report "refinement (3/5)" style positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Chunking,
    Extraction,
    Refinement,
    Generation,
    Editing,
}

impl Stage {
    /// Total number of pipeline stages.
    pub const COUNT: usize = 5;

    /// 1-based position of this stage in the pipeline.
    pub fn number(&self) -> usize {
        match self {
            Self::Chunking => 1,
            Self::Extraction => 2,
            Self::Refinement => 3,
            Self::Generation => 4,
            Self::Editing => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chunking => "chunking",
            Self::Extraction => "extraction",
            Self::Refinement => "refinement",
            Self::Generation => "generation",
            Self::Editing => "editing",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminator for the error variants. One flat set instead of a type
/// hierarchy; callers branch on `kind` when they need instance dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ModelCompatibility,
    ApiKeyMissing,
    Timeout,
    Transcript,
    Other,
}

/// Free-form context attached to an error: whichever of these were known at
/// the failure site. `chunk_index` is 0-based; display adds 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pub model: Option<String>,
    pub provider: Option<String>,
    pub chunk_index: Option<usize>,
    pub total_chunks: Option<usize>,
}

impl ErrorContext {
    pub fn for_model(model: &str, provider: &str) -> Self {
        Self {
            model: Some(model.to_string()),
            provider: Some(provider.to_string()),
            ..Self::default()
        }
    }

    pub fn with_chunk(mut self, chunk_index: usize, total_chunks: usize) -> Self {
        self.chunk_index = Some(chunk_index);
        self.total_chunks = Some(total_chunks);
        self
    }
}

/// Pipeline error carrying the originating stage, context, and actionable
/// suggestions. The named constructors below cover the specialized variants;
/// `wrap_error` classifies arbitrary failures into them.
#[derive(Debug, Error)]
#[error("{}", headline(.stage, .message, .context))]
pub struct PipelineError {
    pub kind: ErrorKind,
    pub stage: Stage,
    pub message: String,
    pub context: ErrorContext,
    pub suggestions: Vec<String>,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

fn headline(stage: &Stage, message: &str, context: &ErrorContext) -> String {
    let mut out = format!("[{} {}/{}] {}", stage, stage.number(), Stage::COUNT, message);
    if let (Some(index), Some(total)) = (context.chunk_index, context.total_chunks) {
        out.push_str(&format!(" (chunk {}/{})", index + 1, total));
    }
    out
}

impl PipelineError {
    fn new(kind: ErrorKind, stage: Stage, message: String) -> Self {
        Self {
            kind,
            stage,
            message,
            context: ErrorContext::default(),
            suggestions: Vec::new(),
            cause: None,
        }
    }

    /// The selected model rejected a request parameter. Always tagged with
    /// the extraction stage.
    pub fn model_compatibility(model: &str, provider: &str, detail: &str) -> Self {
        let message = format!(
            "Model '{}' on provider '{}' rejected a request parameter: {}",
            model, provider, detail
        );
        let mut err = Self::new(ErrorKind::ModelCompatibility, Stage::Extraction, message);
        err.context = ErrorContext::for_model(model, provider);
        err.suggestions = vec![
            "Try a different model with --model (for example --model gemini-2.5-flash)".to_string(),
            "Remove custom token-limit settings from [llm] in config.toml".to_string(),
            "Run `debrief config show` to inspect the active model settings".to_string(),
        ];
        err
    }

    /// No credential configured for the active provider. Defaults to the
    /// extraction stage; override with `at_stage`.
    pub fn api_key_missing(provider: &str) -> Self {
        let message = format!("No API key configured for provider '{}'", provider);
        let mut err = Self::new(ErrorKind::ApiKeyMissing, Stage::Extraction, message);
        err.context.provider = Some(provider.to_string());
        err.suggestions = vec![
            format!("Set the {} environment variable", api_key_env_var(provider)),
            "Run `debrief config init`, then set llm.api_key in the generated config.toml"
                .to_string(),
            "Run `debrief config path` to locate the configuration file".to_string(),
        ];
        err
    }

    /// A model call exceeded its allotted time. The message reports the
    /// budget rounded to whole seconds.
    pub fn timeout(timeout_ms: u64, stage: Stage) -> Self {
        let seconds = (timeout_ms + 500) / 1000;
        let message = format!("Model call exceeded the {}s timeout", seconds);
        let mut err = Self::new(ErrorKind::Timeout, stage, message);
        err.suggestions = timeout_suggestions();
        err
    }

    /// The input transcript itself is unusable. Tagged with the chunking
    /// stage.
    pub fn transcript(detail: &str) -> Self {
        let mut err = Self::new(ErrorKind::Transcript, Stage::Chunking, detail.to_string());
        err.suggestions = vec![
            "Check that the transcript path points to the intended file".to_string(),
            "Confirm the file is plain text, not audio or a binary export".to_string(),
            "Make sure the transcript has real content (at least a few lines)".to_string(),
        ];
        err
    }

    pub fn at_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_cause(mut self, cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Fill context fields that the constructor did not already set.
    fn adopt_context(mut self, context: ErrorContext) -> Self {
        if self.context.model.is_none() {
            self.context.model = context.model;
        }
        if self.context.provider.is_none() {
            self.context.provider = context.provider;
        }
        if self.context.chunk_index.is_none() {
            self.context.chunk_index = context.chunk_index;
        }
        if self.context.total_chunks.is_none() {
            self.context.total_chunks = context.total_chunks;
        }
        self
    }

    /// Full user-facing rendering: headline plus suggestion bullets.
    pub fn user_message(&self) -> String {
        let mut out = self.to_string();
        if !self.suggestions.is_empty() {
            out.push_str("\nSuggestions:");
            for suggestion in &self.suggestions {
                out.push_str("\n  - ");
                out.push_str(suggestion);
            }
        }
        out
    }
}

fn timeout_suggestions() -> Vec<String> {
    vec![
        "Switch to a faster model with --model".to_string(),
        "Split the transcript into smaller files and analyze them separately".to_string(),
        "Raise llm.timeout_ms in config.toml".to_string(),
    ]
}

fn rate_limit_suggestions() -> Vec<String> {
    vec![
        "Wait a minute before retrying; the provider is rate limiting requests".to_string(),
        "Reduce the number of chunks by raising chunking.chunk_size".to_string(),
        "Check your provider quota and billing status".to_string(),
    ]
}

/// Environment variable that carries the API key for a provider.
pub fn api_key_env_var(provider: &str) -> String {
    format!(
        "DEBRIEF_{}_API_KEY",
        provider.trim().to_uppercase().replace(['-', ' '], "_")
    )
}

/// Classify an arbitrary failure into a `PipelineError` for the given stage.
///
/// Errors that already are pipeline errors pass through unchanged. Everything
/// else is matched on its rendered message: token-limit complaints become
/// model-compatibility errors, credential complaints become missing-key
/// errors, abort/timeout wording becomes a timeout (keeping any chunk
/// position from `context`), and the rest is wrapped as-is with the original
/// preserved as the cause. Rate-limit wording appends its own suggestions to
/// whichever variant matched.
pub fn wrap_error(err: anyhow::Error, stage: Stage, context: ErrorContext) -> PipelineError {
    let err = match err.downcast::<PipelineError>() {
        Ok(pipeline_err) => return pipeline_err,
        Err(err) => err,
    };

    let mut text = format!("{:#}", err);
    if text.trim().is_empty() {
        text = "Unknown error".to_string();
    }
    let lowered = text.to_lowercase();

    let mut wrapped = if lowered.contains("max_tokens") || lowered.contains("max_completion_tokens")
    {
        let model = context.model.clone().unwrap_or_else(|| "unknown".to_string());
        let provider = context
            .provider
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        PipelineError::model_compatibility(&model, &provider, &text)
    } else if lowered.contains("api key") || lowered.contains("unauthorized") || lowered.contains("401")
    {
        let provider = context
            .provider
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        PipelineError::api_key_missing(&provider).at_stage(stage)
    } else if lowered.contains("timeout") || lowered.contains("timed out") || lowered.contains("abort")
    {
        let mut timeout_err = PipelineError::new(ErrorKind::Timeout, stage, text.clone());
        timeout_err.suggestions = timeout_suggestions();
        timeout_err
    } else {
        PipelineError::new(ErrorKind::Other, stage, text.clone())
    };

    if lowered.contains("429") || lowered.contains("rate limit") {
        wrapped.suggestions.extend(rate_limit_suggestions());
    }

    wrapped.adopt_context(context).with_cause(err)
}
