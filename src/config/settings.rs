//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::llm::CallOptions;
use crate::pipeline::DEFAULT_TIMEOUT_MS;
use crate::transcript::chunker::{DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP_SIZE};
use crate::transcript::ChunkOptions;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Transcript chunking settings
    #[serde(default)]
    pub chunking: ChunkingSettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (for cloud providers)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (for local/custom providers)
    #[serde(default)]
    pub endpoint: String,

    /// Per-call timeout in milliseconds; values below 1000 fall back to the
    /// default
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Sampling temperature for structured calls
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Output token cap per call
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingSettings {
    /// Target max characters per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters of trailing context repeated into each chunk's overlap
    #[serde(default = "default_overlap_size")]
    pub overlap_size: usize,

    /// Prefer chunk boundaries at line breaks over mid-utterance splits
    #[serde(default = "default_true")]
    pub preserve_speaker_context: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Generate a PRD when the meeting produced deliverables
    #[serde(default = "default_true")]
    pub generate_prd: bool,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_output_tokens() -> u32 {
    8192
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_overlap_size() -> usize {
    DEFAULT_OVERLAP_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            timeout_ms: default_timeout_ms(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap_size: default_overlap_size(),
            preserve_speaker_context: true,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { generate_prd: true }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            llm: LlmSettings::default(),
            chunking: ChunkingSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("DEBRIEF_GEMINI_API_KEY") {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "debrief", "debrief")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Chunking options for the transcript stage.
    pub fn chunk_options(&self) -> ChunkOptions {
        ChunkOptions {
            chunk_size: self.chunking.chunk_size,
            overlap_size: self.chunking.overlap_size,
            preserve_speaker_context: self.chunking.preserve_speaker_context,
        }
    }

    /// Generation settings for the model-calling stages.
    pub fn call_options(&self) -> CallOptions {
        CallOptions {
            timeout_ms: self.llm.timeout_ms,
            temperature: self.llm.temperature,
            max_output_tokens: self.llm.max_output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gemini_25_flash() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "gemini-2.5-flash");
    }

    #[test]
    fn defaults_match_chunker_constants() {
        let options = Settings::default().chunk_options();
        assert_eq!(options.chunk_size, 4000);
        assert_eq!(options.overlap_size, 200);
        assert!(options.preserve_speaker_context);
    }

    #[test]
    fn default_timeout_is_three_minutes() {
        assert_eq!(Settings::default().llm.timeout_ms, 180_000);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let settings: Settings = toml::from_str("[llm]\napi_key = \"k\"\n").unwrap();
        assert_eq!(settings.llm.api_key, "k");
        assert_eq!(settings.llm.model, "gemini-2.5-flash");
        assert_eq!(settings.chunking.chunk_size, 4000);
        assert!(settings.output.generate_prd);
    }
}
