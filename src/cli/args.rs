//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// debrief - Turn raw meeting transcripts into structured meeting intelligence
#[derive(Parser, Debug)]
#[command(name = "debrief")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a transcript into meeting notes and, when it produced
    /// deliverables, a PRD
    Analyze {
        /// Path to the transcript file
        file: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip PRD generation
        #[arg(long)]
        no_prd: bool,

        /// Override the configured model for this run
        #[arg(short, long)]
        model: Option<String>,

        /// Emit the structured records as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },

    /// Show how a transcript would be chunked, without calling any model
    Chunks {
        /// Path to the transcript file
        file: PathBuf,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., llm.model)
        key: String,

        /// Value to set
        value: String,
    },
}
