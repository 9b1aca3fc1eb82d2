//! Command-line arguments for the `draft-watch` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::orchestrator::RunMode;

/// Log output format.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Parsed command line.
#[derive(Debug, Parser)]
#[command(name = "draft-watch", about = "Draft status change notifier", version, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "draft-watch.toml")]
    pub config: PathBuf,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Override the state file location.
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Print the computed message without notifying or saving state.
    #[arg(long, conflicts_with = "record_only")]
    pub dry_run: bool,

    /// Save the current message as seen without notifying.
    #[arg(long)]
    pub record_only: bool,
}

impl Cli {
    /// Run mode selected by the flags; notifying is the default.
    #[must_use]
    pub fn run_mode(&self) -> RunMode {
        if self.dry_run {
            RunMode::DryRun
        } else if self.record_only {
            RunMode::RecordOnly
        } else {
            RunMode::Notify
        }
    }
}
