//! CLI argument parsing and structure definitions.

use clap::{Parser, Subcommand, ValueEnum};

use super::commands::{AgreeArgs, ExportArgs, StatsArgs, ValidateArgs};

/// Inter-annotator agreement CLI for fatwa annotation datasets.
#[derive(Parser)]
#[command(name = "ijma")]
#[command(
    author,
    version,
    about = "Inter-annotator agreement analysis for fatwa annotation datasets",
    long_about = r#"
ijma - agreement and disagreement analysis over annotation snapshots

Inputs are JSONL snapshots of the annotation store, one document per line:
finalized annotations, users, item assignments, and bulk-import item files.

EXAMPLES:
  ijma agree -a final.jsonl -u users.jsonl
  ijma agree -a final.jsonl --assignments assignments.jsonl --format json
  ijma export -a final.jsonl -u users.jsonl -o agreement.csv
  ijma stats -u users.jsonl --assignments assignments.jsonl -a final.jsonl
  ijma validate items.jsonl
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze agreement and disagreements across finalized annotations
    #[command(visible_alias = "a")]
    Agree(AgreeArgs),

    /// Export the wide per-annotator value table as CSV
    #[command(visible_alias = "x")]
    Export(ExportArgs),

    /// Per-annotator workload and revision statistics
    #[command(visible_alias = "s")]
    Stats(StatsArgs),

    /// Validate a bulk-import item file
    #[command(visible_alias = "v")]
    Validate(ValidateArgs),
}

/// Unified output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON object
    Json,
}
