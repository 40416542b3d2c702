//! Stats command: per-annotator workload and revision statistics.

use std::path::Path;

use clap::Parser;

use super::super::output::{render_stats, write_output};
use super::super::parser::OutputFormat;
use crate::ingest;
use crate::stats::annotator_reports;
use ijma_core::Dataset;

/// Per-annotator workload and revision statistics
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// User snapshot (JSONL)
    #[arg(short, long, value_name = "PATH")]
    pub users: String,

    /// Assignment snapshot (JSONL)
    #[arg(long, value_name = "PATH")]
    pub assignments: Option<String>,

    /// Finalized-annotation snapshot (JSONL)
    #[arg(short, long, value_name = "PATH")]
    pub annotations: Option<String>,

    /// Bulk-import item file (JSONL); enables seed count-diff stats
    #[arg(short, long, value_name = "PATH")]
    pub items: Option<String>,

    /// Pilot view: completion percentage over the whole item universe
    #[arg(long)]
    pub pilot: bool,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Run the stats command.
pub fn cmd_stats(args: StatsArgs) -> Result<(), String> {
    let users = ingest::load_users(Path::new(&args.users)).map_err(|e| e.to_string())?;

    let assignments = match args.assignments.as_deref() {
        Some(path) => ingest::load_assignments(Path::new(path)).map_err(|e| e.to_string())?,
        None => Vec::new(),
    };
    let annotations = match args.annotations.as_deref() {
        Some(path) => ingest::load_annotations(Path::new(path)).map_err(|e| e.to_string())?,
        None => Vec::new(),
    };
    let dataset = if args.pilot { Dataset::Pilot } else { Dataset::Main };
    let items = match args.items.as_deref() {
        Some(path) => ingest::load_items(Path::new(path), dataset).map_err(|e| e.to_string())?,
        None => Vec::new(),
    };

    let reports = annotator_reports(&users, &assignments, &annotations, &items, args.pilot);

    let output = match args.format {
        OutputFormat::Human => render_stats(&reports),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&reports)
                .map_err(|e| format!("Failed to serialize stats: {}", e))?;
            json.push('\n');
            json
        }
    };
    write_output(&output, args.output.as_deref())
}
