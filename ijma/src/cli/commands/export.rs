//! Export command: wide-format CSV of raw per-annotator values.

use clap::Parser;

use super::super::output::{log_info, write_output};
use super::super::utils::{load_directory, load_finalized};
use crate::agreement::agreement_csv;

/// Export the wide agreement table as CSV
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Finalized-annotation snapshot (JSONL)
    #[arg(short, long, value_name = "PATH")]
    pub annotations: String,

    /// User snapshot (JSONL); column slugs fall back to raw ids without it
    #[arg(short, long, value_name = "PATH")]
    pub users: Option<String>,

    /// Assignment snapshot (JSONL); restricts the export to completed overlap
    /// items
    #[arg(long, value_name = "PATH")]
    pub assignments: Option<String>,

    /// Write CSV to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the export command.
pub fn cmd_export(args: ExportArgs) -> Result<(), String> {
    let annotations = load_finalized(&args.annotations, args.assignments.as_deref())?;
    let users = load_directory(args.users.as_deref())?;

    let csv = agreement_csv(&annotations, &users);
    let rows = csv.lines().count().saturating_sub(1);
    log_info(&format!("Exported {} overlap items.", rows), args.quiet);
    write_output(&csv, args.output.as_deref())
}
