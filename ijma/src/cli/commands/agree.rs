//! Agree command: run the agreement/disagreement analysis.

use clap::Parser;

use super::super::output::{log_info, render_report, write_output};
use super::super::parser::OutputFormat;
use super::super::utils::{load_directory, load_finalized};
use crate::agreement::analyze_agreement;

/// Analyze agreement across finalized annotations
#[derive(Parser, Debug)]
pub struct AgreeArgs {
    /// Finalized-annotation snapshot (JSONL)
    #[arg(short, long, value_name = "PATH")]
    pub annotations: String,

    /// User snapshot (JSONL); display names fall back to raw ids without it
    #[arg(short, long, value_name = "PATH")]
    pub users: Option<String>,

    /// Assignment snapshot (JSONL); restricts analysis to completed overlap
    /// items
    #[arg(long, value_name = "PATH")]
    pub assignments: Option<String>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the agree command.
pub fn cmd_agree(args: AgreeArgs) -> Result<(), String> {
    let annotations = load_finalized(&args.annotations, args.assignments.as_deref())?;
    let users = load_directory(args.users.as_deref())?;

    let report = analyze_agreement(&annotations, &users);
    if report.is_empty() {
        log_info("No completed overlap items to analyze yet.", args.quiet);
    }

    let output = match args.format {
        OutputFormat::Human => render_report(&report),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize report: {}", e))?;
            json.push('\n');
            json
        }
    };
    write_output(&output, args.output.as_deref())
}
