//! ijma - inter-annotator agreement CLI
//!
//! Analyzes agreement and disagreement across finalized fatwa annotations,
//! exports the wide per-annotator value table, and summarizes annotator
//! workloads.
//!
//! # Usage
//!
//! ```bash
//! # Agreement scores and merged disagreement records
//! ijma agree -a final.jsonl -u users.jsonl
//!
//! # Same analysis, restricted to completed overlap items, as JSON
//! ijma agree -a final.jsonl --assignments assignments.jsonl --format json
//!
//! # Wide CSV export
//! ijma export -a final.jsonl -u users.jsonl -o agreement.csv
//!
//! # Check a bulk-import item file before upload
//! ijma validate items.jsonl
//! ```

use std::process::ExitCode;

use clap::Parser;

use ijma::cli::commands::agree::cmd_agree;
use ijma::cli::commands::export::cmd_export;
use ijma::cli::commands::stats::cmd_stats;
use ijma::cli::commands::validate::cmd_validate;
use ijma::cli::output::format_error;
use ijma::cli::parser::{Cli, Commands};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Agree(args) => cmd_agree(args),
        Commands::Export(args) => cmd_export(args),
        Commands::Stats(args) => cmd_stats(args),
        Commands::Validate(args) => cmd_validate(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(details) => {
            eprintln!("{}", format_error("command failed", &details));
            ExitCode::FAILURE
        }
    }
}
