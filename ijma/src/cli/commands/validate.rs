//! Validate command: check a bulk-import item file.

use std::path::Path;

use clap::Parser;

use crate::ingest::validate_item_file;

/// Validate a bulk-import item file
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Item file to check (JSONL)
    #[arg(value_name = "PATH")]
    pub file: String,
}

/// Run the validate command. Fails when the file cannot be imported as-is.
pub fn cmd_validate(args: ValidateArgs) -> Result<(), String> {
    let report = validate_item_file(Path::new(&args.file)).map_err(|e| e.to_string())?;

    println!("{} records parsed", report.records);
    if !report.duplicate_ids.is_empty() {
        println!("Duplicate ids:");
        for id in &report.duplicate_ids {
            println!("  - {}", id);
        }
    }
    if !report.errors.is_empty() {
        println!("Malformed lines:");
        for error in &report.errors {
            println!("  - {}", error);
        }
    }

    if report.is_clean() {
        println!("OK");
        Ok(())
    } else {
        Err(format!(
            "{} duplicate id(s), {} malformed line(s)",
            report.duplicate_ids.len(),
            report.errors.len()
        ))
    }
}
