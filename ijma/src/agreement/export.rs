//! Wide-format CSV export of raw per-annotator values.
//!
//! One row per overlapping item, one column per (criterion × annotator)
//! combination, carrying the raw derived value each annotator produced:
//! `Yes`/`No` for flags, plain integers for counts, `N/A` where an annotator
//! did not annotate the item. The column set is built once, before row
//! population, so column order is stable across rows.

use ijma_core::{Annotation, UserDirectory};

use super::criteria::Criterion;
use super::group_by_item;

/// Column slug for an annotator display name: lowercased, whitespace runs
/// collapsed to single underscores.
///
/// Two names that slugify identically produce duplicate columns; inherited
/// from the legacy export, where downstream tooling keys on these headers.
#[must_use]
pub fn annotator_slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

// RFC-4180 quoting, applied only when a field needs it. The legacy exporter
// joined fields blindly and a comma in a display name corrupted the row.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render the wide agreement table as CSV text.
///
/// Rows cover items with two or more finalized annotations, in
/// first-encounter order of the input; annotator columns follow first
/// appearance in the input. Returns just the header line when nothing
/// qualifies.
#[must_use]
pub fn agreement_csv(finalized: &[Annotation], users: &UserDirectory) -> String {
    // Distinct annotators, first-appearance order.
    let mut annotators: Vec<&str> = Vec::new();
    for annotation in finalized {
        if !annotators.contains(&annotation.user_id.as_str()) {
            annotators.push(&annotation.user_id);
        }
    }

    let mut header: Vec<String> = vec!["original_id".to_string()];
    for criterion in Criterion::ALL {
        for user_id in &annotators {
            let slug = annotator_slug(users.display_name(user_id));
            header.push(csv_field(&format!("{}_{}", criterion.csv_key(), slug)));
        }
    }

    let mut lines = vec![header.join(",")];
    for (item_id, group) in group_by_item(finalized) {
        if group.len() < 2 {
            continue;
        }
        let mut row: Vec<String> = vec![csv_field(item_id)];
        for criterion in Criterion::ALL {
            for user_id in &annotators {
                let value = group
                    .iter()
                    .find(|a| a.user_id == *user_id)
                    .map_or_else(|| "N/A".to_string(), |a| criterion.csv_value(a));
                row.push(csv_field(&value));
            }
        }
        lines.push(row.join(","));
    }

    let mut csv = lines.join("\n");
    csv.push('\n');
    csv
}
