//! Output formatting utilities for CLI commands.

use std::io::{self, Write};

use crate::agreement::{AgreementReport, Criterion, CriterionValue};
use crate::stats::AnnotatorReport;

/// Format error message for display.
pub fn format_error(operation: &str, details: &str) -> String {
    format!("ERROR: {} - {}", operation, details)
}

/// Log info message (respects quiet flag).
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", msg);
    }
}

/// Write output to file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write to {}: {}", path, e))?;
    } else {
        print!("{}", content);
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;
    }
    Ok(())
}

/// Disagreement value as the annotation UI shows it: Ya/Tidak for flags,
/// plain numbers for counts, `null` for an unanswered tri-state.
pub fn value_label(value: CriterionValue) -> String {
    match value {
        CriterionValue::Bool(b) | CriterionValue::MaybeBool(Some(b)) => {
            if b { "Ya" } else { "Tidak" }.to_string()
        }
        CriterionValue::MaybeBool(None) => "null".to_string(),
        CriterionValue::Count(n) => n.to_string(),
    }
}

/// Render an agreement report for terminal reading.
pub fn render_report(report: &AgreementReport) -> String {
    let mut out = String::from("Agreement scores\n");
    for criterion in Criterion::ALL {
        let score = report.scores[&criterion]
            .map_or_else(|| "--".to_string(), |s| format!("{:.1}%", s));
        out.push_str(&format!("  {:<30} {:>7}\n", criterion.label(), score));
    }

    for criterion in Criterion::ALL {
        let records = &report.disagreements[&criterion];
        out.push_str(&format!(
            "\nDisagreements: {} ({})\n",
            criterion.label(),
            records.len()
        ));
        if records.is_empty() {
            out.push_str("  none\n");
            continue;
        }
        for record in records {
            let details: Vec<String> = record
                .details
                .iter()
                .map(|d| format!("{}={}", d.user, value_label(d.value)))
                .collect();
            out.push_str(&format!(
                "  {:<12} {}\n",
                record.item_original_id,
                details.join("  ")
            ));
        }
    }
    out
}

/// Render annotator statistics for terminal reading.
pub fn render_stats(reports: &[AnnotatorReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "{} ({})\n  assigned {} | completed {} | draft {} | non-fatwa {} | done {:.1}%\n",
            report.name,
            report.user_id,
            report.assigned_count,
            report.completed_count,
            report.draft_count,
            report.non_fatwa_count,
            report.completion_percentage,
        ));
        out.push_str(&format!(
            "  revisions: question {} / verdict {} / justification {} (total {})\n",
            report.revisions.question_revisions,
            report.revisions.verdict_revisions,
            report.revisions.justification_revisions,
            report.revisions.total_revisions,
        ));
        out.push_str(&format!(
            "  count drift: verdicts +{} -{} | justifications +{} -{}\n",
            report.count_diffs.verdicts_added,
            report.count_diffs.verdicts_removed,
            report.count_diffs.justifications_added,
            report.count_diffs.justifications_removed,
        ));
        out.push_str(&format!(
            "  timing: total {} | mean {}\n",
            format_duration(report.timing.total_seconds),
            format_duration(report.timing.average_seconds),
        ));
    }
    out
}

/// Format seconds as a compact `2h 05m` / `3m 20s` / `45s` string.
pub fn format_duration(total_seconds: f64) -> String {
    let seconds = total_seconds.round() as u64;
    if seconds < 60 {
        return format!("{}s", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m {:02}s", minutes, seconds % 60);
    }
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agreement::analyze_agreement;
    use ijma_core::{Annotation, AnnotationStatus, UserDirectory};

    #[test]
    fn value_labels() {
        assert_eq!(value_label(CriterionValue::Bool(true)), "Ya");
        assert_eq!(value_label(CriterionValue::Bool(false)), "Tidak");
        assert_eq!(value_label(CriterionValue::MaybeBool(Some(false))), "Tidak");
        assert_eq!(value_label(CriterionValue::MaybeBool(None)), "null");
        assert_eq!(value_label(CriterionValue::Count(7)), "7");
    }

    #[test]
    fn duration_formats() {
        assert_eq!(format_duration(45.0), "45s");
        assert_eq!(format_duration(200.0), "3m 20s");
        assert_eq!(format_duration(7500.0), "2h 05m");
    }

    #[test]
    fn empty_report_renders_dashes() {
        let report = analyze_agreement(&[], &UserDirectory::new());
        let text = render_report(&report);
        assert!(text.contains("Agreement scores"));
        assert!(text.contains("--"));
        assert!(text.contains("none"));
    }

    #[test]
    fn disagreement_rows_show_names_and_values() {
        let mut a = Annotation {
            annotation_item_id: "fiqih0001".into(),
            user_id: "u1".into(),
            status: AnnotationStatus::Completed,
            is_fatwa: true,
            ..Annotation::default()
        };
        let mut b = a.clone();
        b.user_id = "u2".into();
        a.is_fatwa = false;

        let mut users = UserDirectory::new();
        users.insert("u1", "Aisyah");
        users.insert("u2", "Budi");

        let text = render_report(&analyze_agreement(&[a, b], &users));
        assert!(text.contains("Aisyah=Tidak"));
        assert!(text.contains("Budi=Ya"));
    }
}
