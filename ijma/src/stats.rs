//! Per-annotator workload and behaviour statistics.
//!
//! Aggregates the admin dashboard numbers: how much of each annotator's
//! assignment load is finished, how often they flag seed text for revision,
//! how far their entity counts drift from the imported seed annotations, and
//! how long they take per item (pilot timing).

use serde::Serialize;
use std::collections::HashMap;

use ijma_core::{Annotation, AnnotationItem, AssignmentStatus, ItemAssignment, User};

/// Counts of seed-text fields flagged for revision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionStats {
    /// Annotations whose question was flagged.
    pub question_revisions: usize,
    /// Verdicts with either revision flag set.
    pub verdict_revisions: usize,
    /// Justification sources with any revision flag set.
    pub justification_revisions: usize,
    /// Sum of the three.
    pub total_revisions: usize,
}

/// Entity-count drift between seed items and final annotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountDiffStats {
    /// Verdicts added beyond the seed count.
    pub verdicts_added: usize,
    /// Verdicts removed below the seed count.
    pub verdicts_removed: usize,
    /// Justification sources added beyond the seed count.
    pub justifications_added: usize,
    /// Justification sources removed below the seed count.
    pub justifications_removed: usize,
}

/// Annotation timing over records that carry a duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingStats {
    /// Total seconds across timed annotations.
    pub total_seconds: f64,
    /// Mean seconds per timed annotation; 0 when none were timed.
    pub average_seconds: f64,
}

/// One annotator's aggregate report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatorReport {
    /// User id.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Assignments of any status.
    pub assigned_count: usize,
    /// Assignments finalized as completed.
    pub completed_count: usize,
    /// Assignments saved as draft.
    pub draft_count: usize,
    /// Assignments finalized as non-fatwa.
    pub non_fatwa_count: usize,
    /// Completed + non-fatwa.
    pub total_finished: usize,
    /// Finished share of the denominator, 0–100.
    pub completion_percentage: f64,
    /// Seed-text revision tallies.
    pub revisions: RevisionStats,
    /// Entity-count drift vs seed items.
    pub count_diffs: CountDiffStats,
    /// Pilot timing.
    pub timing: TimingStats,
}

/// Build one report per user from workflow snapshots.
///
/// `annotations` is expected to be the finalized set; revision, count-diff
/// and timing stats are computed from each user's records in it. When
/// `pilot` is set the completion denominator is the full item universe
/// (every pilot item goes to every annotator); otherwise it is the user's
/// own assignment count.
#[must_use]
pub fn annotator_reports(
    users: &[User],
    assignments: &[ItemAssignment],
    annotations: &[Annotation],
    items: &[AnnotationItem],
    pilot: bool,
) -> Vec<AnnotatorReport> {
    let mut assignments_by_user: HashMap<&str, Vec<&ItemAssignment>> = HashMap::new();
    for assignment in assignments {
        assignments_by_user
            .entry(assignment.user_id.as_str())
            .or_default()
            .push(assignment);
    }

    let mut annotations_by_user: HashMap<&str, Vec<&Annotation>> = HashMap::new();
    for annotation in annotations {
        annotations_by_user
            .entry(annotation.user_id.as_str())
            .or_default()
            .push(annotation);
    }

    let items_by_original_id: HashMap<&str, &AnnotationItem> = items
        .iter()
        .map(|item| (item.original_id.as_str(), item))
        .collect();

    users
        .iter()
        .map(|user| {
            let user_assignments = assignments_by_user
                .get(user.id.as_str())
                .map_or(&[][..], Vec::as_slice);
            let user_annotations = annotations_by_user
                .get(user.id.as_str())
                .map_or(&[][..], Vec::as_slice);

            let assigned_count = user_assignments.len();
            let completed_count = count_status(user_assignments, AssignmentStatus::Completed);
            let draft_count = count_status(user_assignments, AssignmentStatus::Draft);
            let non_fatwa_count = count_status(user_assignments, AssignmentStatus::NonFatwa);
            let total_finished = completed_count + non_fatwa_count;

            let denominator = if pilot { items.len() } else { assigned_count };
            let completion_percentage = if denominator > 0 {
                total_finished as f64 / denominator as f64 * 100.0
            } else {
                0.0
            };

            AnnotatorReport {
                user_id: user.id.clone(),
                name: user.name.clone(),
                assigned_count,
                completed_count,
                draft_count,
                non_fatwa_count,
                total_finished,
                completion_percentage,
                revisions: revision_stats(user_annotations),
                count_diffs: count_diff_stats(user_annotations, &items_by_original_id),
                timing: timing_stats(user_annotations),
            }
        })
        .collect()
}

fn count_status(assignments: &[&ItemAssignment], status: AssignmentStatus) -> usize {
    assignments.iter().filter(|a| a.status == status).count()
}

fn revision_stats(annotations: &[&Annotation]) -> RevisionStats {
    let mut stats = RevisionStats::default();
    for annotation in annotations {
        if annotation.question_needs_revision {
            stats.question_revisions += 1;
        }
        stats.verdict_revisions += annotation.verdict_revision_count();
        stats.justification_revisions += annotation.justification_revision_count();
    }
    stats.total_revisions =
        stats.question_revisions + stats.verdict_revisions + stats.justification_revisions;
    stats
}

fn count_diff_stats(
    annotations: &[&Annotation],
    items_by_original_id: &HashMap<&str, &AnnotationItem>,
) -> CountDiffStats {
    let mut stats = CountDiffStats::default();
    for annotation in annotations {
        // Annotations without a matching seed item contribute nothing.
        let Some(item) = items_by_original_id.get(annotation.annotation_item_id.as_str()) else {
            continue;
        };

        let seed_verdicts = item.seed_verdict_count();
        let final_verdicts = annotation.verdict_count();
        stats.verdicts_added += final_verdicts.saturating_sub(seed_verdicts);
        stats.verdicts_removed += seed_verdicts.saturating_sub(final_verdicts);

        let seed_justifications = item.seed_justification_count();
        let final_justifications = annotation.justification_count();
        stats.justifications_added += final_justifications.saturating_sub(seed_justifications);
        stats.justifications_removed += seed_justifications.saturating_sub(final_justifications);
    }
    stats
}

fn timing_stats(annotations: &[&Annotation]) -> TimingStats {
    let mut total = 0.0;
    let mut timed = 0usize;
    for annotation in annotations {
        if let Some(seconds) = annotation.duration_seconds {
            total += seconds;
            timed += 1;
        }
    }
    TimingStats {
        total_seconds: total,
        average_seconds: if timed > 0 { total / timed as f64 } else { 0.0 },
    }
}
