//! Inter-annotator agreement and disagreement analysis.
//!
//! Given the finalized annotations of items labeled by two or more
//! annotators, [`analyze_agreement`] computes, for each of the seven
//! comparison categories:
//!
//! - a percent-agreement score over all annotator pairs (raw, not
//!   chance-corrected), and
//! - a merged disagreement record per item, listing each annotator's value.
//!
//! The computation is a pure function of its inputs: grouping, pairing and
//! comparison are deterministic given input order, and all accumulator state
//! is constructed per call.
//!
//! ```
//! use ijma::agreement::{analyze_agreement, Criterion};
//! use ijma_core::{Annotation, UserDirectory};
//!
//! let annotations: Vec<Annotation> = vec![];
//! let report = analyze_agreement(&annotations, &UserDirectory::new());
//! assert_eq!(report.scores[&Criterion::IsFatwa], None);
//! ```

pub mod criteria;
pub mod disagreement;
pub mod export;
pub mod pairing;
pub mod score;

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::Serialize;

use ijma_core::{Annotation, ItemAssignment, UserDirectory};

pub use criteria::{values_match, Criterion, CriterionValue};
pub use disagreement::{Disagreement, DisagreementDetail, DisagreementLog};
pub use export::{agreement_csv, annotator_slug};
pub use pairing::{combinations, pairs};
pub use score::{AgreementTally, ScoreBoard};

/// The two artifacts of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgreementReport {
    /// Percent agreement per category; `None` where no item had two or more
    /// finalized annotations.
    pub scores: BTreeMap<Criterion, Option<f64>>,
    /// Merged disagreement records per category, one per disagreeing item.
    pub disagreements: BTreeMap<Criterion, Vec<Disagreement>>,
}

impl AgreementReport {
    /// Total disagreement records across all categories.
    #[must_use]
    pub fn total_disagreements(&self) -> usize {
        self.disagreements.values().map(Vec::len).sum()
    }

    /// Whether no item qualified for analysis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.values().all(Option::is_none)
    }
}

/// Analyze agreement across a snapshot of finalized annotations.
///
/// Groups annotations by item, skips items with fewer than two annotations,
/// and runs every annotator pair through all seven categories: extract,
/// compare, tally, and record a disagreement on mismatch. Annotator ids are
/// resolved to display names through `users`, falling back to the raw id.
///
/// An empty or all-singleton input is a legitimate "nothing to analyze yet"
/// state: every score is `None` and every disagreement list is empty.
#[must_use]
pub fn analyze_agreement(finalized: &[Annotation], users: &UserDirectory) -> AgreementReport {
    let mut board = ScoreBoard::new();
    let mut log = DisagreementLog::new();

    let groups = group_by_item(finalized);
    log::debug!(
        "analyzing {} annotations across {} items",
        finalized.len(),
        groups.len()
    );

    for (item_id, group) in groups {
        if group.len() < 2 {
            continue;
        }
        for (a, b) in pairing::pairs(&group) {
            let name_a = users.display_name(&a.user_id);
            let name_b = users.display_name(&b.user_id);
            for criterion in Criterion::ALL {
                let value_a = criterion.extract(a);
                let value_b = criterion.extract(b);
                let matched = values_match(value_a, value_b);
                board.record(criterion, matched);
                if !matched {
                    log.record(criterion, item_id, name_a, value_a, name_b, value_b);
                }
            }
        }
    }

    AgreementReport {
        scores: board.scores(),
        disagreements: log.into_lists(),
    }
}

/// Group annotations by item id, preserving first-encounter order of both
/// the items and the annotations within each group.
#[must_use]
pub fn group_by_item(annotations: &[Annotation]) -> Vec<(&str, Vec<&Annotation>)> {
    let mut order: Vec<(&str, Vec<&Annotation>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for annotation in annotations {
        let key = annotation.annotation_item_id.as_str();
        match index.get(key) {
            Some(&i) => order[i].1.push(annotation),
            None => {
                index.insert(key, order.len());
                order.push((key, vec![annotation]));
            }
        }
    }
    order
}

/// Item ids whose assignments are all terminal and number two or more.
///
/// This is the upstream filter deciding which items' finalized annotations
/// are worth fetching for analysis. Order follows first encounter in the
/// assignment snapshot.
#[must_use]
pub fn completed_overlap_ids(assignments: &[ItemAssignment]) -> Vec<String> {
    let mut order: Vec<(&str, Vec<&ItemAssignment>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for assignment in assignments {
        let key = assignment.original_id.as_str();
        match index.get(key) {
            Some(&i) => order[i].1.push(assignment),
            None => {
                index.insert(key, order.len());
                order.push((key, vec![assignment]));
            }
        }
    }
    order
        .into_iter()
        .filter(|(_, group)| group.len() > 1 && group.iter().all(|a| a.status.is_terminal()))
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Collapse duplicate annotation documents fetched from the two finalized
/// collections.
///
/// Keeps the last-read record for each document id at the position the id was
/// first seen, matching how the upstream fetch deduplicates.
#[must_use]
pub fn dedup_annotations(annotations: Vec<Annotation>) -> Vec<Annotation> {
    let mut out: Vec<Annotation> = Vec::with_capacity(annotations.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    for annotation in annotations {
        let key = annotation.document_id();
        match index.get(&key) {
            Some(&i) => out[i] = annotation,
            None => {
                index.insert(key, out.len());
                out.push(annotation);
            }
        }
    }
    out
}
