//! Disagreement records and their accumulator.
//!
//! A [`Disagreement`] is keyed by (category, item): however many pairwise
//! mismatches an item produces in one category, it yields exactly one record,
//! whose detail list carries one `{user, value}` entry per annotator. The
//! [`DisagreementLog`] is explicit state constructed fresh per analysis run;
//! nothing is shared across invocations.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::criteria::{Criterion, CriterionValue};

/// One annotator's value inside a disagreement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisagreementDetail {
    /// Annotator display name.
    pub user: String,
    /// The derived value that annotator produced.
    pub value: CriterionValue,
}

/// A per-(category, item) disagreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disagreement {
    /// The item's stable external identifier.
    pub item_original_id: String,
    /// The category the annotators disagreed on.
    pub criteria: Criterion,
    /// One entry per annotator, in first-recorded order.
    pub details: Vec<DisagreementDetail>,
}

impl Disagreement {
    fn new(item_original_id: &str, criteria: Criterion) -> Self {
        Self {
            item_original_id: item_original_id.to_string(),
            criteria,
            details: Vec::new(),
        }
    }

    fn push_unique(&mut self, user: &str, value: CriterionValue) {
        if !self.details.iter().any(|d| d.user == user) {
            self.details.push(DisagreementDetail {
                user: user.to_string(),
                value,
            });
        }
    }
}

/// Accumulates disagreements across all pair comparisons of one analysis run.
#[derive(Debug, Default)]
pub struct DisagreementLog {
    // Records per category in insertion order; the index maps
    // (category, item id) to a position in that category's list.
    records: HashMap<Criterion, Vec<Disagreement>>,
    index: HashMap<(Criterion, String), usize>,
}

impl DisagreementLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one pairwise mismatch.
    ///
    /// Ensures a single record exists for (`criterion`, `item_id`) and adds
    /// each side's value unless that annotator is already present. A given
    /// annotator's value for an item/category is recorded once no matter how
    /// many peers it is compared against.
    pub fn record(
        &mut self,
        criterion: Criterion,
        item_id: &str,
        user_a: &str,
        value_a: CriterionValue,
        user_b: &str,
        value_b: CriterionValue,
    ) {
        let records = self.records.entry(criterion).or_default();
        let key = (criterion, item_id.to_string());
        let position = *self.index.entry(key).or_insert_with(|| {
            records.push(Disagreement::new(item_id, criterion));
            records.len() - 1
        });

        let record = &mut records[position];
        record.push_unique(user_a, value_a);
        record.push_unique(user_b, value_b);
    }

    /// Number of disagreement records for one category.
    #[must_use]
    pub fn count(&self, criterion: Criterion) -> usize {
        self.records.get(&criterion).map_or(0, Vec::len)
    }

    /// Drain into per-category lists, with an empty list for every category
    /// that saw no disagreement.
    #[must_use]
    pub fn into_lists(mut self) -> BTreeMap<Criterion, Vec<Disagreement>> {
        Criterion::ALL
            .into_iter()
            .map(|c| (c, self.records.remove(&c).unwrap_or_default()))
            .collect()
    }
}
