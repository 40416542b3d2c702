//! Per-category agreement tallies and percentage scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::criteria::Criterion;

/// Running agreed/total counters for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementTally {
    /// Pair comparisons that matched.
    pub agreed: usize,
    /// All pair comparisons.
    pub total: usize,
}

impl AgreementTally {
    /// Count one pair comparison.
    pub fn record(&mut self, matched: bool) {
        self.total += 1;
        if matched {
            self.agreed += 1;
        }
    }

    /// Percent agreement, or `None` when no pair was ever compared.
    ///
    /// Full-precision; one-decimal rounding is the presentation layer's job.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.agreed as f64 / self.total as f64 * 100.0)
        }
    }
}

/// Tallies for all categories of one analysis run.
///
/// A single pair comparison feeds all seven counters independently, once per
/// category.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    tallies: [AgreementTally; Criterion::COUNT],
}

impl ScoreBoard {
    /// All-zero board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one pair comparison for `criterion`.
    pub fn record(&mut self, criterion: Criterion, matched: bool) {
        self.tallies[criterion as usize].record(matched);
    }

    /// Counters for one category.
    #[must_use]
    pub fn tally(&self, criterion: Criterion) -> AgreementTally {
        self.tallies[criterion as usize]
    }

    /// Percent agreement for one category.
    #[must_use]
    pub fn score(&self, criterion: Criterion) -> Option<f64> {
        self.tally(criterion).percentage()
    }

    /// Scores for every category, `None` where no pairs were compared.
    #[must_use]
    pub fn scores(&self) -> BTreeMap<Criterion, Option<f64>> {
        Criterion::ALL
            .into_iter()
            .map(|c| (c, self.score(c)))
            .collect()
    }
}
