//! The seven comparison categories and their derived values.
//!
//! Each [`Criterion`] reduces a full [`Annotation`] to one comparable scalar:
//! a screening flag, or a count derived from the verdict/justification
//! sequences. Verbatim text itself is never compared, only the derived
//! flags and counts.
//!
//! The categories form a declarative table ([`Criterion::ALL`]); the report
//! assembler drives one generic extract → compare → tally → accumulate loop
//! over it instead of repeating per-category plumbing.

use std::fmt;

use ijma_core::Annotation;
use serde::{Deserialize, Serialize};

/// A comparison category.
///
/// Wire names (used as JSON report keys) are the camelCase variant names;
/// [`Criterion::csv_key`] gives the shorter snake_case header stem used by
/// the wide CSV export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    /// Screening decision: is the article a fatwa.
    IsFatwa,
    /// Whether the article answers the question.
    IsQuestionAnswerable,
    /// Whether the seed question was flagged for revision.
    QuestionNeedsRevision,
    /// Number of verdicts.
    VerdictCount,
    /// Verdicts with either revision flag set.
    VerdictRevisionCount,
    /// Total justification sources of both kinds.
    JustificationCount,
    /// Justification sources with any revision flag set.
    JustificationRevisionCount,
}

impl Criterion {
    /// All categories, in report order.
    pub const ALL: [Criterion; 7] = [
        Criterion::IsFatwa,
        Criterion::IsQuestionAnswerable,
        Criterion::QuestionNeedsRevision,
        Criterion::VerdictCount,
        Criterion::VerdictRevisionCount,
        Criterion::JustificationCount,
        Criterion::JustificationRevisionCount,
    ];

    /// Number of categories.
    pub const COUNT: usize = Criterion::ALL.len();

    /// Wire name, identical to the JSON report key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Criterion::IsFatwa => "isFatwa",
            Criterion::IsQuestionAnswerable => "isQuestionAnswerable",
            Criterion::QuestionNeedsRevision => "questionNeedsRevision",
            Criterion::VerdictCount => "verdictCount",
            Criterion::VerdictRevisionCount => "verdictRevisionCount",
            Criterion::JustificationCount => "justificationCount",
            Criterion::JustificationRevisionCount => "justificationRevisionCount",
        }
    }

    /// Header stem for the wide CSV export.
    #[must_use]
    pub fn csv_key(self) -> &'static str {
        match self {
            Criterion::IsFatwa => "is_fatwa",
            Criterion::IsQuestionAnswerable => "is_q_answerable",
            Criterion::QuestionNeedsRevision => "q_needs_revision",
            Criterion::VerdictCount => "verdict_count",
            Criterion::VerdictRevisionCount => "verdict_revision_count",
            Criterion::JustificationCount => "justification_count",
            Criterion::JustificationRevisionCount => "justification_revision_count",
        }
    }

    /// Human-readable label for report rendering.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Criterion::IsFatwa => "Is Fatwa",
            Criterion::IsQuestionAnswerable => "Is Question Answerable",
            Criterion::QuestionNeedsRevision => "Question Needs Revision",
            Criterion::VerdictCount => "Verdict Count",
            Criterion::VerdictRevisionCount => "Verdict Revision Count",
            Criterion::JustificationCount => "Justification Count",
            Criterion::JustificationRevisionCount => "Justification Revision Count",
        }
    }

    /// Reduce an annotation to this category's comparable value.
    ///
    /// Absent nested structures reduce to zero counts; this never fails on a
    /// partially-populated record.
    #[must_use]
    pub fn extract(self, annotation: &Annotation) -> CriterionValue {
        match self {
            Criterion::IsFatwa => CriterionValue::Bool(annotation.is_fatwa),
            Criterion::IsQuestionAnswerable => {
                CriterionValue::MaybeBool(annotation.is_question_answerable)
            }
            Criterion::QuestionNeedsRevision => {
                CriterionValue::Bool(annotation.question_needs_revision)
            }
            Criterion::VerdictCount => CriterionValue::Count(annotation.verdict_count()),
            Criterion::VerdictRevisionCount => {
                CriterionValue::Count(annotation.verdict_revision_count())
            }
            Criterion::JustificationCount => {
                CriterionValue::Count(annotation.justification_count())
            }
            Criterion::JustificationRevisionCount => {
                CriterionValue::Count(annotation.justification_revision_count())
            }
        }
    }

    /// Raw derived value formatted for the wide CSV export.
    ///
    /// Booleans become `Yes`/`No`; an absent `isQuestionAnswerable` counts as
    /// `No`, matching what the legacy exporter emitted. Counts are plain
    /// integers.
    #[must_use]
    pub fn csv_value(self, annotation: &Annotation) -> String {
        match self.extract(annotation) {
            CriterionValue::Bool(true) | CriterionValue::MaybeBool(Some(true)) => "Yes".to_string(),
            CriterionValue::Bool(false) | CriterionValue::MaybeBool(_) => "No".to_string(),
            CriterionValue::Count(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A derived comparison value.
///
/// Tagged so that kinds never coerce: a flag never equals a count, and a
/// plain flag never equals a tri-state one. Equality within a kind is strict
/// value equality; `MaybeBool(None) == MaybeBool(None)` agrees, as two
/// annotators who both left the field unanswered are in agreement.
///
/// Serializes untagged, so report JSON carries plain `true`/`false`, `null`,
/// or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriterionValue {
    /// A required screening flag.
    Bool(bool),
    /// A tri-state flag that may be unanswered.
    MaybeBool(Option<bool>),
    /// A derived count.
    Count(usize),
}

/// Strict equality check for one category's pair of values.
///
/// No tolerance, no type coercion: values of different kinds never match.
#[must_use]
pub fn values_match(a: CriterionValue, b: CriterionValue) -> bool {
    a == b
}
