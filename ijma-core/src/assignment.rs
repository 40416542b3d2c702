//! Item-to-annotator assignments.
//!
//! Assignments mirror the annotation lifecycle per (item, annotator) pair and
//! are what the workflow queries to decide which items are finished. An item
//! with two or more assignments, all terminal, is a completed overlap item
//! and qualifies for agreement analysis.

use serde::{Deserialize, Serialize};

use crate::item::Dataset;

/// Assignment lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    /// Assigned, not yet started.
    #[default]
    Pending,
    /// Annotation saved as draft.
    Draft,
    /// Annotation finalized.
    Completed,
    /// Annotation finalized as not-a-fatwa.
    NonFatwa,
}

impl AssignmentStatus {
    /// Whether this status is terminal (completed or non-fatwa).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, AssignmentStatus::Completed | AssignmentStatus::NonFatwa)
    }
}

/// One annotator's assignment to one source item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAssignment {
    /// Store-assigned document id.
    #[serde(default)]
    pub id: String,
    /// Store document id of the item.
    #[serde(default)]
    pub annotation_item_id: String,
    /// The item's stable external identifier.
    pub original_id: String,
    /// The annotator's user id.
    pub user_id: String,
    /// Lifecycle state.
    #[serde(default)]
    pub status: AssignmentStatus,
    /// Dataset the assignment belongs to.
    #[serde(default)]
    pub dataset: Dataset,
}
