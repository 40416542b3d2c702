//! Source items: article-derived units of annotation work.
//!
//! Items are created on bulk import from a line-delimited JSON file
//! ([`ItemFileRecord`], one record per line) and are immutable afterwards;
//! only per-annotator annotation overlays change. The seed question, verdicts
//! and justifications come pre-annotated from the import file and serve as
//! the baseline for count-diff statistics.

use serde::{Deserialize, Serialize};

use crate::annotation::SourceType;

/// Which dataset an item (or assignment) belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// The main annotation dataset.
    #[default]
    Main,
    /// The pilot/calibration dataset.
    Pilot,
}

/// Item-level workflow state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Imported, not yet assigned to anyone.
    #[default]
    Pending,
    /// Assigned to one or more annotators.
    Assigned,
    /// All assignments finished.
    Completed,
}

/// How an item was distributed among annotators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    /// Exactly one annotator.
    Global,
    /// Two or more annotators; eligible for agreement analysis.
    Overlap,
}

/// A seed verdict shipped with the imported item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedVerdict {
    /// The ruling label.
    #[serde(default)]
    pub verdict: String,
    /// Verbatim article passage.
    #[serde(default)]
    pub context: String,
    /// Pre-marked primary verdict, if the import carried one.
    #[serde(default)]
    pub is_primary_verdict: bool,
}

/// A seed scriptural source (no revision flags; those live on annotations).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedPrimarySource {
    /// Scripture category.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// Verbatim translated text.
    #[serde(default)]
    pub text_translation: String,
    /// Verbatim citation.
    #[serde(default)]
    pub reference: String,
}

/// A seed scholarly source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedSecondarySource {
    /// Scholar name.
    #[serde(default)]
    pub scholar: String,
    /// Work/edition detail.
    #[serde(default)]
    pub source_detail: String,
    /// Verbatim quote.
    #[serde(default)]
    pub quote_verbatim: String,
}

/// Seed justifications shipped with the imported item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedJustification {
    /// Scriptural sources.
    #[serde(default)]
    pub primary_sources: Vec<SeedPrimarySource>,
    /// Scholarly sources.
    #[serde(default)]
    pub secondary_sources: Vec<SeedSecondarySource>,
}

/// A source item as stored by the collaborator document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationItem {
    /// Store-assigned document id.
    #[serde(default)]
    pub id: String,
    /// Stable external identifier from the import file. Unique and
    /// lexically-numeric-sortable (e.g. `fiqih0007`).
    pub original_id: String,
    /// Source article URL.
    #[serde(default)]
    pub url: String,
    /// School of jurisprudence the article belongs to.
    #[serde(default)]
    pub madhab: String,
    /// Topic label.
    #[serde(default)]
    pub topic: String,
    /// Seed question.
    #[serde(default)]
    pub question: String,
    /// Seed verdicts.
    #[serde(default)]
    pub verdicts: Vec<SeedVerdict>,
    /// Seed justifications.
    #[serde(default)]
    pub justifications: SeedJustification,
    /// Full article content.
    #[serde(default)]
    pub content: String,
    /// User ids the item is assigned to.
    #[serde(default)]
    pub assigned_to: Vec<String>,
    /// Workflow state.
    #[serde(default)]
    pub status: ItemStatus,
    /// Distribution kind, set when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_type: Option<AssignmentType>,
    /// Dataset the item belongs to.
    #[serde(default)]
    pub dataset: Dataset,
}

impl AnnotationItem {
    /// Number of seed verdicts.
    #[must_use]
    pub fn seed_verdict_count(&self) -> usize {
        self.verdicts.len()
    }

    /// Total seed justification sources of both kinds.
    #[must_use]
    pub fn seed_justification_count(&self) -> usize {
        self.justifications.primary_sources.len() + self.justifications.secondary_sources.len()
    }
}

/// A verdict as it appears in the import file, where the verbatim passage is
/// called `answer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileVerdict {
    /// The ruling label.
    #[serde(default)]
    pub verdict: String,
    /// Verbatim passage; stored as `context` after import.
    #[serde(default)]
    pub answer: String,
    /// Pre-marked primary verdict.
    #[serde(default)]
    pub is_primary_verdict: bool,
}

/// One line of the bulk-import JSONL file.
///
/// The import format predates the store schema: the verdict passage field is
/// `answer` and the article body is `context`. [`ItemFileRecord::into_item`]
/// maps both onto the stored names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFileRecord {
    /// Stable external identifier; becomes `original_id`.
    pub id: String,
    /// Source article URL.
    #[serde(default)]
    pub url: String,
    /// School of jurisprudence.
    #[serde(default)]
    pub madhab: String,
    /// Topic label.
    #[serde(default)]
    pub topic: String,
    /// Seed question.
    #[serde(default)]
    pub question: String,
    /// Seed verdicts (import shape).
    #[serde(default)]
    pub verdicts: Vec<FileVerdict>,
    /// Seed justifications.
    #[serde(default)]
    pub justifications: SeedJustification,
    /// Full article content; stored as `content` after import.
    #[serde(default)]
    pub context: String,
}

impl ItemFileRecord {
    /// Convert the import shape into a store item for `dataset`.
    ///
    /// The store document id is left empty; the collaborator store assigns it
    /// on write.
    #[must_use]
    pub fn into_item(self, dataset: Dataset) -> AnnotationItem {
        AnnotationItem {
            id: String::new(),
            original_id: self.id,
            url: self.url,
            madhab: self.madhab,
            topic: self.topic,
            question: self.question,
            verdicts: self
                .verdicts
                .into_iter()
                .map(|v| SeedVerdict {
                    verdict: v.verdict,
                    context: v.answer,
                    is_primary_verdict: v.is_primary_verdict,
                })
                .collect(),
            justifications: self.justifications,
            content: self.context,
            assigned_to: Vec::new(),
            status: ItemStatus::Pending,
            assignment_type: None,
            dataset,
        }
    }
}
