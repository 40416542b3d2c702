//! Per-annotator judgment records.
//!
//! An [`Annotation`] is one annotator's structured judgment of one source
//! item: the is-this-a-fatwa screening decision, the (possibly revised)
//! question, an ordered list of verdicts, and the verbatim-sourced
//! justifications. Annotations are keyed by (`annotation_item_id`,
//! `user_id`); the document id is the composite `{originalId}_{userId}`.
//!
//! Lifecycle: created as [`AnnotationStatus::Draft`] on first save, promoted
//! to [`AnnotationStatus::Completed`] or [`AnnotationStatus::NonFatwa`] on
//! submit. Finalized records are never mutated; the agreement engine only
//! reads them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Annotation lifecycle state.
///
/// `Draft` is the mutable working state; `Completed` and `NonFatwa` are
/// terminal, promoted into a separate finalized collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationStatus {
    /// In-progress, mutable working state.
    #[default]
    Draft,
    /// Finalized as a valid fatwa annotation.
    Completed,
    /// Finalized as not-a-fatwa (screened out).
    NonFatwa,
}

impl AnnotationStatus {
    /// Whether this status is terminal (completed or non-fatwa).
    #[must_use]
    pub fn is_final(self) -> bool {
        matches!(self, AnnotationStatus::Completed | AnnotationStatus::NonFatwa)
    }
}

/// Why the seed question was flagged for revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionRevisionReason {
    /// Grammatical/spelling problem.
    Syntax,
    /// Meaning does not match the article.
    Semantic,
    /// The article does not answer the question.
    Unanswerable,
    /// Question is too broad or off-topic.
    Unfocused,
    /// Free-text reason in `other_revision_reason`.
    Other,
}

/// Scriptural source category for a primary justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    /// A Qur'anic verse.
    #[serde(rename = "Qur’an", alias = "Qur'an")]
    Quran,
    /// A hadith narration.
    #[serde(rename = "Hadits", alias = "Hadith")]
    Hadits,
}

/// One legal ruling extracted from the article, with its verbatim context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The ruling label (e.g. wajib, haram, makruh).
    #[serde(default)]
    pub verdict: String,
    /// Verbatim article passage the ruling applies to.
    #[serde(default)]
    pub context: String,
    /// The ruling label was flagged for revision.
    #[serde(default, rename = "verdictNeedsRevision")]
    pub verdict_needs_revision: bool,
    /// The context passage was flagged for revision.
    #[serde(default, rename = "contextNeedsRevision")]
    pub context_needs_revision: bool,
    /// At most one verdict per annotation carries this flag; see
    /// [`Annotation::set_primary_verdict`].
    #[serde(default)]
    pub is_primary_verdict: bool,
    /// Ids of justification sources supporting this verdict.
    #[serde(
        default,
        rename = "justificationIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub justification_ids: Option<Vec<String>>,
}

impl Verdict {
    /// Whether either the ruling or its context was flagged for revision.
    #[must_use]
    pub fn needs_revision(&self) -> bool {
        self.verdict_needs_revision || self.context_needs_revision
    }
}

/// A scriptural (Qur'an/Hadith) justification source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimarySource {
    /// Source id within the annotation (e.g. `p_0`).
    #[serde(default)]
    pub id: String,
    /// Scripture category.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// Verbatim translated text of the verse/narration.
    #[serde(default)]
    pub text_translation: String,
    /// Verbatim citation (surah:verse, narrator chain).
    #[serde(default)]
    pub reference: String,
    /// The translation text was flagged for revision.
    #[serde(default, rename = "textTranslationNeedsRevision")]
    pub text_translation_needs_revision: bool,
    /// The citation was flagged for revision.
    #[serde(default, rename = "referenceNeedsRevision")]
    pub reference_needs_revision: bool,
}

impl PrimarySource {
    /// Whether any field of this source was flagged for revision.
    #[must_use]
    pub fn needs_revision(&self) -> bool {
        self.reference_needs_revision || self.text_translation_needs_revision
    }
}

/// A scholarly-opinion justification source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondarySource {
    /// Source id within the annotation (e.g. `s_0`).
    #[serde(default)]
    pub id: String,
    /// Name of the scholar cited.
    #[serde(default)]
    pub scholar: String,
    /// Work/edition detail for the citation.
    #[serde(default)]
    pub source_detail: String,
    /// Verbatim quote from the article.
    #[serde(default)]
    pub quote_verbatim: String,
    /// The scholar name was flagged for revision.
    #[serde(default, rename = "scholarNeedsRevision")]
    pub scholar_needs_revision: bool,
    /// The source detail was flagged for revision.
    #[serde(default, rename = "sourceDetailNeedsRevision")]
    pub source_detail_needs_revision: bool,
    /// The verbatim quote was flagged for revision.
    #[serde(default, rename = "quoteVerbatimNeedsRevision")]
    pub quote_verbatim_needs_revision: bool,
}

impl SecondarySource {
    /// Whether any field of this source was flagged for revision.
    #[must_use]
    pub fn needs_revision(&self) -> bool {
        self.scholar_needs_revision
            || self.source_detail_needs_revision
            || self.quote_verbatim_needs_revision
    }
}

/// Justification sources attached to an annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Justification {
    /// Scriptural sources (Qur'an/Hadith).
    #[serde(default)]
    pub primary_sources: Vec<PrimarySource>,
    /// Scholarly-opinion sources.
    #[serde(default)]
    pub secondary_sources: Vec<SecondarySource>,
}

impl Justification {
    /// Total number of sources of both kinds.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.primary_sources.len() + self.secondary_sources.len()
    }

    /// Number of sources with any revision flag set.
    #[must_use]
    pub fn revision_count(&self) -> usize {
        let primary = self
            .primary_sources
            .iter()
            .filter(|p| p.needs_revision())
            .count();
        let secondary = self
            .secondary_sources
            .iter()
            .filter(|s| s.needs_revision())
            .count();
        primary + secondary
    }
}

/// One annotator's judgment of one source item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Document id, composite `{originalId}_{userId}`.
    #[serde(default)]
    pub id: String,
    /// The source item's stable `originalId`.
    pub annotation_item_id: String,
    /// The annotator's user id.
    pub user_id: String,
    /// Lifecycle state.
    #[serde(default)]
    pub status: AnnotationStatus,
    /// Screening decision: is the article a fatwa at all.
    #[serde(default)]
    pub is_fatwa: bool,
    /// Free-text reason when screened out as non-fatwa.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_fatwa_reason: Option<String>,
    /// The question, possibly revised by the annotator.
    #[serde(default)]
    pub question: String,
    /// Whether the article answers the question. Absent in older records.
    #[serde(default)]
    pub is_question_answerable: Option<bool>,
    /// The seed question was flagged for revision.
    #[serde(default)]
    pub question_needs_revision: bool,
    /// Why the question was flagged.
    #[serde(default)]
    pub question_revision_reason: Option<QuestionRevisionReason>,
    /// Free-text reason when `question_revision_reason` is `Other`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_revision_reason: Option<String>,
    /// Ordered verdicts; at most one is flagged primary.
    #[serde(default)]
    pub verdicts: Vec<Verdict>,
    /// Justification sources.
    #[serde(default)]
    pub justifications: Justification,
    /// Wall-clock seconds spent annotating (pilot timing).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

impl Annotation {
    /// Build the composite document id for an (item, annotator) pair.
    #[must_use]
    pub fn composite_id(original_id: &str, user_id: &str) -> String {
        format!("{}_{}", original_id, user_id)
    }

    /// Document id, derived from the keys when the stored one is empty.
    #[must_use]
    pub fn document_id(&self) -> String {
        if self.id.is_empty() {
            Self::composite_id(&self.annotation_item_id, &self.user_id)
        } else {
            self.id.clone()
        }
    }

    /// Number of verdicts.
    #[must_use]
    pub fn verdict_count(&self) -> usize {
        self.verdicts.len()
    }

    /// Number of verdicts with either revision flag set.
    #[must_use]
    pub fn verdict_revision_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.needs_revision()).count()
    }

    /// Total justification sources of both kinds.
    #[must_use]
    pub fn justification_count(&self) -> usize {
        self.justifications.source_count()
    }

    /// Justification sources with any revision flag set.
    #[must_use]
    pub fn justification_revision_count(&self) -> usize {
        self.justifications.revision_count()
    }

    /// The verdict currently flagged as primary, if any.
    #[must_use]
    pub fn primary_verdict(&self) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.is_primary_verdict)
    }

    /// Flag the verdict at `index` as primary, unsetting all others.
    ///
    /// Keeps the at-most-one-primary invariant regardless of what the stored
    /// record claimed.
    pub fn set_primary_verdict(&mut self, index: usize) -> Result<()> {
        if index >= self.verdicts.len() {
            return Err(Error::invalid_input(format!(
                "verdict index {} out of range ({} verdicts)",
                index,
                self.verdicts.len()
            )));
        }
        for (i, verdict) in self.verdicts.iter_mut().enumerate() {
            verdict.is_primary_verdict = i == index;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(needs_revision: bool) -> Verdict {
        Verdict {
            verdict: "wajib".into(),
            context: "some verbatim context".into(),
            verdict_needs_revision: needs_revision,
            ..Verdict::default()
        }
    }

    #[test]
    fn status_finality() {
        assert!(!AnnotationStatus::Draft.is_final());
        assert!(AnnotationStatus::Completed.is_final());
        assert!(AnnotationStatus::NonFatwa.is_final());
    }

    #[test]
    fn status_wire_names() {
        let json = serde_json::to_string(&AnnotationStatus::NonFatwa).unwrap();
        assert_eq!(json, "\"non-fatwa\"");
        let parsed: AnnotationStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, AnnotationStatus::Completed);
    }

    #[test]
    fn partial_document_deserializes_to_zero_counts() {
        // Only the keys; no verdicts, no justifications, no flags.
        let anno: Annotation =
            serde_json::from_str(r#"{"annotationItemId":"fiqih0001","userId":"u1"}"#).unwrap();
        assert_eq!(anno.verdict_count(), 0);
        assert_eq!(anno.verdict_revision_count(), 0);
        assert_eq!(anno.justification_count(), 0);
        assert_eq!(anno.justification_revision_count(), 0);
        assert_eq!(anno.status, AnnotationStatus::Draft);
        assert_eq!(anno.is_question_answerable, None);
        assert!(!anno.is_fatwa);
    }

    #[test]
    fn store_field_names_round_trip() {
        let json = r#"{
            "id": "fiqih0001_u1",
            "annotationItemId": "fiqih0001",
            "userId": "u1",
            "status": "completed",
            "isFatwa": true,
            "question": "Bolehkah?",
            "isQuestionAnswerable": true,
            "questionNeedsRevision": true,
            "questionRevisionReason": "syntax",
            "verdicts": [
                {"verdict": "halal", "context": "c", "verdictNeedsRevision": true,
                 "contextNeedsRevision": false, "is_primary_verdict": true}
            ],
            "justifications": {
                "primary_sources": [
                    {"id": "p_0", "type": "Qur’an", "text_translation": "t",
                     "reference": "2:275", "textTranslationNeedsRevision": false,
                     "referenceNeedsRevision": true}
                ],
                "secondary_sources": []
            }
        }"#;
        let anno: Annotation = serde_json::from_str(json).unwrap();
        assert!(anno.is_fatwa);
        assert_eq!(anno.question_revision_reason, Some(QuestionRevisionReason::Syntax));
        assert_eq!(anno.verdict_revision_count(), 1);
        assert_eq!(anno.justification_count(), 1);
        assert_eq!(anno.justification_revision_count(), 1);
        assert_eq!(
            anno.justifications.primary_sources[0].source_type,
            Some(SourceType::Quran)
        );

        // Wire names must survive the round trip.
        let back = serde_json::to_string(&anno).unwrap();
        assert!(back.contains("\"annotationItemId\""));
        assert!(back.contains("\"verdictNeedsRevision\""));
        assert!(back.contains("\"is_primary_verdict\""));
        assert!(back.contains("\"primary_sources\""));
    }

    #[test]
    fn source_type_accepts_ascii_apostrophe() {
        let s: SourceType = serde_json::from_str("\"Qur'an\"").unwrap();
        assert_eq!(s, SourceType::Quran);
    }

    #[test]
    fn set_primary_verdict_unsets_others() {
        let mut anno = Annotation {
            annotation_item_id: "fiqih0001".into(),
            user_id: "u1".into(),
            verdicts: vec![verdict(false), verdict(false), verdict(false)],
            ..Annotation::default()
        };
        anno.verdicts[0].is_primary_verdict = true;
        anno.verdicts[2].is_primary_verdict = true;

        anno.set_primary_verdict(1).unwrap();
        let flags: Vec<bool> = anno.verdicts.iter().map(|v| v.is_primary_verdict).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(anno.primary_verdict().unwrap().verdict, "wajib");

        assert!(anno.set_primary_verdict(3).is_err());
    }

    #[test]
    fn revision_counts_use_any_flag_per_entry() {
        let anno = Annotation {
            annotation_item_id: "fiqih0002".into(),
            user_id: "u1".into(),
            verdicts: vec![
                Verdict {
                    context_needs_revision: true,
                    ..Verdict::default()
                },
                Verdict {
                    verdict_needs_revision: true,
                    context_needs_revision: true,
                    ..Verdict::default()
                },
                Verdict::default(),
            ],
            justifications: Justification {
                primary_sources: vec![
                    PrimarySource {
                        text_translation_needs_revision: true,
                        ..PrimarySource::default()
                    },
                    PrimarySource::default(),
                ],
                secondary_sources: vec![SecondarySource {
                    quote_verbatim_needs_revision: true,
                    ..SecondarySource::default()
                }],
            },
            ..Annotation::default()
        };
        // A doubly-flagged verdict still counts once.
        assert_eq!(anno.verdict_revision_count(), 2);
        assert_eq!(anno.justification_count(), 3);
        assert_eq!(anno.justification_revision_count(), 2);
    }

    #[test]
    fn composite_id_shape() {
        assert_eq!(Annotation::composite_id("fiqih0007", "u3"), "fiqih0007_u3");
        let anno = Annotation {
            annotation_item_id: "fiqih0007".into(),
            user_id: "u3".into(),
            ..Annotation::default()
        };
        assert_eq!(anno.document_id(), "fiqih0007_u3");
    }
}
