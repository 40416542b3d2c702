//! # ijma
//!
//! Inter-annotator agreement analysis for fatwa-annotation datasets.
//!
//! - **Agreement**: raw percent agreement across seven judgment categories,
//!   over every pair of annotators who finalized the same item
//! - **Disagreements**: one merged record per (category, item) for
//!   adjudication, plus a wide-format CSV of the raw per-annotator values
//! - **Stats**: per-annotator workload, revision, count-drift and timing
//!   aggregates
//! - **Ingest**: line-delimited JSON snapshots of the collaborator document
//!   store
//!
//! Core data-model types live in `ijma-core` and are re-exported here.
//!
//! ```
//! use ijma::{analyze_agreement, Criterion};
//! use ijma_core::{Annotation, AnnotationStatus, UserDirectory};
//!
//! let annotations = vec![
//!     Annotation {
//!         annotation_item_id: "fiqih0001".into(),
//!         user_id: "u1".into(),
//!         status: AnnotationStatus::Completed,
//!         is_fatwa: true,
//!         ..Annotation::default()
//!     },
//!     Annotation {
//!         annotation_item_id: "fiqih0001".into(),
//!         user_id: "u2".into(),
//!         status: AnnotationStatus::Completed,
//!         is_fatwa: false,
//!         ..Annotation::default()
//!     },
//! ];
//!
//! let report = analyze_agreement(&annotations, &UserDirectory::new());
//! assert_eq!(report.scores[&Criterion::IsFatwa], Some(0.0));
//! assert_eq!(report.disagreements[&Criterion::IsFatwa].len(), 1);
//! ```

#![warn(missing_docs)]

pub mod agreement;
pub mod error;
pub mod ingest;
pub mod stats;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export error types
pub use error::{Error, Result};

// Re-export ijma-core types so most callers need a single dependency
pub use ijma_core::{
    Annotation, AnnotationItem, AnnotationStatus, AssignmentStatus, AssignmentType, Dataset,
    ItemAssignment, ItemFileRecord, Justification, PrimarySource, QuestionRevisionReason, Role,
    SecondarySource, SourceType, User, UserDirectory, Verdict,
};

// Re-export the analysis surface
pub use agreement::{
    agreement_csv, analyze_agreement, completed_overlap_ids, dedup_annotations, AgreementReport,
    Criterion, CriterionValue, Disagreement, DisagreementDetail,
};
pub use stats::{annotator_reports, AnnotatorReport};
