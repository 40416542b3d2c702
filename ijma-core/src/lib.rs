//! # ijma-core
//!
//! Core types for the ijma toolbox: the fatwa-annotation data model shared
//! across all crates.
//!
//! This crate provides:
//! - **Annotation types**: `Annotation`, `Verdict`, `Justification`,
//!   `PrimarySource`, `SecondarySource`
//! - **Workflow types**: `AnnotationItem`, `ItemAssignment`, `User`
//! - **Lookups**: `UserDirectory` (annotator id → display name)
//!
//! Serialized field names match the collaborator document store exactly,
//! including its historical mix of camelCase document fields and snake_case
//! justification sub-objects. All nested structures deserialize defensively:
//! a partially-populated document yields empty sequences and unset flags, not
//! an error.

#![warn(missing_docs)]

pub mod annotation;
pub mod assignment;
pub mod error;
pub mod item;
pub mod user;

// Re-exports for convenience
pub use annotation::{
    Annotation, AnnotationStatus, Justification, PrimarySource, QuestionRevisionReason,
    SecondarySource, SourceType, Verdict,
};
pub use assignment::{AssignmentStatus, ItemAssignment};
pub use error::{Error, Result};
pub use item::{
    AnnotationItem, AssignmentType, Dataset, FileVerdict, ItemFileRecord, ItemStatus,
    SeedJustification, SeedPrimarySource, SeedSecondarySource, SeedVerdict,
};
pub use user::{Role, User, UserDirectory};
