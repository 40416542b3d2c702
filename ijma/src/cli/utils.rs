//! Shared snapshot-loading helpers for CLI commands.

use std::collections::HashSet;
use std::path::Path;

use ijma_core::{Annotation, UserDirectory};

use crate::agreement::{completed_overlap_ids, dedup_annotations};
use crate::ingest;

/// Load the user directory, or an empty one (names fall back to raw ids).
pub fn load_directory(path: Option<&str>) -> Result<UserDirectory, String> {
    match path {
        Some(path) => {
            let users = ingest::load_users(Path::new(path)).map_err(|e| e.to_string())?;
            Ok(UserDirectory::from_users(&users))
        }
        None => Ok(UserDirectory::new()),
    }
}

/// Load and deduplicate the finalized-annotation snapshot, optionally
/// restricted to completed overlap items per an assignment snapshot.
pub fn load_finalized(
    annotations_path: &str,
    assignments_path: Option<&str>,
) -> Result<Vec<Annotation>, String> {
    let annotations =
        ingest::load_annotations(Path::new(annotations_path)).map_err(|e| e.to_string())?;
    let mut annotations = dedup_annotations(annotations);

    if let Some(path) = assignments_path {
        let assignments =
            ingest::load_assignments(Path::new(path)).map_err(|e| e.to_string())?;
        let eligible: HashSet<String> = completed_overlap_ids(&assignments).into_iter().collect();
        annotations.retain(|a| eligible.contains(&a.annotation_item_id));
    }

    Ok(annotations)
}
