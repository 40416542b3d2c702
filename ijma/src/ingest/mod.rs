//! JSONL snapshot ingestion.
//!
//! The collaborator document store is out of scope; this crate consumes
//! snapshots of its collections as line-delimited JSON files, one document
//! per line. Blank lines are skipped; a malformed line fails with its
//! 1-based line number so broken exports are easy to fix.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use ijma_core::{Annotation, AnnotationItem, Dataset, ItemAssignment, ItemFileRecord, User};

use crate::error::{Error, Result};

/// Read a JSONL snapshot into typed records.
///
/// Blank lines are skipped. The first malformed line aborts the read with a
/// parse error naming the file and line.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)
        .map_err(|e| Error::snapshot(format!("{}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::snapshot(format!("{}: {}", path.display(), e)))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| {
            Error::parse(format!("{} line {}: {}", path.display(), number + 1, e))
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Load a finalized-annotation snapshot.
pub fn load_annotations(path: &Path) -> Result<Vec<Annotation>> {
    read_jsonl(path)
}

/// Load a user-directory snapshot.
pub fn load_users(path: &Path) -> Result<Vec<User>> {
    read_jsonl(path)
}

/// Load an item-assignment snapshot.
pub fn load_assignments(path: &Path) -> Result<Vec<ItemAssignment>> {
    read_jsonl(path)
}

/// Load a bulk-import item file and convert each record to its stored shape.
pub fn load_items(path: &Path, dataset: Dataset) -> Result<Vec<AnnotationItem>> {
    let records: Vec<ItemFileRecord> = read_jsonl(path)?;
    Ok(records.into_iter().map(|r| r.into_item(dataset)).collect())
}

/// Validation summary for a bulk-import item file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Records that parsed.
    pub records: usize,
    /// Ids that appeared more than once.
    pub duplicate_ids: Vec<String>,
    /// Per-line parse failures, `line N: message`.
    pub errors: Vec<String>,
}

impl FileReport {
    /// Whether the file can be imported as-is.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty() && self.errors.is_empty()
    }
}

/// Validate a bulk-import item file without aborting at the first failure.
///
/// Collects every malformed line and every duplicated id; only an unreadable
/// file is an error.
pub fn validate_item_file(path: &Path) -> Result<FileReport> {
    let file = File::open(path)
        .map_err(|e| Error::snapshot(format!("{}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    let mut report = FileReport::default();
    let mut seen: Vec<String> = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::snapshot(format!("{}: {}", path.display(), e)))?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ItemFileRecord>(&line) {
            Ok(record) => {
                if seen.contains(&record.id) {
                    if !report.duplicate_ids.contains(&record.id) {
                        log::warn!("duplicate item id {:?} at line {}", record.id, number + 1);
                        report.duplicate_ids.push(record.id);
                    }
                } else {
                    seen.push(record.id);
                }
                report.records += 1;
            }
            Err(e) => report.errors.push(format!("line {}: {}", number + 1, e)),
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_annotations_skipping_blank_lines() {
        let file = write_file(concat!(
            r#"{"annotationItemId":"fiqih0001","userId":"u1","status":"completed","isFatwa":true}"#,
            "\n\n",
            r#"{"annotationItemId":"fiqih0001","userId":"u2","status":"non-fatwa","isFatwa":false}"#,
            "\n",
        ));
        let annotations = load_annotations(file.path()).unwrap();
        assert_eq!(annotations.len(), 2);
        assert!(annotations[0].is_fatwa);
        assert!(annotations[1].status.is_final());
    }

    #[test]
    fn parse_errors_carry_line_numbers() {
        let file = write_file("{\"annotationItemId\":\"fiqih0001\",\"userId\":\"u1\"}\nnot json\n");
        let err = load_annotations(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }

    #[test]
    fn missing_file_is_a_snapshot_error() {
        let err = load_annotations(Path::new("/nonexistent/annos.jsonl")).unwrap_err();
        assert!(matches!(err, Error::Snapshot(_)));
    }

    #[test]
    fn loads_items_in_import_shape() {
        let file = write_file(concat!(
            r#"{"id":"fiqih0001","question":"Q?","verdicts":[{"verdict":"boleh","answer":"passage"}],"context":"article"}"#,
            "\n",
        ));
        let items = load_items(file.path(), Dataset::Main).unwrap();
        assert_eq!(items[0].original_id, "fiqih0001");
        assert_eq!(items[0].verdicts[0].context, "passage");
        assert_eq!(items[0].content, "article");
    }

    #[test]
    fn validation_collects_duplicates_and_errors() {
        let file = write_file(concat!(
            r#"{"id":"fiqih0001","context":"a"}"#,
            "\n",
            "garbage\n",
            r#"{"id":"fiqih0001","context":"b"}"#,
            "\n",
            r#"{"id":"fiqih0002","context":"c"}"#,
            "\n",
        ));
        let report = validate_item_file(file.path()).unwrap();
        assert_eq!(report.records, 3);
        assert_eq!(report.duplicate_ids, vec!["fiqih0001"]);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("line 2"));
        assert!(!report.is_clean());
    }

    #[test]
    fn clean_file_reports_clean() {
        let file = write_file("{\"id\":\"fiqih0001\",\"context\":\"a\"}\n");
        let report = validate_item_file(file.path()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.records, 1);
    }
}
