//! Integration tests for the ijma CLI.
//!
//! Drives the binary end to end over temp-file JSONL snapshots.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn annotations_fixture() -> tempfile::NamedTempFile {
    // fiqih0001: u1 and u2 disagree on isFatwa and verdictCount.
    write_file(concat!(
        r#"{"id":"fiqih0001_u1","annotationItemId":"fiqih0001","userId":"u1","status":"completed","isFatwa":true,"isQuestionAnswerable":true,"questionNeedsRevision":false,"verdicts":[{"verdict":"boleh","context":"c"}],"justifications":{"primary_sources":[],"secondary_sources":[]}}"#,
        "\n",
        r#"{"id":"fiqih0001_u2","annotationItemId":"fiqih0001","userId":"u2","status":"non-fatwa","isFatwa":false,"isQuestionAnswerable":true,"questionNeedsRevision":false,"verdicts":[],"justifications":{"primary_sources":[],"secondary_sources":[]}}"#,
        "\n",
    ))
}

fn users_fixture() -> tempfile::NamedTempFile {
    write_file(concat!(
        r#"{"id":"u1","name":"Aisyah Putri","username":"aisyah@example.org","role":"annotator"}"#,
        "\n",
        r#"{"id":"u2","name":"Budi Santoso","username":"budi@example.org","role":"annotator"}"#,
        "\n",
    ))
}

#[test]
fn agree_human_output_shows_scores_and_names() {
    let annos = annotations_fixture();
    let users = users_fixture();

    Command::cargo_bin("ijma")
        .unwrap()
        .args([
            "agree",
            "-a",
            annos.path().to_str().unwrap(),
            "-u",
            users.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Agreement scores"))
        .stdout(predicate::str::contains("Is Fatwa"))
        .stdout(predicate::str::contains("0.0%"))
        .stdout(predicate::str::contains("Aisyah Putri=Ya"))
        .stdout(predicate::str::contains("Budi Santoso=Tidak"));
}

#[test]
fn agree_json_output_has_report_shape() {
    let annos = annotations_fixture();
    let users = users_fixture();

    let output = Command::cargo_bin("ijma")
        .unwrap()
        .args([
            "agree",
            "--format",
            "json",
            "-a",
            annos.path().to_str().unwrap(),
            "-u",
            users.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["scores"]["isFatwa"], serde_json::json!(0.0));
    assert_eq!(json["scores"]["isQuestionAnswerable"], serde_json::json!(100.0));
    let records = json["disagreements"]["verdictCount"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["itemOriginalId"], "fiqih0001");
    assert_eq!(records[0]["details"][0]["user"], "Aisyah Putri");
    assert_eq!(records[0]["details"][0]["value"], serde_json::json!(1));
}

#[test]
fn agree_on_empty_snapshot_succeeds_with_null_scores() {
    let annos = write_file("");

    let output = Command::cargo_bin("ijma")
        .unwrap()
        .args([
            "agree",
            "--format",
            "json",
            "-a",
            annos.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["scores"]["isFatwa"], serde_json::Value::Null);
    assert_eq!(
        json["disagreements"]["justificationCount"],
        serde_json::json!([])
    );
}

#[test]
fn export_writes_cross_product_header() {
    let annos = annotations_fixture();
    let users = users_fixture();
    let out = tempfile::NamedTempFile::new().unwrap();

    Command::cargo_bin("ijma")
        .unwrap()
        .args([
            "export",
            "-a",
            annos.path().to_str().unwrap(),
            "-u",
            users.path().to_str().unwrap(),
            "-o",
            out.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let csv = std::fs::read_to_string(out.path()).unwrap();
    let header = csv.lines().next().unwrap();
    assert!(header.starts_with("original_id,is_fatwa_aisyah_putri,is_fatwa_budi_santoso"));
    assert!(header.ends_with("justification_revision_count_budi_santoso"));

    let row = csv.lines().nth(1).unwrap();
    assert!(row.starts_with("fiqih0001,Yes,No"));
}

#[test]
fn validate_fails_on_duplicate_ids() {
    let items = write_file(concat!(
        r#"{"id":"fiqih0001","context":"a"}"#,
        "\n",
        r#"{"id":"fiqih0001","context":"b"}"#,
        "\n",
    ));

    Command::cargo_bin("ijma")
        .unwrap()
        .args(["validate", items.path().to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Duplicate ids"))
        .stdout(predicate::str::contains("fiqih0001"));
}

#[test]
fn validate_accepts_clean_file() {
    let items = write_file(concat!(
        r#"{"id":"fiqih0001","context":"a"}"#,
        "\n",
        r#"{"id":"fiqih0002","context":"b"}"#,
        "\n",
    ));

    Command::cargo_bin("ijma")
        .unwrap()
        .args(["validate", items.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records parsed"))
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn missing_snapshot_is_a_clean_failure() {
    Command::cargo_bin("ijma")
        .unwrap()
        .args(["agree", "-a", "/nonexistent/final.jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR"));
}

#[test]
fn stats_renders_assignment_counts() {
    let users = users_fixture();
    let assignments = write_file(concat!(
        r#"{"originalId":"fiqih0001","userId":"u1","status":"completed"}"#,
        "\n",
        r#"{"originalId":"fiqih0002","userId":"u1","status":"draft"}"#,
        "\n",
    ));

    Command::cargo_bin("ijma")
        .unwrap()
        .args([
            "stats",
            "-u",
            users.path().to_str().unwrap(),
            "--assignments",
            assignments.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aisyah Putri (u1)"))
        .stdout(predicate::str::contains("assigned 2"))
        .stdout(predicate::str::contains("done 50.0%"));
}
