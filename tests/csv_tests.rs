//! Integration tests for CSV export and import

#![allow(deprecated)]

use notekeep::infrastructure::NoteRepository;
use notekeep::NotekeepError;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::notekeep_cmd;

#[test]
fn test_export_command_writes_csv() {
    let temp = TempDir::new().unwrap();
    notekeep_cmd(temp.path())
        .args(["add", "Title, with comma", "body"])
        .assert()
        .success();

    notekeep_cmd(temp.path())
        .args(["export", "out.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes exported to out.csv"));

    let raw = fs::read_to_string(temp.path().join("out.csv")).unwrap();
    assert!(raw.starts_with("id,title,content,timestamp\n"));
    assert!(raw.contains("1,\"Title, with comma\",body,"));
}

#[test]
fn test_import_command_appends_rows() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("in.csv"),
        "id,title,content,timestamp\n5,From CSV,text,01-02-2024 08:00:00\n",
    )
    .unwrap();

    notekeep_cmd(temp.path())
        .args(["import", "in.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 note(s)"));

    notekeep_cmd(temp.path())
        .args(["show", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: From CSV"))
        .stdout(predicate::str::contains("Date: 01-02-2024 08:00:00"));
}

#[test]
fn test_import_missing_file_reports_and_keeps_notes() {
    let temp = TempDir::new().unwrap();
    notekeep_cmd(temp.path())
        .args(["add", "A", "x"])
        .assert()
        .success();
    let before = fs::read_to_string(temp.path().join("notes.json")).unwrap();

    notekeep_cmd(temp.path())
        .args(["import", "missing.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found: missing.csv"));

    let after = fs::read_to_string(temp.path().join("notes.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_round_trip_into_fresh_store() {
    let temp = TempDir::new().unwrap();
    let mut source = NoteRepository::open(temp.path().join("a.json")).unwrap();
    source.add("A", "x").unwrap();
    source.add("B", "y").unwrap();
    source.delete(1).unwrap();
    source.add("C", "z").unwrap();

    let csv_path = temp.path().join("notes.csv");
    source.export_to_csv(&csv_path).unwrap();

    let mut fresh = NoteRepository::open(temp.path().join("b.json")).unwrap();
    assert_eq!(fresh.import_from_csv(&csv_path).unwrap(), 2);

    let titles: Vec<(&str, &str)> = fresh
        .notes()
        .iter()
        .map(|n| (n.title.as_str(), n.content.as_str()))
        .collect();
    assert_eq!(titles, vec![("B", "y"), ("C", "z")]);

    // Duplicate ids travel through the CSV unchanged
    let ids: Vec<i64> = fresh.notes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![2, 2]);
}

#[test]
fn test_import_twice_duplicates_ids() {
    let temp = TempDir::new().unwrap();
    let csv_path = temp.path().join("in.csv");
    fs::write(
        &csv_path,
        "id,title,content,timestamp\n1,Only,row,01-02-2024 08:00:00\n",
    )
    .unwrap();

    let mut repo = NoteRepository::open(temp.path().join("notes.json")).unwrap();
    repo.import_from_csv(&csv_path).unwrap();
    repo.import_from_csv(&csv_path).unwrap();

    assert_eq!(repo.notes().len(), 2);
    assert_eq!(repo.delete(1).unwrap(), 2);
}

#[test]
fn test_import_missing_file_error_variant() {
    let temp = TempDir::new().unwrap();
    let mut repo = NoteRepository::open(temp.path().join("notes.json")).unwrap();

    match repo.import_from_csv(&temp.path().join("absent.csv")) {
        Err(NotekeepError::ImportFileNotFound(path)) => {
            assert!(path.ends_with("absent.csv"));
        }
        other => panic!("Expected ImportFileNotFound, got {:?}", other),
    }
    assert!(!temp.path().join("notes.json").exists());
}
