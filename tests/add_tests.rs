//! Integration tests for add and analyze commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, moodjour_cmd};

#[test]
fn test_add_happy_entry() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["add", "--date", "2024-01-01", "I am so happy today!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved."))
        .stdout(predicate::str::contains("Emotion: Positive 🙂"));

    let content = fs::read_to_string(temp.path().join("journal_entries.csv")).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,entry,compound,positive,negative,neutral,emotion,color")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("2024-01-01,I am so happy today!,"));
    assert!(row.ends_with(",Positive,Green"));
    assert!(lines.next().is_none());
}

#[test]
fn test_add_joins_words() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "Terrible,",
            "awful",
            "day.",
            "I",
            "feel",
            "miserable.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion: Very Negative"));

    let content = fs::read_to_string(temp.path().join("journal_entries.csv")).unwrap();
    assert!(content.contains("\"Terrible, awful day. I feel miserable.\""));
}

#[test]
fn test_add_whitespace_entry_is_rejected() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["add", "--date", "2024-01-01", "   "])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("write something"));

    assert!(!temp.path().join("journal_entries.csv").exists());
}

#[test]
fn test_add_bad_date_uses_today() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--today",
            "2025-06-30",
            "--date",
            "not-a-date",
            "Quiet evening at home",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved."));

    let content = fs::read_to_string(temp.path().join("journal_entries.csv")).unwrap();
    assert!(content.contains("2025-06-30,Quiet evening at home,"));
}

#[test]
fn test_add_without_date_uses_today() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["add", "--today", "2025-02-14", "Lovely dinner"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unparseable").not());

    let content = fs::read_to_string(temp.path().join("journal_entries.csv")).unwrap();
    assert!(content.contains("2025-02-14,Lovely dinner,"));
}

#[test]
fn test_add_reads_stdin() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["add", "--date", "2025-01-10"])
        .write_stdin("Long day.\nBut grateful for my friends.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved."));

    let content = fs::read_to_string(temp.path().join("journal_entries.csv")).unwrap();
    assert!(content.contains("grateful for my friends."));
}

#[test]
fn test_add_without_emoji() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "emoji", "false"])
        .assert()
        .success();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["add", "--date", "2025-01-10", "Table and chair"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion: Neutral\n"));
}

#[test]
fn test_add_to_unwritable_journal_file() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    fs::create_dir(temp.path().join("journal_entries.csv")).unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["add", "--date", "2025-01-10", "Anything"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Persistence error"));
}

#[test]
fn test_analyze_does_not_save() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["analyze", "What a wonderful, beautiful morning!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion:  Very Positive"))
        .stdout(predicate::str::contains("Compound: 0.8"));

    assert!(!temp.path().join("journal_entries.csv").exists());
}

#[test]
fn test_analyze_empty_text_fails() {
    moodjour_cmd()
        .args(["analyze", ""])
        .assert()
        .code(3);
}

#[test]
fn test_analyze_outside_journal_uses_emoji() {
    let temp = TempDir::new().unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["analyze", "I am so happy today!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion:  Positive 🙂"));
}

#[test]
fn test_analyze_reports_broken_config() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    fs::write(temp.path().join(".moodjour/config.toml"), "emoji = [").unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["analyze", "I am so happy today!"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML deserialization error"));
}
