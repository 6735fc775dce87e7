//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, moodjour_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    moodjour_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized moodjour journal"));

    let config_path = temp.path().join(".moodjour/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("journal_file = \"journal_entries.csv\""));
    assert!(content.contains("emoji = true"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_journal(temp.path());

    moodjour_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_commands_outside_journal_fail() {
    let temp = TempDir::new().unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("moodjour init"));
}

#[test]
fn test_root_env_points_at_journal() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(elsewhere.path())
        .env("MOODJOUR_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "emoji"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "emoji", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set emoji = false"));

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "emoji"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("journal_file = journal_entries.csv"))
        .stdout(predicate::str::contains("emoji = true"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2020-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'mode'"));
}
