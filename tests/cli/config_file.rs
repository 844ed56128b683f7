use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn range_regex() -> Command {
    Command::new(env!("CARGO_BIN_EXE_range_regex"))
}

#[test]
fn yaml_config_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("range_regex.yaml");
    fs::write(&path, "width: natural\ngroup: non-capturing\n").unwrap();

    range_regex()
        .args(["5", "12", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("(?:[5-9]|1[0-2])\n");
}

#[test]
fn cli_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("range_regex.json");
    fs::write(&path, r#"{"width": "natural", "format": "json"}"#).unwrap();

    range_regex()
        .args(["5", "12", "--width", "padded", "--format", "text", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("(0[5-9]|1[0-2])\n");
}

#[test]
fn unknown_config_key_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("range_regex.yml");
    fs::write(&path, "colour: red\n").unwrap();

    range_regex()
        .args(["1", "2", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML"));
}

#[test]
fn missing_config_file_fails() {
    range_regex()
        .args(["1", "2", "--config", "does-not-exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.yaml"));
}
