use assert_cmd::Command;
use predicates::prelude::*;

fn range_regex() -> Command {
    Command::new(env!("CARGO_BIN_EXE_range_regex"))
}

#[test]
fn shows_help() {
    range_regex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("range_regex"));
}

#[test]
fn prints_pattern() {
    range_regex()
        .args(["47", "293"])
        .assert()
        .success()
        .stdout("(04[7-9]|0[5-9][0-9]|1[0-9][0-9]|2[0-8][0-9]|29[0-3])\n");
}

#[test]
fn natural_width_flag() {
    range_regex()
        .args(["5", "105", "--width", "natural"])
        .assert()
        .success()
        .stdout("([5-9]|[1-8][0-9]|9[0-9]|10[0-5])\n");
}

#[test]
fn reversed_bounds_fail_by_default() {
    range_regex()
        .args(["10", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn reversed_bounds_allowed_print_empty_group() {
    range_regex()
        .args(["10", "1", "--allow-empty"])
        .assert()
        .success()
        .stdout("()\n");
}

#[test]
fn negative_bound_is_invalid_input() {
    range_regex()
        .args(["-3", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn fixed_width_too_narrow_fails() {
    range_regex()
        .args(["5", "105", "--width", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too narrow"));
}

#[test]
fn json_output_with_check() {
    let output = range_regex()
        .args(["0", "99", "--format", "json", "--check", "--anchored", "--non-capturing"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["pattern"], "^(?:[0-8][0-9]|9[0-9])$");
    assert_eq!(value["fragments"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["verification"]["exhaustive"], true);
    assert_eq!(value["verification"]["probed"], 100);
}

#[test]
fn explain_lists_sub_ranges() {
    range_regex()
        .args(["8", "11", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[8, 9] -> 0[8-9]"))
        .stdout(predicate::str::contains("[10, 11] -> 1[0-1]"));
}
