// Integration tests for the stableford CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the stableford binary.
fn stableford() -> Command {
    Command::cargo_bin("stableford").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    stableford()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stableford"));
}

#[test]
fn cli_help_flag() {
    stableford()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stableford, match play and six points"));
}

#[test]
fn score_requires_path() {
    stableford()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn handicap_requires_slope_or_course() {
    stableford()
        .args(["handicap", "--index", "12.4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn handicap_rejects_slope_with_course() {
    stableford()
        .args([
            "handicap", "--index", "12.4", "--slope", "129", "--course", "liphook", "--tee",
            "White",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn handicap_from_slope() {
    stableford()
        .args(["handicap", "--index", "12.4", "--slope", "129"])
        .assert()
        .success()
        .stdout(predicate::str::contains("course handicap: 14"));
}

#[test]
fn handicap_from_course_tee() {
    stableford()
        .args(["handicap", "--index", "18", "--course", "elie", "--tee", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("course handicap: 22"));
}

#[test]
fn handicap_unknown_tee_is_runtime_failure() {
    stableford()
        .args(["handicap", "--index", "18", "--course", "liphook", "--tee", "red"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown tee red"));
}

#[test]
fn strokes_reports_capped_score_and_points() {
    stableford()
        .args([
            "strokes",
            "--course-handicap",
            "20",
            "--stroke-index",
            "5",
            "--par",
            "4",
            "--score",
            "11",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("strokes received: 1"))
        .stdout(predicate::str::contains("capped score: 7"))
        .stdout(predicate::str::contains("stableford points: 0"));
}

#[test]
fn strokes_without_score_only_reports_strokes() {
    stableford()
        .args(["strokes", "--course-handicap", "10", "--stroke-index", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strokes received: 0"))
        .stdout(predicate::str::contains("capped score").not());
}

#[test]
fn course_lists_holes_with_tee_yardage() {
    stableford()
        .args(["course", "liphook", "--tee", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Liphook Golf Club - Blue tees"))
        .stdout(predicate::str::contains("Wheatsheaf"))
        .stdout(predicate::str::contains("515"));
}

#[test]
fn course_unknown_name_fails() {
    stableford()
        .args(["course", "augusta"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown course: augusta"));
}
