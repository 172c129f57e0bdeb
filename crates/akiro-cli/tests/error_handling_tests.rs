//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_error_with_suggestions_unknown_scope() {
    let temp = TempDir::new().unwrap();
    let spec = temp.path().join("packages.yaml");
    fs::write(
        &spec,
        "packages:\n\
         \x20 zlib:\n\
         \x20   1.3.1:\n\
         \x20     - scope: everywhere\n\
         \x20       settings: [os=Linux]\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("akiro").unwrap();
    cmd.args(["check", spec.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown scope 'everywhere'"))
        .stderr(predicate::str::contains("all"))
        .stderr(predicate::str::contains("build"))
        .stderr(predicate::str::contains("host"));
}

#[test]
fn test_error_with_suggestions_spec_not_found() {
    let mut cmd = Command::cargo_bin("akiro").unwrap();
    cmd.args(["install", "/nowhere/packages.yaml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("akiro install <file>"));
}

#[test]
fn test_error_undefined_template_variable() {
    let temp = TempDir::new().unwrap();
    let spec = temp.path().join("packages.yaml");
    fs::write(
        &spec,
        "packages:\n\
         \x20 zlib:\n\
         \x20   \"{{ zlib_version }}\":\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("akiro").unwrap();
    cmd.args(["check", spec.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("template render failed"));
}

#[test]
fn test_error_hint_points_at_verbose_flag() {
    let mut cmd = Command::cargo_bin("akiro").unwrap();
    cmd.args(["plan", "/nowhere/packages.yaml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--verbose"));
}
