//! Tests for error reporting, suggestions, and exit codes.
//!
//! Exit code contract: 2 user error, 3 not found, 4 configuration,
//! 1 internal. Fatal errors land on stderr; per-file failures do not
//! change the exit code (covered in `integration_tests.rs`).

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MODEL: &str = r#"{
  "namespace": "Core.Data.Entities",
  "entities": [
    {
      "name": "Invoice",
      "properties": [{ "name": "Id", "type": "int" }]
    }
  ]
}
"#;

fn solution() -> TempDir {
    let dir = TempDir::new().unwrap();
    for project in ["Core", "WebApi", "ClientApp"] {
        fs::create_dir(dir.path().join(project)).unwrap();
    }
    fs::write(dir.path().join("entities.json"), MODEL).unwrap();
    dir
}

fn entigen() -> Command {
    Command::cargo_bin("entigen").unwrap()
}

#[test]
fn invalid_entity_name_exits_2_with_suggestions() {
    let dir = solution();

    entigen()
        .args(["generate", "1nvoice", "--src-path"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid entity name"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn invalid_name_fails_before_touching_the_filesystem() {
    // No solution tree at all: name validation must fire first.
    entigen()
        .args(["generate", "not a name", "--src-path", "/nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid entity name"));
}

#[test]
fn missing_source_root_exits_3() {
    entigen()
        .args(["generate", "Invoice", "--src-path", "/nonexistent/src"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn missing_project_folder_exits_3_and_names_it() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("Core")).unwrap();
    fs::create_dir(dir.path().join("ClientApp")).unwrap();
    fs::write(dir.path().join("entities.json"), MODEL).unwrap();

    entigen()
        .args(["generate", "Invoice", "--src-path"])
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("WebApi"));
}

#[test]
fn unknown_entity_exits_3_and_names_the_model() {
    let dir = solution();

    entigen()
        .args(["generate", "PurchaseOrder", "--src-path"])
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("PurchaseOrder"))
        .stderr(predicate::str::contains("entities.json"));
}

#[test]
fn entity_lookup_is_case_sensitive() {
    let dir = solution();

    entigen()
        .args(["generate", "INVOICE", "--src-path"])
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("INVOICE"));
}

#[test]
fn missing_model_exits_4() {
    let dir = TempDir::new().unwrap();
    for project in ["Core", "WebApi", "ClientApp"] {
        fs::create_dir(dir.path().join(project)).unwrap();
    }
    // No entities.json anywhere under the root.

    entigen()
        .args(["generate", "Invoice", "--src-path"])
        .arg(dir.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("entity model"));
}

#[test]
fn malformed_model_exits_4() {
    let dir = solution();
    fs::write(dir.path().join("entities.json"), "{ not valid json").unwrap();

    entigen()
        .args(["generate", "Invoice", "--src-path"])
        .arg(dir.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("entity model"));
}

#[test]
fn explicit_missing_config_exits_4() {
    let dir = solution();

    entigen()
        .args(["generate", "Invoice", "--config", "/nonexistent/entigen.toml", "--src-path"])
        .arg(dir.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn quiet_and_verbose_conflict_is_a_usage_error() {
    entigen()
        .args(["generate", "Invoice", "--quiet", "--verbose"])
        .assert()
        .code(2);
}

#[test]
fn missing_entity_argument_is_a_usage_error() {
    entigen().arg("generate").assert().code(2);
}
