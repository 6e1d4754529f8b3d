//! Integration tests for the waypath CLI surface: help, init, status, errors

mod support;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{add_location, add_route, setup_test_dir, stdout_json, waypath};

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    waypath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waypath"))
        .stdout(predicate::str::contains("location"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn test_version_flag() {
    waypath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("waypath"));
}

#[test]
fn test_no_command_prints_banner() {
    waypath()
        .assert()
        .success()
        .stdout(predicate::str::contains("waypath --help"));
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    waypath()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized waypath store"));

    assert!(dir.path().join(".waypath/config.toml").exists());
    assert!(dir.path().join(".waypath/waypath.db").exists());
}

#[test]
fn test_init_idempotent() {
    let dir = setup_test_dir();
    add_location(dir.path(), "Harbor", 0.0, 0.0);

    waypath()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    waypath()
        .current_dir(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locations: 1"));
}

#[test]
fn test_init_json() {
    let dir = tempdir().unwrap();

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "ok");
    assert!(json["store"].as_str().unwrap().ends_with(".waypath"));
}

#[test]
fn test_init_with_explicit_store_path() {
    let dir = tempdir().unwrap();

    waypath()
        .current_dir(dir.path())
        .args(["--store", "data/net", "init"])
        .assert()
        .success();
    assert!(dir.path().join("data/net/waypath.db").exists());

    waypath()
        .current_dir(dir.path())
        .args(["--store", "data/net", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locations: 0"));
}

#[test]
fn test_store_discovered_from_subdirectory() {
    let dir = setup_test_dir();
    let nested = dir.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    waypath()
        .current_dir(&nested)
        .arg("status")
        .assert()
        .success();
}

#[test]
fn test_root_flag() {
    let dir = setup_test_dir();

    waypath()
        .args(["--root", dir.path().to_str().unwrap(), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locations: 0"));
}

// ============================================================================
// Status
// ============================================================================

#[test]
fn test_status_reports_counts() {
    let dir = setup_test_dir();
    add_location(dir.path(), "Harbor", 0.0, 0.0);
    add_location(dir.path(), "Market", 1.0, 2.0);
    add_route(dir.path(), "Harbor", "Market", 4.0);

    waypath()
        .current_dir(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database: ok"))
        .stdout(predicate::str::contains("Locations: 2"))
        .stdout(predicate::str::contains("Routes: 2"));
}

#[test]
fn test_status_records() {
    let dir = setup_test_dir();

    waypath()
        .current_dir(dir.path())
        .args(["--format", "records", "status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H waypath=1 records=1 mode=status",
        ))
        .stdout(predicate::str::contains("locations=0 routes=0"));
}

#[test]
fn test_status_json_includes_config() {
    let dir = setup_test_dir();

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "status"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["database"], "ok");
    assert_eq!(json["config"]["routes"]["default_bidirectional"], true);
    assert_eq!(json["config"]["display"]["precision"], 2);
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_missing_store_is_data_error() {
    let dir = tempdir().unwrap();

    waypath()
        .current_dir(dir.path())
        .arg("status")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("store not found"));
}

#[test]
fn test_missing_store_json_envelope() {
    let dir = tempdir().unwrap();

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "location", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["code"], 3);
    assert_eq!(envelope["error"]["type"], "store_not_found");
}

#[test]
fn test_unknown_format_is_usage_error() {
    waypath()
        .args(["--format", "xml", "status"])
        .assert()
        .code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    let output = waypath()
        .args(["--format", "json", "route", "add", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();

    waypath()
        .current_dir(dir.path())
        .args(["--quiet", "status"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
