use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

/// Get a Command for waypath
pub fn waypath() -> Command {
    cargo_bin_cmd!("waypath")
}

/// Extract the record id from command output.
/// `location add` and `route add` print the id as the first token of the first line
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Setup an initialized store and return its directory
#[allow(dead_code)]
pub fn setup_test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    waypath()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Add a location and return its id
#[allow(dead_code)]
pub fn add_location(dir: &Path, name: &str, x: f64, y: f64) -> String {
    let output = waypath()
        .current_dir(dir)
        .args([
            "location",
            "add",
            name,
            "--x",
            &x.to_string(),
            "--y",
            &y.to_string(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "location add failed: {:?}", output);
    extract_id(&output)
}

/// Add a two-way route between named locations
#[allow(dead_code)]
pub fn add_route(dir: &Path, from: &str, to: &str, distance: f64) {
    waypath()
        .current_dir(dir)
        .args(["route", "add", from, to, "--distance", &distance.to_string()])
        .assert()
        .success();
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
