//! Smoke tests for the siteswap CLI
//!
//! These tests verify basic CLI functionality works correctly.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the siteswap binary
fn siteswap() -> Command {
    let mut cmd = Command::cargo_bin("siteswap").expect("siteswap binary should exist");
    cmd.env_remove("RUST_LOG").env_remove("SITESWAP_CONFIG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    siteswap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.4.0"));
}

#[test]
fn test_help_flag() {
    siteswap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("sample"));
}

#[test]
fn test_no_args_shows_help() {
    siteswap().assert().failure();
}

// ============================================================================
// Validate
// ============================================================================

#[test]
fn test_validate_good_pattern() {
    siteswap()
        .args(["--color", "never", "validate", "4, 4, 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4, 4, 1: 3 balls, 2 hands"));
}

#[test]
fn test_validate_fractional() {
    siteswap()
        .args(["validate", "3 4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Pattern 3, 4 uses fractional balls 7/2.",
        ));
}

#[test]
fn test_validate_collision() {
    siteswap()
        .args(["validate", "4,3,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("collision"));
}

#[test]
fn test_validate_non_numeric() {
    siteswap()
        .args(["validate", "4, x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'x' is not a whole number"));
}

#[test]
fn test_validate_negative_height() {
    siteswap()
        .args(["validate", "-1, 3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Pattern contains negative value -1.",
        ));
}

#[test]
fn test_validate_json() {
    let output = siteswap()
        .args(["validate", "5 6 1", "--hands", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["num_balls"], 4);
    assert_eq!(json["num_hands"], 3);
}

#[test]
fn test_ball_ceiling() {
    siteswap()
        .args(["validate", "641"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "640 balls ought to be enough for anybody.",
        ));
    siteswap()
        .args(["--max-balls", "3", "validate", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 balls ought to be enough"));
}

// ============================================================================
// Analyze / Sample / Throws / Presets
// ============================================================================

#[test]
fn test_analyze_text() {
    siteswap()
        .args(["--color", "never", "analyze", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cycle length: 6 beats"))
        .stdout(predicate::str::contains("orbit 0: 3 balls [0, 1, 2]"));
}

#[test]
fn test_analyze_json() {
    let output = siteswap()
        .args(["analyze", "2 8", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cycle_length"], 8);
    assert_eq!(json["orbits"].as_array().unwrap().len(), 2);
}

#[test]
fn test_sample_json_on_canvas() {
    let output = siteswap()
        .args([
            "sample",
            "3",
            "--beats",
            "2",
            "--samples-per-beat",
            "2",
            "--canvas",
            "300x300",
            "--beats-per-second",
            "3",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    for row in rows {
        assert_eq!(row["balls"].as_array().unwrap().len(), 3);
        assert!(row["seconds"].is_number());
        for point in row["balls"].as_array().unwrap() {
            let x = point["x"].as_f64().unwrap();
            assert!((19.9..=280.1).contains(&x));
        }
    }
}

#[test]
fn test_sample_rejects_bad_speed() {
    siteswap()
        .args(["sample", "3", "--beats-per-second", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--beats-per-second"));
}

#[test]
fn test_throws() {
    siteswap()
        .args(["throws", "5 3 1", "--count", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("beat    3  index   0  height 5"));
}

#[test]
fn test_throws_count_too_large() {
    siteswap()
        .args(["throws", "3", "--count", "1000000000000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("the limit is 1000000"));
}

#[test]
fn test_presets() {
    siteswap()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("1, 9, 1, 5"))
        .stdout(predicate::str::contains("9, 7, 5"));
}

// ============================================================================
// Config File
// ============================================================================

#[test]
fn test_config_file_sets_default_hands() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("siteswap.yaml");
    fs::write(&path, "default_hands: 3\n").unwrap();

    let output = siteswap()
        .args(["--config", path.to_str().unwrap()])
        .args(["validate", "5 6 1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["num_hands"], 3);
}

#[test]
fn test_bad_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("siteswap.yaml");
    fs::write(&path, "default_hands: 0\n").unwrap();

    siteswap()
        .args(["--config", path.to_str().unwrap(), "presets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
