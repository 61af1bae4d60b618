//! Command-line tests for the stacks-and-queues binary
//!
//! These tests run the built binary as a child process and verify:
//! - Single-exercise commands print their result on stdout
//! - Invalid directions, oversized step counts and broken config files exit with code 1
//! - The demo runs only the sections a config file selects

use std::process::{Command, Output};

use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stacks-and-queues"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Should be able to run the binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// Single exercises
// =============================================================================

#[test]
fn test_rotate_left_prints_rotation() {
    let args = ["rotate", "-d", "left", "-k", "2", "1", "2", "3", "4", "5"];
    let output = run_cli(&args);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "[3, 4, 5, 1, 2]");
}

#[test]
fn test_rotate_defaults_to_right() {
    let output = run_cli(&["rotate", "-k", "2", "1", "2", "3", "4", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "[4, 5, 1, 2, 3]");
}

#[test]
fn test_reverse_without_text_prints_placeholder() {
    let output = run_cli(&["reverse"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "No string found");
}

#[test]
fn test_reverse_prints_reversed_text() {
    let output = run_cli(&["reverse", "abc"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "cba");
}

#[test]
fn test_balanced_prints_verdict() {
    let output = run_cli(&["balanced", "{([)}"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "NO");

    let output = run_cli(&["balanced", "{([])}"]);
    assert_eq!(stdout_of(&output), "YES");
}

// =============================================================================
// Failure exit codes
// =============================================================================

#[test]
fn test_rotate_unknown_direction_exits_1() {
    let output = run_cli(&["rotate", "-d", "up", "-k", "1", "1", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("Valid: left, right"));
}

#[test]
fn test_rotate_too_many_steps_exits_1() {
    let output = run_cli(&["rotate", "-k", "100001", "1", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("exceeds the maximum"));
}

#[test]
fn test_validate_broken_file_exits_1() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write");

    let output = run_cli(&["validate", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Failed to load configuration file"));
}

#[test]
fn test_validate_good_file_succeeds() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("demo.json");
    std::fs::write(&path, r#"{"reversal_inputs": ["ab"]}"#).expect("write");

    let output = run_cli(&["validate", path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
}

// =============================================================================
// Demo
// =============================================================================

#[test]
fn test_demo_without_config_runs_walkthrough() {
    let output = run_cli(&[]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Question 1: rotate right"));
    assert!(stdout.contains("Question 4: balanced brackets"));
}

#[test]
fn test_demo_with_config_runs_selected_sections_only() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("demo.json");
    std::fs::write(&path, r#"{"bracket_inputs": ["()"]}"#).expect("write");

    let output = run_cli(&["demo", "--config", path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Question 1: balanced brackets"));
    assert!(!stdout.contains("Question 2"));
    assert!(stdout.contains("  () => YES"));
}
