//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. They run
//! against the dev data directory so they never touch a real user config.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "tabata-cli", "--"])
        .args(args)
        .env("TABATA_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_workout_plan() {
    let (stdout, _, code) = run_cli(&["workout", "plan"]);
    assert_eq!(code, 0, "workout plan failed");
    assert!(stdout.contains("Total"));
    assert!(stdout.contains("Warm Up"));
}

#[test]
fn test_workout_plan_json() {
    let (stdout, _, code) = run_cli(&[
        "workout", "plan", "--json", "--sets", "2", "--rounds", "2", "--warm-up", "5", "--work",
        "10", "--rest", "5", "--cool-down", "5",
    ]);
    assert_eq!(code, 0, "workout plan --json failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("plan output is not valid JSON");
    assert_eq!(parsed["duration"], 65.0);
    assert_eq!(parsed["total_work"], 40.0);
    assert_eq!(parsed["total_rest"], 15.0);
    assert_eq!(parsed["reps"], 4);
}

#[test]
fn test_workout_run_json_emits_snapshot_and_events() {
    // A sub-second workout so the run loop finishes almost immediately.
    let (stdout, _, code) = run_cli(&[
        "workout", "run", "--json", "--mute", "--sets", "1", "--rounds", "1", "--warm-up", "0",
        "--work", "0.2", "--rest", "0", "--cool-down", "0",
    ]);
    assert_eq!(code, 0, "workout run --json failed");
    assert!(stdout.contains("\"type\": \"StateSnapshot\""));
    assert!(stdout.contains("\"type\": \"PhaseStarted\""));
    assert!(stdout.contains("\"type\": \"WorkoutFinished\""));
    assert!(stdout.contains("\"reps\": 1"));
}

#[test]
fn test_workout_plan_rejects_invalid_config() {
    let (_, stderr, code) = run_cli(&["workout", "plan", "--sets", "0"]);
    assert_ne!(code, 0, "zero sets should be rejected");
    assert!(stderr.contains("error"));
}

#[test]
fn test_config_show() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0, "config show failed");
    assert!(stdout.contains("[workout]"));
    assert!(stdout.contains("[audio]"));
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "workout.rounds"]);
    assert_eq!(code, 0, "config get failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, _, code) = run_cli(&["config", "get", "workout.bogus"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_set_rejects_invalid_workout_values() {
    let (_, stderr, code) = run_cli(&["config", "set", "workout.sets", "0"]);
    assert_ne!(code, 0, "zero sets should be rejected");
    assert!(stderr.contains("error"));
}

#[test]
fn test_config_set_and_reset() {
    let (_, _, code) = run_cli(&["config", "set", "workout.sets", "4"]);
    assert_eq!(code, 0, "config set failed");
    let (stdout, _, code) = run_cli(&["config", "get", "workout.sets"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "4");
    let (_, _, code) = run_cli(&["config", "reset"]);
    assert_eq!(code, 0, "config reset failed");
}
