//! CLI integration tests for credential preflight.
//!
//! These tests spawn the phab-cadence binary as a subprocess to verify that
//! a missing credential aborts the run with its own remediation message
//! before any prompt is shown.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Returns the path to the built binary.
fn binary_path() -> std::path::PathBuf {
    // cargo test builds binaries in target/debug
    let mut path = std::env::current_exe()
        .unwrap_or_else(|error| panic!("failed to get current exe path: {error}"));
    path.pop(); // remove test binary name
    path.pop(); // remove deps
    path.push("phab-cadence");
    path
}

fn run_in_clean_dir(env: &[(&str, &str)]) -> Output {
    let working_dir = TempDir::new().unwrap_or_else(|error| {
        panic!("failed to create temporary working directory: {error}")
    });

    let mut command = Command::new(binary_path());
    command.current_dir(working_dir.path());

    // Ensure tests are hermetic even if the developer has credentials set.
    command
        .env_remove("PHAB_CADENCE_API_TOKEN")
        .env_remove("PHAB_CADENCE_BEARER_TOKEN")
        .env_remove("PHAB_CADENCE_INSTANCE_URL")
        .env_remove("API_TOKEN")
        .env_remove("BEARER_TOKEN");

    for (key, value) in env {
        command.env(key, value);
    }

    command
        .output()
        .unwrap_or_else(|error| panic!("failed to execute binary: {error}"))
}

#[test]
fn missing_api_token_aborts_with_remediation_message() {
    let output = run_in_clean_dir(&[]);

    assert!(
        !output.status.success(),
        "missing API token should fail the run"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Conduit API token is required"),
        "stderr should carry the API token remediation: {stderr}"
    );
    assert!(
        stderr.contains("PHAB_CADENCE_API_TOKEN"),
        "stderr should name the environment variable: {stderr}"
    );
    assert!(
        output.stdout.is_empty(),
        "no prompt should be shown before preflight passes"
    );
}

#[test]
fn missing_bearer_token_aborts_with_its_own_message() {
    let output = run_in_clean_dir(&[("API_TOKEN", "cli-test-token")]);

    assert!(
        !output.status.success(),
        "missing bearer token should fail the run"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("bearer token is required"),
        "stderr should carry the bearer token remediation: {stderr}"
    );
    assert!(
        stderr.contains("PHAB_CADENCE_BEARER_TOKEN"),
        "stderr should name the environment variable: {stderr}"
    );
    assert!(
        output.stdout.is_empty(),
        "no prompt should be shown before preflight passes"
    );
}

#[test]
fn api_token_is_checked_before_the_bearer_token() {
    let output = run_in_clean_dir(&[("BEARER_TOKEN", "usso-test-session")]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Conduit API token is required"),
        "API token should be reported first: {stderr}"
    );
}
