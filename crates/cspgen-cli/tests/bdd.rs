//! BDD test harness using cucumber-rs.
//!
//! Executes Gherkin feature files from `tests/features/` against the cspgen CLI.
//!
//! Run with: `cargo test --test bdd`

use assert_cmd::Command;
use cucumber::gherkin::Step;
use cucumber::{given, then, when, World};
use cspgen_test_util::normalize_nonce;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test world that holds state between steps.
#[derive(Debug, Default, World)]
pub struct CspgenWorld {
    /// Working directory for the scenario; holds any cspgen.toml.
    temp_dir: Option<TempDir>,

    /// Last command's exit code.
    exit_code: Option<i32>,

    /// Last command's stdout.
    stdout: String,

    /// Last command's stderr.
    stderr: String,
}

impl CspgenWorld {
    fn work_dir(&mut self) -> PathBuf {
        self.temp_dir
            .get_or_insert_with(|| TempDir::new().expect("Failed to create temp dir"))
            .path()
            .to_path_buf()
    }

    #[allow(deprecated)]
    fn cspgen_cmd() -> Command {
        Command::cargo_bin("cspgen").expect("cspgen binary not found")
    }

    /// Value of `directive` in the last header, nonces normalized.
    fn directive_value(&self, directive: &str) -> Option<String> {
        let header = self.header();
        header
            .split("; ")
            .find_map(|part| {
                part.strip_prefix(directive)
                    .and_then(|rest| rest.strip_prefix(' '))
            })
            .map(str::to_string)
    }

    fn header(&self) -> String {
        let line = self.stdout.lines().next().unwrap_or_default();
        normalize_nonce(line)
    }
}

// =============================================================================
// Given steps - Setup
// =============================================================================

#[given(expr = "the default configuration profile is {string}")]
fn given_default_profile(_world: &mut CspgenWorld, _profile: String) {
    // Background step - documents the default only
}

#[given(expr = "a cspgen.toml with:")]
fn given_config(world: &mut CspgenWorld, step: &Step) {
    let content = step.docstring.as_deref().expect("docstring with config");
    let path = world.work_dir().join("cspgen.toml");
    std::fs::write(path, content).expect("Failed to write config");
}

// =============================================================================
// When steps - Actions
// =============================================================================

#[when(expr = "I run {string}")]
fn when_i_run_command(world: &mut CspgenWorld, command: String) {
    let parts: Vec<&str> = command.split_whitespace().collect();
    assert_eq!(parts.first(), Some(&"cspgen"), "Command must start with 'cspgen'");

    let output = CspgenWorld::cspgen_cmd()
        .current_dir(world.work_dir())
        .env_remove("CSPGEN_LOG")
        .args(&parts[1..])
        .output()
        .expect("Failed to run command");

    world.exit_code = output.status.code();
    world.stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    world.stderr = String::from_utf8_lossy(&output.stderr).into_owned();
}

// =============================================================================
// Then steps - Assertions
// =============================================================================

#[then(expr = "the exit code is {int}")]
fn then_exit_code_is(world: &mut CspgenWorld, expected: i32) {
    let actual = world.exit_code.expect("No exit code captured");
    assert_eq!(
        actual, expected,
        "Expected exit code {}, got {}. stderr: {}",
        expected, actual, world.stderr
    );
}

#[then(expr = "the header directive {string} contains {string}")]
fn then_directive_contains(world: &mut CspgenWorld, directive: String, source: String) {
    let value = world
        .directive_value(&directive)
        .unwrap_or_else(|| panic!("{directive} missing from {}", world.header()));
    assert!(
        value.split(' ').any(|token| token == source),
        "{directive} = {value}, expected {source}"
    );
}

#[then(expr = "the header directive {string} is exactly {string}")]
fn then_directive_is(world: &mut CspgenWorld, directive: String, expected: String) {
    assert_eq!(world.directive_value(&directive), Some(expected));
}

#[then(expr = "the included services are {string}")]
fn then_included_services(world: &mut CspgenWorld, expected: String) {
    let json: Value = serde_json::from_str(&world.stdout).expect("json output");
    let ids: Vec<&str> = json["included_services"]
        .as_array()
        .expect("included_services array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(ids.join(", "), expected);
}

#[then(expr = "stderr contains {string}")]
fn then_stderr_contains(world: &mut CspgenWorld, needle: String) {
    assert!(
        world.stderr.contains(&needle),
        "stderr did not contain {needle:?}: {}",
        world.stderr
    );
}

#[then("stderr is empty")]
fn then_stderr_empty(world: &mut CspgenWorld) {
    assert!(world.stderr.is_empty(), "stderr: {}", world.stderr);
}

fn main() {
    let features_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("cli crate should have parent")
        .parent()
        .expect("crates should have parent")
        .join("tests")
        .join("features");

    futures::executor::block_on(CspgenWorld::run(features_dir));
}
