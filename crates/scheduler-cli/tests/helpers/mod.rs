#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed "today" so date-dependent output is reproducible.
pub const TODAY: &str = "20240126";

/// Test harness for running CLI commands with temporary databases
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary database
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// Get a Command instance configured for testing, without a pinned date
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("scheduler").expect("Failed to find scheduler binary");

        // Run inside the temp dir so no stray scheduler.toml is picked up
        cmd.current_dir(self.temp_dir.path());
        cmd.env("SCHEDULER_DATABASE_PATH", &self.db_path);
        cmd.env_remove("RUST_LOG");

        cmd
    }

    /// Get a Command instance configured for testing with `--today` pinned
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.args(["--today", TODAY]);
        cmd
    }

    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Runs a command with `--json` and parses its stdout
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .arg("--json")
            .args(args)
            .output()
            .expect("Failed to run scheduler");
        serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout was not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&output.stdout)
            )
        })
    }

    /// Adds a task through the CLI and returns its id
    pub fn add_task(&self, args: &[&str]) -> i64 {
        let mut full = vec!["add"];
        full.extend_from_slice(args);
        let task = self.run_json(&full);
        task["id"].as_i64().expect("add did not return an id")
    }
}
