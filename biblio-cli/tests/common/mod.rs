//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - JSON output parsing helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - A separate data directory for the biblio database
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the biblio data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - A temporary directory for test files
    /// - A data directory path (not created yet - biblio will create it)
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("biblio-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// This returns a Command with only the biblio binary, allowing tests
    /// to have full control over all flags including --data-dir.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("biblio").expect("Failed to find biblio binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Run a command and parse its stdout as JSON.
    ///
    /// # Panics
    /// Panics if the command fails or its output is not valid JSON.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run biblio command");

        assert!(
            output.status.success(),
            "Command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        serde_json::from_str(stdout.trim()).expect("Output is not valid JSON")
    }

    /// Register a user and return the assigned id.
    pub fn add_user(&self, name: &str) -> i64 {
        let contact = format!("{}@example.org", name.to_lowercase());
        let value = self.run_json(&["add-user", "--name", name, "--contact", &contact]);
        value["user_id"].as_i64().expect("user_id missing")
    }

    /// Add a book and return the assigned id.
    pub fn add_book(&self, title: &str, author: &str) -> i64 {
        let value = self.run_json(&["add-book", "--title", title, "--author", author]);
        value["book_id"].as_i64().expect("book_id missing")
    }

    /// Check a book out on a fixed date and return the transaction id.
    pub fn checkout(&self, user_id: i64, book_id: i64, date: &str) -> i64 {
        let value = self.run_json(&[
            "checkout",
            "--user-id",
            &user_id.to_string(),
            "--book-id",
            &book_id.to_string(),
            "--date",
            date,
        ]);
        value["transaction_id"]
            .as_i64()
            .expect("transaction_id missing")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
