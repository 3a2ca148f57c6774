//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate the binary from the host
//!   configuration

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every environment variable the binary reads.
const PATHKIT_ENV_VARS: [&str; 6] = [
    "PATHKIT_CHECK_EXISTENCE",
    "PATHKIT_DOT_ENABLED",
    "PATHKIT_NOT_FOUND",
    "PATHKIT_SEPARATOR",
    "PATHKIT_EXPAND_TILDE",
    "PATHKIT_LOG_MODE",
];

/// Test environment with an isolated working and home directory.
///
/// This struct provides an isolated test environment with:
/// - A canonical temporary directory used as the working directory
/// - A separate home directory so no user configuration leaks in
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the working directory
    pub work_dir: PathBuf,
    /// Path used as `HOME`
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - `work/`: the working directory for commands
    /// - `home/`: the home directory for commands
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let work_dir = root.join("work");
        let home_dir = root.join("home");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            work_dir,
            home_dir,
        }
    }

    /// Get a command builder running in the working directory.
    ///
    /// The command has `HOME` pointed at the isolated home directory and
    /// every `PATHKIT_*` variable removed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathkit").expect("Failed to find pathkit binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home_dir)
            .env("USERPROFILE", &self.home_dir);
        for var in PATHKIT_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the working directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }

    /// Name of the working directory.
    pub fn dir_name(&self) -> &str {
        self.work_dir.file_name().unwrap().to_str().unwrap()
    }

    /// `relative` joined onto the working directory, as a string.
    pub fn display(&self, relative: &str) -> String {
        self.work_dir.join(relative).to_str().unwrap().to_string()
    }

    /// Create a file (and its parents) under the working directory.
    pub fn create_file(&self, relative: &str) -> PathBuf {
        self.write_file(relative, "content")
    }

    /// Write a file (and its parents) under the working directory.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory under the working directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home_dir.join(".pathkit");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathkit");
        assert!(
            output.status.success(),
            "pathkit {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}
