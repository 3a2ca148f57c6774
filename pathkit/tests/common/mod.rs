//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the pathkit library.

use std::fs;
use std::path::{Path, PathBuf};

use pathkit::{PathResolver, ResolverOptions};
use tempfile::TempDir;

/// Sentinel used by the demo configuration.
pub const INVALID_PATH: &str = "Invalid path detected";

/// A canonical temporary directory with a known layout.
///
/// The root is canonicalized so that symlinked temp locations (such as
/// `/var` on macOS) compare equal to canonicalized results.
pub struct ProjectFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates an empty project directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates a file (and its parents) relative to the root.
    pub fn with_file(self, relative: &str) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "content").unwrap();
        self
    }

    /// Creates a directory (and its parents) relative to the root.
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.root.join(relative)).unwrap();
        self
    }

    /// Writes a file with the given contents relative to the root.
    pub fn with_contents(self, relative: &str, contents: &str) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// A resolver whose working directory is the project root.
    pub fn resolver(&self, options: ResolverOptions) -> PathResolver {
        PathResolver::with_working_dir(options, &self.root)
    }

    /// `root` joined with `relative`, as a string.
    pub fn display(&self, relative: &str) -> String {
        self.root.join(relative).to_str().unwrap().to_string()
    }
}

/// Options matching the demo entry point.
#[allow(dead_code)]
pub fn demo_options() -> ResolverOptions {
    ResolverOptions::default()
        .with_check_existence(true)
        .with_dot_enabled(false)
        .with_not_found(INVALID_PATH)
}
