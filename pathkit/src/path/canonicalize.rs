//! Path canonicalization functions.
//!
//! Canonicalization is a single `realpath` call through the standard
//! library; failures are mapped onto the library error variants so callers
//! can tell a missing entry from a permission problem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks.
///
/// The path must exist for canonicalization to succeed.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - An I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| Error::from_io(path, e))
}

/// Canonicalize the directory containing `path`.
///
/// Only the parent is resolved: if the final component of `path` is a
/// symlink it is not followed, so the result is the real directory the link
/// itself lives in.
///
/// # Errors
///
/// Returns `InvalidPath` if `path` has no parent (it is a root), and the
/// errors of [`canonicalize`] if the parent cannot be resolved.
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::canonicalize::canonical_parent;
/// use std::path::Path;
///
/// let parent = canonical_parent(Path::new("/tmp/some-file")).unwrap();
/// assert!(parent.is_absolute());
/// ```
pub fn canonical_parent(path: &Path) -> Result<PathBuf> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path has no parent directory".to_string(),
        })?;

    canonicalize(parent)
}

/// Check whether `path` exists, following symlinks.
///
/// # Errors
///
/// Returns `PathNotFound` if the entry is absent, or the mapped I/O error if
/// its existence cannot be determined.
pub fn ensure_exists(path: &Path) -> Result<()> {
    match path.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::PathNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::from_io(path, e)),
    }
}
