//! Decomposition of the final path segment.
//!
//! The extension is everything after the last `.` of the final segment, so a
//! dotfile such as `.bashrc` has the extension `bashrc` and an empty base
//! name. This keeps `base + "." + extension == name` for every name that
//! contains a dot.

use std::path::Path;

use crate::error::{Error, Result};

/// The final segment of `path` as UTF-8.
///
/// # Errors
///
/// Returns `InvalidPath` if the path ends in a root or `..`, or if the
/// segment is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use pathkit::path::segments::file_name;
/// use std::path::Path;
///
/// assert_eq!(file_name(Path::new("/a/b/notes.md")).unwrap(), "notes.md");
/// assert!(file_name(Path::new("/")).is_err());
/// ```
pub fn file_name(path: &Path) -> Result<&str> {
    let name = path.file_name().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path has no final component".to_string(),
    })?;

    name.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })
}

/// Split a segment at its last `.` into base name and extension.
///
/// # Examples
///
/// ```
/// use pathkit::path::segments::split_extension;
///
/// assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", Some("gz")));
/// assert_eq!(split_extension("Makefile"), ("Makefile", None));
/// assert_eq!(split_extension(".bashrc"), ("", Some("bashrc")));
/// ```
#[must_use]
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((base, ext)) => (base, Some(ext)),
        None => (name, None),
    }
}

/// The base name of a segment: everything before its last `.`.
#[must_use]
pub fn base_name(name: &str) -> &str {
    split_extension(name).0
}

/// The extension of a segment, empty when it has no `.`.
#[must_use]
pub fn extension(name: &str) -> &str {
    split_extension(name).1.unwrap_or("")
}
