//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths against a working directory
//! - Collapsing `.` and `..` segments textually
//! - Rewriting separators for a chosen convention

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::separator::SeparatorStyle;

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("relative/file.txt")).unwrap();
/// assert_eq!(expanded, Path::new("relative/file.txt"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Make `path` absolute against `working_dir`.
///
/// An empty path denotes the working directory itself. Redundant separators,
/// trailing separators and interior `.` components are dropped; `..`
/// components are kept, so the result still names the same entry without
/// consulting the filesystem.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the result is not absolute
/// (which only happens with a relative `working_dir`).
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::absolutize;
/// use std::path::Path;
///
/// # #[cfg(unix)] {
/// let abs = absolutize(Path::new("src/../lib.rs"), Path::new("/work"), false).unwrap();
/// assert_eq!(abs, Path::new("/work/src/../lib.rs"));
/// # }
/// ```
pub fn absolutize(path: &Path, working_dir: &Path, expand: bool) -> Result<PathBuf> {
    let expanded = if expand {
        expand_tilde(path)?
    } else {
        path.to_path_buf()
    };

    let joined = if expanded.as_os_str().is_empty() {
        working_dir.to_path_buf()
    } else {
        working_dir.join(expanded)
    };

    if !joined.is_absolute() {
        return Err(Error::InvalidPath {
            path: joined,
            reason: "Path must be absolute after joining the working directory".to_string(),
        });
    }

    Ok(joined.components().collect())
}

/// Collapse `.` and `..` segments of `path` and render it with `style`.
///
/// Separators of both conventions are accepted on input and rewritten to the
/// separator of `style`. Repeated and trailing separators are dropped. The
/// root (a leading separator, and for [`SeparatorStyle::Windows`] a drive
/// letter or UNC server prefix) is preserved.
///
/// # Errors
///
/// Returns an error if a `..` segment would climb above the root.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::collapse;
/// use pathkit::SeparatorStyle;
///
/// assert_eq!(collapse("/a/./b/../c.txt", SeparatorStyle::Unix).unwrap(), "/a/c.txt");
/// assert_eq!(collapse("C:/a/../b", SeparatorStyle::Windows).unwrap(), "C:\\b");
/// assert!(collapse("/a/../..", SeparatorStyle::Unix).is_err());
/// ```
pub fn collapse(path: &str, style: SeparatorStyle) -> Result<String> {
    let sep = style.separator();
    let unified: String = path
        .chars()
        .map(|c| if c == style.foreign_separator() { sep } else { c })
        .collect();

    let (prefix, rest) = split_prefix(&unified, style);

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(sep) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(Error::InvalidPath {
                        path: PathBuf::from(path),
                        reason: "Path contains too many '..' components (escapes root)"
                            .to_string(),
                    });
                }
            }
            other => segments.push(other),
        }
    }

    let mut out = String::with_capacity(unified.len());
    out.push_str(prefix);
    out.push_str(&segments.join(&sep.to_string()));

    if out.is_empty() {
        out.push('.');
    }

    Ok(out)
}

/// Split the root prefix off a separator-unified path.
fn split_prefix(path: &str, style: SeparatorStyle) -> (&str, &str) {
    let sep = style.separator();
    let bytes = path.as_bytes();

    if style == SeparatorStyle::Windows {
        // UNC: \\server\share...
        if path.starts_with("\\\\") {
            return match path[2..].find(sep) {
                Some(idx) => path.split_at(idx + 3),
                None => (path, ""),
            };
        }

        // Drive letter: C:\ or C:
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            let end = if bytes.get(2) == Some(&b'\\') { 3 } else { 2 };
            return path.split_at(end);
        }
    }

    if path.starts_with(sep) {
        return path.split_at(1);
    }

    ("", path)
}
