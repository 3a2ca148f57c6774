//! Error types for the pathkit library.
//!
//! The public string-returning resolver operations never surface these
//! errors: they collapse every failure into the configured not-found
//! sentinel. The typed `try_*` operations, configuration loading and report
//! serialization return them directly.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("file.txt".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be interpreted or has no component the operation needs.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed or rendered.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or variable that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Map an I/O error raised while probing `path` onto the matching variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }
}
