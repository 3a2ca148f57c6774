//! Core types for path handling.
//!
//! This module defines the resolver options, the catalogue of derivation
//! operations, and the report that collects every derivation of one input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::separator::SeparatorStyle;

/// Sentinel returned by a default-configured resolver.
pub const DEFAULT_NOT_FOUND: &str = "null";

/// Options governing a [`PathResolver`](crate::path::PathResolver).
///
/// # Examples
///
/// ```
/// use pathkit::ResolverOptions;
///
/// let options = ResolverOptions::default()
///     .with_check_existence(true)
///     .with_not_found("Invalid path detected");
/// assert!(options.check_existence);
/// assert!(!options.dot_enabled);
/// assert_eq!(options.not_found, "Invalid path detected");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ResolverOptions {
    /// Return the sentinel unless the input path exists.
    pub check_existence: bool,

    /// Governs the dot-result of a literal `.` input.
    pub dot_enabled: bool,

    /// The sentinel returned in place of any value that cannot be derived.
    pub not_found: String,

    /// Separator convention for normalization; `None` queries the host at
    /// call time.
    pub separator: Option<SeparatorStyle>,

    /// Expand a leading `~` to the home directory before resolving.
    pub expand_tilde: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            check_existence: false,
            dot_enabled: false,
            not_found: DEFAULT_NOT_FOUND.to_string(),
            separator: None,
            expand_tilde: false,
        }
    }
}

impl ResolverOptions {
    /// Set whether inputs must exist.
    #[must_use]
    pub fn with_check_existence(mut self, check: bool) -> Self {
        self.check_existence = check;
        self
    }

    /// Set dot-path handling.
    #[must_use]
    pub fn with_dot_enabled(mut self, enabled: bool) -> Self {
        self.dot_enabled = enabled;
        self
    }

    /// Set the not-found sentinel.
    #[must_use]
    pub fn with_not_found(mut self, sentinel: impl Into<String>) -> Self {
        self.not_found = sentinel.into();
        self
    }

    /// Pin the separator convention used by normalization.
    #[must_use]
    pub fn with_separator(mut self, style: SeparatorStyle) -> Self {
        self.separator = Some(style);
        self
    }

    /// Set tilde expansion.
    #[must_use]
    pub fn with_expand_tilde(mut self, expand: bool) -> Self {
        self.expand_tilde = expand;
        self
    }

    /// The separator convention in effect right now.
    #[must_use]
    pub fn separator_style(&self) -> SeparatorStyle {
        self.separator.unwrap_or_else(SeparatorStyle::host)
    }
}

/// A derivation the resolver can perform on an input path.
///
/// # Examples
///
/// ```
/// use pathkit::{Operation, PathResolver, ResolverOptions};
///
/// let resolver = PathResolver::with_working_dir(ResolverOptions::default(), "/srv/app");
/// # #[cfg(unix)]
/// assert_eq!(Operation::ParentName.apply(&resolver, "main.rs"), "app");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// The absolute path.
    Path,
    /// The final segment.
    Name,
    /// The final segment without its last extension.
    BaseName,
    /// The last extension of the final segment.
    Extension,
    /// The final segment of the parent.
    ParentName,
    /// The canonical path of the parent.
    ParentPath,
    /// The absolute path with `.` and `..` collapsed.
    Normalize,
    /// The absolute path without the final segment's last extension.
    RemoveExtension,
}

impl Operation {
    /// The seven classic derivations, in display order.
    pub const CORE: [Self; 7] = [
        Self::Path,
        Self::Name,
        Self::BaseName,
        Self::Extension,
        Self::ParentName,
        Self::ParentPath,
        Self::Normalize,
    ];

    /// Every derivation, in display order.
    pub const ALL: [Self; 8] = [
        Self::Path,
        Self::Name,
        Self::BaseName,
        Self::Extension,
        Self::ParentName,
        Self::ParentPath,
        Self::Normalize,
        Self::RemoveExtension,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Name => "name",
            Self::BaseName => "base name",
            Self::Extension => "extension",
            Self::ParentName => "parent name",
            Self::ParentPath => "parent path",
            Self::Normalize => "normalize",
            Self::RemoveExtension => "remove extension",
        }
    }

    /// Run this derivation, substituting the sentinel on failure.
    #[must_use]
    pub fn apply(self, resolver: &crate::path::PathResolver, input: &str) -> String {
        match self {
            Self::Path => resolver.path(input),
            Self::Name => resolver.name(input),
            Self::BaseName => resolver.base_name(input),
            Self::Extension => resolver.extension(input),
            Self::ParentName => resolver.parent_name(input),
            Self::ParentPath => resolver.parent_path(input),
            Self::Normalize => resolver.normalize(input),
            Self::RemoveExtension => resolver.remove_extension(input),
        }
    }

    /// Run this derivation, returning the underlying error on failure.
    ///
    /// # Errors
    ///
    /// Returns whatever the matching `try_*` resolver method returns.
    pub fn try_apply(self, resolver: &crate::path::PathResolver, input: &str) -> Result<String> {
        match self {
            Self::Path => resolver.try_path(input),
            Self::Name => resolver.try_name(input),
            Self::BaseName => resolver.try_base_name(input),
            Self::Extension => resolver.try_extension(input),
            Self::ParentName => resolver.try_parent_name(input),
            Self::ParentPath => resolver.try_parent_path(input),
            Self::Normalize => resolver.try_normalize(input),
            Self::RemoveExtension => resolver.try_remove_extension(input),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every derivation of a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// The input as given.
    pub input: String,
    /// See [`Operation::Path`].
    pub path: String,
    /// See [`Operation::Name`].
    pub name: String,
    /// See [`Operation::BaseName`].
    pub base_name: String,
    /// See [`Operation::Extension`].
    pub extension: String,
    /// See [`Operation::ParentName`].
    pub parent_name: String,
    /// See [`Operation::ParentPath`].
    pub parent_path: String,
    /// See [`Operation::Normalize`].
    pub normalize: String,
    /// See [`Operation::RemoveExtension`].
    pub remove_extension: String,
}

impl PathReport {
    /// The value derived by `operation`.
    #[must_use]
    pub fn get(&self, operation: Operation) -> &str {
        match operation {
            Operation::Path => &self.path,
            Operation::Name => &self.name,
            Operation::BaseName => &self.base_name,
            Operation::Extension => &self.extension,
            Operation::ParentName => &self.parent_name,
            Operation::ParentPath => &self.parent_path,
            Operation::Normalize => &self.normalize,
            Operation::RemoveExtension => &self.remove_extension,
        }
    }

    /// Render as `label: value` lines in display order.
    #[must_use]
    pub fn to_lines(&self) -> String {
        Operation::ALL
            .iter()
            .map(|op| format!("{}: {}", op.label(), self.get(*op)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> PathReport {
        PathReport {
            input: "file.txt".into(),
            path: "/w/file.txt".into(),
            name: "file.txt".into(),
            base_name: "file".into(),
            extension: "txt".into(),
            parent_name: "w".into(),
            parent_path: "/w".into(),
            normalize: "/w/file.txt".into(),
            remove_extension: "/w/file".into(),
        }
    }

    #[test]
    fn test_options_default() {
        let options = ResolverOptions::default();
        assert!(!options.check_existence);
        assert!(!options.dot_enabled);
        assert!(!options.expand_tilde);
        assert_eq!(options.not_found, DEFAULT_NOT_FOUND);
        assert_eq!(options.separator, None);
        assert_eq!(options.separator_style(), SeparatorStyle::host());
    }

    #[test]
    fn test_options_pinned_separator() {
        let options = ResolverOptions::default().with_separator(SeparatorStyle::Windows);
        assert_eq!(options.separator_style(), SeparatorStyle::Windows);
    }

    #[test]
    fn test_operation_labels_unique() {
        let mut labels: Vec<_> = Operation::ALL.iter().map(|op| op.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Operation::ALL.len());
    }

    #[test]
    fn test_core_is_prefix_of_all() {
        assert_eq!(&Operation::ALL[..7], &Operation::CORE[..]);
    }

    #[test]
    fn test_report_lines_order() {
        let lines = sample_report().to_lines();
        let first: Vec<_> = lines.lines().take(2).collect();
        assert_eq!(first, vec!["path: /w/file.txt", "name: file.txt"]);
        assert!(lines.ends_with("remove extension: /w/file"));
    }

    #[test]
    fn test_report_json_fields() {
        let json = sample_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["base_name"], "file");
        assert_eq!(value["parent_path"], "/w");
        assert_eq!(value["input"], "file.txt");
    }
}
