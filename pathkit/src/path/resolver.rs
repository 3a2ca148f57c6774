//! Path resolution with existence gating and sentinel fallback.
//!
//! This module provides the `PathResolver` type, which derives absolute
//! paths, names, extensions, parents and normalized forms from input
//! strings.

use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::types::{Operation, PathReport, ResolverOptions};
use crate::path::{canonicalize, normalize, segments, SeparatorStyle};

/// Derives representations of filesystem paths.
///
/// Every derivation comes in two forms:
/// - `try_*` methods return a typed [`Result`]
/// - the plain methods always return a string, substituting the configured
///   not-found sentinel for any failure
///
/// Relative inputs are resolved against the working directory captured
/// when the resolver is built. When [`ResolverOptions::check_existence`] is
/// set, the absolute path of the raw input must exist, whatever is being
/// derived from it.
///
/// # Examples
///
/// ```no_run
/// use pathkit::{PathResolver, ResolverOptions};
///
/// let options = ResolverOptions::default()
///     .with_check_existence(true)
///     .with_not_found("Invalid path detected");
/// let resolver = PathResolver::new(options).unwrap();
///
/// println!("name: {}", resolver.name("Cargo.toml"));
/// assert_eq!(resolver.name("surely-missing.txt"), "Invalid path detected");
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    options: ResolverOptions,
    /// Working directory captured at construction.
    current_path: PathBuf,
}

impl PathResolver {
    /// Create a resolver bound to the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(options: ResolverOptions) -> Result<Self> {
        let current_path = env::current_dir()?;
        Ok(Self::with_working_dir(options, current_path))
    }

    /// Create a resolver bound to an explicit working directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{PathResolver, ResolverOptions};
    /// use std::path::Path;
    ///
    /// let resolver = PathResolver::with_working_dir(ResolverOptions::default(), "/srv");
    /// assert_eq!(resolver.working_dir(), Path::new("/srv"));
    /// ```
    #[must_use]
    pub fn with_working_dir(options: ResolverOptions, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            options,
            current_path: working_dir.into(),
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Mutable access to the options; changes apply to subsequent calls.
    pub fn options_mut(&mut self) -> &mut ResolverOptions {
        &mut self.options
    }

    /// The working directory relative inputs resolve against.
    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.current_path
    }

    /// The value a literal `.` input stands for.
    ///
    /// This is the captured working directory when dot handling is enabled,
    /// otherwise the not-found sentinel. Derivations do not substitute it:
    /// `.` is resolved like any other relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{PathResolver, ResolverOptions};
    ///
    /// let mut resolver = PathResolver::with_working_dir(ResolverOptions::default(), "/srv");
    /// assert_eq!(resolver.dot_result(), "null");
    ///
    /// resolver.options_mut().dot_enabled = true;
    /// assert_eq!(resolver.dot_result(), "/srv");
    /// ```
    #[must_use]
    pub fn dot_result(&self) -> Cow<'_, str> {
        if self.options.dot_enabled {
            self.current_path.to_string_lossy()
        } else {
            Cow::Borrowed(&self.options.not_found)
        }
    }

    /// The absolute path of `input`.
    #[must_use]
    pub fn path(&self, input: &str) -> String {
        self.or_sentinel(Operation::Path, input, self.try_path(input))
    }

    /// The final segment of `input`'s absolute path.
    #[must_use]
    pub fn name(&self, input: &str) -> String {
        self.or_sentinel(Operation::Name, input, self.try_name(input))
    }

    /// The final segment without its last extension.
    #[must_use]
    pub fn base_name(&self, input: &str) -> String {
        self.or_sentinel(Operation::BaseName, input, self.try_base_name(input))
    }

    /// The text after the last `.` of the final segment.
    #[must_use]
    pub fn extension(&self, input: &str) -> String {
        self.or_sentinel(Operation::Extension, input, self.try_extension(input))
    }

    /// The final segment of the parent directory.
    #[must_use]
    pub fn parent_name(&self, input: &str) -> String {
        self.or_sentinel(Operation::ParentName, input, self.try_parent_name(input))
    }

    /// The canonical path of the parent directory.
    #[must_use]
    pub fn parent_path(&self, input: &str) -> String {
        self.or_sentinel(Operation::ParentPath, input, self.try_parent_path(input))
    }

    /// The absolute path with `.` and `..` collapsed.
    #[must_use]
    pub fn normalize(&self, input: &str) -> String {
        self.or_sentinel(Operation::Normalize, input, self.try_normalize(input))
    }

    /// The absolute path with the final segment's last extension removed.
    #[must_use]
    pub fn remove_extension(&self, input: &str) -> String {
        self.or_sentinel(
            Operation::RemoveExtension,
            input,
            self.try_remove_extension(input),
        )
    }

    /// Every derivation of `input`.
    #[must_use]
    pub fn report(&self, input: &str) -> PathReport {
        PathReport {
            input: input.to_string(),
            path: self.path(input),
            name: self.name(input),
            base_name: self.base_name(input),
            extension: self.extension(input),
            parent_name: self.parent_name(input),
            parent_path: self.parent_path(input),
            normalize: self.normalize(input),
            remove_extension: self.remove_extension(input),
        }
    }

    /// Typed form of [`path`](Self::path).
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if existence checking is on and the path is
    /// absent, or `InvalidPath` if it cannot be made absolute or is not UTF-8.
    pub fn try_path(&self, input: &str) -> Result<String> {
        let absolute = self.existing(input)?;
        path_to_string(&absolute)
    }

    /// Typed form of [`name`](Self::name).
    ///
    /// # Errors
    ///
    /// As [`try_path`](Self::try_path), plus `InvalidPath` for a root or a
    /// path ending in `..`.
    pub fn try_name(&self, input: &str) -> Result<String> {
        let absolute = self.existing(input)?;
        Ok(segments::file_name(&absolute)?.to_string())
    }

    /// Typed form of [`base_name`](Self::base_name).
    ///
    /// # Errors
    ///
    /// As [`try_name`](Self::try_name).
    pub fn try_base_name(&self, input: &str) -> Result<String> {
        let absolute = self.existing(input)?;
        let name = segments::file_name(&absolute)?;
        Ok(segments::base_name(name).to_string())
    }

    /// Typed form of [`extension`](Self::extension).
    ///
    /// # Errors
    ///
    /// As [`try_name`](Self::try_name).
    pub fn try_extension(&self, input: &str) -> Result<String> {
        let absolute = self.existing(input)?;
        let name = segments::file_name(&absolute)?;
        Ok(segments::extension(name).to_string())
    }

    /// Typed form of [`parent_name`](Self::parent_name).
    ///
    /// # Errors
    ///
    /// As [`try_path`](Self::try_path), plus `InvalidPath` when there is no
    /// parent or the parent is a root.
    pub fn try_parent_name(&self, input: &str) -> Result<String> {
        let absolute = self.existing(input)?;
        let parent = absolute.parent().ok_or_else(|| Error::InvalidPath {
            path: absolute.clone(),
            reason: "Path has no parent directory".to_string(),
        })?;
        Ok(segments::file_name(parent)?.to_string())
    }

    /// Typed form of [`parent_path`](Self::parent_path).
    ///
    /// The parent must exist regardless of existence checking, since it is
    /// canonicalized.
    ///
    /// # Errors
    ///
    /// As [`try_path`](Self::try_path), plus the canonicalization errors of
    /// the parent directory.
    pub fn try_parent_path(&self, input: &str) -> Result<String> {
        let absolute = self.existing(input)?;
        let parent = canonicalize::canonical_parent(&absolute)?;
        path_to_string(&parent)
    }

    /// Typed form of [`normalize`](Self::normalize).
    ///
    /// Unlike the other operations, the existence check applies to the
    /// collapsed path, so `a/b/../c.txt` only needs `a/c.txt` to exist.
    ///
    /// An injected foreign [`SeparatorStyle`] only affects rendering: a
    /// Windows-style result on a Unix host is not a host path and does not
    /// normalize back to itself.
    ///
    /// # Errors
    ///
    /// As [`try_path`](Self::try_path), plus `InvalidPath` when `..` climbs
    /// above the root.
    pub fn try_normalize(&self, input: &str) -> Result<String> {
        let absolute = self.resolve_input(input)?;
        let host = SeparatorStyle::host();
        let collapsed = normalize::collapse(&path_to_string(&absolute)?, host)?;
        if self.options.check_existence {
            canonicalize::ensure_exists(Path::new(&collapsed))?;
        }

        let style = self.options.separator_style();
        if style == host {
            Ok(collapsed)
        } else {
            normalize::collapse(&collapsed, style)
        }
    }

    /// Typed form of [`remove_extension`](Self::remove_extension).
    ///
    /// # Errors
    ///
    /// As [`try_name`](Self::try_name).
    pub fn try_remove_extension(&self, input: &str) -> Result<String> {
        let absolute = self.existing(input)?;
        let full = path_to_string(&absolute)?;
        match segments::split_extension(segments::file_name(&absolute)?).1 {
            Some(ext) => Ok(full[..full.len() - ext.len() - 1].to_string()),
            None => Ok(full),
        }
    }

    /// Shared preprocessing: dot-result reporting and absolutization.
    fn resolve_input(&self, input: &str) -> Result<PathBuf> {
        if input == "." {
            log::debug!(
                "dot input: dot-result is '{}', resolving '.' as a relative path",
                self.dot_result()
            );
        }
        normalize::absolutize(
            Path::new(input),
            &self.current_path,
            self.options.expand_tilde,
        )
    }

    /// Absolutize `input` and, if configured, require that it exists.
    fn existing(&self, input: &str) -> Result<PathBuf> {
        let absolute = self.resolve_input(input)?;
        if self.options.check_existence {
            canonicalize::ensure_exists(&absolute)?;
        }
        Ok(absolute)
    }

    fn or_sentinel(&self, operation: Operation, input: &str, result: Result<String>) -> String {
        result.unwrap_or_else(|e| {
            log::debug!("{operation} of '{input}' resolved to the sentinel: {e}");
            self.options.not_found.clone()
        })
    }
}

fn path_to_string(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_owned)
        .ok_or_else(|| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path contains invalid UTF-8".to_string(),
        })
}
