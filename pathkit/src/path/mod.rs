//! Path derivation with existence gating.
//!
//! This module provides the [`PathResolver`], which turns input strings into
//! absolute paths, names, extensions, parents and normalized forms.
//!
//! # Key Concepts
//!
//! ## Absolutization
//!
//! Relative inputs are joined onto the working directory captured when the
//! resolver is built. Redundant separators and interior `.` components are
//! dropped, but `..` is kept so the path still names the same entry.
//!
//! ## Existence gating
//!
//! With [`ResolverOptions::check_existence`] on, a derivation only succeeds
//! if the absolute path of the raw input exists. The check is always made
//! against the input, never against the derived value.
//!
//! ## Sentinel fallback
//!
//! The string-returning operations never fail: any error becomes the
//! configured [`ResolverOptions::not_found`] value. The `try_*` twins expose
//! the underlying [`Error`](crate::Error).
//!
//! ## Normalization
//!
//! Normalization collapses `.` and `..` textually and renders the result in
//! a [`SeparatorStyle`], either pinned in the options or taken from the host
//! at call time.
//!
//! # Examples
//!
//! ```
//! use pathkit::path::{PathResolver, ResolverOptions, SeparatorStyle};
//!
//! let options = ResolverOptions::default().with_separator(SeparatorStyle::Unix);
//! let resolver = PathResolver::with_working_dir(options, "/home/user/project");
//!
//! # #[cfg(unix)] {
//! assert_eq!(resolver.path("file.txt"), "/home/user/project/file.txt");
//! assert_eq!(resolver.base_name("file.txt"), "file");
//! assert_eq!(resolver.parent_name("file.txt"), "project");
//! assert_eq!(resolver.normalize("../other/./x.rs"), "/home/user/other/x.rs");
//! # }
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod resolver;
pub mod segments;
pub mod separator;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::PathResolver;
pub use separator::SeparatorStyle;
pub use types::{Operation, PathReport, ResolverOptions, DEFAULT_NOT_FOUND};
