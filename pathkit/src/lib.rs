#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! A library for deriving facts about filesystem paths.
//!
//! This library turns path strings into absolute paths, file names, base
//! names, extensions, parent names, canonical parent paths and normalized
//! forms, optionally gated on the input existing and falling back to a
//! configurable sentinel string instead of failing.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: The derivation operations
//! - [`ResolverOptions`] and [`SeparatorStyle`]: Resolver behavior
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration files
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathkit::{PathResolver, ResolverOptions};
//!
//! let options = ResolverOptions::default().with_not_found("Invalid path detected");
//! let resolver = PathResolver::with_working_dir(options, "/srv/app");
//!
//! # #[cfg(unix)] {
//! assert_eq!(resolver.extension("archive.tar.gz"), "gz");
//! assert_eq!(resolver.base_name("archive.tar.gz"), "archive.tar");
//! assert_eq!(resolver.remove_extension("archive.tar.gz"), "/srv/app/archive.tar");
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Operation, PathReport, PathResolver, ResolverOptions, SeparatorStyle};
