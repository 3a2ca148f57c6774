//! Configuration system for pathkit.
//!
//! This module provides layered resolver configuration with support for:
//! - YAML configuration files (user config and project config)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHKIT_*`)
//! 3. An explicit file (via `ConfigBuilder::with_file`)
//! 4. Project config (nearest `pathkit.yaml`)
//! 5. User config (`~/.pathkit/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use pathkit::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("sentinel: {}", config.to_options().not_found);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathkit::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     check_existence: Some(true),
//!     not_found: Some("Invalid path detected".to_string()),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.check_existence, Some(true));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
