//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and resolver construction.

use crate::error::CliError;
use pathkit::{Config, ConfigBuilder, PathResolver, SeparatorStyle};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Extra configuration file.
    pub config: Option<PathBuf>,

    /// Override for `check_existence`.
    pub check_existence: Option<bool>,

    /// Override for `dot_enabled`.
    pub dot_enabled: Option<bool>,

    /// Override for `not_found`.
    pub not_found: Option<String>,

    /// Override for `separator`.
    pub separator: Option<SeparatorStyle>,

    /// Override for `expand_tilde`.
    pub expand_tilde: Option<bool>,
}

impl GlobalOptions {
    /// The flag overrides as a configuration layer.
    pub fn overrides(&self) -> Config {
        Config {
            check_existence: self.check_existence,
            dot_enabled: self.dot_enabled,
            not_found: self.not_found.clone(),
            separator: self.separator,
            expand_tilde: self.expand_tilde,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_file(path);
    }

    builder
        .with_config(global.overrides())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a resolver from the layered configuration.
pub fn build_resolver(global: &GlobalOptions) -> Result<PathResolver, CliError> {
    let config = load_configuration(global)?;
    log::debug!("resolver options: {:?}", config.to_options());
    PathResolver::new(config.to_options()).map_err(CliError::from)
}
