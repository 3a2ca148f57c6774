//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHKIT_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::SeparatorStyle;
use std::env;

/// Overrides `check_existence`.
pub const CHECK_EXISTENCE_ENV: &str = "PATHKIT_CHECK_EXISTENCE";
/// Overrides `dot_enabled`.
pub const DOT_ENABLED_ENV: &str = "PATHKIT_DOT_ENABLED";
/// Overrides `not_found`.
pub const NOT_FOUND_ENV: &str = "PATHKIT_NOT_FOUND";
/// Overrides `separator`.
pub const SEPARATOR_ENV: &str = "PATHKIT_SEPARATOR";
/// Overrides `expand_tilde`.
pub const EXPAND_TILDE_ENV: &str = "PATHKIT_EXPAND_TILDE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Every variable this type reads.
    pub const VARIABLES: [&'static str; 5] = [
        CHECK_EXISTENCE_ENV,
        DOT_ENABLED_ENV,
        NOT_FOUND_ENV,
        SEPARATOR_ENV,
        EXPAND_TILDE_ENV,
    ];

    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unrecognized boolean or separator name).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(CHECK_EXISTENCE_ENV) {
            config.check_existence = Some(Self::parse_bool(CHECK_EXISTENCE_ENV, &val)?);
        }

        if let Ok(val) = env::var(DOT_ENABLED_ENV) {
            config.dot_enabled = Some(Self::parse_bool(DOT_ENABLED_ENV, &val)?);
        }

        if let Ok(val) = env::var(NOT_FOUND_ENV) {
            config.not_found = Some(val);
        }

        if let Ok(val) = env::var(SEPARATOR_ENV) {
            let style = val
                .parse::<SeparatorStyle>()
                .map_err(|message| Error::Validation {
                    field: SEPARATOR_ENV.into(),
                    message,
                })?;
            config.separator = Some(style);
        }

        if let Ok(val) = env::var(EXPAND_TILDE_ENV) {
            config.expand_tilde = Some(Self::parse_bool(EXPAND_TILDE_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from an environment variable.
    ///
    /// Accepts: true/false, 1/0, yes/no (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `var_name` for anything else.
    pub fn parse_bool(var_name: &str, value: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(Error::Validation {
                field: var_name.into(),
                message: format!("Invalid boolean value '{value}' (expected true/false, 1/0, yes/no)"),
            }),
        }
    }
}
