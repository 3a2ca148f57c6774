//! Configuration schema definitions.
//!
//! This module defines the configuration file structure for pathkit. Every
//! field is optional so that partial files can be layered on top of each
//! other; [`Config::to_options`] fills the gaps with built-in defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::{ResolverOptions, SeparatorStyle};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathkit::config::Config;
///
/// let config: Config = serde_yaml::from_str("
/// check_existence: true
/// not_found: Invalid path detected
/// ").unwrap();
///
/// let options = config.to_options();
/// assert!(options.check_existence);
/// assert!(!options.dot_enabled);
/// assert_eq!(options.not_found, "Invalid path detected");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Require inputs to exist before deriving anything from them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_existence: Option<bool>,

    /// Dot-path handling for a literal `.` input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_enabled: Option<bool>,

    /// Sentinel returned when a value cannot be derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found: Option<String>,

    /// Separator convention used by normalization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<SeparatorStyle>,

    /// Expand a leading `~` to the home directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_tilde: Option<bool>,
}

impl Config {
    /// Resolve into concrete resolver options, defaulting unset fields.
    #[must_use]
    pub fn to_options(&self) -> ResolverOptions {
        let defaults = ResolverOptions::default();
        ResolverOptions {
            check_existence: self.check_existence.unwrap_or(defaults.check_existence),
            dot_enabled: self.dot_enabled.unwrap_or(defaults.dot_enabled),
            not_found: self.not_found.clone().unwrap_or(defaults.not_found),
            separator: self.separator.or(defaults.separator),
            expand_tilde: self.expand_tilde.unwrap_or(defaults.expand_tilde),
        }
    }

    /// The fully resolved configuration, every field set.
    #[must_use]
    pub fn effective(&self) -> Self {
        let options = self.to_options();
        let separator = options.separator_style();
        Self {
            check_existence: Some(options.check_existence),
            dot_enabled: Some(options.dot_enabled),
            not_found: Some(options.not_found),
            separator: Some(separator),
            expand_tilde: Some(options.expand_tilde),
        }
    }

    /// Render as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl From<&ResolverOptions> for Config {
    fn from(options: &ResolverOptions) -> Self {
        Self {
            check_existence: Some(options.check_existence),
            dot_enabled: Some(options.dot_enabled),
            not_found: Some(options.not_found.clone()),
            separator: options.separator,
            expand_tilde: Some(options.expand_tilde),
        }
    }
}
