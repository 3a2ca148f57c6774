//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigMerger};
///
/// let low = Config { not_found: Some("low".to_string()), ..Default::default() };
/// let high = Config { not_found: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.not_found, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!("merging configuration from {}", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.check_existence.is_some() {
            target.check_existence = source.check_existence;
        }

        if source.dot_enabled.is_some() {
            target.dot_enabled = source.dot_enabled;
        }

        if source.not_found.is_some() {
            target.not_found.clone_from(&source.not_found);
        }

        if source.separator.is_some() {
            target.separator = source.separator;
        }

        if source.expand_tilde.is_some() {
            target.expand_tilde = source.expand_tilde;
        }
    }
}
