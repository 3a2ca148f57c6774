//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigValidator};
///
/// let config = Config { not_found: Some("two\nlines".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// The sentinel is printed as one value per line, so it may not contain a
    /// line break.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(sentinel) = &config.not_found {
            if sentinel.contains(['\n', '\r']) {
                return Err(Error::Validation {
                    field: "not_found".into(),
                    message: "Sentinel must not contain line breaks".into(),
                });
            }
        }

        Ok(())
    }
}
