//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { dot_enabled: Some(true), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.dot_enabled, Some(true));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project discovery from `dir` instead of the process working
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Load `path` on top of the discovered files.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.explicit_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Do not read any configuration file, including one set with
    /// [`with_file`](Self::with_file).
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHKIT_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer a programmatic override on top of everything else.
    ///
    /// Later calls take priority over earlier ones.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable holds an invalid value, or the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.explicit_file.as_deref())?;
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for over in &self.overrides {
            ConfigMerger::merge_into(&mut config, over);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::PROJECT_CONFIG_FILE;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_isolated_build_is_default() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_apply_in_call_order() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                not_found: Some("first".into()),
                check_existence: Some(true),
                ..Default::default()
            })
            .with_config(Config {
                not_found: Some("second".into()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.not_found.as_deref(), Some("second"));
        assert_eq!(config.check_existence, Some(true));
    }

    #[test]
    fn test_override_beats_project_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "not_found: project\ndot_enabled: true\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .skip_env()
            .with_config(Config {
                not_found: Some("override".into()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.not_found.as_deref(), Some("override"));
        assert_eq!(config.dot_enabled, Some(true));
    }

    #[test]
    fn test_skip_files_ignores_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yaml");

        let config = ConfigBuilder::new()
            .with_file(&missing)
            .skip_files()
            .skip_env()
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                not_found: Some("line\nbreak".into()),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
