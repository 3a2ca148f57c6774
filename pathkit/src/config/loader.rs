//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading pathkit configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of a project configuration.
pub const PROJECT_CONFIG_FILE: &str = "pathkit.yaml";

/// Directory under the home directory holding the user configuration.
pub const USER_CONFIG_DIR: &str = ".pathkit";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.pathkit/config.yaml` (precedence 1)
    /// 2. The nearest `pathkit.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `explicit`, if given (precedence 3)
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed, or if `explicit` does not exist.
    pub fn load_all(working_dir: &Path, explicit: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config()? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        if let Some(path) = explicit {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 3,
                config: Self::load_file(path)?,
            });
        }

        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if there is one.
    ///
    /// A missing home directory means there is no user configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_user_config() -> Result<Option<ConfigSource>> {
        let Some(config_path) = Self::user_config_path() else {
            return Ok(None);
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest project configuration by walking up directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                log::debug!("found project configuration at {}", candidate.display());
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Path of the user configuration file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join("config.yaml"))
    }
}
