//! Separator conventions used when rendering normalized paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The path separator convention applied by normalization.
///
/// The host convention is a capability of the platform, derived from
/// [`std::path::MAIN_SEPARATOR`], not from the operating system name. It can
/// be overridden per resolver for deterministic output.
///
/// # Examples
///
/// ```
/// use pathkit::SeparatorStyle;
///
/// assert_eq!(SeparatorStyle::Unix.separator(), '/');
/// assert_eq!(SeparatorStyle::Windows.separator(), '\\');
/// assert_eq!("windows".parse::<SeparatorStyle>().unwrap(), SeparatorStyle::Windows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorStyle {
    /// Forward slashes, a single leading `/` as the root.
    Unix,
    /// Backslashes, with drive-letter and UNC prefixes.
    Windows,
}

impl SeparatorStyle {
    /// The convention of the platform this code runs on.
    #[must_use]
    pub fn host() -> Self {
        if std::path::MAIN_SEPARATOR == '\\' {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// The separator emitted by this convention.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Unix => '/',
            Self::Windows => '\\',
        }
    }

    /// The separator this convention rewrites into its own.
    #[must_use]
    pub const fn foreign_separator(self) -> char {
        match self {
            Self::Unix => '\\',
            Self::Windows => '/',
        }
    }
}

impl fmt::Display for SeparatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for SeparatorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unix" | "posix" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!(
                "unknown separator style '{s}' (expected 'unix' or 'windows')"
            )),
        }
    }
}
