//! Configuration for the `byteblog` command-line tool.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `BYTEBLOG_CONFIG` environment variable
//! 3. Platform default: `<config dir>/byteblog/config.toml`
//! 4. Built-in defaults
//!
//! A missing file falls back to defaults; a malformed one is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::page::DEFAULT_SITE_NAME;
use crate::util::read_text;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "BYTEBLOG_CONFIG";

/// Settings for rendered pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Appended to post titles in `<title>`.
    pub site_name: String,

    /// Stylesheet href linked from standalone documents.
    pub stylesheet: Option<String>,

    /// Shown instead of an empty post listing.
    pub empty_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            stylesheet: None,
            empty_message: "No posts yet. Be the first to write!".to_string(),
        }
    }
}

impl Config {
    /// Load configuration following the priority order above.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(config_path) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = read_text(path)?;
        let config = Self::from_toml(&text)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Resolve the config file path from explicit flag, env var, or platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the platform default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("byteblog").join("config.toml"))
    }
}
