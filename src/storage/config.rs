//! Configuration handling for tasklist
//!
//! Configuration is read from `--config <path>` when given, otherwise from
//! `~/.config/tasklist/config.toml` (or the platform equivalent). A missing
//! file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default retention window for the active-task view, in days
pub const DEFAULT_TTL_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Days a task stays in the active view after creation
    pub ttl_days: i64,

    /// Colourize terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_days: DEFAULT_TTL_DAYS,
            color: true,
        }
    }
}

impl Config {
    /// Returns the default config file location
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tasklist", "tasklist")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the configuration from an explicit path or the default location
    ///
    /// Returns the config and the file it came from, if any.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok((Self::default(), None)),
            },
        };

        if !path.is_file() {
            return Ok((Self::default(), None));
        }

        let config = Self::from_file(&path)?;
        Ok((config, Some(path)))
    }

    /// Parses a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
