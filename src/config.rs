//! User configuration for vault scanning.

use crate::error::{QueryError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for notequery.
///
/// Loaded from `~/.config/notequery/config.toml` when present, otherwise
/// defaulted. Only affects which files vault scanning considers; query
/// parsing and matching take no configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Note file extensions to scan, without the leading dot.
    pub extensions: Vec<String>,

    /// Directory or file names to skip anywhere under the vault root.
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            ignore: vec![".obsidian".to_string(), ".trash".to_string()],
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.extensions.is_empty() {
            return Err(QueryError::ConfigError(
                "`extensions` must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notequery").join("config.toml"))
    }

    /// Whether a path relative to the vault root should be skipped.
    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        relative_path.components().any(|component| {
            let name = component.as_os_str().to_string_lossy();
            self.ignore.iter().any(|ignored| ignored.as_str() == name)
        })
    }
}
