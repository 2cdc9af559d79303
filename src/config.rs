//! Configuration for roster front ends
//!
//! Settings come from an optional TOML file; anything missing falls back to a
//! default. Command-line flags are applied on top by the caller.

use crate::roster::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// Error loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, String),
    #[error("Invalid config file {0}: {1}")]
    ParseError(PathBuf, String),
}

/// Roster configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Slot key the roster is stored under
    pub storage_key: String,
    /// Directory for the file system backend
    pub data_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: PathBuf::from(".roster"),
            log_filter: "warn".to_string(),
        }
    }
}

impl RosterConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(origin.to_path_buf(), e.to_string()))
    }

    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.clone(), e.to_string()))?;
        let config = Self::from_toml_str(&content, &path)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config =
            RosterConfig::from_toml_str("storage_key = \"class_7b\"", Path::new("t.toml")).unwrap();
        assert_eq!(config.storage_key, "class_7b");
        assert_eq!(config.data_dir, PathBuf::from(".roster"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = RosterConfig::from_toml_str("colour = \"red\"", Path::new("t.toml"));
        assert!(matches!(result, Err(ConfigError::ParseError(_, _))));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = RosterConfig::load(Some(Path::new("/nonexistent/roster.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError(_, _))));
    }
}
