//! `fandesign.toml` settings.
//!
//! ```toml
//! history_file = "fandesign_history.json"
//! output_dir = "fan_scripts"
//! record_history = true
//! user_id = "designer@company.com"
//! ```
//!
//! Every key is optional. A missing default config file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "fandesign.toml";

/// CLI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// History log location
    pub history_file: PathBuf,
    /// Where `design --scripts` writes when no directory is given
    pub output_dir: PathBuf,
    /// Record every `design` run in the history log
    pub record_history: bool,
    /// Name written into history lock files
    pub user_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            history_file: PathBuf::from("fandesign_history.json"),
            output_dir: PathBuf::from("fan_scripts"),
            record_history: true,
            user_id: default_user_id(),
        }
    }
}

fn default_user_id() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "fandesign".to_string())
}

impl Config {
    /// Parse config text
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load the config.
    ///
    /// An explicit path must exist; the default file may be absent.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Config::default());
                }
                path
            }
        };

        let text = fs::read_to_string(&path).map_err(|e| CliError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let config = Config::from_toml(&text).map_err(|e| CliError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.record_history);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            history_file = "/tmp/fans.json"
            record_history = false
            "#,
        )
        .unwrap();
        assert_eq!(config.history_file, PathBuf::from("/tmp/fans.json"));
        assert!(!config.record_history);
        assert_eq!(config.output_dir, PathBuf::from("fan_scripts"));
    }

    #[test]
    fn test_bad_config_is_error() {
        assert!(Config::from_toml("record_history = \"sometimes\"").is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let path = std::env::temp_dir().join("fandesign_no_such_config.toml");
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Config { .. })));
    }
}
