//! CLI error type.

use std::path::PathBuf;

use fan_core::CalcError;
use thiserror::Error;

/// Everything that can stop a `fandesign` command
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine-side failure (history file, lock, key parsing)
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Cannot read config {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Cannot read input file {path}: {reason}")]
    InputFile { path: PathBuf, reason: String },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Stable code printed alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Calc(e) => e.error_code(),
            CliError::Config { .. } => "CONFIG_ERROR",
            CliError::InputFile { .. } => "INPUT_FILE_ERROR",
            CliError::Json(_) => "JSON_ERROR",
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let missing = CliError::from(CalcError::record_not_found("abc"));
        assert_eq!(missing.code(), "RECORD_NOT_FOUND");

        let locked = CliError::from(CalcError::file_locked("history.json", "someone@host", "2026-01-01T00:00:00Z"));
        assert_eq!(locked.code(), "FILE_LOCKED");

        let config = CliError::Config {
            path: PathBuf::from("fandesign.toml"),
            reason: "bad".to_string(),
        };
        assert_eq!(config.code(), "CONFIG_ERROR");
    }
}
