//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SALES_DATA_PATH` - JSON data file (default: `sales-data.json`)
//! - `SALES_LOG_JSON` - Emit JSON log lines instead of text (default: false)
//! - `RUST_LOG` - Log filter (default: `sales_tracker_cli=info,sales_tracker_core=info`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_PATH: &str = "sales-data.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Where users and sales are persisted
    pub data_path: PathBuf,
    /// Structured JSON logs on stderr
    pub json_logs: bool,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable has an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable has an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = match lookup("SALES_DATA_PATH") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "SALES_DATA_PATH".to_owned(),
                    "path cannot be empty".to_owned(),
                ));
            }
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_DATA_PATH),
        };

        let json_logs = lookup("SALES_LOG_JSON")
            .map(|v| parse_bool("SALES_LOG_JSON", &v))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            data_path,
            json_logs,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            format!("expected true or false, got {other:?}"),
        )),
    }
}
