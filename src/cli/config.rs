//! Service configuration
//!
//! Loaded from an optional JSON file. Every field has a default, so an
//! absent file or an empty object yields a runnable configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::rest_api::DEFAULT_LIMIT;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listener settings
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// SQLite database file, or ":memory:" (default "./glossary.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Seed an empty database at startup (default true)
    #[serde(default = "default_true")]
    pub seed_on_startup: bool,

    /// Page size when `limit` is omitted (default 100)
    #[serde(default = "default_list_limit")]
    pub default_list_limit: u64,

    /// Fallback log filter when RUST_LOG is unset (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines (default false)
    #[serde(default)]
    pub log_json: bool,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./glossary.db")
}
fn default_true() -> bool {
    true
}
fn default_list_limit() -> u64 {
    DEFAULT_LIMIT
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            database_path: default_database_path(),
            seed_on_startup: default_true(),
            default_list_limit: default_list_limit(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.database_path.as_os_str().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        if self.default_list_limit == 0 {
            return Err(CliError::config_error("default_list_limit must be > 0"));
        }

        Ok(())
    }
}
