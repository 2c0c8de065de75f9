//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use std::io;

use thiserror::Error;

use crate::storage::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable or invalid
    #[error("GLOSSARY_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// I/O error (stdout, socket)
    #[error("GLOSSARY_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// Database could not be opened or queried
    #[error("GLOSSARY_CLI_STORAGE_ERROR: {0}")]
    Storage(#[from] StoreError),

    /// Server failed to start or crashed
    #[error("GLOSSARY_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::BootFailed(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code() {
        let err = CliError::config_error("bad port");
        assert_eq!(err.to_string(), "GLOSSARY_CLI_CONFIG_ERROR: bad port");
        assert!(CliError::boot_failed("x")
            .to_string()
            .starts_with("GLOSSARY_CLI_BOOT_FAILED"));
    }
}
