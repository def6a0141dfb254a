//! Configuration error types.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading list configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration directory could be determined for this platform.
    NoConfigDir,

    /// The configuration file could not be read.
    Io { path: PathBuf, source: std::io::Error },

    /// The configuration file is not valid JSON for [`crate::startup::ListConfig`].
    Invalid { path: PathBuf, message: String },

    /// An environment variable held a value that could not be parsed.
    InvalidEnv { var: String, value: String },
}

impl ConfigError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::NoConfigDir => {
                "Could not determine the configuration directory.".to_string()
            }
            ConfigError::Io { path, .. } => {
                format!("Could not read configuration file {}.", path.display())
            }
            ConfigError::Invalid { path, .. } => {
                format!("Configuration file {} is invalid.", path.display())
            }
            ConfigError::InvalidEnv { var, .. } => {
                format!("Environment variable {} has an invalid value.", var)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::NoConfigDir => "CONFIG_NO_DIR",
            ConfigError::Io { .. } => "CONFIG_IO",
            ConfigError::Invalid { .. } => "CONFIG_INVALID",
            ConfigError::InvalidEnv { .. } => "CONFIG_INVALID_ENV",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No configuration directory available"),
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Invalid { path, message } => {
                write!(f, "Invalid config {}: {}", path.display(), message)
            }
            ConfigError::InvalidEnv { var, value } => {
                write!(f, "Invalid value for {}: {:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
