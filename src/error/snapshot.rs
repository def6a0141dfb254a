//! Portfolio snapshot loading errors.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while reading a portfolio snapshot document.
#[derive(Debug)]
pub enum SnapshotError {
    /// The snapshot file does not exist.
    NotFound { path: PathBuf },

    /// The snapshot file could not be read.
    Io {
        path: Option<PathBuf>,
        source: std::io::Error,
    },

    /// The document is not valid snapshot JSON.
    Parse { line: usize, column: usize, message: String },

    /// The document names a native currency this build does not know.
    UnknownCurrency { code: String },
}

impl SnapshotError {
    /// Build a snapshot error from an I/O failure on a known path.
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            SnapshotError::NotFound { path }
        } else {
            SnapshotError::Io {
                path: Some(path),
                source: err,
            }
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SnapshotError::NotFound { path } => {
                format!("No portfolio snapshot found at {}.", path.display())
            }
            SnapshotError::Io { .. } => "The portfolio snapshot could not be read.".to_string(),
            SnapshotError::Parse { line, .. } => {
                format!("The portfolio snapshot is malformed (line {}).", line)
            }
            SnapshotError::UnknownCurrency { code } => {
                format!("Unsupported native currency: {}.", code)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SnapshotError::NotFound { .. } => "SNAPSHOT_NOT_FOUND",
            SnapshotError::Io { .. } => "SNAPSHOT_IO",
            SnapshotError::Parse { .. } => "SNAPSHOT_PARSE",
            SnapshotError::UnknownCurrency { .. } => "SNAPSHOT_UNKNOWN_CURRENCY",
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::NotFound { path } => {
                write!(f, "Snapshot not found: {}", path.display())
            }
            SnapshotError::Io { path, source } => match path {
                Some(path) => write!(f, "Failed to read snapshot {}: {}", path.display(), source),
                None => write!(f, "Failed to read snapshot: {}", source),
            },
            SnapshotError::Parse {
                line,
                column,
                message,
            } => write!(f, "Invalid snapshot JSON at {}:{}: {}", line, column, message),
            SnapshotError::UnknownCurrency { code } => {
                write!(f, "Unknown native currency: {}", code)
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
