//! Error category classification for unified error handling.
//!
//! This module provides a high-level categorization of errors to enable
//! consistent handling, recovery strategies, and user messaging.

use std::fmt;

/// High-level categorization of errors for handling decisions.
///
/// Categories enable consistent:
/// - Retry policies (transient vs. permanent errors)
/// - User messaging (technical vs. user-actionable)
/// - Recovery strategies (automatic vs. manual intervention)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed wallet data (snapshot contents, section shapes).
    /// Not retryable until the data source is fixed.
    Data,

    /// The list widget was not ready (not laid out, empty, unmounted).
    /// Transient: the next render pass usually succeeds.
    Viewport,

    /// Client-side errors (bugs, invalid state, assertion failures).
    /// Not retryable - indicates a programming error.
    Client,

    /// User action required (invalid input, missing arguments).
    /// Not retryable until user takes corrective action.
    User,

    /// System/OS errors (filesystem, permissions, resources).
    /// May or may not be retryable depending on specific error.
    System,

    /// Configuration errors (missing settings, invalid config files).
    /// Not retryable until configuration is corrected.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient
    /// and the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Viewport)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Data => "data",
            ErrorCategory::Viewport => "viewport",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Data => "Check the portfolio snapshot file and reload",
            ErrorCategory::Viewport => "The list will retry on the next redraw",
            ErrorCategory::Client => {
                "This may be a bug. Please report this issue if it persists"
            }
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check your configuration settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
