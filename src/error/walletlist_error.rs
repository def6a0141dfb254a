//! Unified error type for walletlist.
//!
//! This module defines the main `WalletListError` enum that unifies all
//! error types in the crate, providing consistent categorization and user
//! messaging.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::layout::LayoutError;
use super::snapshot::SnapshotError;
use super::viewport::ViewportError;

/// Unified error type for walletlist.
///
/// `WalletListError` consolidates all domain-specific error types into a
/// single enum, enabling:
/// - Consistent error handling across the application
/// - Uniform categorization
/// - User-friendly error messages
/// - Optional context attachment for debugging
#[derive(Debug)]
pub enum WalletListError {
    /// Malformed section data.
    Layout(LayoutError),

    /// List widget failures (scroll, measure).
    Viewport(ViewportError),

    /// Portfolio snapshot loading errors.
    Snapshot(SnapshotError),

    /// Configuration errors.
    Config(ConfigError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<WalletListError>,
        context: ErrorContext,
    },
}

impl WalletListError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            WalletListError::Layout(LayoutError::IndexOutOfRange { .. }) => ErrorCategory::Client,
            WalletListError::Layout(_) => ErrorCategory::Data,
            WalletListError::Viewport(_) => ErrorCategory::Viewport,
            WalletListError::Snapshot(err) => match err {
                SnapshotError::NotFound { .. } => ErrorCategory::User,
                SnapshotError::Io { .. } => ErrorCategory::System,
                SnapshotError::Parse { .. } | SnapshotError::UnknownCurrency { .. } => {
                    ErrorCategory::Data
                }
            },
            WalletListError::Config(ConfigError::Io { .. }) => ErrorCategory::System,
            WalletListError::Config(_) => ErrorCategory::Configuration,
            WalletListError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            WalletListError::Layout(err) => err.user_message(),
            WalletListError::Viewport(err) => err.user_message(),
            WalletListError::Snapshot(err) => err.user_message(),
            WalletListError::Config(err) => err.user_message(),
            WalletListError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            WalletListError::Layout(err) => err.error_code(),
            WalletListError::Viewport(err) => err.error_code(),
            WalletListError::Snapshot(err) => err.error_code(),
            WalletListError::Config(err) => err.error_code(),
            WalletListError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        WalletListError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            WalletListError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &WalletListError {
        match self {
            WalletListError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// One-line notice for the status bar: what failed and what to do.
    pub fn status_message(&self) -> String {
        format!("{} {}.", self.inner().user_message(), self.recovery_hint())
    }

    /// Context fields for log lines, empty when no context is attached.
    pub fn context_log_string(&self) -> String {
        self.context().map(|ctx| ctx.to_log_string()).unwrap_or_default()
    }
}

impl fmt::Display for WalletListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletListError::Layout(err) => write!(f, "{}", err),
            WalletListError::Viewport(err) => write!(f, "{}", err),
            WalletListError::Snapshot(err) => write!(f, "{}", err),
            WalletListError::Config(err) => write!(f, "{}", err),
            WalletListError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for WalletListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WalletListError::Layout(err) => Some(err),
            WalletListError::Viewport(err) => Some(err),
            WalletListError::Snapshot(err) => Some(err),
            WalletListError::Config(err) => Some(err),
            WalletListError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<LayoutError> for WalletListError {
    fn from(err: LayoutError) -> Self {
        WalletListError::Layout(err)
    }
}

impl From<ViewportError> for WalletListError {
    fn from(err: ViewportError) -> Self {
        WalletListError::Viewport(err)
    }
}

impl From<SnapshotError> for WalletListError {
    fn from(err: SnapshotError) -> Self {
        WalletListError::Snapshot(err)
    }
}

impl From<ConfigError> for WalletListError {
    fn from(err: ConfigError) -> Self {
        WalletListError::Config(err)
    }
}

// ============================================================================
// From implementations for external error types
// ============================================================================

impl From<std::io::Error> for WalletListError {
    fn from(err: std::io::Error) -> Self {
        WalletListError::Snapshot(SnapshotError::Io {
            path: None,
            source: err,
        })
    }
}

impl From<serde_json::Error> for WalletListError {
    fn from(err: serde_json::Error) -> Self {
        WalletListError::Snapshot(err.into())
    }
}
