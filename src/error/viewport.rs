//! Viewport (list widget) error types.
//!
//! Every scroll operation is best-effort; these errors are logged and
//! swallowed by the callers that drive the list.

use std::fmt;

/// Failures reported by a [`crate::traits::ListViewport`] implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// The list has not been laid out yet (no dimensions).
    NotLaidOut,

    /// The list holds no rows; nothing to scroll to.
    EmptyList,

    /// The requested offset is not a finite number.
    InvalidOffset { offset: f64 },

    /// The widget is gone (screen closed, test double detached).
    Detached,
}

impl ViewportError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ViewportError::NotLaidOut => "The list is still being laid out.".to_string(),
            ViewportError::EmptyList => "The list is empty.".to_string(),
            ViewportError::InvalidOffset { .. } => {
                "Could not scroll to the requested position.".to_string()
            }
            ViewportError::Detached => "The list is no longer visible.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewportError::NotLaidOut => "VIEWPORT_NOT_LAID_OUT",
            ViewportError::EmptyList => "VIEWPORT_EMPTY_LIST",
            ViewportError::InvalidOffset { .. } => "VIEWPORT_INVALID_OFFSET",
            ViewportError::Detached => "VIEWPORT_DETACHED",
        }
    }
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::NotLaidOut => write!(f, "Viewport has no layout yet"),
            ViewportError::EmptyList => write!(f, "Viewport list is empty"),
            ViewportError::InvalidOffset { offset } => {
                write!(f, "Invalid scroll offset: {}", offset)
            }
            ViewportError::Detached => write!(f, "Viewport detached"),
        }
    }
}

impl std::error::Error for ViewportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_error_display() {
        assert_eq!(ViewportError::EmptyList.to_string(), "Viewport list is empty");
        assert!(ViewportError::InvalidOffset { offset: f64::NAN }
            .to_string()
            .contains("NaN"));
    }

    #[test]
    fn test_viewport_error_codes_unique() {
        let codes = [
            ViewportError::NotLaidOut.error_code(),
            ViewportError::EmptyList.error_code(),
            ViewportError::InvalidOffset { offset: 0.0 }.error_code(),
            ViewportError::Detached.error_code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }
}
