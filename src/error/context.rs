//! Error context for enriched error information.
//!
//! This module provides context structures that can be attached to errors
//! to provide additional debugging and recovery information.

use chrono::{DateTime, Utc};

/// Context information attached to errors for debugging.
///
/// ErrorContext records when and where an error occurred, plus the list
/// position involved when the failure relates to a specific row.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// Flattened row index if the error concerns a specific list row.
    pub row_index: Option<usize>,

    /// Section name (balances, pools, collectibles) if relevant.
    pub section: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,

    /// Optional component/module where the error originated.
    pub component: Option<String>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            row_index: None,
            section: None,
            timestamp: Utc::now(),
            component: None,
        }
    }

    /// Set the row index for this context.
    pub fn with_row_index(mut self, index: usize) -> Self {
        self.row_index = Some(index);
        self
    }

    /// Set the section name for this context.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Set the component for this context.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(index) = self.row_index {
            parts.push(format!("row={}", index));
        }

        if let Some(ref section) = self.section {
            parts.push(format!("section={}", section));
        }

        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref section) = self.section {
            write!(f, " section={}", section)?;
        }

        if let Some(index) = self.row_index {
            write!(f, " row={}", index)?;
        }

        Ok(())
    }
}
