//! Layout-related error types.
//!
//! The classifier itself never fails: out-of-range and malformed rows are
//! sized as `Unknown`. These errors come from the strict validation pass
//! that callers can run over freshly built sections.

use std::fmt;

/// Errors describing malformed section data.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A row index outside the flattened list was requested.
    IndexOutOfRange { index: usize, len: usize },

    /// A small-balances container was not directly preceded by a divider.
    OrphanSmallBalances { section: String, item_index: usize },

    /// A row kind appeared in a section that cannot hold it.
    MisplacedItem {
        section: String,
        item_index: usize,
        item_kind: &'static str,
    },

    /// More than one container of a kind that must be unique in a section.
    DuplicateContainer {
        section: String,
        item_kind: &'static str,
    },

    /// The same section kind was supplied twice.
    DuplicateSection { section: String },
}

impl LayoutError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            LayoutError::IndexOutOfRange { .. } => {
                "The list changed while it was being drawn.".to_string()
            }
            LayoutError::OrphanSmallBalances { .. } => {
                "Small balances could not be grouped under the divider.".to_string()
            }
            LayoutError::MisplacedItem { section, .. } => {
                format!("The {} section contains an unexpected row.", section)
            }
            LayoutError::DuplicateContainer { section, item_kind } => {
                format!("The {} section lists {} more than once.", section, item_kind)
            }
            LayoutError::DuplicateSection { section } => {
                format!("The {} section appears more than once.", section)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            LayoutError::IndexOutOfRange { .. } => "LAYOUT_INDEX_OUT_OF_RANGE",
            LayoutError::OrphanSmallBalances { .. } => "LAYOUT_ORPHAN_SMALL_BALANCES",
            LayoutError::MisplacedItem { .. } => "LAYOUT_MISPLACED_ITEM",
            LayoutError::DuplicateContainer { .. } => "LAYOUT_DUPLICATE_CONTAINER",
            LayoutError::DuplicateSection { .. } => "LAYOUT_DUPLICATE_SECTION",
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::IndexOutOfRange { index, len } => {
                write!(f, "Row index {} out of range (len {})", index, len)
            }
            LayoutError::OrphanSmallBalances { section, item_index } => write!(
                f,
                "Small balances container at {}[{}] is not preceded by a divider",
                section, item_index
            ),
            LayoutError::MisplacedItem {
                section,
                item_index,
                item_kind,
            } => write!(
                f,
                "{} row at {}[{}] does not belong in this section",
                item_kind, section, item_index
            ),
            LayoutError::DuplicateContainer { section, item_kind } => {
                write!(f, "Section {} has more than one {}", section, item_kind)
            }
            LayoutError::DuplicateSection { section } => {
                write!(f, "Section {} supplied twice", section)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::IndexOutOfRange { index: 9, len: 4 };
        assert_eq!(err.to_string(), "Row index 9 out of range (len 4)");

        let err = LayoutError::OrphanSmallBalances {
            section: "balances".to_string(),
            item_index: 3,
        };
        assert!(err.to_string().contains("balances[3]"));
    }

    #[test]
    fn test_layout_error_codes() {
        let err = LayoutError::DuplicateSection {
            section: "pools".to_string(),
        };
        assert_eq!(err.error_code(), "LAYOUT_DUPLICATE_SECTION");
        assert!(err.user_message().contains("pools"));
    }
}
