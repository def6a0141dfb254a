//! Row change detection between render passes.
//!
//! [`DataProvider`] keeps the rows of the previous pass and compares them
//! with the next ones through [`has_row_changed`]. The outcome of a pass is
//! a [`ChangeSet`] that is handed to the layout cache explicitly.

mod data_provider;
mod row_change;

pub use data_provider::{stable_id, DataProvider};
pub use row_change::{has_row_changed, RelevantAssetInfo};

/// What changed between two data passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Flattened indices whose data changed.
    pub changed_rows: Vec<usize>,
    /// Assets inside the small-balances container changed.
    pub small_balances_changed: bool,
    /// Assets inside the savings container changed.
    pub savings_changed: bool,
    pub row_count_changed: bool,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changed_rows.is_empty()
            && !self.small_balances_changed
            && !self.savings_changed
            && !self.row_count_changed
    }

    pub fn contains(&self, index: usize) -> bool {
        self.changed_rows.contains(&index)
    }
}
