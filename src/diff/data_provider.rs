use crate::layout::FlatList;
use crate::models::{Asset, ListRow, SectionItem, SectionKind};

use super::row_change::has_row_changed;
use super::ChangeSet;

/// Identity of a coin row: balance, native price and unique id.
fn coin_id(asset: &Asset) -> String {
    let balance = asset.balance.amount.to_string();
    [balance.as_str(), asset.native_price_display(), asset.unique_id.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}

/// Stable identity of a flattened row, used to key rendered rows.
pub fn stable_id(row: &ListRow, section_kinds: &[SectionKind]) -> String {
    match row {
        ListRow::Header { section, .. } => match section_kinds.get(*section) {
            Some(kind) => format!("header_{}", kind.name()),
            None => format!("header_{}", section),
        },
        ListRow::Item { item, .. } => match item {
            SectionItem::Coin(asset) => coin_id(asset),
            SectionItem::CoinDivider(_) => "coin_divider".to_string(),
            SectionItem::SmallBalances(_) => "small_balances".to_string(),
            SectionItem::Savings(_) => "savings".to_string(),
            SectionItem::Pools(_) => "pools".to_string(),
            SectionItem::Family(family) => family.unique_id.clone(),
        },
        ListRow::Footer => "footer".to_string(),
    }
}

/// Rows of the current pass and their stable ids.
#[derive(Debug, Clone, Default)]
pub struct DataProvider {
    rows: Vec<ListRow>,
    stable_ids: Vec<String>,
}

impl DataProvider {
    pub fn new(flat: &FlatList) -> Self {
        Self {
            rows: flat.rows.clone(),
            stable_ids: flat
                .rows
                .iter()
                .map(|row| stable_id(row, &flat.section_kinds))
                .collect(),
        }
    }

    /// Build the provider for the next pass and report what changed.
    ///
    /// Rows are compared by index; rows past the shorter list count as
    /// changed.
    pub fn clone_with_rows(&self, flat: &FlatList) -> (DataProvider, ChangeSet) {
        let next = DataProvider::new(flat);
        let mut changes = ChangeSet {
            row_count_changed: self.rows.len() != next.rows.len(),
            ..Default::default()
        };

        for (index, row) in next.rows.iter().enumerate() {
            let changed = match self.rows.get(index) {
                Some(prev) => has_row_changed(prev, row, &mut changes),
                None => true,
            };
            if changed {
                changes.changed_rows.push(index);
            }
        }
        (next, changes)
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ListRow> {
        self.rows.get(index)
    }

    pub fn stable_id(&self, index: usize) -> Option<&str> {
        self.stable_ids.get(index).map(String::as_str)
    }

    pub fn position_of(&self, stable_id: &str) -> Option<usize> {
        self.stable_ids.iter().position(|id| id == stable_id)
    }
}
