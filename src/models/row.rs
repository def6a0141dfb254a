use super::section::{SectionHeader, SectionItem};

/// A row of the flattened list.
///
/// Flattening emits, per section, one `Header` followed by its `Item`s, then
/// a single trailing `Footer` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRow {
    Header {
        section: usize,
        header: SectionHeader,
    },
    Item {
        section: usize,
        item_index: usize,
        item: SectionItem,
    },
    Footer,
}

impl ListRow {
    pub fn section(&self) -> Option<usize> {
        match self {
            ListRow::Header { section, .. } | ListRow::Item { section, .. } => Some(*section),
            ListRow::Footer => None,
        }
    }

    pub fn item(&self) -> Option<&SectionItem> {
        match self {
            ListRow::Item { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, ListRow::Header { .. })
    }
}
