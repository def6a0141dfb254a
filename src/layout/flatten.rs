//! Flattening sections into list rows.

use crate::error::LayoutError;
use crate::models::{ListRow, Section, SectionItem, SectionKind};

use super::toggles::{family_key, ListToggles};

/// The flattened row list of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatList {
    pub rows: Vec<ListRow>,
    /// Flattened index of each section's header row.
    pub section_starts: Vec<usize>,
    /// Kind of each section, parallel to `section_starts`.
    pub section_kinds: Vec<SectionKind>,
    /// Number of items each section contributed (after family filtering).
    pub section_lens: Vec<usize>,
    pub sticky_indices: Vec<usize>,
    /// Flattened index of the coin divider, if any.
    pub coin_divider_index: Option<usize>,
    pub showcase: bool,
}

impl FlatList {
    /// Flatten `sections` for the given toggles.
    ///
    /// Every section contributes a header row followed by its items. In the
    /// collectibles section only header chunks and open families are kept.
    /// A single footer placeholder closes the list.
    pub fn build(sections: &[Section], toggles: &ListToggles, showcase: bool) -> Self {
        let mut flat = FlatList {
            showcase,
            ..Default::default()
        };

        for (section_idx, section) in sections.iter().enumerate() {
            let start = flat.rows.len();
            flat.section_starts.push(start);
            flat.section_kinds.push(section.kind);
            flat.sticky_indices.push(start);
            flat.rows.push(ListRow::Header {
                section: section_idx,
                header: section.header.clone(),
            });

            for (item_index, item) in section.items.iter().enumerate() {
                if section.kind == SectionKind::Collectibles {
                    if let SectionItem::Family(family) = item {
                        let key = family_key(&family.family_name, showcase);
                        if !family.is_header && !toggles.is_family_open(&key) {
                            continue;
                        }
                    }
                }
                if matches!(item, SectionItem::CoinDivider(_)) && flat.coin_divider_index.is_none() {
                    flat.coin_divider_index = Some(flat.rows.len());
                }
                flat.rows.push(ListRow::Item {
                    section: section_idx,
                    item_index,
                    item: item.clone(),
                });
            }
            flat.section_lens.push(flat.rows.len() - start - 1);
        }

        flat.rows.push(ListRow::Footer);
        flat
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checked row access.
    pub fn row(&self, index: usize) -> Result<&ListRow, LayoutError> {
        self.rows.get(index).ok_or(LayoutError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// Position of the first section of `kind` in the section list.
    pub fn section_index(&self, kind: SectionKind) -> Option<usize> {
        self.section_kinds.iter().position(|k| *k == kind)
    }

    /// Flattened index of the header row of the first section of `kind`.
    pub fn section_start(&self, kind: SectionKind) -> Option<usize> {
        self.section_index(kind).map(|i| self.section_starts[i])
    }

    /// Index of the section that owns flattened row `index`.
    pub fn section_of_row(&self, index: usize) -> Option<usize> {
        if index >= self.rows.len() {
            return None;
        }
        match self.section_starts.partition_point(|start| *start <= index) {
            0 => None,
            n => Some(n - 1),
        }
    }

    /// Flattened index of the header chunk of the family stored under `key`.
    pub fn find_family(&self, key: &str) -> Option<usize> {
        self.rows.iter().position(|row| match row.item() {
            Some(SectionItem::Family(family)) => {
                family.is_header && family_key(&family.family_name, self.showcase) == key
            }
            _ => false,
        })
    }

    /// Flattened indices of every chunk of the family stored under `key`.
    pub fn family_rows(&self, key: &str) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| match row.item() {
                Some(SectionItem::Family(family))
                    if family_key(&family.family_name, self.showcase) == key =>
                {
                    Some(i)
                }
                _ => None,
            })
            .collect()
    }

    /// The item immediately after `index` within the same section.
    pub fn next_in_section(&self, index: usize) -> Option<&SectionItem> {
        let section = self.rows.get(index)?.section()?;
        match self.rows.get(index + 1)? {
            ListRow::Item { section: s, item, .. } if *s == section => Some(item),
            _ => None,
        }
    }

    /// The item immediately before `index` within the same section.
    pub fn prev_in_section(&self, index: usize) -> Option<&SectionItem> {
        let section = self.rows.get(index)?.section()?;
        match self.rows.get(index.checked_sub(1)?)? {
            ListRow::Item { section: s, item, .. } if *s == section => Some(item),
            _ => None,
        }
    }
}
