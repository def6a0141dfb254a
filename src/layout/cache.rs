//! Incremental layout cache.
//!
//! Holds the layout of every flattened row plus cumulative offsets so the
//! renderer can find the visible window without re-measuring the list.

use tracing::debug;

use crate::diff::ChangeSet;
use crate::models::SectionItem;

use super::classifier::{classify, classify_all};
use super::flatten::FlatList;
use super::{LayoutContext, RowLayout};

/// Effective height and position of a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowHeight {
    pub row_index: usize,
    pub height: f64,
    /// Offset of the row's top edge from the top of the list.
    pub cumulative_offset: f64,
}

impl RowHeight {
    pub fn end(&self) -> f64 {
        self.cumulative_offset + self.height
    }
}

/// Per-list layout cache.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    layouts: Vec<RowLayout>,
    heights: Vec<RowHeight>,
    ctx: Option<LayoutContext>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reclassify every row.
    pub fn rebuild(&mut self, flat: &FlatList, ctx: &LayoutContext) {
        self.layouts = classify_all(flat, ctx);
        self.ctx = Some(ctx.clone());
        self.recompute_offsets(0);
    }

    /// Update the cache for a new data pass.
    ///
    /// Rows listed in `changes` and their neighbours are reclassified; a
    /// change in row count or in the layout context forces a full rebuild.
    /// Returns the number of rows that were reclassified.
    pub fn apply(&mut self, flat: &FlatList, ctx: &LayoutContext, changes: &ChangeSet) -> usize {
        if changes.row_count_changed
            || self.layouts.len() != flat.len()
            || self.ctx.as_ref() != Some(ctx)
        {
            self.rebuild(flat, ctx);
            return self.layouts.len();
        }

        let mut dirty: Vec<usize> = Vec::new();
        for &row in &changes.changed_rows {
            dirty.extend([row.saturating_sub(1), row, row + 1]);
        }
        if changes.small_balances_changed || changes.savings_changed {
            for (i, row) in flat.rows.iter().enumerate() {
                match row.item() {
                    Some(SectionItem::SmallBalances(_)) if changes.small_balances_changed => {
                        dirty.push(i)
                    }
                    Some(SectionItem::Savings(_)) if changes.savings_changed => dirty.push(i),
                    _ => {}
                }
            }
        }
        dirty.retain(|i| *i < flat.len());
        dirty.sort_unstable();
        dirty.dedup();

        let Some(&first) = dirty.first() else {
            return 0;
        };
        for &i in &dirty {
            self.layouts[i] = classify(flat, i, ctx);
        }
        self.recompute_offsets(first);
        debug!(rows = dirty.len(), from = first, "layout cache patched");
        dirty.len()
    }

    fn recompute_offsets(&mut self, from: usize) {
        let edited = self
            .ctx
            .as_ref()
            .map(|c| c.toggles.is_coin_list_edited)
            .unwrap_or(false);
        self.heights.truncate(from);
        let mut offset = self.heights.last().map(RowHeight::end).unwrap_or(0.0);
        for (row_index, layout) in self.layouts.iter().enumerate().skip(from) {
            let height = layout.effective_height(edited);
            self.heights.push(RowHeight {
                row_index,
                height,
                cumulative_offset: offset,
            });
            offset += height;
        }
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn layout(&self, index: usize) -> Option<&RowLayout> {
        self.layouts.get(index)
    }

    pub fn heights(&self) -> &[RowHeight] {
        &self.heights
    }

    pub fn total_height(&self) -> f64 {
        self.heights.last().map(RowHeight::end).unwrap_or(0.0)
    }

    pub fn offset_of(&self, index: usize) -> Option<f64> {
        self.heights.get(index).map(|h| h.cumulative_offset)
    }

    pub fn height_of(&self, index: usize) -> Option<f64> {
        self.heights.get(index).map(|h| h.height)
    }

    /// Index of the row covering `offset`. Zero-height rows are never hit.
    pub fn row_at_offset(&self, offset: f64) -> Option<usize> {
        if offset < 0.0 || offset >= self.total_height() {
            return None;
        }
        let i = self.heights.partition_point(|h| h.end() <= offset);
        self.heights.get(i).map(|h| h.row_index)
    }

    /// Rows intersecting the viewport.
    ///
    /// Returns `(start, end, first_row_offset)` where `end` is exclusive and
    /// `first_row_offset` is how far the first visible row is scrolled past
    /// its top edge.
    pub fn visible_range(&self, scroll: f64, viewport: f64) -> (usize, usize, f64) {
        let len = self.heights.len();
        if len == 0 || viewport <= 0.0 {
            return (0, 0, 0.0);
        }
        let scroll = scroll.max(0.0);
        if scroll >= self.total_height() {
            return (len, len, 0.0);
        }

        let start = self.heights.partition_point(|h| h.end() <= scroll);
        if start >= len {
            return (len, len, 0.0);
        }
        let first_row_offset = scroll - self.heights[start].cumulative_offset;

        let visible_end = scroll + viewport;
        let end = self
            .heights
            .partition_point(|h| h.cumulative_offset < visible_end);

        (start, end, first_row_offset)
    }
}
