//! Terminal list widget state.

use crate::error::ViewportError;
use crate::layout::LayoutCache;
use crate::scroll::ScrollState;
use crate::traits::{ListViewport, RowRect};

/// State of the rendered asset list: its layout, scroll position and the
/// height of the area it was last drawn into.
#[derive(Debug, Default)]
pub struct ListView {
    layout: LayoutCache,
    scroll: ScrollState,
    viewport_height: Option<f64>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> &LayoutCache {
        &self.layout
    }

    /// Mutable access for layout passes. Call [`ListView::sync_limits`]
    /// afterwards.
    pub fn layout_mut(&mut self) -> &mut LayoutCache {
        &mut self.layout
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = Some(height.max(0.0));
        self.sync_limits();
    }

    /// Recompute scroll limits from the current layout.
    pub fn sync_limits(&mut self) {
        let viewport = self.viewport_height.unwrap_or(0.0);
        self.scroll
            .update_limits(self.layout.total_height(), viewport);
    }

    /// Rows to draw: `(start, end, first_row_offset)`.
    pub fn visible_range(&self) -> (usize, usize, f64) {
        match self.viewport_height {
            Some(height) => self.layout.visible_range(self.scroll.offset, height),
            None => (0, 0, 0.0),
        }
    }

    /// Scroll the minimum distance needed to show row `index`.
    ///
    /// Rows taller than the viewport are aligned to their top edge.
    pub fn scroll_row_into_view(&mut self, index: usize) {
        let (Some(rect), Some(height)) = (self.row_rect(index), self.viewport_height) else {
            return;
        };
        let top = self.scroll.offset;
        if rect.offset < top || rect.height > height {
            self.scroll.set_offset(rect.offset);
        } else if rect.end() > top + height {
            self.scroll.set_offset(rect.end() - height);
        }
    }

    /// Advance momentum and animations. Returns true if anything moved.
    pub fn tick(&mut self) -> bool {
        self.scroll.apply_velocity()
    }
}

impl ListViewport for ListView {
    fn scroll_offset(&self) -> f64 {
        self.scroll.offset
    }

    fn viewport_height(&self) -> Option<f64> {
        self.viewport_height
    }

    fn content_height(&self) -> Option<f64> {
        if self.layout.is_empty() {
            None
        } else {
            Some(self.layout.total_height())
        }
    }

    fn row_rect(&self, index: usize) -> Option<RowRect> {
        Some(RowRect::new(
            self.layout.offset_of(index)?,
            self.layout.height_of(index)?,
        ))
    }

    fn scroll_to_offset(&mut self, offset: f64, animated: bool) -> Result<(), ViewportError> {
        if self.viewport_height.is_none() {
            return Err(ViewportError::NotLaidOut);
        }
        if self.layout.is_empty() {
            return Err(ViewportError::EmptyList);
        }
        if !offset.is_finite() {
            return Err(ViewportError::InvalidOffset { offset });
        }
        if animated {
            self.scroll.animate_to(offset);
        } else {
            self.scroll.set_offset(offset);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FlatList, LayoutContext, ListToggles, Metrics};
    use crate::models::{Asset, Section, SectionHeader, SectionItem, SectionKind};

    fn list_view(coins: usize, viewport: f64) -> ListView {
        let items = (0..coins).map(|_| SectionItem::Coin(Asset::default())).collect();
        let sections = vec![Section::new(SectionKind::Balances, SectionHeader::default(), items)];
        let ctx = LayoutContext::new(Metrics::terminal());
        let flat = FlatList::build(&sections, &ListToggles::new(), false);

        let mut view = ListView::new();
        view.layout_mut().rebuild(&flat, &ctx);
        view.set_viewport_height(viewport);
        view
    }

    #[test]
    fn test_not_laid_out() {
        let mut view = ListView::new();
        assert_eq!(view.scroll_to_offset(0.0, false), Err(ViewportError::NotLaidOut));
        view.set_viewport_height(10.0);
        assert_eq!(view.scroll_to_offset(0.0, false), Err(ViewportError::EmptyList));
        assert_eq!(view.content_height(), None);
    }

    #[test]
    fn test_invalid_offset() {
        let mut view = list_view(20, 5.0);
        assert!(matches!(
            view.scroll_to_offset(f64::NAN, false),
            Err(ViewportError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn test_scroll_to_offset_clamps() {
        // header 2 + 20 coins (last coin adds the list footer line) = 23
        let mut view = list_view(20, 5.0);
        assert_eq!(view.content_height(), Some(23.0));
        view.scroll_to_offset(100.0, false).unwrap();
        assert_eq!(view.scroll_offset(), 18.0);
    }

    #[test]
    fn test_animated_scroll_moves_over_ticks() {
        let mut view = list_view(20, 5.0);
        view.scroll_to_offset(10.0, true).unwrap();
        assert_eq!(view.scroll_offset(), 0.0);
        while view.tick() {}
        assert_eq!(view.scroll_offset(), 10.0);
    }

    #[test]
    fn test_row_rect_and_visible_range() {
        let view = list_view(20, 5.0);
        assert_eq!(view.row_rect(0), Some(RowRect::new(0.0, 2.0)));
        assert_eq!(view.row_rect(3), Some(RowRect::new(4.0, 1.0)));
        assert_eq!(view.visible_range(), (0, 4, 0.0));
    }

    #[test]
    fn test_scroll_row_into_view() {
        let mut view = list_view(20, 5.0);
        view.scroll_row_into_view(10);
        // row 10 spans 11..12
        assert_eq!(view.scroll_offset(), 7.0);
        view.scroll_row_into_view(1);
        assert_eq!(view.scroll_offset(), 2.0);
    }
}
