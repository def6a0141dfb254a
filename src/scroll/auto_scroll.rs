//! Auto-scroll rules applied after every data pass.

use tracing::debug;

use crate::layout::{FlatList, ListToggles};
use crate::models::{Section, SectionItem, SectionKind, TokenFamily};
use crate::traits::ListViewport;

/// Which rule produced a scroll command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollRule {
    /// A collectible family was expanded below the fold.
    FamilyOpened,
    /// The content became shorter than the scrolled window.
    ContentShrunk,
    /// The showcase family appeared or grew.
    Showcase,
}

/// A deferred scroll request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub rule: ScrollRule,
    pub offset: f64,
    pub animated: bool,
    pub delay_ticks: u64,
}

/// Auto-scroll settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoScrollConfig {
    pub enabled: bool,
    pub family_open_delay_ticks: u64,
    pub showcase_delay_ticks: u64,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // ~50ms and ~100ms at a 16ms tick
            family_open_delay_ticks: 3,
            showcase_delay_ticks: 6,
        }
    }
}

/// The inputs of one data pass, as seen by the controller.
#[derive(Debug, Clone, Copy)]
pub struct ListPass<'a> {
    pub sections: &'a [Section],
    pub flat: &'a FlatList,
    pub toggles: &'a ListToggles,
}

impl<'a> ListPass<'a> {
    pub fn new(sections: &'a [Section], flat: &'a FlatList, toggles: &'a ListToggles) -> Self {
        Self {
            sections,
            flat,
            toggles,
        }
    }

    fn first_family(&self) -> Option<Option<&'a TokenFamily>> {
        self.sections
            .iter()
            .find(|s| s.kind == SectionKind::Collectibles)
            .map(|s| s.items.first().and_then(SectionItem::as_family))
    }
}

/// Decides when the list should scroll on its own.
#[derive(Debug, Clone, Default)]
pub struct AutoScrollController {
    config: AutoScrollConfig,
}

impl AutoScrollController {
    pub fn new(config: AutoScrollConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Compare two passes and return the scroll commands to schedule.
    ///
    /// Nothing is emitted when auto-scroll is disabled or the viewport has
    /// not been laid out.
    pub fn evaluate<V: ListViewport + ?Sized>(
        &self,
        prev: &ListPass<'_>,
        next: &ListPass<'_>,
        viewport: &V,
    ) -> Vec<ScrollCommand> {
        if !self.config.enabled {
            return Vec::new();
        }
        let Some(viewport_height) = viewport.viewport_height() else {
            return Vec::new();
        };
        let scroll = viewport.scroll_offset();

        let mut commands = Vec::new();
        if let Some(cmd) = self.family_opened(prev, next, viewport, scroll, viewport_height) {
            commands.push(cmd);
        }
        if let Some(cmd) = self.content_shrunk(viewport, scroll, viewport_height) {
            commands.push(cmd);
        }
        if let Some(cmd) = self.showcase_changed(prev, next, viewport) {
            commands.push(cmd);
        }
        commands
    }

    fn family_opened<V: ListViewport + ?Sized>(
        &self,
        prev: &ListPass<'_>,
        next: &ListPass<'_>,
        viewport: &V,
        scroll: f64,
        viewport_height: f64,
    ) -> Option<ScrollCommand> {
        // Only the first newly opened family is considered.
        let key = next.toggles.newly_opened_families(prev.toggles).next()?;
        let rows = next.flat.family_rows(key);
        let first = viewport.row_rect(*rows.first()?)?;
        let last = viewport.row_rect(*rows.last()?)?;

        let start = first.offset;
        let end = last.end();
        if end <= scroll + viewport_height {
            return None;
        }
        let offset = if end - start > viewport_height {
            start
        } else {
            end - viewport_height
        };
        debug!(family = key, offset, "family opened below the fold");
        Some(ScrollCommand {
            rule: ScrollRule::FamilyOpened,
            offset,
            animated: true,
            delay_ticks: self.config.family_open_delay_ticks,
        })
    }

    fn content_shrunk<V: ListViewport + ?Sized>(
        &self,
        viewport: &V,
        scroll: f64,
        viewport_height: f64,
    ) -> Option<ScrollCommand> {
        let content = viewport.content_height()?;
        if content >= scroll + viewport_height {
            return None;
        }
        let offset = (content - viewport_height).max(0.0);
        if offset >= scroll {
            return None;
        }
        debug!(content, scroll, offset, "content shrank under the viewport");
        Some(ScrollCommand {
            rule: ScrollRule::ContentShrunk,
            offset,
            animated: false,
            delay_ticks: 0,
        })
    }

    fn showcase_changed<V: ListViewport + ?Sized>(
        &self,
        prev: &ListPass<'_>,
        next: &ListPass<'_>,
        viewport: &V,
    ) -> Option<ScrollCommand> {
        let next_first = next.first_family()??;
        if !next_first.is_showcase() {
            return None;
        }
        let prev_first = prev.first_family()?;
        let grew_or_appeared = match prev_first {
            Some(before) if before.is_showcase() => {
                next_first.children_amount > before.children_amount
            }
            _ => true,
        };
        if !grew_or_appeared {
            return None;
        }
        let start = next.flat.section_start(SectionKind::Collectibles)?;
        let offset = viewport.row_rect(start)?.offset;
        debug!(offset, children = next_first.children_amount, "showcase changed");
        Some(ScrollCommand {
            rule: ScrollRule::Showcase,
            offset,
            animated: true,
            delay_ticks: self.config.showcase_delay_ticks,
        })
    }
}
