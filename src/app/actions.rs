//! User actions on the asset list.

use tracing::{debug, info, warn};

use crate::layout::family_key;
use crate::models::{ListRow, SectionItem};
use crate::scroll::{scroll_to_top, ScrollBoundary};
use crate::traits::ListViewport;

use super::{App, AppMessage};

/// Something the user asked the list to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    /// Expand or collapse whatever is under the cursor.
    Toggle,
    ToggleEdit,
    Pin,
    Hide,
    PageUp,
    PageDown,
    Home,
    End,
    Reload,
    Quit,
}

/// Share of the viewport a page key scrolls by, through momentum.
const PAGE_VELOCITY_FACTOR: f64 = 0.08;

impl App {
    /// Apply an action to the app state.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        self.mark_dirty();
        match action {
            Action::CursorUp => self.move_cursor(-1),
            Action::CursorDown => self.move_cursor(1),
            Action::Toggle => self.toggle_under_cursor(),
            Action::ToggleEdit => self.toggle_edit_mode(),
            Action::Pin => self.pin_or_hide(false),
            Action::Hide => self.pin_or_hide(true),
            Action::PageUp => self.page(-1.0),
            Action::PageDown => self.page(1.0),
            Action::Home => {
                self.list_view.scroll_mut().scroll_to_top();
                self.cursor = 0;
                self.inner_cursor = None;
                self.clamp_cursor();
            }
            Action::End => {
                self.list_view.scroll_mut().scroll_to_bottom();
                if let Some(last) = (0..self.flat.len()).rev().find(|i| self.is_selectable(*i)) {
                    self.cursor = last;
                    self.inner_cursor = None;
                }
            }
            Action::Reload => self.request_reload(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn open_small_balances_len(&self) -> Option<usize> {
        match self.cursor_row().and_then(ListRow::item) {
            Some(SectionItem::SmallBalances(small)) if self.toggles.is_small_balances_open => {
                Some(small.assets.len())
            }
            _ => None,
        }
    }

    /// Move the cursor by one selectable row, stepping through the coins
    /// of an open small-balances container on the way.
    pub fn move_cursor(&mut self, step: isize) {
        if let Some(len) = self.open_small_balances_len() {
            let inner = match self.inner_cursor {
                None if step > 0 && len > 0 => Some(Some(0)),
                Some(i) if step > 0 && i + 1 < len => Some(Some(i + 1)),
                Some(i) if step < 0 => Some(i.checked_sub(1)),
                _ => None,
            };
            if let Some(inner) = inner {
                self.inner_cursor = inner;
                return;
            }
        }
        self.inner_cursor = None;
        self.step_row(step);
    }

    fn step_row(&mut self, step: isize) {
        let len = self.flat.len();
        let found = if step > 0 {
            (self.cursor + 1..len).find(|i| self.is_selectable(*i))
        } else {
            (0..self.cursor).rev().find(|i| self.is_selectable(*i))
        };
        match found {
            Some(index) => {
                self.cursor = index;
                self.list_view.scroll_row_into_view(index);
            }
            None => {
                let tick = self.tick_count;
                let scroll = self.list_view.scroll_mut();
                let boundary = if step > 0 {
                    scroll.scroll_to_bottom();
                    ScrollBoundary::Bottom
                } else {
                    scroll.scroll_to_top();
                    ScrollBoundary::Top
                };
                scroll.record_boundary_hit(boundary, tick);
            }
        }
    }

    /// Expand or collapse the row under the cursor.
    pub fn toggle_under_cursor(&mut self) {
        let Some(item) = self.cursor_row().and_then(ListRow::item).cloned() else {
            return;
        };
        match item {
            SectionItem::Family(family) => {
                let key = family_key(&family.family_name, self.config.showcase);
                let open = self.toggles.toggle_family(&key);
                debug!(family = %key, open, "family toggled");
            }
            SectionItem::CoinDivider(divider) if divider.default_to_edit_button => {
                self.toggle_edit_mode();
                return;
            }
            SectionItem::CoinDivider(_) | SectionItem::SmallBalances(_) => {
                self.toggles.is_small_balances_open = !self.toggles.is_small_balances_open;
                self.inner_cursor = None;
                debug!(open = self.toggles.is_small_balances_open, "small balances toggled");
            }
            SectionItem::Savings(_) => {
                self.toggles.is_savings_open = !self.toggles.is_savings_open;
                debug!(open = self.toggles.is_savings_open, "savings toggled");
            }
            SectionItem::Pools(_) => {
                self.toggles.is_pools_open = !self.toggles.is_pools_open;
                debug!(open = self.toggles.is_pools_open, "pools toggled");
            }
            SectionItem::Coin(_) => return,
        }
        self.rebuild();
    }

    /// Enter or leave coin edit mode.
    pub fn toggle_edit_mode(&mut self) {
        self.toggles.is_coin_list_edited = !self.toggles.is_coin_list_edited;
        self.inner_cursor = None;
        info!(edited = self.toggles.is_coin_list_edited, "coin edit mode");
        if !self.toggles.is_coin_list_edited {
            // sticky divider and hidden rows go away; start from the top
            scroll_to_top(&mut self.list_view);
        }
        self.rebuild();
    }

    /// Unique id of the coin under the cursor, including coins inside an
    /// open small-balances container.
    pub fn selected_coin_id(&self) -> Option<&str> {
        match self.cursor_row().and_then(ListRow::item)? {
            SectionItem::Coin(asset) => Some(asset.unique_id.as_str()),
            SectionItem::SmallBalances(small) => self
                .inner_cursor
                .and_then(|i| small.assets.get(i))
                .map(|asset| asset.unique_id.as_str()),
            _ => None,
        }
    }

    fn pin_or_hide(&mut self, hide: bool) {
        if !self.toggles.is_coin_list_edited {
            self.status = Some("Press e to edit the coin list first.".to_string());
            return;
        }
        let Some(id) = self.selected_coin_id().map(str::to_string) else {
            return;
        };
        let state = if hide {
            self.prefs.toggle_hidden(&id)
        } else {
            self.prefs.toggle_pinned(&id)
        };
        info!(coin = %id, hide, state, "coin preference changed");
        self.inner_cursor = None;
        self.rebuild();
    }

    fn page(&mut self, direction: f64) {
        let height = self.list_view.viewport_height().unwrap_or(0.0);
        self.list_view
            .scroll_mut()
            .add_velocity(direction * height * PAGE_VELOCITY_FACTOR);
    }

    /// Reload the snapshot file in the background. The result arrives as
    /// [`AppMessage::SnapshotLoaded`].
    pub fn request_reload(&mut self) {
        let Some(path) = self.snapshot_path.clone() else {
            self.status = Some("No snapshot file to reload.".to_string());
            return;
        };
        let tx = self.message_tx.clone();
        self.status = Some("Reloading…".to_string());
        tokio::task::spawn_blocking(move || {
            let result = crate::portfolio::PortfolioSnapshot::load(&path);
            if tx.send(AppMessage::SnapshotLoaded(result)).is_err() {
                warn!("snapshot reload finished after shutdown");
            }
        });
    }
}
