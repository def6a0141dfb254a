//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Action`] - What a key press asks the list to do
//! - [`AppMessage`] - Messages from background tasks
//!
//! Every data change goes through [`App::rebuild`], a single synchronous
//! pass: sections are built from the snapshot, flattened, diffed against
//! the previous pass, laid out, and finally checked for auto-scroll.

mod actions;
mod handlers;
mod messages;
mod state_methods;

pub use actions::Action;
pub use handlers::key_to_action;
pub use messages::AppMessage;

use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::adapters::ListView;
use crate::diff::DataProvider;
use crate::error::{ErrorContext, WalletListError};
use crate::layout::{validate_sections, FlatList, LayoutContext, ListToggles};
use crate::models::{CollectiblesStyle, ListRow, Section};
use crate::portfolio::{build_wallet_sections, PortfolioSnapshot, WalletPrefs};
use crate::scroll::{execute, AutoScrollController, ListPass, ScrollScheduler};
use crate::startup::ListConfig;
use crate::traits::ListViewport;

/// How long the boundary flash stays visible, in ticks.
pub const BOUNDARY_FLASH_TICKS: u64 = 10;

/// Main application state
pub struct App {
    /// Wallet data currently shown
    pub snapshot: PortfolioSnapshot,
    /// File the snapshot was read from (reload source)
    pub snapshot_path: Option<PathBuf>,
    /// Pinned/hidden/showcase choices
    pub prefs: WalletPrefs,
    /// Expanded/collapsed state of the list
    pub toggles: ListToggles,
    pub config: ListConfig,
    /// Sections of the last pass
    pub sections: Vec<Section>,
    /// Flattened rows of the last pass
    pub flat: FlatList,
    pub provider: DataProvider,
    /// Layout cache, scroll state and viewport size
    pub list_view: ListView,
    pub auto_scroll: AutoScrollController,
    pub scheduler: ScrollScheduler,
    /// Toggles the previous pass was built with
    pass_toggles: ListToggles,
    /// Tick counter for animations and deferred scrolls
    pub tick_count: u64,
    /// Selected row
    pub cursor: usize,
    /// Selected coin inside an open small-balances container
    pub inner_cursor: Option<usize>,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Last error or notice for the status bar
    pub status: Option<String>,
    /// Receiver for background messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for background messages (clone this to pass to tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create the app and run the first pass.
    pub fn new(config: ListConfig, snapshot: PortfolioSnapshot) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let style = if config.small_collectibles {
            CollectiblesStyle::Small
        } else {
            CollectiblesStyle::Big
        };
        let prefs = WalletPrefs::from_snapshot(&snapshot)
            .with_showcase_label(config.showcase_label.clone())
            .with_collectibles_style(style);

        let mut app = Self {
            snapshot_path: config.snapshot_path.clone(),
            snapshot,
            prefs,
            toggles: ListToggles::new(),
            auto_scroll: AutoScrollController::new(config.auto_scroll_config()),
            config,
            sections: Vec::new(),
            flat: FlatList::default(),
            provider: DataProvider::default(),
            list_view: ListView::new(),
            scheduler: ScrollScheduler::new(),
            pass_toggles: ListToggles::new(),
            tick_count: 0,
            cursor: 0,
            inner_cursor: None,
            needs_redraw: true,
            should_quit: false,
            status: None,
            message_rx: Some(message_rx),
            message_tx,
        };
        app.rebuild();
        app.cursor = app.first_selectable().unwrap_or(0);
        info!(rows = app.flat.len(), "App initialized");
        app
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Layout inputs of the current state.
    pub fn layout_context(&self) -> LayoutContext {
        self.config
            .layout_context()
            .with_toggles(self.toggles.clone())
            .with_small_collectibles(self.prefs.collectibles_style == CollectiblesStyle::Small)
    }

    /// Run one data pass. Returns the number of rows whose layout was
    /// recomputed.
    pub fn rebuild(&mut self) -> usize {
        self.prefs.is_coin_list_edited = self.toggles.is_coin_list_edited;
        let sections = match build_wallet_sections(&self.snapshot, &self.prefs) {
            Ok(sections) => sections,
            Err(err) => {
                self.report_error(
                    WalletListError::from(err).with_context(
                        ErrorContext::new("build_sections").with_component("portfolio"),
                    ),
                );
                return 0;
            }
        };
        if let Err(err) = validate_sections(&sections) {
            warn!(error_code = err.error_code(), "Malformed sections: {}", err);
        }

        let cursor_id = self.provider.stable_id(self.cursor).map(str::to_string);
        let flat = FlatList::build(&sections, &self.toggles, self.config.showcase);
        let (provider, changes) = self.provider.clone_with_rows(&flat);
        let ctx = self.layout_context();
        let patched = self.list_view.layout_mut().apply(&flat, &ctx, &changes);

        let commands = {
            let prev = ListPass::new(&self.sections, &self.flat, &self.pass_toggles);
            let next = ListPass::new(&sections, &flat, &self.toggles);
            self.auto_scroll.evaluate(&prev, &next, &self.list_view)
        };
        self.list_view.sync_limits();
        for command in commands {
            self.scheduler.schedule(command, self.tick_count);
        }

        self.sections = sections;
        self.flat = flat;
        self.provider = provider;
        self.pass_toggles = self.toggles.clone();

        self.cursor = cursor_id
            .and_then(|id| self.provider.position_of(&id))
            .unwrap_or(self.cursor);
        self.clamp_cursor();
        self.run_due_scrolls();
        self.mark_dirty();

        debug!(
            rows = self.flat.len(),
            changed = changes.changed_rows.len(),
            patched,
            "List pass complete"
        );
        patched
    }

    /// Log `err` and show it with its recovery hint in the status bar.
    pub fn report_error(&mut self, err: WalletListError) {
        warn!(
            error_code = err.error_code(),
            category = %err.category(),
            retryable = err.is_retryable(),
            context = %err.context_log_string(),
            "{}",
            err
        );
        self.status = Some(err.status_message());
        self.mark_dirty();
    }

    /// Execute every scheduled scroll whose delay has elapsed.
    pub fn run_due_scrolls(&mut self) {
        for command in self.scheduler.tick(self.tick_count) {
            if execute(&command, &mut self.list_view) {
                self.mark_dirty();
            }
        }
    }

    /// Replace the snapshot and rebuild. Preferences stored in the new
    /// snapshot replace the current ones.
    pub fn set_snapshot(&mut self, snapshot: PortfolioSnapshot) {
        let label = self.prefs.showcase_label.clone();
        let style = self.prefs.collectibles_style;
        self.prefs = WalletPrefs::from_snapshot(&snapshot)
            .with_showcase_label(label)
            .with_collectibles_style(style);
        self.snapshot = snapshot;
        self.status = None;
        self.rebuild();
    }

    /// Update the viewport height (terminal rows available to the list).
    pub fn set_viewport_height(&mut self, height: f64) {
        if self.list_view.viewport_height() != Some(height) {
            self.list_view.set_viewport_height(height);
            self.mark_dirty();
        }
    }

    /// Whether row `index` can hold the cursor.
    pub fn is_selectable(&self, index: usize) -> bool {
        match self.flat.rows.get(index) {
            Some(ListRow::Item { .. }) => self
                .list_view
                .layout()
                .height_of(index)
                .is_some_and(|h| h > 0.0),
            _ => false,
        }
    }

    fn first_selectable(&self) -> Option<usize> {
        (0..self.flat.len()).find(|i| self.is_selectable(*i))
    }

    fn clamp_cursor(&mut self) {
        if self.is_selectable(self.cursor) {
            return;
        }
        let before = (0..self.cursor.min(self.flat.len())).rev().find(|i| self.is_selectable(*i));
        let after = (self.cursor..self.flat.len()).find(|i| self.is_selectable(*i));
        self.cursor = after.or(before).unwrap_or(0);
        self.inner_cursor = None;
    }

    /// The row under the cursor.
    pub fn cursor_row(&self) -> Option<&ListRow> {
        self.flat.rows.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Asset, Collectible, NativeValue, SectionItem};

    pub(super) fn coin(id: &str, native: f64) -> Asset {
        Asset {
            unique_id: id.to_string(),
            symbol: id.to_uppercase(),
            name: id.to_string(),
            balance: Amount::new(1.0, format!("1 {}", id.to_uppercase())),
            native: NativeValue {
                balance: Amount::new(native, format!("${:.2}", native)),
                price: Some(Amount::new(native, format!("${:.2}", native))),
            },
            ..Default::default()
        }
    }

    pub(super) fn snapshot() -> PortfolioSnapshot {
        let mut assets: Vec<Asset> = (0..6).map(|i| coin(&format!("c{}", i), 100.0)).collect();
        assets.push(coin("dust", 0.2));
        let collectibles = (0..6)
            .map(|i| Collectible {
                unique_id: format!("ape_{}", i),
                id: i.to_string(),
                contract_address: "0xape".to_string(),
                family_name: "Apes".to_string(),
                ..Default::default()
            })
            .collect();
        PortfolioSnapshot {
            assets,
            collectibles,
            ..Default::default()
        }
    }

    pub(super) fn app() -> App {
        let mut app = App::new(ListConfig::default(), snapshot());
        app.set_viewport_height(10.0);
        app
    }

    #[test]
    fn test_new_builds_rows() {
        let app = app();
        // balances header, 5 coins, divider, small, savings, collectibles header, family, footer
        assert_eq!(app.flat.len(), 12);
        assert_eq!(app.provider.len(), app.flat.len());
        assert_eq!(app.list_view.layout().len(), app.flat.len());
        assert!(app.is_selectable(app.cursor));
        assert!(matches!(
            app.cursor_row().and_then(ListRow::item),
            Some(SectionItem::Coin(_))
        ));
    }

    #[test]
    fn test_rebuild_without_changes_patches_nothing() {
        let mut app = app();
        assert_eq!(app.rebuild(), 0);
    }

    #[test]
    fn test_unknown_currency_keeps_previous_rows() {
        let mut app = app();
        let rows = app.flat.len();
        app.snapshot.native_currency = "XYZ".to_string();
        app.rebuild();
        assert_eq!(app.flat.len(), rows);
        let status = app.status.as_deref().unwrap();
        assert!(status.starts_with("Unsupported native currency: XYZ."));
        assert!(status.ends_with("Check the portfolio snapshot file and reload."));
    }

    #[test]
    fn test_cursor_follows_row_identity() {
        let mut app = app();
        let target = app
            .flat
            .rows
            .iter()
            .position(|row| matches!(row.item(), Some(SectionItem::Family(_))))
            .unwrap();
        app.cursor = target;
        app.toggles.is_small_balances_open = true;
        app.rebuild();
        assert!(matches!(
            app.cursor_row().and_then(ListRow::item),
            Some(SectionItem::Family(_))
        ));
    }
}
