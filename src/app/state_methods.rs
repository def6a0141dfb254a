//! Per-tick state updates for the App.

use super::{App, BOUNDARY_FLASH_TICKS};

impl App {
    /// Advance one tick: momentum, animated scrolls, deferred auto-scrolls
    /// and the boundary flash.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let before = self.list_view.scroll().get_boundary_hit();
        if self.list_view.tick() {
            self.mark_dirty();
        }
        let after = self.list_view.scroll().get_boundary_hit();
        if let Some(boundary) = after {
            if before != after {
                let tick = self.tick_count;
                self.list_view.scroll_mut().record_boundary_hit(boundary, tick);
            }
        }

        if !self.scheduler.is_idle() {
            self.run_due_scrolls();
        }

        let had_flash = self.list_view.scroll().get_boundary_hit().is_some();
        self.list_view
            .scroll_mut()
            .maybe_clear_boundary_hit(self.tick_count, BOUNDARY_FLASH_TICKS);
        if had_flash && self.list_view.scroll().get_boundary_hit().is_none() {
            self.mark_dirty();
        }
    }
}
