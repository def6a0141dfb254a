//! Deferred, fire-and-forget scroll execution.

use tracing::{debug, warn};

use crate::error::{ErrorContext, ResultExt};
use crate::traits::ListViewport;

use super::auto_scroll::{ScrollCommand, ScrollRule};

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingScroll {
    command: ScrollCommand,
    due_tick: u64,
}

/// Holds scroll commands until their delay has elapsed.
///
/// At most one command per rule is pending; scheduling a newer one replaces
/// it.
#[derive(Debug, Clone, Default)]
pub struct ScrollScheduler {
    pending: Vec<PendingScroll>,
}

impl ScrollScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: ScrollCommand, now_tick: u64) {
        self.cancel(command.rule);
        self.pending.push(PendingScroll {
            command,
            due_tick: now_tick + command.delay_ticks,
        });
    }

    pub fn cancel(&mut self, rule: ScrollRule) {
        self.pending.retain(|p| p.command.rule != rule);
    }

    /// Remove and return every command due at `now_tick`, oldest first.
    pub fn tick(&mut self, now_tick: u64) -> Vec<ScrollCommand> {
        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|p| p.due_tick <= now_tick);
        self.pending = waiting;
        due.into_iter().map(|p| p.command).collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Run a scroll command against the viewport.
///
/// Best effort: a failing viewport is logged and otherwise ignored.
/// Returns whether the scroll was accepted.
pub fn execute<V: ListViewport + ?Sized>(command: &ScrollCommand, viewport: &mut V) -> bool {
    let result = viewport
        .scroll_to_offset(command.offset, command.animated)
        .with_context(|| {
            ErrorContext::new("scroll_to_offset").with_component(format!("{:?}", command.rule))
        });
    match result {
        Ok(()) => {
            debug!(rule = ?command.rule, offset = command.offset, "auto-scroll applied");
            true
        }
        Err(err) => {
            warn!(error_code = err.error_code(), "auto-scroll skipped: {}", err);
            false
        }
    }
}

/// Scroll to the top, ignoring failures (the list may be empty).
pub fn scroll_to_top<V: ListViewport + ?Sized>(viewport: &mut V) {
    if let Err(err) = viewport.scroll_to_offset(0.0, false) {
        debug!("scroll to top ignored: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(rule: ScrollRule, offset: f64, delay_ticks: u64) -> ScrollCommand {
        ScrollCommand {
            rule,
            offset,
            animated: true,
            delay_ticks,
        }
    }

    #[test]
    fn test_due_commands_fire_once() {
        let mut scheduler = ScrollScheduler::new();
        scheduler.schedule(cmd(ScrollRule::FamilyOpened, 40.0, 3), 10);
        assert!(scheduler.tick(12).is_empty());

        let due = scheduler.tick(13);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].offset, 40.0);
        assert!(scheduler.tick(14).is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_newer_command_supersedes_same_rule() {
        let mut scheduler = ScrollScheduler::new();
        scheduler.schedule(cmd(ScrollRule::Showcase, 10.0, 6), 0);
        scheduler.schedule(cmd(ScrollRule::Showcase, 20.0, 6), 2);
        scheduler.schedule(cmd(ScrollRule::ContentShrunk, 5.0, 0), 2);
        assert_eq!(scheduler.pending_len(), 2);

        let due = scheduler.tick(2);
        assert_eq!(due, vec![cmd(ScrollRule::ContentShrunk, 5.0, 0)]);

        assert!(scheduler.tick(6).is_empty());
        let due = scheduler.tick(8);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].offset, 20.0);
    }

    #[test]
    fn test_cancel_and_clear() {
        let mut scheduler = ScrollScheduler::new();
        scheduler.schedule(cmd(ScrollRule::Showcase, 10.0, 6), 0);
        scheduler.schedule(cmd(ScrollRule::FamilyOpened, 10.0, 6), 0);
        scheduler.cancel(ScrollRule::Showcase);
        assert_eq!(scheduler.pending_len(), 1);
        scheduler.clear();
        assert!(scheduler.is_idle());
    }
}
