//! Input and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::info;

use crate::error::{ErrorContext, WalletListError};

use super::{Action, App, AppMessage};

/// Lines scrolled per mouse wheel notch.
const WHEEL_VELOCITY: f64 = 1.5;

/// Map a key press to an action.
pub fn key_to_action(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('e') => Action::ToggleEdit,
        KeyCode::Char('p') => Action::Pin,
        KeyCode::Char('h') => Action::Hide,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Char('g') | KeyCode::Home => Action::Home,
        KeyCode::Char('G') | KeyCode::End => Action::End,
        KeyCode::Char('r') => Action::Reload,
        _ => return None,
    };
    Some(action)
}

impl App {
    /// Handle a key press. Returns true if it mapped to an action.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key_to_action(&key) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Mouse wheel scrolls the list with momentum.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let delta = match mouse.kind {
            MouseEventKind::ScrollDown => WHEEL_VELOCITY,
            MouseEventKind::ScrollUp => -WHEEL_VELOCITY,
            _ => return,
        };
        self.list_view.scroll_mut().add_velocity(delta);
        self.mark_dirty();
    }

    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::SnapshotLoaded(Ok(snapshot)) => {
                info!(assets = snapshot.assets.len(), "Snapshot reloaded");
                self.set_snapshot(snapshot);
            }
            AppMessage::SnapshotLoaded(Err(err)) => {
                self.report_error(
                    WalletListError::from(err).with_context(
                        ErrorContext::new("reload_snapshot").with_component("portfolio"),
                    ),
                );
            }
        }
    }

    /// Drain pending background messages without blocking.
    pub fn process_messages(&mut self) {
        let mut pending = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(msg) = rx.try_recv() {
                pending.push(msg);
            }
        }
        for msg in pending {
            self.handle_message(msg);
        }
    }
}
