//! Terminal ownership for the TUI.
//!
//! [`TerminalManager`] puts the terminal into raw, alternate-screen mode and
//! restores it when dropped. [`setup_panic_hook`] covers the paths where
//! drop never runs.
//!
//! ```no_run
//! use walletlist::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::debug;

/// Restores the terminal once, on drop or on request.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn restore(&mut self) {
        if !self.restored {
            self.restored = true;
            leave_tui_mode(&mut io::stdout());
            debug!("Terminal restored");
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        // From here on the guard undoes raw mode even if a later step fails.
        let guard = TerminalGuard { restored: false };

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        debug!("Terminal entered TUI mode");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now instead of on drop.
    pub fn restore(&mut self) {
        self.guard.restore();
    }
}
