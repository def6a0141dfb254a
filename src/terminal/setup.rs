//! Entering and leaving the list's full-screen mode.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen with mouse capture (wheel scrolling) and
/// a hidden cursor. Raw mode is enabled separately.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored so this can run
/// from drop and panic paths, any number of times.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout after a panic.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
