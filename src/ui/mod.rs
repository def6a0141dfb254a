//! UI rendering for the wallet asset list.
//!
//! The screen is split into two areas:
//! - The virtualized asset list, with sticky overlays
//! - A one-line status bar with key hints, the balances total and notices
//!
//! Rendering never changes list data. The only state it writes back is the
//! viewport height, so scroll limits follow terminal resizes.

mod asset_list;
mod helpers;
mod rows;
mod status_bar;
mod theme;

pub use asset_list::{active_sticky_header, visible_lines};
pub use rows::{line_count, render_row, RowRenderContext};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    app.set_viewport_height(f64::from(chunks[0].height));
    asset_list::render(frame, chunks[0], app);
    status_bar::render(frame, chunks[1], app);
    app.needs_redraw = false;
}
