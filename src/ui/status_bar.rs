//! One-line status bar below the list.
//!
//! ```text
//! j/k move  enter toggle  e edit  r reload  q quit            $1,234.56
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::models::SectionKind;

use super::helpers::{gap_between, truncate_to_width};
use super::theme::{COLOR_BOUNDARY_FLASH, COLOR_DIM, COLOR_ERROR, COLOR_STATUS_BG, COLOR_VALUE};

const HINTS: &str = "j/k move  enter toggle  e edit  r reload  q quit";
const EDIT_HINTS: &str = "j/k move  p pin  h hide  e done  q quit";

fn hints(app: &App) -> &'static str {
    if app.toggles.is_coin_list_edited {
        EDIT_HINTS
    } else {
        HINTS
    }
}

/// Balances total shown on the right when there is no notice.
fn balances_total(app: &App) -> Option<&str> {
    app.sections
        .iter()
        .find(|section| section.kind == SectionKind::Balances)
        .map(|section| section.header.total_value.as_str())
        .filter(|value| !value.is_empty())
}

/// Build the status line for the given width.
pub fn status_line(app: &App, width: usize) -> Line<'static> {
    let right = match &app.status {
        Some(status) => Span::styled(
            truncate_to_width(status, width / 2),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            balances_total(app).unwrap_or("").to_string(),
            Style::default().fg(COLOR_VALUE),
        ),
    };
    let left_room = width.saturating_sub(right.content.width().min(width) + 1);
    let left = truncate_to_width(hints(app), left_room);
    let gap = gap_between(&left, &right.content, width);
    Line::from(vec![
        Span::styled(left, Style::default().fg(COLOR_DIM)),
        Span::raw(" ".repeat(gap)),
        right,
    ])
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let bg = if app.list_view.scroll().get_boundary_hit().is_some() {
        COLOR_BOUNDARY_FLASH
    } else {
        COLOR_STATUS_BG
    };
    let line = status_line(app, area.width as usize);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::models::{Amount, Asset, NativeValue};
    use crate::portfolio::PortfolioSnapshot;
    use crate::startup::ListConfig;

    fn app() -> App {
        let snapshot = PortfolioSnapshot {
            assets: vec![Asset {
                unique_id: "eth".to_string(),
                symbol: "ETH".to_string(),
                balance: Amount::new(1.0, "1 ETH"),
                native: NativeValue {
                    balance: Amount::new(1500.0, "$1,500.00"),
                    price: None,
                },
                ..Default::default()
            }],
            ..Default::default()
        };
        App::new(ListConfig::default(), snapshot)
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_shows_total() {
        let app = app();
        let line = text(&status_line(&app, 80));
        assert!(line.starts_with("j/k move"));
        assert!(line.ends_with("$1,500.00"));
    }

    #[test]
    fn test_status_message_replaces_total() {
        let mut app = app();
        app.dispatch(Action::Pin);
        let line = text(&status_line(&app, 120));
        assert!(line.contains("Press e to edit"));
        assert!(!line.contains("$1,500.00"));
    }

    #[test]
    fn test_edit_hints() {
        let mut app = app();
        app.dispatch(Action::ToggleEdit);
        assert!(text(&status_line(&app, 80)).contains("p pin"));
    }
}
