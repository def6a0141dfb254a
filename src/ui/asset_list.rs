//! Virtualized rendering of the asset list.
//!
//! Only rows intersecting the viewport are rendered. The first visible row
//! is clipped by the scroll remainder, then sticky overlays are drawn on
//! top: the current section header and, in edit mode, the coin divider.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::layout::{edit_sticky_divider_visible, sticky_header_indices};
use crate::models::ListRow;

use super::rows::{header_lines, line_count, render_row, RowRenderContext};
use super::theme::COLOR_STATUS_BG;

/// Lines of the visible window, already clipped to `height`.
pub fn visible_lines(app: &App, width: usize, height: usize) -> Vec<Line<'static>> {
    let (start, end, first_row_offset) = app.list_view.visible_range();
    let ctx = RowRenderContext {
        width,
        toggles: &app.toggles,
        cursor: app.cursor,
        inner_cursor: app.inner_cursor,
    };
    let layout = app.list_view.layout();

    let mut lines = Vec::with_capacity(height + 8);
    for index in start..end {
        let (Some(row), Some(row_layout)) = (app.flat.rows.get(index), layout.layout(index)) else {
            continue;
        };
        lines.extend(render_row(index, row, row_layout, &ctx));
        if lines.len() >= height + line_count(first_row_offset) {
            break;
        }
    }
    lines
        .into_iter()
        .skip(line_count(first_row_offset))
        .take(height)
        .collect()
}

/// Index of the header that should stick to the top, if it has scrolled
/// out of view.
pub fn active_sticky_header(app: &App) -> Option<usize> {
    let sticky = sticky_header_indices(
        &app.flat,
        app.toggles.is_coin_list_edited,
        !app.config.sticky_headers,
    );
    let offset = app.list_view.scroll().offset;
    let layout = app.list_view.layout();
    let top = layout.row_at_offset(offset)?;
    let header = sticky.into_iter().take_while(|i| *i <= top).last()?;
    let header_offset = layout.offset_of(header)?;
    let header_height = layout.height_of(header)?;
    (header_height > 0.0 && offset > header_offset).then_some(header)
}

/// Render the list into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    frame.render_widget(Paragraph::new(visible_lines(app, width, height)), area);

    let mut overlay_y = area.y;
    if let Some(index) = active_sticky_header(app) {
        if let (Some(ListRow::Header { header, .. }), Some(layout)) =
            (app.flat.rows.get(index), app.list_view.layout().layout(index))
        {
            let lines = header_lines(header, &layout.kind, width);
            let rows = (lines.len() as u16).min(area.height);
            let rect = Rect::new(area.x, overlay_y, area.width, rows);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(lines).style(Style::default().bg(COLOR_STATUS_BG)),
                rect,
            );
            overlay_y += rows;
        }
    }

    let ctx = app.layout_context();
    if edit_sticky_divider_visible(app.list_view.scroll().offset, &app.flat, &ctx)
        && overlay_y < area.bottom()
    {
        if let Some(index) = app.flat.coin_divider_index {
            if let (Some(row), Some(layout)) =
                (app.flat.rows.get(index), app.list_view.layout().layout(index))
            {
                let row_ctx = RowRenderContext {
                    width,
                    toggles: &app.toggles,
                    cursor: app.cursor,
                    inner_cursor: app.inner_cursor,
                };
                let lines = render_row(index, row, layout, &row_ctx);
                let rect = Rect::new(area.x, overlay_y, area.width, 1);
                frame.render_widget(Clear, rect);
                frame.render_widget(Paragraph::new(lines).style(Style::default().bg(COLOR_STATUS_BG)), rect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Action, App};
    use crate::portfolio::PortfolioSnapshot;
    use crate::models::{Amount, Asset, NativeValue};
    use crate::startup::ListConfig;

    fn coin(i: usize) -> Asset {
        Asset {
            unique_id: format!("c{}", i),
            symbol: format!("C{}", i),
            name: format!("Coin {}", i),
            balance: Amount::new(1.0, "1"),
            native: NativeValue {
                balance: Amount::new(100.0 - i as f64, format!("${}", 100 - i)),
                price: None,
            },
            ..Default::default()
        }
    }

    fn app(coins: usize, viewport: f64) -> App {
        let snapshot = PortfolioSnapshot {
            assets: (0..coins).map(coin).collect(),
            ..Default::default()
        };
        let mut app = App::new(ListConfig::default(), snapshot);
        app.set_viewport_height(viewport);
        app
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_window_starts_with_header() {
        let app = app(3, 10.0);
        let lines = visible_lines(&app, 40, 10);
        assert!(text(&lines[0]).starts_with("Balances"));
        assert!(text(&lines[2]).contains("C0"));
    }

    #[test]
    fn test_window_clips_to_height() {
        let app = app(30, 5.0);
        assert_eq!(visible_lines(&app, 40, 5).len(), 5);
    }

    #[test]
    fn test_scrolled_window_skips_rows() {
        let mut app = app(30, 5.0);
        app.list_view.scroll_mut().set_offset(3.0);
        let lines = visible_lines(&app, 40, 5);
        // offset 3 is the second coin (header takes two lines)
        assert!(text(&lines[0]).contains("C1"));
    }

    #[test]
    fn test_sticky_header_after_scrolling() {
        let mut app = app(30, 5.0);
        assert_eq!(active_sticky_header(&app), None);
        app.list_view.scroll_mut().set_offset(4.0);
        assert_eq!(active_sticky_header(&app), Some(0));
        app.config.sticky_headers = false;
        assert_eq!(active_sticky_header(&app), None);
    }

    #[test]
    fn test_render_draws_into_buffer() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut app = app(3, 8.0);
        app.dispatch(Action::CursorDown);
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let first: String = (0..8).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
        assert_eq!(first, "Balances");
    }
}
