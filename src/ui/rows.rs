//! Rendering of individual list rows.
//!
//! Every row renders exactly as many lines as its effective layout height,
//! so the drawn list and the layout cache always agree on offsets.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::layout::{ListToggles, RowKind, RowLayout};
use crate::models::{
    Asset, CoinDivider, Collectible, ListRow, PoolsContainer, SavingsContainer, SectionHeader,
    SectionItem, TokenFamily,
};

use super::helpers::{format_change, gap_between, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_GAIN, COLOR_HEADER, COLOR_HIDDEN, COLOR_LOSS,
    COLOR_PINNED, COLOR_SELECTED_BG, COLOR_VALUE,
};

/// Per-frame inputs shared by all rows.
#[derive(Debug, Clone, Copy)]
pub struct RowRenderContext<'a> {
    pub width: usize,
    pub toggles: &'a ListToggles,
    /// Row index under the cursor
    pub cursor: usize,
    pub inner_cursor: Option<usize>,
}

/// Number of terminal lines a height occupies.
pub fn line_count(height: f64) -> usize {
    if height.is_finite() && height > 0.0 {
        height.round() as usize
    } else {
        0
    }
}

/// Render row `index` into exactly its effective height in lines.
pub fn render_row(
    index: usize,
    row: &ListRow,
    layout: &RowLayout,
    ctx: &RowRenderContext<'_>,
) -> Vec<Line<'static>> {
    let height = line_count(layout.effective_height(ctx.toggles.is_coin_list_edited));
    if height == 0 {
        return Vec::new();
    }
    let selected = index == ctx.cursor;
    let mut lines = match row {
        ListRow::Header { header, .. } => header_lines(header, &layout.kind, ctx.width),
        ListRow::Item { item, .. } => item_lines(item, &layout.kind, selected, ctx),
        ListRow::Footer => Vec::new(),
    };
    if selected && ctx.inner_cursor.is_none() {
        if let Some(first) = lines.first_mut() {
            *first = highlight(std::mem::take(first), ctx.width);
        }
    }
    fit(lines, height)
}

fn fit(mut lines: Vec<Line<'static>>, height: usize) -> Vec<Line<'static>> {
    lines.truncate(height);
    lines.resize(height, Line::default());
    lines
}

fn highlight(line: Line<'static>, width: usize) -> Line<'static> {
    let pad = width.saturating_sub(line.width());
    let mut spans = line.spans;
    spans.push(Span::raw(" ".repeat(pad)));
    Line::from(spans).style(Style::default().bg(COLOR_SELECTED_BG))
}

fn rule(width: usize) -> Line<'static> {
    Line::from(Span::styled("─".repeat(width), Style::default().fg(COLOR_BORDER)))
}

fn split_line(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let left_text: String = left.iter().map(|s| s.content.as_ref()).collect();
    let right_text: String = right.iter().map(|s| s.content.as_ref()).collect();
    let gap = gap_between(&left_text, &right_text, width);
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}

pub(crate) fn header_lines(header: &SectionHeader, kind: &RowKind, width: usize) -> Vec<Line<'static>> {
    let title = split_line(
        vec![Span::styled(
            header.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )],
        vec![Span::styled(
            header.total_value.clone(),
            Style::default().fg(COLOR_VALUE),
        )],
        width,
    );
    match kind {
        RowKind::ShowcaseHeader => vec![Line::default(), title, rule(width)],
        _ => vec![title, rule(width)],
    }
}

fn item_lines(
    item: &SectionItem,
    kind: &RowKind,
    selected: bool,
    ctx: &RowRenderContext<'_>,
) -> Vec<Line<'static>> {
    let edited = ctx.toggles.is_coin_list_edited;
    match item {
        SectionItem::Coin(asset) => vec![coin_line(asset, ctx.width, edited)],
        SectionItem::CoinDivider(divider) => vec![divider_line(divider, ctx)],
        SectionItem::SmallBalances(small) => {
            let mut lines: Vec<Line<'static>> = small
                .assets
                .iter()
                .enumerate()
                .map(|(i, asset)| {
                    let line = coin_line(asset, ctx.width, edited);
                    if selected && ctx.inner_cursor == Some(i) {
                        highlight(line, ctx.width)
                    } else {
                        line
                    }
                })
                .collect();
            if edited {
                lines.push(Line::from(Span::styled(
                    "  p pin · h hide",
                    Style::default().fg(COLOR_DIM),
                )));
            }
            lines
        }
        SectionItem::Savings(savings) => savings_lines(savings, ctx),
        SectionItem::Pools(pools) => pools_lines(pools, ctx),
        SectionItem::Family(family) => family_lines(family, kind, ctx.width),
    }
}

pub(crate) fn coin_line(asset: &Asset, width: usize, edited: bool) -> Line<'static> {
    let (marker, marker_style) = if asset.is_hidden {
        ("⊘ ", Style::default().fg(COLOR_HIDDEN))
    } else if asset.is_pinned {
        ("★ ", Style::default().fg(COLOR_PINNED))
    } else if edited {
        ("○ ", Style::default().fg(COLOR_DIM))
    } else {
        ("  ", Style::default())
    };
    let text_style = if asset.is_hidden {
        Style::default().fg(COLOR_HIDDEN)
    } else {
        Style::default()
    };

    let mut right = vec![
        Span::styled(asset.balance.display.clone(), text_style),
        Span::raw("  "),
        Span::styled(
            asset.native.balance.display.clone(),
            Style::default().fg(COLOR_VALUE),
        ),
    ];
    if let Some(change) = asset.relative_change_24h() {
        let color = if change >= 0.0 { COLOR_GAIN } else { COLOR_LOSS };
        right.push(Span::raw(" "));
        right.push(Span::styled(
            format!("{:>8}", format_change(change)),
            Style::default().fg(color),
        ));
    }
    let right_width: usize = right.iter().map(|s| s.content.width()).sum();
    let name_room = width.saturating_sub(right_width + asset.symbol.width() + 4);
    let left = vec![
        Span::styled(marker, marker_style),
        Span::styled(asset.symbol.clone(), text_style.add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(&asset.name, name_room),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    split_line(left, right, width)
}

fn divider_line(divider: &CoinDivider, ctx: &RowRenderContext<'_>) -> Line<'static> {
    let label = if ctx.toggles.is_coin_list_edited {
        "Done".to_string()
    } else if divider.default_to_edit_button {
        "Edit".to_string()
    } else if ctx.toggles.is_small_balances_open {
        "▾ Less".to_string()
    } else {
        format!("▸ More  {}", divider.value_display)
    };
    let label_width = label.width() + 2;
    let left = ctx.width.saturating_sub(label_width) / 2;
    let right = ctx.width.saturating_sub(label_width + left);
    Line::from(vec![
        Span::styled("─".repeat(left), Style::default().fg(COLOR_BORDER)),
        Span::styled(format!(" {} ", label), Style::default().fg(COLOR_ACCENT)),
        Span::styled("─".repeat(right), Style::default().fg(COLOR_BORDER)),
    ])
}

fn toggle_arrow(open: bool) -> &'static str {
    if open {
        "▾ "
    } else {
        "▸ "
    }
}

fn savings_lines(savings: &SavingsContainer, ctx: &RowRenderContext<'_>) -> Vec<Line<'static>> {
    let open = ctx.toggles.is_savings_open;
    let mut lines = vec![split_line(
        vec![
            Span::styled(toggle_arrow(open), Style::default().fg(COLOR_ACCENT)),
            Span::styled("Savings", Style::default().add_modifier(Modifier::BOLD)),
        ],
        vec![Span::styled(
            savings.total_display.clone(),
            Style::default().fg(COLOR_VALUE),
        )],
        ctx.width,
    )];
    if open {
        for asset in &savings.assets {
            lines.push(split_line(
                vec![Span::raw("    "), Span::raw(asset.symbol.clone())],
                vec![
                    Span::styled(
                        format!("{:.2}", asset.underlying_balance_native_value),
                        Style::default().fg(COLOR_VALUE),
                    ),
                    Span::styled(
                        format!("  +{:.2}", asset.lifetime_supply_interest_accrued_native),
                        Style::default().fg(COLOR_GAIN),
                    ),
                ],
                ctx.width,
            ));
        }
    }
    lines
}

fn pools_lines(pools: &PoolsContainer, ctx: &RowRenderContext<'_>) -> Vec<Line<'static>> {
    let open = ctx.toggles.is_pools_open;
    let mut lines = vec![split_line(
        vec![
            Span::styled(toggle_arrow(open), Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                format!("{} pools", pools.pools.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ],
        vec![Span::styled(
            pools.total_display.clone(),
            Style::default().fg(COLOR_VALUE),
        )],
        ctx.width,
    )];
    if open {
        for pool in &pools.pools {
            let name = if pool.name.is_empty() {
                pool.tokens.join("-")
            } else {
                pool.name.clone()
            };
            lines.push(split_line(
                vec![Span::raw("    "), Span::raw(name)],
                vec![
                    Span::styled(
                        format!("{:.2}%", pool.percentage_owned),
                        Style::default().fg(COLOR_DIM),
                    ),
                    Span::styled(
                        format!("  {:.2}", pool.total_native_value),
                        Style::default().fg(COLOR_VALUE),
                    ),
                ],
                ctx.width,
            ));
        }
    }
    lines
}

fn family_lines(family: &TokenFamily, kind: &RowKind, width: usize) -> Vec<Line<'static>> {
    let (is_header, is_open) = match kind {
        RowKind::UniqueTokenRow {
            is_header, is_open, ..
        } => (*is_header, *is_open),
        _ => (family.is_header, false),
    };
    let mut lines = Vec::new();
    if is_header {
        lines.push(split_line(
            vec![
                Span::styled(toggle_arrow(is_open), Style::default().fg(COLOR_ACCENT)),
                Span::styled(
                    family.family_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ],
            vec![Span::styled(
                family.children_amount.to_string(),
                Style::default().fg(COLOR_DIM),
            )],
            width,
        ));
    }
    if is_open {
        for row in &family.tokens {
            lines.extend(card_row_lines(row, width));
        }
    }
    lines
}

/// Three lines per grid row: top edge, names, bottom edge.
fn card_row_lines(cards: &[Collectible], width: usize) -> Vec<Line<'static>> {
    let card_width = (width.saturating_sub(4) / 2).max(4);
    let inner = card_width - 2;
    let style = Style::default().fg(COLOR_BORDER);

    let mut top = vec![Span::raw("  ")];
    let mut middle = vec![Span::raw("  ")];
    let mut bottom = vec![Span::raw("  ")];
    for card in cards {
        let label = if card.name.is_empty() {
            format!("#{}", card.id)
        } else {
            card.name.clone()
        };
        let label = truncate_to_width(&label, inner.saturating_sub(1));
        let pad = inner.saturating_sub(label.width() + 1);
        top.push(Span::styled(format!("╭{}╮", "─".repeat(inner)), style));
        middle.push(Span::styled("│", style));
        middle.push(Span::raw(format!(" {}{}", label, " ".repeat(pad))));
        middle.push(Span::styled("│", style));
        bottom.push(Span::styled(format!("╰{}╯", "─".repeat(inner)), style));
    }
    vec![Line::from(top), Line::from(middle), Line::from(bottom)]
}
