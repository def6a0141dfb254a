//! Row kinds and their height rules.

use super::LayoutContext;

/// Render category of a flattened row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    Header,
    ShowcaseHeader,
    CoinRow,
    CoinDivider,
    CoinSmallBalances,
    CoinSavings,
    Pools,
    UniqueTokenRow,
    Footer,
    Unknown,
}

impl ViewType {
    /// Stable numeric id of the view type.
    pub fn index(&self) -> u8 {
        match self {
            ViewType::Header => 0,
            ViewType::CoinRow => 1,
            ViewType::CoinDivider => 2,
            ViewType::CoinSmallBalances => 3,
            ViewType::CoinSavings => 4,
            ViewType::Pools => 5,
            ViewType::UniqueTokenRow => 6,
            ViewType::Footer => 7,
            ViewType::ShowcaseHeader => 8,
            ViewType::Unknown => 99,
        }
    }

    /// Whether rows of this type keep their height while the coin list is
    /// being edited.
    pub fn visible_during_coin_edit(&self) -> bool {
        matches!(
            self,
            ViewType::Header
                | ViewType::ShowcaseHeader
                | ViewType::CoinRow
                | ViewType::CoinDivider
                | ViewType::CoinSmallBalances
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewType::Header => "header",
            ViewType::ShowcaseHeader => "showcase_header",
            ViewType::CoinRow => "coin_row",
            ViewType::CoinDivider => "coin_divider",
            ViewType::CoinSmallBalances => "coin_small_balances",
            ViewType::CoinSavings => "coin_savings",
            ViewType::Pools => "pools",
            ViewType::UniqueTokenRow => "unique_token_row",
            ViewType::Footer => "footer",
            ViewType::Unknown => "unknown",
        }
    }
}

/// A view type together with the inputs its height depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowKind {
    Header,
    ShowcaseHeader,
    CoinRow {
        is_first: bool,
        is_last: bool,
    },
    CoinDivider {
        has_small_balances: bool,
    },
    CoinSmallBalances {
        is_open: bool,
        small_balances_len: usize,
    },
    CoinSavings {
        is_open: bool,
        is_last: bool,
        amount_of_rows: usize,
    },
    Pools {
        is_open: bool,
        is_last: bool,
        amount_of_rows: usize,
    },
    UniqueTokenRow {
        is_first: bool,
        is_header: bool,
        is_open: bool,
        amount_of_rows: usize,
    },
    Footer,
    Unknown,
}

impl RowKind {
    pub fn view_type(&self) -> ViewType {
        match self {
            RowKind::Header => ViewType::Header,
            RowKind::ShowcaseHeader => ViewType::ShowcaseHeader,
            RowKind::CoinRow { .. } => ViewType::CoinRow,
            RowKind::CoinDivider { .. } => ViewType::CoinDivider,
            RowKind::CoinSmallBalances { .. } => ViewType::CoinSmallBalances,
            RowKind::CoinSavings { .. } => ViewType::CoinSavings,
            RowKind::Pools { .. } => ViewType::Pools,
            RowKind::UniqueTokenRow { .. } => ViewType::UniqueTokenRow,
            RowKind::Footer => ViewType::Footer,
            RowKind::Unknown => ViewType::Unknown,
        }
    }

    /// Nominal height of the row, before edit-mode hiding.
    pub fn height(&self, ctx: &LayoutContext) -> f64 {
        let m = &ctx.metrics;
        match *self {
            RowKind::Header => {
                if ctx.hide_header {
                    0.0
                } else {
                    m.header
                }
            }
            RowKind::ShowcaseHeader => m.showcase_header,
            RowKind::CoinRow { is_first, is_last } => {
                let mut height = m.coin_row;
                if is_first {
                    height += m.first_coin_row_margin_top;
                }
                if !is_first && is_last && !ctx.small_collectibles {
                    height += m.list_footer + m.last_coin_row_additional;
                }
                height
            }
            RowKind::CoinDivider { has_small_balances } => {
                if has_small_balances {
                    m.coin_divider
                } else {
                    0.0
                }
            }
            RowKind::CoinSmallBalances {
                is_open,
                small_balances_len,
            } => {
                if small_balances_len == 0 {
                    0.0
                } else if is_open {
                    let edit_extra = if ctx.toggles.is_coin_list_edited {
                        m.edit_mode_additional
                    } else {
                        0.0
                    };
                    small_balances_len as f64 * m.coin_row
                        + m.small_balances_open_additional
                        + edit_extra
                } else {
                    m.small_balances_closed_additional
                }
            }
            RowKind::CoinSavings {
                is_open,
                is_last,
                amount_of_rows,
            } => {
                let extra = match (is_open, is_last) {
                    (true, true) => m.list_footer + m.savings_last_open_additional,
                    (true, false) => m.savings_open_additional,
                    (false, true) => m.list_footer + m.savings_last_closed_additional,
                    (false, false) => m.savings_closed_additional,
                };
                let rows = if is_open {
                    m.savings_row * amount_of_rows as f64
                } else {
                    0.0
                };
                (m.token_family_header + extra + rows).max(0.0)
            }
            RowKind::Pools {
                is_open,
                is_last,
                amount_of_rows,
            } => {
                let extra = match (is_open, is_last) {
                    (true, true) => m.list_footer + m.pools_last_open_additional,
                    (true, false) => m.pools_open_additional,
                    (false, true) => m.list_footer + m.pools_last_closed_additional,
                    (false, false) => m.pools_closed_additional,
                };
                let rows = if is_open {
                    m.coin_row * amount_of_rows as f64
                } else {
                    0.0
                };
                (m.token_family_header + extra + rows).max(0.0)
            }
            RowKind::UniqueTokenRow {
                is_first,
                is_header,
                is_open,
                amount_of_rows,
            } => {
                let header = if is_header { m.token_family_header } else { 0.0 };
                let first = if is_first {
                    m.first_unique_token_margin_top
                } else {
                    0.0
                };
                // A family with no card rows must not pick up a negative margin.
                let cards = if is_open && amount_of_rows > 0 {
                    let rows = amount_of_rows as f64;
                    rows * m.card_size + m.card_margin * (rows - 1.0) + m.extra_space_for_drop_shadow
                } else {
                    0.0
                };
                header + first + cards
            }
            RowKind::Footer => (ctx.padding_bottom - m.floating_action_button / 2.0).max(0.0),
            RowKind::Unknown => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutContext, Metrics};

    fn mobile() -> LayoutContext {
        LayoutContext::new(Metrics::mobile())
    }

    #[test]
    fn test_view_type_indices() {
        assert_eq!(ViewType::Header.index(), 0);
        assert_eq!(ViewType::ShowcaseHeader.index(), 8);
        assert_eq!(ViewType::CoinSmallBalances.index(), 3);
        assert_eq!(ViewType::Unknown.index(), 99);
    }

    #[test]
    fn test_visible_during_coin_edit() {
        assert!(ViewType::CoinRow.visible_during_coin_edit());
        assert!(ViewType::CoinDivider.visible_during_coin_edit());
        assert!(!ViewType::CoinSavings.visible_during_coin_edit());
        assert!(!ViewType::Pools.visible_during_coin_edit());
        assert!(!ViewType::UniqueTokenRow.visible_during_coin_edit());
        assert!(!ViewType::Footer.visible_during_coin_edit());
    }

    #[test]
    fn test_header_height() {
        let mut ctx = mobile();
        assert_eq!(RowKind::Header.height(&ctx), 50.0);
        ctx.hide_header = true;
        assert_eq!(RowKind::Header.height(&ctx), 0.0);
        assert_eq!(RowKind::ShowcaseHeader.height(&ctx), 380.0);
    }

    #[test]
    fn test_coin_row_height() {
        let mut ctx = mobile();
        let first = RowKind::CoinRow { is_first: true, is_last: false };
        let middle = RowKind::CoinRow { is_first: false, is_last: false };
        let last = RowKind::CoinRow { is_first: false, is_last: true };
        let only = RowKind::CoinRow { is_first: true, is_last: true };

        assert_eq!(first.height(&ctx), 46.0);
        assert_eq!(middle.height(&ctx), 40.0);
        assert_eq!(last.height(&ctx), 40.0 + 27.0 + 1.0);
        assert_eq!(only.height(&ctx), 46.0);

        ctx.small_collectibles = true;
        assert_eq!(last.height(&ctx), 40.0);
    }

    #[test]
    fn test_divider_height_requires_container() {
        let ctx = mobile();
        assert_eq!(RowKind::CoinDivider { has_small_balances: true }.height(&ctx), 30.0);
        assert_eq!(RowKind::CoinDivider { has_small_balances: false }.height(&ctx), 0.0);
    }

    #[test]
    fn test_small_balances_height() {
        let mut ctx = mobile();
        let open = RowKind::CoinSmallBalances { is_open: true, small_balances_len: 3 };
        let closed = RowKind::CoinSmallBalances { is_open: false, small_balances_len: 3 };
        let empty = RowKind::CoinSmallBalances { is_open: true, small_balances_len: 0 };

        assert_eq!(open.height(&ctx), 3.0 * 40.0 + 15.0);
        assert_eq!(closed.height(&ctx), 18.0);
        assert_eq!(empty.height(&ctx), 0.0);

        ctx.toggles.is_coin_list_edited = true;
        assert_eq!(open.height(&ctx), 3.0 * 40.0 + 15.0 + 100.0);
        assert_eq!(closed.height(&ctx), 18.0);
    }

    #[test]
    fn test_savings_height() {
        let ctx = mobile();
        let h = |is_open, is_last| {
            RowKind::CoinSavings { is_open, is_last, amount_of_rows: 2 }.height(&ctx)
        };
        assert_eq!(h(true, false), 50.0 - 7.5 + 128.0);
        assert_eq!(h(true, true), 50.0 + 27.0 - 13.0 + 128.0);
        assert_eq!(h(false, false), 45.0);
        assert_eq!(h(false, true), 50.0 + 27.0 - 10.0);
    }

    #[test]
    fn test_pools_height() {
        let ctx = mobile();
        let h = |is_open, is_last| {
            RowKind::Pools { is_open, is_last, amount_of_rows: 3 }.height(&ctx)
        };
        assert_eq!(h(true, false), 50.0 - 12.0 + 120.0);
        assert_eq!(h(true, true), 50.0 + 27.0 - 14.0 + 120.0);
        assert_eq!(h(false, false), 35.0);
        assert_eq!(h(false, true), 50.0 + 27.0 - 10.5);
    }

    #[test]
    fn test_unique_token_row_height() {
        let ctx = mobile();
        let open = RowKind::UniqueTokenRow {
            is_first: true,
            is_header: true,
            is_open: true,
            amount_of_rows: 2,
        };
        assert_eq!(open.height(&ctx), 50.0 + 4.0 + 2.0 * 168.5 + 15.0 + 19.0);

        let closed = RowKind::UniqueTokenRow {
            is_first: false,
            is_header: true,
            is_open: false,
            amount_of_rows: 2,
        };
        assert_eq!(closed.height(&ctx), 50.0);

        let chunk = RowKind::UniqueTokenRow {
            is_first: false,
            is_header: false,
            is_open: true,
            amount_of_rows: 1,
        };
        assert_eq!(chunk.height(&ctx), 168.5 + 19.0);
    }

    #[test]
    fn test_unique_token_row_zero_rows_never_negative() {
        let ctx = mobile();
        let empty = RowKind::UniqueTokenRow {
            is_first: false,
            is_header: true,
            is_open: true,
            amount_of_rows: 0,
        };
        assert_eq!(empty.height(&ctx), 50.0);
    }

    #[test]
    fn test_footer_height_clamped() {
        let mut ctx = mobile();
        ctx.padding_bottom = 100.0;
        assert_eq!(RowKind::Footer.height(&ctx), 72.0);
        ctx.padding_bottom = 10.0;
        assert_eq!(RowKind::Footer.height(&ctx), 0.0);
        assert_eq!(RowKind::Unknown.height(&ctx), 0.0);
    }
}
