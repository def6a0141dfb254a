//! Row layout classification.
//!
//! Maps a flattened row index to its [`RowLayout`]. Classification never
//! fails: rows that cannot be sized are reported as `Unknown` with zero
//! height and logged. [`validate_sections`] offers the strict variant.

use std::collections::HashSet;

use tracing::warn;

use crate::error::{ErrorContext, LayoutError, WalletListError};
use crate::models::{ListRow, Section, SectionItem, SectionKind};

use super::flatten::FlatList;
use super::toggles::family_key;
use super::view_types::RowKind;
use super::{LayoutContext, RowLayout};

/// Classify the row at `index`.
pub fn classify(flat: &FlatList, index: usize, ctx: &LayoutContext) -> RowLayout {
    let row = match flat.row(index) {
        Ok(row) => row,
        Err(err) => {
            let err = WalletListError::from(err).with_context(row_context(flat, index, None));
            warn!(
                error_code = err.error_code(),
                context = %err.context_log_string(),
                "{}",
                err
            );
            return RowLayout::new(RowKind::Unknown, ctx);
        }
    };

    let kind = match row {
        ListRow::Header { .. } if ctx.showcase => RowKind::ShowcaseHeader,
        ListRow::Header { .. } => RowKind::Header,
        ListRow::Footer => RowKind::Footer,
        ListRow::Item { section, item, .. } => classify_item(flat, index, *section, item, ctx),
    };
    RowLayout::new(kind, ctx)
}

/// Where a classification problem happened, for log lines.
fn row_context(flat: &FlatList, index: usize, section: Option<usize>) -> ErrorContext {
    let ctx = ErrorContext::new("classify_row")
        .with_component("layout")
        .with_row_index(index);
    match section.and_then(|s| flat.section_kinds.get(s)) {
        Some(kind) => ctx.with_section(kind.name()),
        None => ctx,
    }
}

/// Classify every row of `flat` in order.
pub fn classify_all(flat: &FlatList, ctx: &LayoutContext) -> Vec<RowLayout> {
    (0..flat.len()).map(|i| classify(flat, i, ctx)).collect()
}

fn classify_item(
    flat: &FlatList,
    index: usize,
    section: usize,
    item: &SectionItem,
    ctx: &LayoutContext,
) -> RowKind {
    let (Some(&start), Some(&len)) = (flat.section_starts.get(section), flat.section_lens.get(section))
    else {
        warn!(
            section,
            context = %row_context(flat, index, None).to_log_string(),
            "row refers to a section that was not flattened"
        );
        return RowKind::Unknown;
    };
    let is_first_in_section = index == start + 1;
    let is_last_in_section = index == start + len;
    let is_last_in_list = matches!(flat.rows.get(index + 1), Some(ListRow::Footer));
    let toggles = &ctx.toggles;

    match item {
        SectionItem::Coin(_) => RowKind::CoinRow {
            is_first: is_first_in_section,
            is_last: is_last_in_section,
        },
        SectionItem::CoinDivider(_) => RowKind::CoinDivider {
            has_small_balances: flat
                .next_in_section(index)
                .is_some_and(SectionItem::is_small_balances),
        },
        SectionItem::SmallBalances(small) => {
            if matches!(flat.prev_in_section(index), Some(SectionItem::CoinDivider(_))) {
                RowKind::CoinSmallBalances {
                    is_open: toggles.is_small_balances_open,
                    small_balances_len: small.assets.len(),
                }
            } else {
                warn!(
                    context = %row_context(flat, index, Some(section)).to_log_string(),
                    "small balances container without a divider"
                );
                RowKind::Unknown
            }
        }
        SectionItem::Savings(savings) => RowKind::CoinSavings {
            is_open: toggles.is_savings_open,
            is_last: is_last_in_list,
            amount_of_rows: savings.assets.len(),
        },
        SectionItem::Pools(pools) => RowKind::Pools {
            is_open: toggles.is_pools_open,
            is_last: is_last_in_list,
            amount_of_rows: pools.pools.len(),
        },
        SectionItem::Family(family) => RowKind::UniqueTokenRow {
            is_first: is_first_in_section,
            is_header: family.is_header,
            is_open: toggles.is_family_open(&family_key(&family.family_name, flat.showcase)),
            amount_of_rows: family.amount_of_rows(),
        },
    }
}

/// Check the structural rules the classifier relies on.
///
/// Balances may hold coins, then at most one divider, at most one
/// small-balances container (directly after the divider) and at most one
/// savings container, in that order. Pools containers belong to the pools
/// section and families to the collectibles section.
pub fn validate_sections(sections: &[Section]) -> Result<(), LayoutError> {
    let mut seen = HashSet::new();
    for section in sections {
        if !seen.insert(section.kind) {
            return Err(LayoutError::DuplicateSection {
                section: section.name().to_string(),
            });
        }

        let mut dividers = 0;
        let mut small_balances = 0;
        let mut savings = 0;
        for (item_index, item) in section.items.iter().enumerate() {
            let misplaced = || LayoutError::MisplacedItem {
                section: section.name().to_string(),
                item_index,
                item_kind: item.kind_name(),
            };
            let allowed = match item {
                SectionItem::Coin(_)
                | SectionItem::CoinDivider(_)
                | SectionItem::SmallBalances(_)
                | SectionItem::Savings(_) => section.kind == SectionKind::Balances,
                SectionItem::Pools(_) => section.kind == SectionKind::Pools,
                SectionItem::Family(_) => section.kind == SectionKind::Collectibles,
            };
            if !allowed {
                return Err(misplaced());
            }

            match item {
                SectionItem::Coin(_) if dividers + small_balances + savings > 0 => {
                    return Err(misplaced());
                }
                SectionItem::CoinDivider(_) => {
                    dividers += 1;
                    if small_balances + savings > 0 {
                        return Err(misplaced());
                    }
                }
                SectionItem::SmallBalances(_) => {
                    small_balances += 1;
                    let after_divider = item_index > 0
                        && matches!(section.items[item_index - 1], SectionItem::CoinDivider(_));
                    if !after_divider {
                        return Err(LayoutError::OrphanSmallBalances {
                            section: section.name().to_string(),
                            item_index,
                        });
                    }
                }
                SectionItem::Savings(_) => savings += 1,
                _ => {}
            }

            for (count, kind) in [
                (dividers, "coin_divider"),
                (small_balances, "small_balances"),
                (savings, "savings"),
            ] {
                if count > 1 {
                    return Err(LayoutError::DuplicateContainer {
                        section: section.name().to_string(),
                        item_kind: kind,
                    });
                }
            }
        }
    }
    Ok(())
}
