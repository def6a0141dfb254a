//! Sticky header and sticky divider rules.

use super::flatten::FlatList;
use super::LayoutContext;

/// Row indices that stick to the top of the viewport.
///
/// While the coin list is edited only the first header sticks.
pub fn sticky_header_indices(flat: &FlatList, is_coin_list_edited: bool, disabled: bool) -> Vec<usize> {
    if disabled || flat.section_starts.is_empty() {
        Vec::new()
    } else if is_coin_list_edited {
        vec![0]
    } else {
        flat.sticky_indices.clone()
    }
}

/// Scroll offset past which the sticky divider overlay shows in edit mode.
pub fn edit_sticky_divider_threshold(flat: &FlatList, ctx: &LayoutContext) -> Option<f64> {
    let divider = flat.coin_divider_index?;
    let m = &ctx.metrics;
    Some(m.coin_row * (divider as f64 - 1.0) + m.first_coin_row_margin_top)
}

/// Whether the divider overlay is shown at `offset`.
pub fn edit_sticky_divider_visible(offset: f64, flat: &FlatList, ctx: &LayoutContext) -> bool {
    if !ctx.toggles.is_coin_list_edited {
        return false;
    }
    edit_sticky_divider_threshold(flat, ctx).is_some_and(|threshold| offset > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ListToggles, Metrics};
    use crate::models::{Asset, CoinDivider, Section, SectionHeader, SectionItem, SectionKind};

    fn flat() -> FlatList {
        let sections = vec![
            Section::new(
                SectionKind::Balances,
                SectionHeader::default(),
                vec![
                    SectionItem::Coin(Asset::default()),
                    SectionItem::Coin(Asset::default()),
                    SectionItem::CoinDivider(CoinDivider::default()),
                ],
            ),
            Section::new(SectionKind::Pools, SectionHeader::default(), vec![]),
        ];
        FlatList::build(&sections, &ListToggles::new(), false)
    }

    #[test]
    fn test_sticky_indices() {
        let flat = flat();
        assert_eq!(sticky_header_indices(&flat, false, false), vec![0, 4]);
        assert_eq!(sticky_header_indices(&flat, true, false), vec![0]);
        assert!(sticky_header_indices(&flat, false, true).is_empty());
    }

    #[test]
    fn test_edit_sticky_divider() {
        let flat = flat();
        let mut ctx = LayoutContext::new(Metrics::mobile());
        // divider at index 3: 40 * 2 + 6
        assert_eq!(edit_sticky_divider_threshold(&flat, &ctx), Some(86.0));

        assert!(!edit_sticky_divider_visible(200.0, &flat, &ctx));
        ctx.toggles.is_coin_list_edited = true;
        assert!(!edit_sticky_divider_visible(86.0, &flat, &ctx));
        assert!(edit_sticky_divider_visible(86.5, &flat, &ctx));
    }
}
