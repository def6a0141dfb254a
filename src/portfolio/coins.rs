//! Splitting wallet coins into the rows above and below the divider.

use std::collections::BTreeSet;

use super::currency::{format_native_display, NativeCurrency};
use crate::models::{Asset, CoinDivider, SectionItem, SmallBalances};

/// Coins always shown above the divider when there are enough of them.
pub const COINS_TO_SHOW: usize = 5;

/// Balance section rows plus the totals the headers need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinsList {
    pub items: Vec<SectionItem>,
    pub small_balances_value: f64,
    pub total_balances_value: f64,
}

fn total(assets: &[Asset]) -> f64 {
    assets.iter().map(Asset::native_balance).sum()
}

/// Build the coin rows of the balances section.
///
/// `assets` is expected to be sorted already. Hidden coins only appear (in
/// the small-balances container) while the list is being edited.
pub fn build_coins_list(
    assets: &[Asset],
    currency: &NativeCurrency,
    is_edited: bool,
    pinned: &BTreeSet<String>,
    hidden: &BTreeSet<String>,
) -> CoinsList {
    if assets.is_empty() {
        return CoinsList::default();
    }

    let mut standard = Vec::new();
    let mut pinned_assets = Vec::new();
    let mut small = Vec::new();
    let mut hidden_assets = Vec::new();

    for asset in assets {
        let mut asset = asset.clone();
        if hidden.contains(&asset.unique_id) {
            asset.is_hidden = true;
            asset.is_small = true;
            hidden_assets.push(asset);
        } else if pinned.contains(&asset.unique_id) {
            asset.is_pinned = true;
            asset.is_small = false;
            pinned_assets.push(asset);
        } else if asset.native_balance() > currency.small_threshold {
            asset.is_small = false;
            standard.push(asset);
        } else {
            asset.is_small = true;
            small.push(asset);
        }
    }

    let divider_index = pinned_assets.len().max(COINS_TO_SHOW);
    let mut non_hidden = pinned_assets;
    non_hidden.extend(standard);

    let (above, mut below) = if non_hidden.is_empty() {
        let split = small.len().min(COINS_TO_SHOW);
        let below = small.split_off(split);
        (small, below)
    } else {
        let split = non_hidden.len().min(divider_index);
        let mut below = non_hidden.split_off(split);
        below.extend(small);
        (non_hidden, below)
    };

    let small_balances_value = total(&below);
    let total_balances_value = total(&above) + small_balances_value;
    let default_to_edit_button = below.is_empty();

    if is_edited {
        below.extend(hidden_assets);
    }

    let mut items: Vec<SectionItem> = above.into_iter().map(SectionItem::Coin).collect();
    items.push(SectionItem::CoinDivider(CoinDivider {
        value: small_balances_value,
        value_display: format_native_display(small_balances_value, currency),
        default_to_edit_button,
    }));
    if !below.is_empty() {
        items.push(SectionItem::SmallBalances(SmallBalances { assets: below }));
    }

    CoinsList {
        items,
        small_balances_value,
        total_balances_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, NativeValue};

    fn coin(id: &str, native: f64) -> Asset {
        Asset {
            unique_id: id.to_string(),
            symbol: id.to_uppercase(),
            balance: Amount::new(1.0, "1"),
            native: NativeValue {
                balance: Amount::new(native, format!("${}", native)),
                price: None,
            },
            ..Default::default()
        }
    }

    fn ids(set: &[&str]) -> BTreeSet<String> {
        set.iter().map(|s| s.to_string()).collect()
    }

    fn coin_ids(items: &[SectionItem]) -> Vec<&str> {
        items
            .iter()
            .filter_map(SectionItem::as_coin)
            .map(|a| a.unique_id.as_str())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let list = build_coins_list(&[], NativeCurrency::usd(), false, &ids(&[]), &ids(&[]));
        assert!(list.items.is_empty());
        assert_eq!(list.total_balances_value, 0.0);
        assert_eq!(list.small_balances_value, 0.0);
    }

    #[test]
    fn test_few_large_coins_have_divider_only() {
        let assets = vec![coin("a", 100.0), coin("b", 50.0)];
        let list = build_coins_list(&assets, NativeCurrency::usd(), false, &ids(&[]), &ids(&[]));
        assert_eq!(list.items.len(), 3);
        assert_eq!(coin_ids(&list.items), vec!["a", "b"]);
        match &list.items[2] {
            SectionItem::CoinDivider(divider) => {
                assert!(divider.default_to_edit_button);
                assert_eq!(divider.value, 0.0);
            }
            other => panic!("expected divider, got {:?}", other),
        }
        assert_eq!(list.total_balances_value, 150.0);
    }

    #[test]
    fn test_overflow_and_small_go_below() {
        let assets: Vec<Asset> = (0..7)
            .map(|i| coin(&format!("c{}", i), 10.0))
            .chain(std::iter::once(coin("dust", 0.5)))
            .collect();
        let list = build_coins_list(&assets, NativeCurrency::usd(), false, &ids(&[]), &ids(&[]));
        assert_eq!(coin_ids(&list.items).len(), COINS_TO_SHOW);

        let small = match list.items.last() {
            Some(SectionItem::SmallBalances(small)) => small,
            other => panic!("expected small balances, got {:?}", other),
        };
        let below: Vec<&str> = small.assets.iter().map(|a| a.unique_id.as_str()).collect();
        assert_eq!(below, vec!["c5", "c6", "dust"]);
        assert!(small.assets[2].is_small);
        assert_eq!(list.small_balances_value, 20.5);
        assert_eq!(list.total_balances_value, 70.5);
    }

    #[test]
    fn test_pinned_first_and_extend_divider() {
        let assets: Vec<Asset> = (0..8).map(|i| coin(&format!("c{}", i), 10.0)).collect();
        let pinned = ids(&["c7", "c6", "c5", "c4", "c3", "c2"]);
        let list = build_coins_list(&assets, NativeCurrency::usd(), false, &pinned, &ids(&[]));
        let above = coin_ids(&list.items);
        assert_eq!(above.len(), 6);
        assert_eq!(&above[..6], &["c2", "c3", "c4", "c5", "c6", "c7"]);
        assert!(list.items[0].as_coin().unwrap().is_pinned);
    }

    #[test]
    fn test_only_small_coins_fill_above() {
        let assets: Vec<Asset> = (0..6).map(|i| coin(&format!("s{}", i), 0.1)).collect();
        let list = build_coins_list(&assets, NativeCurrency::usd(), false, &ids(&[]), &ids(&[]));
        assert_eq!(coin_ids(&list.items).len(), 5);
        let small = list.items.last().and_then(|item| match item {
            SectionItem::SmallBalances(s) => Some(s),
            _ => None,
        });
        assert_eq!(small.map(|s| s.assets.len()), Some(1));
    }

    #[test]
    fn test_hidden_only_visible_while_editing() {
        let assets = vec![coin("a", 100.0), coin("secret", 100.0)];
        let hidden = ids(&["secret"]);

        let normal = build_coins_list(&assets, NativeCurrency::usd(), false, &ids(&[]), &hidden);
        assert_eq!(normal.items.len(), 2);
        assert_eq!(normal.total_balances_value, 100.0);

        let edited = build_coins_list(&assets, NativeCurrency::usd(), true, &ids(&[]), &hidden);
        assert_eq!(edited.items.len(), 3);
        match (&edited.items[1], &edited.items[2]) {
            (SectionItem::CoinDivider(divider), SectionItem::SmallBalances(small)) => {
                // computed before hidden coins were appended
                assert!(divider.default_to_edit_button);
                assert!(small.assets[0].is_hidden);
            }
            other => panic!("unexpected rows {:?}", other),
        }
    }
}
