use crate::models::{Asset, ListRow, SavingsAsset, SectionItem};

use super::ChangeSet;

/// The asset fields a coin row actually displays.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevantAssetInfo<'a> {
    pub address: &'a str,
    pub balance_display: &'a str,
    pub native_balance_display: &'a str,
    pub relative_change_24h: Option<f64>,
}

impl<'a> From<&'a Asset> for RelevantAssetInfo<'a> {
    fn from(asset: &'a Asset) -> Self {
        Self {
            address: &asset.address,
            balance_display: &asset.balance.display,
            native_balance_display: &asset.native.balance.display,
            relative_change_24h: asset.relative_change_24h(),
        }
    }
}

fn assets_differ(prev: &[Asset], next: &[Asset]) -> bool {
    prev.len() != next.len()
        || prev
            .iter()
            .zip(next)
            .any(|(a, b)| RelevantAssetInfo::from(a) != RelevantAssetInfo::from(b))
}

fn savings_differ(prev: &[SavingsAsset], next: &[SavingsAsset]) -> bool {
    prev.len() != next.len()
        || prev.iter().zip(next).any(|(a, b)| {
            a.address != b.address
                || a.underlying_balance_native_value != b.underlying_balance_native_value
                || a.lifetime_supply_interest_accrued_native
                    != b.lifetime_supply_interest_accrued_native
        })
}

/// Whether `next` must be re-rendered in place of `prev`.
///
/// Only the fields a row displays are compared. Nested container changes
/// are also recorded on `changes` so the layout cache can re-measure them.
pub fn has_row_changed(prev: &ListRow, next: &ListRow, changes: &mut ChangeSet) -> bool {
    match (prev, next) {
        (ListRow::Footer, ListRow::Footer) => false,
        (ListRow::Header { header: a, .. }, ListRow::Header { header: b, .. }) => {
            a.title != b.title || a.total_items != b.total_items || a.total_value != b.total_value
        }
        (ListRow::Item { item: a, .. }, ListRow::Item { item: b, .. }) => {
            item_changed(a, b, changes)
        }
        _ => true,
    }
}

fn item_changed(prev: &SectionItem, next: &SectionItem, changes: &mut ChangeSet) -> bool {
    match (prev, next) {
        (SectionItem::Coin(a), SectionItem::Coin(b)) => {
            a.unique_id != b.unique_id
                || a.is_pinned != b.is_pinned
                || RelevantAssetInfo::from(a) != RelevantAssetInfo::from(b)
        }
        (SectionItem::CoinDivider(a), SectionItem::CoinDivider(b)) => {
            a.value != b.value || a.default_to_edit_button != b.default_to_edit_button
        }
        (SectionItem::SmallBalances(a), SectionItem::SmallBalances(b)) => {
            let changed = assets_differ(&a.assets, &b.assets);
            if changed {
                changes.small_balances_changed = true;
            }
            changed
        }
        (SectionItem::Savings(a), SectionItem::Savings(b)) => {
            let changed = a.total_value != b.total_value || savings_differ(&a.assets, &b.assets);
            if changed {
                changes.savings_changed = true;
            }
            changed
        }
        (SectionItem::Pools(a), SectionItem::Pools(b)) => {
            a.total_value != b.total_value
                || a.pools.len() != b.pools.len()
                || a.pools.iter().zip(&b.pools).any(|(p, q)| {
                    p.address != q.address
                        || p.percentage_owned != q.percentage_owned
                        || p.total_native_value != q.total_native_value
                })
        }
        (SectionItem::Family(a), SectionItem::Family(b)) => {
            a.unique_id != b.unique_id
                || a.family_id != b.family_id
                || a.family_name != b.family_name
                || a.children_amount != b.children_amount
                || !a.card_keys().eq(b.card_keys())
        }
        _ => true,
    }
}
