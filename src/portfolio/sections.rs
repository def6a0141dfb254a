//! Assembling the list sections from a snapshot.

use std::collections::BTreeSet;

use tracing::debug;

use super::coins::build_coins_list;
use super::currency::{format_native_display, NativeCurrency};
use super::families::{build_unique_token_list, DEFAULT_SHOWCASE_LABEL};
use super::snapshot::PortfolioSnapshot;
use crate::error::SnapshotError;
use crate::models::{
    CollectiblesStyle, PoolsContainer, SavingsAsset, SavingsContainer, Section, SectionHeader,
    SectionItem, SectionKind,
};

/// The user's list choices, kept apart from the snapshot so they can be
/// edited without reloading it.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletPrefs {
    pub pinned: BTreeSet<String>,
    pub hidden: BTreeSet<String>,
    pub showcase: Vec<String>,
    pub showcase_label: String,
    pub is_coin_list_edited: bool,
    pub collectibles_style: CollectiblesStyle,
}

impl Default for WalletPrefs {
    fn default() -> Self {
        Self {
            pinned: BTreeSet::new(),
            hidden: BTreeSet::new(),
            showcase: Vec::new(),
            showcase_label: DEFAULT_SHOWCASE_LABEL.to_string(),
            is_coin_list_edited: false,
            collectibles_style: CollectiblesStyle::Big,
        }
    }
}

impl WalletPrefs {
    /// Seed preferences from the choices stored in a snapshot.
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            pinned: snapshot.pinned.iter().cloned().collect(),
            hidden: snapshot.hidden.iter().cloned().collect(),
            showcase: snapshot.showcase.clone(),
            ..Self::default()
        }
    }

    pub fn with_showcase_label(mut self, label: impl Into<String>) -> Self {
        self.showcase_label = label.into();
        self
    }

    pub fn with_collectibles_style(mut self, style: CollectiblesStyle) -> Self {
        self.collectibles_style = style;
        self
    }

    /// Pin or unpin a coin. Pinning unhides it. Returns the new pinned state.
    pub fn toggle_pinned(&mut self, unique_id: &str) -> bool {
        if self.pinned.remove(unique_id) {
            false
        } else {
            self.hidden.remove(unique_id);
            self.pinned.insert(unique_id.to_string());
            true
        }
    }

    /// Hide or unhide a coin. Hiding unpins it. Returns the new hidden state.
    pub fn toggle_hidden(&mut self, unique_id: &str) -> bool {
        if self.hidden.remove(unique_id) {
            false
        } else {
            self.pinned.remove(unique_id);
            self.hidden.insert(unique_id.to_string());
            true
        }
    }
}

/// Sum savings balances and price the interest each asset has earned.
pub fn build_savings_container(
    savings: &[SavingsAsset],
    currency: &NativeCurrency,
) -> SavingsContainer {
    let assets: Vec<SavingsAsset> = savings
        .iter()
        .map(|asset| SavingsAsset {
            lifetime_supply_interest_accrued_native: asset
                .lifetime_supply_interest_accrued
                .map(|accrued| accrued * asset.underlying_price)
                .unwrap_or(0.0),
            ..asset.clone()
        })
        .collect();
    let total_value: f64 = assets.iter().map(|a| a.underlying_balance_native_value).sum();

    SavingsContainer {
        assets,
        total_value,
        total_display: format_native_display(total_value, currency),
    }
}

/// Build the list sections in display order: balances, pools, collectibles.
/// Sections whose header counts no items are left out.
pub fn build_wallet_sections(
    snapshot: &PortfolioSnapshot,
    prefs: &WalletPrefs,
) -> Result<Vec<Section>, SnapshotError> {
    let currency = snapshot.currency()?;

    let pools_total: f64 = snapshot.pools.iter().map(|p| p.total_native_value).sum();
    let pools_display = format_native_display(pools_total, currency);

    let balances = if snapshot.is_loading {
        // nothing to split yet; one placeholder row keeps the header
        Section::new(
            SectionKind::Balances,
            SectionHeader {
                title: "Balances".to_string(),
                total_items: 1,
                total_value: String::new(),
            },
            Vec::new(),
        )
    } else {
        let coins = build_coins_list(
            &snapshot.assets,
            currency,
            prefs.is_coin_list_edited,
            &prefs.pinned,
            &prefs.hidden,
        );
        let mut items = coins.items;
        let mut savings_total = 0.0;
        if snapshot.is_mainnet() {
            let savings = build_savings_container(&snapshot.savings, currency);
            savings_total = savings.total_value;
            items.push(SectionItem::Savings(savings));
        }
        let total = coins.total_balances_value + savings_total + pools_total;
        Section::new(
            SectionKind::Balances,
            SectionHeader {
                title: "Balances".to_string(),
                total_items: snapshot.assets.len(),
                total_value: format_native_display(total, currency),
            },
            items,
        )
    };

    let pools = Section::new(
        SectionKind::Pools,
        SectionHeader {
            title: "Pools".to_string(),
            total_items: snapshot.pools.len(),
            total_value: pools_display.clone(),
        },
        vec![SectionItem::Pools(PoolsContainer {
            pools: snapshot.pools.clone(),
            total_value: pools_total,
            total_display: pools_display,
        })],
    );

    let families =
        build_unique_token_list(&snapshot.collectibles, &prefs.showcase, &prefs.showcase_label);
    let collectibles = Section::new(
        SectionKind::Collectibles,
        SectionHeader {
            title: "Collectibles".to_string(),
            total_items: snapshot.collectibles.len(),
            total_value: String::new(),
        },
        families.into_iter().map(SectionItem::Family).collect(),
    )
    .with_collectibles_style(prefs.collectibles_style);

    let sections: Vec<Section> = [balances, pools, collectibles]
        .into_iter()
        .filter(|section| section.header.total_items > 0)
        .collect();

    debug!(
        sections = sections.len(),
        rows = sections.iter().map(|s| s.items.len()).sum::<usize>(),
        "Built wallet sections"
    );
    Ok(sections)
}
