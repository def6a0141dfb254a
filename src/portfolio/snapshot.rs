//! Portfolio snapshot document.
//!
//! A snapshot is what the wallet knows at one moment: balances, savings,
//! pools and collectibles, plus the user's pinned/hidden/showcase choices.
//! It is read from a JSON file so the list can be driven without a network.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::currency::{format_native_display, NativeCurrency};
use crate::error::SnapshotError;
use crate::models::{Amount, Asset, Collectible, Pool, SavingsAsset};

fn default_currency() -> String {
    "USD".to_string()
}

fn default_network() -> String {
    MAINNET.to_string()
}

/// Network name on which the savings container is shown.
pub const MAINNET: &str = "mainnet";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSnapshot {
    #[serde(default = "default_currency")]
    pub native_currency: String,
    #[serde(default = "default_network")]
    pub network: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub savings: Vec<SavingsAsset>,
    #[serde(default)]
    pub pools: Vec<Pool>,
    #[serde(default)]
    pub collectibles: Vec<Collectible>,
    /// Unique ids of showcased collectibles, in selection order.
    #[serde(default)]
    pub showcase: Vec<String>,
    #[serde(default)]
    pub pinned: Vec<String>,
    #[serde(default)]
    pub hidden: Vec<String>,
    #[serde(default)]
    pub is_loading: bool,
}

impl Default for PortfolioSnapshot {
    fn default() -> Self {
        Self {
            native_currency: default_currency(),
            network: default_network(),
            assets: Vec::new(),
            savings: Vec::new(),
            pools: Vec::new(),
            collectibles: Vec::new(),
            showcase: Vec::new(),
            pinned: Vec::new(),
            hidden: Vec::new(),
            is_loading: false,
        }
    }
}

impl PortfolioSnapshot {
    /// Read and normalize a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| SnapshotError::from_io(e, path))?;
        let snapshot = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            assets = snapshot.assets.len(),
            collectibles = snapshot.collectibles.len(),
            "Loaded portfolio snapshot"
        );
        Ok(snapshot)
    }

    /// Parse a snapshot from JSON text and fill in derived native values.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        let mut snapshot: PortfolioSnapshot = serde_json::from_str(raw)?;
        let currency = snapshot.currency()?;
        parse_assets_native(&mut snapshot.assets, currency);
        Ok(snapshot)
    }

    pub fn currency(&self) -> Result<&'static NativeCurrency, SnapshotError> {
        NativeCurrency::lookup(&self.native_currency)
    }

    pub fn is_mainnet(&self) -> bool {
        self.network.eq_ignore_ascii_case(MAINNET)
    }
}

/// Derive native balance and price amounts for assets that only carry a
/// unit price. Assets that already have a native balance are left alone.
pub fn parse_assets_native(assets: &mut [Asset], currency: &NativeCurrency) {
    for asset in assets.iter_mut() {
        let Some(unit_price) = asset.price.as_ref().and_then(|p| p.value) else {
            continue;
        };
        if asset.native.balance.display.is_empty() {
            let value = asset.balance.amount * unit_price;
            asset.native.balance = Amount::new(value, format_native_display(value, currency));
        }
        if asset.native.price.is_none() {
            asset.native.price = Some(Amount::new(
                unit_price,
                format_native_display(unit_price, currency),
            ));
        }
        debug!(
            asset = %asset.unique_id,
            native = asset.native.balance.amount,
            "Derived native value"
        );
    }
}
