use serde::{Deserialize, Serialize};

/// A lending position (cToken style) shown in the savings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SavingsAsset {
    pub address: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub underlying_balance_native_value: f64,
    #[serde(default)]
    pub underlying_price: f64,
    #[serde(default)]
    pub lifetime_supply_interest_accrued: Option<f64>,
    #[serde(default)]
    pub lifetime_supply_interest_accrued_native: f64,
}

/// The single savings row at the end of the balances section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SavingsContainer {
    pub assets: Vec<SavingsAsset>,
    pub total_value: f64,
    #[serde(default)]
    pub total_display: String,
}
