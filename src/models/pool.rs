use serde::{Deserialize, Serialize};

/// A liquidity pool position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pool {
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub percentage_owned: f64,
    #[serde(default)]
    pub total_native_value: f64,
}

/// The single row of the pools section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PoolsContainer {
    pub pools: Vec<Pool>,
    pub total_value: f64,
    #[serde(default)]
    pub total_display: String,
}
