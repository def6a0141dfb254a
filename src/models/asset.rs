use serde::{Deserialize, Serialize};

/// A numeric amount together with its pre-formatted display string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Amount {
    pub amount: f64,
    #[serde(default)]
    pub display: String,
}

impl Amount {
    pub fn new(amount: f64, display: impl Into<String>) -> Self {
        Self {
            amount,
            display: display.into(),
        }
    }
}

/// Balance and unit price expressed in the wallet's native currency.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NativeValue {
    pub balance: Amount,
    #[serde(default)]
    pub price: Option<Amount>,
}

/// Market price of a token and its 24h movement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceChange {
    #[serde(default)]
    pub relative_change_24h: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// A fungible token held by the wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub unique_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    pub balance: Amount,
    /// Filled in from `price` and the native currency when the snapshot loads.
    #[serde(default)]
    pub native: NativeValue,
    #[serde(default)]
    pub price: Option<PriceChange>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub is_small: bool,
}

impl Asset {
    /// Native balance amount, zero when no price is known.
    pub fn native_balance(&self) -> f64 {
        self.native.balance.amount
    }

    /// Native unit price display, empty when unpriced.
    pub fn native_price_display(&self) -> &str {
        self.native
            .price
            .as_ref()
            .map(|p| p.display.as_str())
            .unwrap_or("")
    }

    pub fn relative_change_24h(&self) -> Option<f64> {
        self.price.as_ref().and_then(|p| p.relative_change_24h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_deserialize_minimal() {
        let json = r#"{"unique_id":"eth","balance":{"amount":1.5}}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.unique_id, "eth");
        assert_eq!(asset.balance.amount, 1.5);
        assert!(asset.balance.display.is_empty());
        assert!(!asset.is_pinned);
        assert_eq!(asset.native_balance(), 0.0);
        assert_eq!(asset.native_price_display(), "");
    }

    #[test]
    fn test_relative_change() {
        let asset = Asset {
            price: Some(PriceChange {
                relative_change_24h: Some(-2.5),
                value: Some(10.0),
            }),
            ..Default::default()
        };
        assert_eq!(asset.relative_change_24h(), Some(-2.5));
    }
}
