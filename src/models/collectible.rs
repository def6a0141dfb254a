use serde::{Deserialize, Serialize};

/// Stable id of the synthetic showcase family.
pub const SHOWCASE_STABLE_ID: &str = "showcase_stable_id";

/// A single non-fungible token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Collectible {
    pub unique_id: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub name: String,
    pub family_name: String,
    #[serde(default)]
    pub family_image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One row of the collectibles section: a family (or a chunk of one).
///
/// `tokens` holds rows of at most two cards. Families with more than 50 card
/// rows are split into several chunks; only the first has `is_header` set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenFamily {
    pub family_id: usize,
    pub family_name: String,
    #[serde(default)]
    pub family_image: Option<String>,
    pub children_amount: usize,
    pub is_header: bool,
    pub unique_id: String,
    pub stable_id: String,
    pub tokens: Vec<Vec<Collectible>>,
}

impl TokenFamily {
    /// Number of card rows this family renders when open.
    pub fn amount_of_rows(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_showcase(&self) -> bool {
        self.stable_id == SHOWCASE_STABLE_ID
    }

    /// `address|id` identity of every card, in display order.
    pub fn card_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.tokens
            .iter()
            .flatten()
            .map(|c| format!("{}|{}", c.contract_address, c.id))
    }
}
