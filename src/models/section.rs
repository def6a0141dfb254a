use serde::{Deserialize, Serialize};

use super::asset::Asset;
use super::collectible::TokenFamily;
use super::pool::PoolsContainer;
use super::savings::SavingsContainer;

/// Which part of the wallet a section describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Balances,
    Pools,
    Collectibles,
}

impl SectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Balances => "balances",
            SectionKind::Pools => "pools",
            SectionKind::Collectibles => "collectibles",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card size of the collectibles grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectiblesStyle {
    #[default]
    Big,
    Small,
}

/// Header descriptor rendered at the start of every section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SectionHeader {
    pub title: String,
    pub total_items: usize,
    pub total_value: String,
}

/// Separator between visible coins and the small-balances container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoinDivider {
    pub value: f64,
    #[serde(default)]
    pub value_display: String,
    /// True when there is nothing below the divider, so it shows an edit
    /// button instead of an expand toggle.
    pub default_to_edit_button: bool,
}

/// Container of coins collapsed below the divider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SmallBalances {
    pub assets: Vec<Asset>,
}

/// A row item of a section, before flattening.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionItem {
    Coin(Asset),
    CoinDivider(CoinDivider),
    SmallBalances(SmallBalances),
    Savings(SavingsContainer),
    Pools(PoolsContainer),
    Family(TokenFamily),
}

impl SectionItem {
    /// Short name of the variant, used in logs and errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SectionItem::Coin(_) => "coin",
            SectionItem::CoinDivider(_) => "coin_divider",
            SectionItem::SmallBalances(_) => "small_balances",
            SectionItem::Savings(_) => "savings",
            SectionItem::Pools(_) => "pools",
            SectionItem::Family(_) => "family",
        }
    }

    pub fn as_family(&self) -> Option<&TokenFamily> {
        match self {
            SectionItem::Family(family) => Some(family),
            _ => None,
        }
    }

    pub fn as_coin(&self) -> Option<&Asset> {
        match self {
            SectionItem::Coin(asset) => Some(asset),
            _ => None,
        }
    }

    pub fn is_small_balances(&self) -> bool {
        matches!(self, SectionItem::SmallBalances(_))
    }
}

/// One section of the asset list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub header: SectionHeader,
    pub items: Vec<SectionItem>,
    #[serde(default)]
    pub collectibles_style: CollectiblesStyle,
}

impl Section {
    pub fn new(kind: SectionKind, header: SectionHeader, items: Vec<SectionItem>) -> Self {
        Self {
            kind,
            header,
            items,
            collectibles_style: CollectiblesStyle::default(),
        }
    }

    pub fn with_collectibles_style(mut self, style: CollectiblesStyle) -> Self {
        self.collectibles_style = style;
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The small-balances container, when this section holds one.
    pub fn small_balances(&self) -> Option<&SmallBalances> {
        self.items.iter().find_map(|item| match item {
            SectionItem::SmallBalances(small) => Some(small),
            _ => None,
        })
    }
}
