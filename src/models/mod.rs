//! Wallet view-model types.
//!
//! Everything the asset list renders is described by these types: the raw
//! assets loaded from a portfolio snapshot, the per-section item union and
//! the flattened [`ListRow`] that the layout classifier walks.

mod asset;
mod collectible;
mod pool;
mod row;
mod savings;
mod section;

pub use asset::{Amount, Asset, NativeValue, PriceChange};
pub use collectible::{Collectible, TokenFamily, SHOWCASE_STABLE_ID};
pub use pool::{Pool, PoolsContainer};
pub use row::ListRow;
pub use savings::{SavingsAsset, SavingsContainer};
pub use section::{
    CoinDivider, CollectiblesStyle, Section, SectionHeader, SectionItem, SectionKind,
    SmallBalances,
};
