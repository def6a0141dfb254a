//! Building list sections from wallet data.
//!
//! A [`PortfolioSnapshot`] is turned into ordered [`Section`](crate::models::Section)s
//! by [`build_wallet_sections`], using the user's [`WalletPrefs`] for
//! pinned, hidden and showcased items.

mod coins;
mod currency;
mod families;
mod sections;
mod snapshot;

pub use coins::{build_coins_list, CoinsList, COINS_TO_SHOW};
pub use currency::{format_native_display, NativeCurrency, SymbolAlignment};
pub use families::{build_unique_token_list, DEFAULT_SHOWCASE_LABEL, ROWS_PER_CHUNK};
pub use sections::{build_savings_container, build_wallet_sections, WalletPrefs};
pub use snapshot::{parse_assets_native, PortfolioSnapshot, MAINNET};
