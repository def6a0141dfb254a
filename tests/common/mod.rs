//! Common test fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! let app = common::demo_app(20.0);
//! ```

#![allow(dead_code)]

use walletlist::app::App;
use walletlist::layout::{FlatList, LayoutContext, ListToggles, Metrics};
use walletlist::models::{Amount, Asset, Collectible, NativeValue, PriceChange, Section};
use walletlist::portfolio::{build_wallet_sections, PortfolioSnapshot, WalletPrefs};
use walletlist::startup::ListConfig;

/// The snapshot shipped in `demos/`.
pub const DEMO_SNAPSHOT: &str = include_str!("../../demos/portfolio.json");

pub fn demo_snapshot() -> PortfolioSnapshot {
    PortfolioSnapshot::from_json(DEMO_SNAPSHOT).expect("demo snapshot parses")
}

/// A coin worth `native` dollars.
pub fn coin(id: &str, native: f64) -> Asset {
    Asset {
        unique_id: id.to_string(),
        address: format!("0x{}", id),
        name: id.to_string(),
        symbol: id.to_uppercase(),
        balance: Amount::new(1.0, format!("1 {}", id.to_uppercase())),
        native: NativeValue {
            balance: Amount::new(native, format!("${:.2}", native)),
            price: Some(Amount::new(native, format!("${:.2}", native))),
        },
        price: Some(PriceChange {
            relative_change_24h: Some(0.5),
            value: Some(native),
        }),
        ..Default::default()
    }
}

pub fn collectible(family: &str, id: usize) -> Collectible {
    Collectible {
        unique_id: format!("{}_{}", family, id),
        id: id.to_string(),
        contract_address: format!("0x{}", family.to_lowercase()),
        name: format!("{} #{}", family, id),
        family_name: family.to_string(),
        ..Default::default()
    }
}

/// `coins` coins of $100 and a family of `cards` collectibles.
pub fn snapshot(coins: usize, family: &str, cards: usize) -> PortfolioSnapshot {
    PortfolioSnapshot {
        assets: (0..coins).map(|i| coin(&format!("c{}", i), 100.0)).collect(),
        collectibles: (0..cards).map(|i| collectible(family, i)).collect(),
        ..Default::default()
    }
}

pub fn sections(snapshot: &PortfolioSnapshot) -> Vec<Section> {
    build_wallet_sections(snapshot, &WalletPrefs::from_snapshot(snapshot))
        .expect("sections build")
}

pub fn flatten(snapshot: &PortfolioSnapshot, toggles: &ListToggles) -> FlatList {
    FlatList::build(&sections(snapshot), toggles, false)
}

pub fn mobile_ctx(toggles: ListToggles) -> LayoutContext {
    LayoutContext::new(Metrics::mobile()).with_toggles(toggles)
}

/// App over `snapshot` with a viewport of `height` lines.
pub fn app_with(snapshot: PortfolioSnapshot, height: f64) -> App {
    let mut app = App::new(ListConfig::default(), snapshot);
    app.set_viewport_height(height);
    app
}

pub fn demo_app(height: f64) -> App {
    app_with(demo_snapshot(), height)
}
