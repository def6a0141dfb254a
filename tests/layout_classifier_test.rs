// Integration tests for row classification and the layout cache

mod common;

use common::{coin, flatten, mobile_ctx, snapshot};
use walletlist::layout::{classify, classify_all, LayoutCache, ListToggles, RowKind, ViewType};

// rows: header, c0, c1, divider, savings, collectibles header, family, footer
const FAMILY_ROW: usize = 6;

#[test]
fn test_family_with_four_children_opened_has_two_card_rows() {
    let snap = snapshot(2, "Apes", 4);
    let toggles = ListToggles::new().with_open_family("Apes");
    let flat = flatten(&snap, &toggles);
    let layout = classify(&flat, FAMILY_ROW, &mobile_ctx(toggles));

    assert_eq!(
        layout.kind,
        RowKind::UniqueTokenRow {
            is_first: true,
            is_header: true,
            is_open: true,
            amount_of_rows: 2,
        }
    );
    assert_eq!(layout.height, 50.0 + 4.0 + 2.0 * 168.5 + 15.0 + 19.0);
}

#[test]
fn test_closed_family_is_header_only() {
    let snap = snapshot(2, "Apes", 4);
    let toggles = ListToggles::new();
    let flat = flatten(&snap, &toggles);
    let layout = classify(&flat, FAMILY_ROW, &mobile_ctx(toggles));
    assert_eq!(layout.height, 50.0 + 4.0);
}

#[test]
fn test_balances_rows() {
    let snap = snapshot(2, "Apes", 4);
    let toggles = ListToggles::new();
    let flat = flatten(&snap, &toggles);
    let layouts = classify_all(&flat, &mobile_ctx(toggles));
    let types: Vec<ViewType> = layouts.iter().map(|l| l.view_type()).collect();

    assert_eq!(
        types,
        vec![
            ViewType::Header,
            ViewType::CoinRow,
            ViewType::CoinRow,
            ViewType::CoinDivider,
            ViewType::CoinSavings,
            ViewType::Header,
            ViewType::UniqueTokenRow,
            ViewType::Footer,
        ]
    );
    assert_eq!(layouts[1].height, 46.0);
    assert_eq!(layouts[2].height, 40.0);
    // nothing below the divider
    assert_eq!(layouts[3].height, 0.0);
    assert_eq!(layouts[4].height, 45.0);
}

#[test]
fn test_small_balances_open_and_closed() {
    let mut snap = snapshot(6, "Apes", 1);
    snap.assets.push(coin("dust", 0.2));

    let closed = ListToggles::new();
    let flat = flatten(&snap, &closed);
    let layouts = classify_all(&flat, &mobile_ctx(closed));
    let small = layouts
        .iter()
        .position(|l| l.view_type() == ViewType::CoinSmallBalances)
        .unwrap();
    assert_eq!(layouts[small - 1].height, 30.0);
    assert_eq!(layouts[small].height, 18.0);

    let open = ListToggles::new().with_small_balances_open(true);
    let flat = flatten(&snap, &open);
    let layout = classify(&flat, small, &mobile_ctx(open));
    // c5 and dust
    assert_eq!(layout.height, 2.0 * 40.0 + 15.0);
}

#[test]
fn test_edit_mode_collapses_everything_but_coins() {
    let snap = snapshot(2, "Apes", 4);
    let toggles = ListToggles::new()
        .with_open_family("Apes")
        .with_coin_list_edited(true);
    let flat = flatten(&snap, &toggles);
    let layouts = classify_all(&flat, &mobile_ctx(toggles));

    assert_eq!(layouts[1].effective_height(true), 46.0);
    assert_eq!(layouts[4].effective_height(true), 0.0);
    assert_eq!(layouts[FAMILY_ROW].effective_height(true), 0.0);
    assert_eq!(layouts[5].effective_height(true), 50.0);
}

#[test]
fn test_hidden_and_showcase_headers() {
    let snap = snapshot(2, "Apes", 4);
    let toggles = ListToggles::new();
    let flat = flatten(&snap, &toggles);

    let hidden = mobile_ctx(toggles.clone()).with_hide_header(true);
    assert_eq!(classify(&flat, 0, &hidden).height, 0.0);

    let showcase = mobile_ctx(toggles).with_showcase(true);
    let layout = classify(&flat, 0, &showcase);
    assert_eq!(layout.kind, RowKind::ShowcaseHeader);
    assert_eq!(layout.height, 380.0);
}

#[test]
fn test_out_of_range_row_is_unknown() {
    let snap = snapshot(2, "Apes", 4);
    let toggles = ListToggles::new();
    let flat = flatten(&snap, &toggles);
    let layout = classify(&flat, 99, &mobile_ctx(toggles));
    assert_eq!(layout.kind, RowKind::Unknown);
    assert_eq!(layout.height, 0.0);
}

#[test]
fn test_cache_offsets_follow_heights() {
    let snap = snapshot(2, "Apes", 4);
    let toggles = ListToggles::new();
    let flat = flatten(&snap, &toggles);
    let mut cache = LayoutCache::new();
    cache.rebuild(&flat, &mobile_ctx(toggles));

    assert_eq!(cache.len(), flat.len());
    // header 50 + 46 + 40 + 0 + 45 + header 50
    assert_eq!(cache.offset_of(FAMILY_ROW), Some(231.0));
    assert_eq!(cache.total_height(), 231.0 + 54.0);
    assert_eq!(cache.row_at_offset(100.0), Some(2));
}
