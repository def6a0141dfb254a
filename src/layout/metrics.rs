//! Dimension constants for row sizing.

use serde::{Deserialize, Serialize};

/// Every dimension the row classifier needs.
///
/// Two presets exist: [`Metrics::mobile`] carries the pixel values of the
/// phone list, [`Metrics::terminal`] expresses the same rules in terminal
/// lines. All fields are configurable through the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub header: f64,
    pub showcase_header: f64,
    pub coin_row: f64,
    pub first_coin_row_margin_top: f64,
    pub last_coin_row_additional: f64,
    pub list_footer: f64,
    pub coin_divider: f64,
    pub small_balances_open_additional: f64,
    pub small_balances_closed_additional: f64,
    pub edit_mode_additional: f64,
    pub savings_row: f64,
    pub savings_open_additional: f64,
    pub savings_closed_additional: f64,
    pub savings_last_open_additional: f64,
    pub savings_last_closed_additional: f64,
    pub pools_open_additional: f64,
    pub pools_closed_additional: f64,
    pub pools_last_open_additional: f64,
    pub pools_last_closed_additional: f64,
    pub token_family_header: f64,
    pub card_size: f64,
    pub card_margin: f64,
    pub first_unique_token_margin_top: f64,
    pub extra_space_for_drop_shadow: f64,
    pub floating_action_button: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::terminal()
    }
}

impl Metrics {
    /// Pixel metrics of the phone asset list.
    pub fn mobile() -> Self {
        Self {
            header: 50.0,
            showcase_header: 380.0,
            coin_row: 40.0,
            first_coin_row_margin_top: 6.0,
            last_coin_row_additional: 1.0,
            list_footer: 27.0,
            coin_divider: 30.0,
            small_balances_open_additional: 15.0,
            small_balances_closed_additional: 18.0,
            edit_mode_additional: 100.0,
            savings_row: 64.0,
            savings_open_additional: -7.5,
            savings_closed_additional: -5.0,
            savings_last_open_additional: -13.0,
            savings_last_closed_additional: -10.0,
            pools_open_additional: -12.0,
            pools_closed_additional: -15.0,
            pools_last_open_additional: -14.0,
            pools_last_closed_additional: -10.5,
            token_family_header: 50.0,
            card_size: 168.5,
            card_margin: 15.0,
            first_unique_token_margin_top: 4.0,
            extra_space_for_drop_shadow: 19.0,
            floating_action_button: 56.0,
        }
    }

    /// Line metrics used by the terminal renderer.
    ///
    /// Every value is a whole number of lines so row heights map directly
    /// onto rendered lines.
    pub fn terminal() -> Self {
        Self {
            header: 2.0,
            showcase_header: 3.0,
            coin_row: 1.0,
            first_coin_row_margin_top: 0.0,
            last_coin_row_additional: 0.0,
            list_footer: 1.0,
            coin_divider: 1.0,
            small_balances_open_additional: 0.0,
            small_balances_closed_additional: 0.0,
            edit_mode_additional: 1.0,
            savings_row: 1.0,
            savings_open_additional: 0.0,
            savings_closed_additional: 0.0,
            savings_last_open_additional: 0.0,
            savings_last_closed_additional: 0.0,
            pools_open_additional: 0.0,
            pools_closed_additional: 0.0,
            pools_last_open_additional: 0.0,
            pools_last_closed_additional: 0.0,
            token_family_header: 1.0,
            card_size: 3.0,
            card_margin: 0.0,
            first_unique_token_margin_top: 0.0,
            extra_space_for_drop_shadow: 1.0,
            floating_action_button: 0.0,
        }
    }

    /// Resolve a preset by name (`mobile` or `terminal`).
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mobile" => Some(Self::mobile()),
            "terminal" => Some(Self::terminal()),
            _ => None,
        }
    }
}
