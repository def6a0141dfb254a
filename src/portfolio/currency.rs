//! Native currency table and value formatting.

use crate::error::SnapshotError;

/// Which side of the number the currency symbol is written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolAlignment {
    Left,
    Right,
}

/// A currency balances can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeCurrency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub decimals: usize,
    pub alignment: SymbolAlignment,
    /// Coins worth this much or less are collapsed into small balances.
    pub small_threshold: f64,
}

const CURRENCIES: &[NativeCurrency] = &[
    NativeCurrency {
        code: "USD",
        symbol: "$",
        decimals: 2,
        alignment: SymbolAlignment::Left,
        small_threshold: 1.0,
    },
    NativeCurrency {
        code: "EUR",
        symbol: "€",
        decimals: 2,
        alignment: SymbolAlignment::Left,
        small_threshold: 1.0,
    },
    NativeCurrency {
        code: "GBP",
        symbol: "£",
        decimals: 2,
        alignment: SymbolAlignment::Left,
        small_threshold: 1.0,
    },
    NativeCurrency {
        code: "AUD",
        symbol: "A$",
        decimals: 2,
        alignment: SymbolAlignment::Left,
        small_threshold: 1.0,
    },
    NativeCurrency {
        code: "CNY",
        symbol: "¥",
        decimals: 2,
        alignment: SymbolAlignment::Left,
        small_threshold: 5.0,
    },
    NativeCurrency {
        code: "KRW",
        symbol: "₩",
        decimals: 0,
        alignment: SymbolAlignment::Left,
        small_threshold: 1000.0,
    },
    NativeCurrency {
        code: "RUB",
        symbol: "₽",
        decimals: 2,
        alignment: SymbolAlignment::Right,
        small_threshold: 75.0,
    },
    NativeCurrency {
        code: "INR",
        symbol: "₹",
        decimals: 2,
        alignment: SymbolAlignment::Left,
        small_threshold: 70.0,
    },
    NativeCurrency {
        code: "JPY",
        symbol: "¥",
        decimals: 0,
        alignment: SymbolAlignment::Left,
        small_threshold: 100.0,
    },
    NativeCurrency {
        code: "TRY",
        symbol: "₺",
        decimals: 2,
        alignment: SymbolAlignment::Right,
        small_threshold: 5.0,
    },
    NativeCurrency {
        code: "ETH",
        symbol: "Ξ",
        decimals: 4,
        alignment: SymbolAlignment::Left,
        small_threshold: 0.001,
    },
];

impl NativeCurrency {
    /// Look up a currency by its code, ignoring case.
    pub fn lookup(code: &str) -> Result<&'static NativeCurrency, SnapshotError> {
        CURRENCIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| SnapshotError::UnknownCurrency {
                code: code.to_string(),
            })
    }

    pub fn usd() -> &'static NativeCurrency {
        &CURRENCIES[0]
    }

    pub fn all() -> &'static [NativeCurrency] {
        CURRENCIES
    }

    pub fn format(&self, value: f64) -> String {
        format_native_display(value, self)
    }
}

/// Render a native value with the currency's decimals, thousands grouping
/// and symbol placement, e.g. `$1,234.56` or `1,234.00 ₽`.
pub fn format_native_display(value: f64, currency: &NativeCurrency) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.*}", currency.decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    // "-0.00" reads badly; only sign values that survive rounding
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match currency.alignment {
        SymbolAlignment::Left => format!("{}{}{}", sign, currency.symbol, grouped),
        SymbolAlignment::Right => format!("{}{} {}", sign, grouped, currency.symbol),
    }
}
