//! Local UI toggles that feed the layout.

use std::collections::BTreeSet;

/// Suffix appended to family keys in showcase lists.
const SHOWCASE_SUFFIX: &str = "-showcase";

/// Key under which a family's open state is stored.
///
/// Showcase lists keep their own open state, so the same family name maps
/// to a different key there.
pub fn family_key(family_name: &str, showcase: bool) -> String {
    if showcase {
        format!("{}{}", family_name, SHOWCASE_SUFFIX)
    } else {
        family_name.to_string()
    }
}

/// Expanded/collapsed state owned by the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListToggles {
    pub open_families: BTreeSet<String>,
    pub is_coin_list_edited: bool,
    pub is_small_balances_open: bool,
    pub is_savings_open: bool,
    pub is_pools_open: bool,
}

impl ListToggles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_family_open(&self, key: &str) -> bool {
        self.open_families.contains(key)
    }

    /// Flip a family's open state. Returns the new state.
    pub fn toggle_family(&mut self, key: &str) -> bool {
        if self.open_families.remove(key) {
            false
        } else {
            self.open_families.insert(key.to_string());
            true
        }
    }

    pub fn with_open_family(mut self, key: impl Into<String>) -> Self {
        self.open_families.insert(key.into());
        self
    }

    pub fn with_coin_list_edited(mut self, edited: bool) -> Self {
        self.is_coin_list_edited = edited;
        self
    }

    pub fn with_small_balances_open(mut self, open: bool) -> Self {
        self.is_small_balances_open = open;
        self
    }

    pub fn with_savings_open(mut self, open: bool) -> Self {
        self.is_savings_open = open;
        self
    }

    pub fn with_pools_open(mut self, open: bool) -> Self {
        self.is_pools_open = open;
        self
    }

    /// Families open in `self` that were closed in `prev`.
    pub fn newly_opened_families<'a>(&'a self, prev: &'a ListToggles) -> impl Iterator<Item = &'a str> {
        self.open_families
            .difference(&prev.open_families)
            .map(String::as_str)
    }
}
