//! Row layout classification for the virtualized asset list.
//!
//! The list is flattened once per pass ([`FlatList`]), every row is mapped
//! to a [`RowLayout`] by [`classify`], and the results are kept in a
//! [`LayoutCache`] that answers offset and visibility queries.
//!
//! All inputs of a pass travel in an explicit [`LayoutContext`]; nothing is
//! read from shared state.

mod cache;
mod classifier;
mod flatten;
mod metrics;
mod sticky;
mod toggles;
mod view_types;

pub use cache::{LayoutCache, RowHeight};
pub use classifier::{classify, classify_all, validate_sections};
pub use flatten::FlatList;
pub use metrics::Metrics;
pub use sticky::{edit_sticky_divider_threshold, edit_sticky_divider_visible, sticky_header_indices};
pub use toggles::{family_key, ListToggles};
pub use view_types::{RowKind, ViewType};

/// Everything a layout pass depends on besides the rows themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContext {
    pub metrics: Metrics,
    pub toggles: ListToggles,
    pub hide_header: bool,
    /// Showcase lists use the tall header and their own family keys.
    pub showcase: bool,
    pub padding_bottom: f64,
    /// The collectibles section uses the small card style.
    pub small_collectibles: bool,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(Metrics::default())
    }
}

impl LayoutContext {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            metrics,
            toggles: ListToggles::default(),
            hide_header: false,
            showcase: false,
            padding_bottom: 0.0,
            small_collectibles: false,
        }
    }

    pub fn with_toggles(mut self, toggles: ListToggles) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn with_hide_header(mut self, hide: bool) -> Self {
        self.hide_header = hide;
        self
    }

    pub fn with_showcase(mut self, showcase: bool) -> Self {
        self.showcase = showcase;
        self
    }

    pub fn with_padding_bottom(mut self, padding: f64) -> Self {
        self.padding_bottom = padding;
        self
    }

    pub fn with_small_collectibles(mut self, small: bool) -> Self {
        self.small_collectibles = small;
        self
    }
}

/// Layout of a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub kind: RowKind,
    /// Nominal height, ignoring edit mode.
    pub height: f64,
    pub visible_during_edit: bool,
}

impl RowLayout {
    pub fn new(kind: RowKind, ctx: &LayoutContext) -> Self {
        Self {
            kind,
            height: kind.height(ctx),
            visible_during_edit: kind.view_type().visible_during_coin_edit(),
        }
    }

    pub fn view_type(&self) -> ViewType {
        self.kind.view_type()
    }

    /// Height actually occupied in the list.
    pub fn effective_height(&self, is_coin_list_edited: bool) -> f64 {
        if is_coin_list_edited && !self.visible_during_edit {
            0.0
        } else {
            self.height
        }
    }
}
