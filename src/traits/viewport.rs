//! List viewport trait abstraction.
//!
//! The auto-scroll controller never touches the list widget directly. It
//! reads dimensions and issues scroll requests through [`ListViewport`], so
//! it can run against the terminal list or a mock in tests.

use crate::error::ViewportError;

/// Position and height of a laid-out row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowRect {
    /// Offset of the row's top edge from the top of the content.
    pub offset: f64,
    pub height: f64,
}

impl RowRect {
    pub fn new(offset: f64, height: f64) -> Self {
        Self { offset, height }
    }

    pub fn end(&self) -> f64 {
        self.offset + self.height
    }
}

/// Trait for the scrollable list widget.
///
/// Dimension getters return `None` until the widget has been laid out.
///
/// # Example
///
/// ```ignore
/// use walletlist::traits::ListViewport;
///
/// fn scroll_into_view<V: ListViewport>(viewport: &mut V, row: usize) {
///     let (Some(rect), Some(height)) = (viewport.row_rect(row), viewport.viewport_height()) else {
///         return;
///     };
///     if rect.end() > viewport.scroll_offset() + height {
///         let _ = viewport.scroll_to_offset(rect.end() - height, true);
///     }
/// }
/// ```
pub trait ListViewport {
    /// Current scroll offset from the top of the content.
    fn scroll_offset(&self) -> f64;

    /// Height of the visible window.
    fn viewport_height(&self) -> Option<f64>;

    /// Total height of the content.
    fn content_height(&self) -> Option<f64>;

    /// Measure a row.
    fn row_rect(&self, index: usize) -> Option<RowRect>;

    /// Request a scroll to `offset`.
    ///
    /// # Errors
    /// Fails when the list is not laid out or empty, or the offset is not
    /// a finite number.
    fn scroll_to_offset(&mut self, offset: f64, animated: bool) -> Result<(), ViewportError>;
}
