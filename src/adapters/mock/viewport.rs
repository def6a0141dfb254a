//! Mock list viewport for testing.

use crate::error::ViewportError;
use crate::traits::{ListViewport, RowRect};

/// Mock viewport for testing.
///
/// This mock allows:
/// - Scripting viewport and content dimensions
/// - Scripting row measurements
/// - Capturing scroll requests
/// - Injecting scroll failures
///
/// # Example
///
/// ```ignore
/// use walletlist::adapters::mock::MockViewport;
/// use walletlist::traits::ListViewport;
///
/// let mut viewport = MockViewport::new(100.0).with_row_heights(&[50.0, 40.0, 40.0]);
/// viewport.scroll_to_offset(30.0, true)?;
/// assert_eq!(viewport.scroll_calls(), &[(30.0, true)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockViewport {
    scroll_offset: f64,
    viewport_height: Option<f64>,
    content_height: Option<f64>,
    rows: Vec<RowRect>,
    scroll_calls: Vec<(f64, bool)>,
    fail_with: Option<ViewportError>,
}

impl MockViewport {
    /// A laid-out viewport of the given height with no rows.
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height: Some(viewport_height),
            content_height: Some(0.0),
            ..Default::default()
        }
    }

    /// A viewport that has not been laid out yet.
    pub fn unmeasured() -> Self {
        Self::default()
    }

    /// Stack rows of the given heights; content height becomes their sum.
    pub fn with_row_heights(mut self, heights: &[f64]) -> Self {
        let mut offset = 0.0;
        self.rows = heights
            .iter()
            .map(|h| {
                let rect = RowRect::new(offset, *h);
                offset += h;
                rect
            })
            .collect();
        self.content_height = Some(offset);
        self
    }

    pub fn with_scroll_offset(mut self, offset: f64) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn with_content_height(mut self, height: Option<f64>) -> Self {
        self.content_height = height;
        self
    }

    /// Make every scroll request fail with `err`.
    pub fn failing_with(mut self, err: ViewportError) -> Self {
        self.fail_with = Some(err);
        self
    }

    pub fn set_fail_with(&mut self, err: Option<ViewportError>) {
        self.fail_with = err;
    }

    /// Every scroll request received, in order.
    pub fn scroll_calls(&self) -> &[(f64, bool)] {
        &self.scroll_calls
    }

    pub fn last_scroll(&self) -> Option<(f64, bool)> {
        self.scroll_calls.last().copied()
    }

    pub fn clear_scroll_calls(&mut self) {
        self.scroll_calls.clear();
    }
}

impl ListViewport for MockViewport {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> Option<f64> {
        self.viewport_height
    }

    fn content_height(&self) -> Option<f64> {
        self.content_height
    }

    fn row_rect(&self, index: usize) -> Option<RowRect> {
        self.rows.get(index).copied()
    }

    fn scroll_to_offset(&mut self, offset: f64, animated: bool) -> Result<(), ViewportError> {
        self.scroll_calls.push((offset, animated));
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.scroll_offset = offset;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_heights_stack() {
        let viewport = MockViewport::new(100.0).with_row_heights(&[10.0, 20.0, 5.0]);
        assert_eq!(viewport.row_rect(1), Some(RowRect::new(10.0, 20.0)));
        assert_eq!(viewport.content_height(), Some(35.0));
        assert_eq!(viewport.row_rect(3), None);
    }

    #[test]
    fn test_scroll_calls_recorded() {
        let mut viewport = MockViewport::new(100.0);
        viewport.scroll_to_offset(30.0, true).unwrap();
        assert_eq!(viewport.scroll_offset(), 30.0);
        assert_eq!(viewport.last_scroll(), Some((30.0, true)));
    }

    #[test]
    fn test_failure_injection() {
        let mut viewport = MockViewport::new(100.0).failing_with(ViewportError::EmptyList);
        assert_eq!(
            viewport.scroll_to_offset(10.0, false),
            Err(ViewportError::EmptyList)
        );
        assert_eq!(viewport.scroll_offset(), 0.0);
        assert_eq!(viewport.scroll_calls().len(), 1);
    }

    #[test]
    fn test_unmeasured() {
        let viewport = MockViewport::unmeasured();
        assert_eq!(viewport.viewport_height(), None);
        assert_eq!(viewport.content_height(), None);
    }
}
