//! Messages from background tasks to the App.

use crate::error::SnapshotError;
use crate::portfolio::PortfolioSnapshot;

/// Messages for async communication
#[derive(Debug)]
pub enum AppMessage {
    /// A snapshot reload finished.
    SnapshotLoaded(Result<PortfolioSnapshot, SnapshotError>),
}
