//! Scrolling: scroll state, auto-scroll rules and their deferred execution.
//!
//! Auto-scroll is best effort. Commands are evaluated after a data pass,
//! held by the [`ScrollScheduler`] until their delay elapses and then sent to
//! the [`ListViewport`](crate::traits::ListViewport). A viewport that cannot
//! scroll is not an error for the caller.

mod auto_scroll;
mod scheduler;
mod state;

pub use auto_scroll::{AutoScrollConfig, AutoScrollController, ListPass, ScrollCommand, ScrollRule};
pub use scheduler::{execute, scroll_to_top, ScrollScheduler};
pub use state::{ScrollBoundary, ScrollState};
