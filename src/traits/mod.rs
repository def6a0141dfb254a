//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`ListViewport`] - The scrollable list widget, as seen by the
//!   auto-scroll controller

pub mod viewport;

pub use viewport::{ListViewport, RowRect};
