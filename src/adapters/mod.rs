//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ListView`] - The terminal list widget state, implementing
//!   [`ListViewport`](crate::traits::ListViewport)
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockViewport`] - Configurable dimensions, recorded scroll calls
//!   and failure injection

pub mod list_view;
pub mod mock;

pub use list_view::ListView;
pub use mock::MockViewport;
