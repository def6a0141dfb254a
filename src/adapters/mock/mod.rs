//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockViewport`] - List viewport with scripted dimensions

pub mod viewport;

pub use viewport::MockViewport;
