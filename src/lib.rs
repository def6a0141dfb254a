//! walletlist - a terminal wallet asset list
//!
//! Renders a wallet's balances, savings, pools and collectibles as one
//! virtualized, scrollable list with expandable containers, an edit mode
//! for pinning and hiding coins, and automatic scrolling when content
//! opens or shrinks.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod diff;
pub mod error;
pub mod layout;
pub mod models;
pub mod portfolio;
pub mod scroll;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
