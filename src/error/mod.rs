//! Unified error handling for walletlist.
//!
//! - **Error Categories**: High-level classification for handling decisions
//! - **Domain-specific Errors**: Layout, Viewport, Snapshot and Config errors
//! - **Unified Error Type**: `WalletListError` consolidates all error types
//! - **Error Context**: Rich debugging information attached to errors
//! - **Result Type Alias**: `WalletListResult<T>` for consistent return types
//!
//! # Error Categories
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Data | Malformed snapshot or sections | No |
//! | Viewport | List not laid out / empty | Yes |
//! | Client | Programming errors | No |
//! | User | User action required | No |
//! | System | OS/filesystem errors | No |
//! | Configuration | Config issues | No |

mod category;
mod config;
mod context;
mod layout;
mod result;
mod snapshot;
mod viewport;
mod walletlist_error;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use layout::LayoutError;
pub use result::{ResultExt, WalletListResult};
pub use snapshot::SnapshotError;
pub use viewport::ViewportError;
pub use walletlist_error::WalletListError;
