//! Result type alias for walletlist operations.

use super::context::ErrorContext;
use super::walletlist_error::WalletListError;

/// Type alias for Results using WalletListError.
pub type WalletListResult<T> = Result<T, WalletListError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use walletlist::error::{ErrorContext, ResultExt};
    ///
    /// let snapshot = PortfolioSnapshot::load(&path)
    ///     .context(ErrorContext::new("load_snapshot"))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> WalletListResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> WalletListResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<WalletListError>,
{
    fn context(self, ctx: ErrorContext) -> WalletListResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> WalletListResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
