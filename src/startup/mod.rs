//! Startup: configuration loading and logging setup.
//!
//! # Components
//!
//! - [`config`] - [`ListConfig`] with file, environment and builder layers
//! - [`logging`] - File-backed tracing subscriber
//!
//! # Usage
//!
//! ```no_run
//! use walletlist::startup::{init_logging, ListConfig};
//!
//! let _log_path = init_logging();
//! let config = ListConfig::load_default()?.with_env()?;
//! # Ok::<(), walletlist::error::ConfigError>(())
//! ```

pub mod config;
pub mod logging;

pub use config::ListConfig;
pub use logging::{init_logging, log_file_path};
