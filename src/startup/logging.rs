//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so log lines go to
//! `<data dir>/walletlist/walletlist.log`. The filter is read from
//! `WALLETLIST_LOG` and defaults to `walletlist=info`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "WALLETLIST_LOG";
pub const DEFAULT_FILTER: &str = "walletlist=info";
const LOG_DIR: &str = "walletlist";
const LOG_FILE: &str = "walletlist.log";

/// Where log output goes when logging is initialized.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(LOG_DIR).join(LOG_FILE))
}

/// Filter from `WALLETLIST_LOG`, or the default filter when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log path on success. Failures (no data dir, unwritable file,
/// subscriber already set) leave the app running without logs.
pub fn init_logging() -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    tracing::info!(path = %path.display(), "Logging initialized");
    Some(path)
}
