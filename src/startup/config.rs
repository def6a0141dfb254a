//! List configuration.
//!
//! Values come from, in increasing priority: defaults, the JSON config file
//! (`<config dir>/walletlist/config.json`), `WALLETLIST_*` environment
//! variables, and finally command-line options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::layout::{LayoutContext, Metrics};
use crate::scroll::AutoScrollConfig;

/// The config directory name under the platform config dir.
const CONFIG_DIR: &str = "walletlist";

/// The config file name.
const CONFIG_FILE: &str = "config.json";

pub const ENV_HIDE_HEADER: &str = "WALLETLIST_HIDE_HEADER";
pub const ENV_NO_AUTOSCROLL: &str = "WALLETLIST_NO_AUTOSCROLL";
pub const ENV_NO_STICKY: &str = "WALLETLIST_NO_STICKY";
pub const ENV_SHOWCASE: &str = "WALLETLIST_SHOWCASE";
pub const ENV_METRICS: &str = "WALLETLIST_METRICS";
pub const ENV_PADDING_BOTTOM: &str = "WALLETLIST_PADDING_BOTTOM";

/// Configuration of the asset list.
///
/// # Example
///
/// ```
/// use walletlist::startup::ListConfig;
///
/// let config = ListConfig::default()
///     .with_hide_header(true)
///     .with_auto_scroll(false);
/// assert!(config.hide_header);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Collapse section headers to zero height
    pub hide_header: bool,
    /// Scroll to opened families and shrunk content automatically
    pub auto_scroll: bool,
    /// Pin the current section header at the top of the list
    pub sticky_headers: bool,
    /// Render the list as a showcase (tall header, separate family keys)
    pub showcase: bool,
    /// Name of the metrics preset, `terminal` or `mobile`
    pub metrics: String,
    pub padding_bottom: f64,
    pub showcase_label: String,
    pub small_collectibles: bool,
    /// Snapshot file shown at startup
    pub snapshot_path: Option<PathBuf>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            hide_header: false,
            auto_scroll: true,
            sticky_headers: true,
            showcase: false,
            metrics: "terminal".to_string(),
            padding_bottom: 0.0,
            showcase_label: crate::portfolio::DEFAULT_SHOWCASE_LABEL.to_string(),
            small_collectibles: false,
            snapshot_path: None,
        }
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}

impl ListConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hide_header(mut self, hide: bool) -> Self {
        self.hide_header = hide;
        self
    }

    pub fn with_auto_scroll(mut self, enabled: bool) -> Self {
        self.auto_scroll = enabled;
        self
    }

    pub fn with_sticky_headers(mut self, enabled: bool) -> Self {
        self.sticky_headers = enabled;
        self
    }

    pub fn with_showcase(mut self, showcase: bool) -> Self {
        self.showcase = showcase;
        self
    }

    pub fn with_metrics(mut self, preset: impl Into<String>) -> Self {
        self.metrics = preset.into();
        self
    }

    pub fn with_padding_bottom(mut self, padding: f64) -> Self {
        self.padding_bottom = padding;
        self
    }

    pub fn with_showcase_label(mut self, label: impl Into<String>) -> Self {
        self.showcase_label = label.into();
        self
    }

    pub fn with_small_collectibles(mut self, small: bool) -> Self {
        self.small_collectibles = small;
        self
    }

    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Default config file location.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load configuration from a JSON file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ListConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Invalid {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        if Metrics::preset(&config.metrics).is_none() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: format!("unknown metrics preset {:?}", config.metrics),
            });
        }
        debug!(path = %path.display(), "Loaded list config");
        Ok(config)
    }

    /// Load the default config file, falling back to defaults when it does
    /// not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Overlay `WALLETLIST_*` environment variables on this config.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_vars(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env()
    }

    /// Overlay variables from an arbitrary lookup.
    pub fn with_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_HIDE_HEADER) {
            self.hide_header = parse_bool(ENV_HIDE_HEADER, &value)?;
        }
        if let Some(value) = lookup(ENV_NO_AUTOSCROLL) {
            self.auto_scroll = !parse_bool(ENV_NO_AUTOSCROLL, &value)?;
        }
        if let Some(value) = lookup(ENV_NO_STICKY) {
            self.sticky_headers = !parse_bool(ENV_NO_STICKY, &value)?;
        }
        if let Some(value) = lookup(ENV_SHOWCASE) {
            self.showcase = parse_bool(ENV_SHOWCASE, &value)?;
        }
        if let Some(value) = lookup(ENV_METRICS) {
            if Metrics::preset(&value).is_none() {
                return Err(ConfigError::InvalidEnv {
                    var: ENV_METRICS.to_string(),
                    value,
                });
            }
            self.metrics = value;
        }
        if let Some(value) = lookup(ENV_PADDING_BOTTOM) {
            self.padding_bottom = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite() && *p >= 0.0)
                .ok_or(ConfigError::InvalidEnv {
                    var: ENV_PADDING_BOTTOM.to_string(),
                    value,
                })?;
        }
        Ok(self)
    }

    /// Metrics for the configured preset; unknown names fall back to the
    /// terminal preset.
    pub fn resolved_metrics(&self) -> Metrics {
        Metrics::preset(&self.metrics).unwrap_or_default()
    }

    /// The layout inputs this config controls.
    pub fn layout_context(&self) -> LayoutContext {
        LayoutContext::new(self.resolved_metrics())
            .with_hide_header(self.hide_header)
            .with_showcase(self.showcase)
            .with_padding_bottom(self.padding_bottom)
            .with_small_collectibles(self.small_collectibles)
    }

    pub fn auto_scroll_config(&self) -> AutoScrollConfig {
        AutoScrollConfig {
            enabled: self.auto_scroll,
            ..AutoScrollConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default() {
        let config = ListConfig::default();
        assert!(!config.hide_header);
        assert!(config.auto_scroll);
        assert!(config.sticky_headers);
        assert_eq!(config.metrics, "terminal");
        assert_eq!(config.showcase_label, "Showcase");
        assert!(config.snapshot_path.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ListConfig::new()
            .with_hide_header(true)
            .with_auto_scroll(false)
            .with_sticky_headers(false)
            .with_showcase(true)
            .with_metrics("mobile")
            .with_padding_bottom(12.0)
            .with_snapshot_path("/tmp/wallet.json");

        assert!(config.hide_header);
        assert!(!config.auto_scroll);
        assert!(!config.sticky_headers);
        assert!(config.showcase);
        assert_eq!(config.resolved_metrics(), Metrics::mobile());
        assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/wallet.json")));

        let ctx = config.layout_context();
        assert!(ctx.hide_header);
        assert!(ctx.showcase);
        assert_eq!(ctx.padding_bottom, 12.0);
    }

    #[test]
    fn test_vars_overlay() {
        let config = ListConfig::default()
            .with_vars(vars(&[
                (ENV_HIDE_HEADER, "1"),
                (ENV_NO_AUTOSCROLL, "true"),
                (ENV_METRICS, "mobile"),
                (ENV_PADDING_BOTTOM, "40"),
            ]))
            .unwrap();
        assert!(config.hide_header);
        assert!(!config.auto_scroll);
        assert!(config.sticky_headers);
        assert_eq!(config.metrics, "mobile");
        assert_eq!(config.padding_bottom, 40.0);
    }

    #[test]
    fn test_vars_invalid() {
        let err = ListConfig::default()
            .with_vars(vars(&[(ENV_SHOWCASE, "maybe")]))
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID_ENV");

        let err = ListConfig::default()
            .with_vars(vars(&[(ENV_METRICS, "tablet")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));

        let err = ListConfig::default()
            .with_vars(vars(&[(ENV_PADDING_BOTTOM, "-3")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(ENV_NO_STICKY, "yes");
        let config = ListConfig::from_env();
        std::env::remove_var(ENV_NO_STICKY);

        let config = config.unwrap();
        assert!(!config.sticky_headers);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"hide_header": true, "metrics": "mobile"}}"#).unwrap();

        let config = ListConfig::load(file.path()).unwrap();
        assert!(config.hide_header);
        assert!(config.auto_scroll);
        assert_eq!(config.metrics, "mobile");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ListConfig::load(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"metrics": "watch"}}"#).unwrap();
        assert!(ListConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ListConfig::load(dir.path().join("config.json")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_IO");
    }
}
