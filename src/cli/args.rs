//! Command-line argument parsing for walletlist.
//!
//! Flags given on the command line override the config file and the
//! environment.

use std::path::PathBuf;

use thiserror::Error;

use crate::startup::ListConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(RunOptions),
}

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub snapshot: Option<PathBuf>,
    pub showcase: bool,
    pub hide_header: bool,
    pub no_autoscroll: bool,
    pub no_sticky: bool,
    pub metrics: Option<String>,
}

impl RunOptions {
    /// Apply the overrides on top of `config`.
    pub fn apply(&self, mut config: ListConfig) -> ListConfig {
        if let Some(path) = &self.snapshot {
            config = config.with_snapshot_path(path.clone());
        }
        if self.showcase {
            config = config.with_showcase(true);
        }
        if self.hide_header {
            config = config.with_hide_header(true);
        }
        if self.no_autoscroll {
            config = config.with_auto_scroll(false);
        }
        if self.no_sticky {
            config = config.with_sticky_headers(false);
        }
        if let Some(metrics) = &self.metrics {
            config = config.with_metrics(metrics.clone());
        }
        config
    }
}

/// Errors from parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("unknown metrics preset '{0}' (expected mobile or terminal)")]
    InvalidMetrics(String),
}

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Usage: walletlist [OPTIONS]

Options:
  --snapshot <path>     Portfolio snapshot to show
  --showcase            Render the list as a showcase
  --hide-header         Hide section headers
  --no-autoscroll       Disable automatic scrolling
  --no-sticky           Disable sticky section headers
  --metrics <preset>    Row metrics: terminal (default) or mobile
  -V, --version         Print version
  -h, --help            Print this help";

/// Parse command-line arguments and return the command to execute.
///
/// # Examples
///
/// ```
/// use walletlist::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["walletlist".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--snapshot" => {
                let path = args.next().ok_or(ArgsError::MissingValue("--snapshot"))?;
                options.snapshot = Some(PathBuf::from(path));
            }
            "--metrics" => {
                let preset = args.next().ok_or(ArgsError::MissingValue("--metrics"))?;
                if preset != "mobile" && preset != "terminal" {
                    return Err(ArgsError::InvalidMetrics(preset));
                }
                options.metrics = Some(preset);
            }
            "--showcase" => options.showcase = true,
            "--hide-header" => options.hide_header = true,
            "--no-autoscroll" => options.no_autoscroll = true,
            "--no-sticky" => options.no_sticky = true,
            _ => return Err(ArgsError::UnknownArgument(arg)),
        }
    }
    Ok(CliCommand::Run(options))
}
