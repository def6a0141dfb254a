//! CLI module for walletlist.
//!
//! Handles command-line flags before the TUI starts:
//!
//! ```ignore
//! use walletlist::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let Some(options) = run_cli_command(command) else {
//!     return Ok(());
//! };
//! // continue to the TUI with `options`
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions, USAGE};
pub use version::{handle_version_command, version_string, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the run options when the TUI should start. `Version` exits the
/// process; `Help` prints usage and returns `None`.
pub fn run_cli_command(command: CliCommand) -> Option<RunOptions> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            None
        }
        CliCommand::Run(options) => Some(options),
    }
}
