//! CLI module for playctl.
//!
//! This module provides the command-line interface:
//! - Argument parsing
//! - Version display
//! - Key configuration commands
//! - Listing message inspection
//!
//! # Usage
//!
//! ```ignore
//! use playctl::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &session) {
//!     return result;
//! }
//! // No CLI command, continue to the key monitor
//! ```

pub mod args;
pub mod decode;
pub mod keys;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use decode::{decode_listing_file, handle_decode_command};
pub use keys::{handle_bind, handle_reset_keys, handle_show_keys};
pub use version::{handle_version_command, VERSION};

use color_eyre::{eyre::eyre, Result};

use crate::session::Session;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::Monitor`], which the binary runs itself.
pub fn run_cli_command(command: CliCommand, session: &Session) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::ShowKeys => Some(handle_show_keys(session)),
        CliCommand::ResetKeys => Some(handle_reset_keys(session)),
        CliCommand::Bind {
            action,
            code,
            steal,
        } => Some(handle_bind(session, action, code, steal)),
        CliCommand::Decode { path } => Some(handle_decode_command(&path)),
        CliCommand::Invalid(reason) => Some(Err(eyre!("{}\n\n{}", reason, USAGE))),
        CliCommand::Monitor => None,
    }
}
