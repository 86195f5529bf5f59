//! Protocol-agnostic interaction interposition.
//!
//! `interpose` deterministically replays previously recorded request/response
//! exchanges and, optionally, records new ones by forwarding to a live
//! upstream. Requests are identified by a SHA-256 fingerprint of their
//! canonical encoding; recorded interactions live in an immutable
//! [`Cassette`]; the [`Broker`] dispatches each request according to its
//! mode (`replay`, `record`, or `auto`) between the cassette, a
//! [`LiveResponder`], and a [`CassetteStore`].

pub mod adapters;
pub mod broker;
pub mod cli;
pub mod commands;
pub mod error;
pub mod model;
pub mod ports;
pub mod store;

pub use broker::{Broker, Mode, ReplayStream};
pub use error::{BoxError, Error};
pub use model::{Cassette, Fingerprint, Interaction, Request, ResponseChunk};
pub use ports::{CassetteStore, LiveResponder};
pub use store::JsonFileStore;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => return Err(err.to_string()),
        Err(err) => {
            // --help or --version: print to stdout and succeed.
            let _ = err.print();
            return Ok(());
        }
    };
    commands::dispatch(&cli.command)
}
