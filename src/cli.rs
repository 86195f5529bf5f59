//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `interpose`.
#[derive(Debug, Parser)]
#[command(name = "interpose", version, about = "Inspect and verify recorded cassettes")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize the interactions in a cassette file.
    Inspect {
        /// Path to the cassette JSON file.
        path: PathBuf,
    },
    /// Load a cassette file and re-validate every fingerprint.
    Verify {
        /// Path to the cassette JSON file.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_inspect_subcommand() {
        let cli = Cli::parse_from(["interpose", "inspect", "fixtures/api.json"]);
        assert!(matches!(cli.command, Command::Inspect { .. }));
    }

    #[test]
    fn parses_verify_subcommand() {
        let cli = Cli::parse_from(["interpose", "verify", "fixtures/api.json"]);
        assert!(matches!(cli.command, Command::Verify { .. }));
    }

    #[test]
    fn rejects_missing_path() {
        assert!(Cli::try_parse_from(["interpose", "inspect"]).is_err());
    }
}
