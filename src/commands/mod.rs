//! Command dispatch and handlers.

use std::path::Path;

use crate::cli::Command;
use crate::model::Cassette;
use crate::ports::CassetteStore;
use crate::store::JsonFileStore;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Inspect { path } => inspect(path),
        Command::Verify { path } => verify(path),
    }
}

/// Print a one-line summary per recorded interaction.
fn inspect(path: &Path) -> Result<(), String> {
    let cassette = load(path)?;
    println!("{}: {} interaction(s)", path.display(), cassette.len());
    for (position, interaction) in cassette.interactions().iter().enumerate() {
        let request = interaction.request();
        println!(
            "  [{position}] {} {} {}: {} chunk(s), fingerprint {}",
            request.protocol(),
            request.action(),
            request.target(),
            interaction.response_chunks().len(),
            &interaction.fingerprint().to_hex()[..12],
        );
    }
    Ok(())
}

/// Load the cassette, relying on the store to re-validate fingerprints.
fn verify(path: &Path) -> Result<(), String> {
    let cassette = load(path)?;
    println!("{}: ok ({} interaction(s))", path.display(), cassette.len());
    Ok(())
}

fn load(path: &Path) -> Result<Cassette, String> {
    JsonFileStore::new(path).load().map_err(|err| err.to_string())
}
