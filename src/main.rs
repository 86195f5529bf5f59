//! Binary entrypoint for the `interpose` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match interpose::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
