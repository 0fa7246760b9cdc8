//! Binary entrypoint for the `smalidiff` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match smalidiff::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
