//! Core library entry for the `smalidiff` CLI.

pub mod adapters;
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod ports;
pub mod session;

use clap::Parser;

use crate::adapters::{ConsoleReport, StdinInput, WalkTree, ZipExtractor};
use crate::config::Config;
use crate::error::CompareError;
use crate::ports::{ArchiveExtractor, ReportSink};
use crate::session::Session;

/// Run the CLI with the provided arguments.
///
/// Checks that both archives exist, extracts them into temporary
/// directories and hands control to the interactive session. The
/// extraction directories live until this function returns.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, an archive is
/// missing or invalid, or the session aborts on an input failure.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;

    for archive in [&cli.original, &cli.modified] {
        if !archive.is_file() {
            return Err(CompareError::MissingInput(archive.clone()).to_string());
        }
    }

    let report = ConsoleReport::new(Some(cli.log.clone()));
    let extractor = ZipExtractor;

    let dir_a = tempdir()?;
    let dir_b = tempdir()?;
    report.info(&format!("Unzipping {}...", cli.original.display()));
    extractor.extract(&cli.original, dir_a.path()).map_err(|err| err.to_string())?;
    report.info(&format!("Unzipping {}...", cli.modified.display()));
    extractor.extract(&cli.modified, dir_b.path()).map_err(|err| err.to_string())?;

    let config =
        Config { extension: cli.extension, log_path: Some(cli.log), ..Config::default() };
    let mut input = StdinInput;
    let mut session = Session::new(&config, &WalkTree, &report, &mut input);
    session.run(dir_a.path(), dir_b.path()).map_err(|err| err.to_string())
}

fn tempdir() -> Result<tempfile::TempDir, String> {
    tempfile::tempdir().map_err(|err| format!("could not create extraction directory: {err}"))
}
