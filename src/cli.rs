//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `smalidiff`.
#[derive(Debug, Parser)]
#[command(name = "smalidiff", version, about = "Compare smali trees from two app archives")]
pub struct Cli {
    /// Archive holding the original build's smali tree.
    #[arg(default_value = "ori.zip")]
    pub original: PathBuf,

    /// Archive holding the modified build's smali tree.
    #[arg(default_value = "mod.zip")]
    pub modified: PathBuf,

    /// Append-only log file for method-name differences.
    #[arg(long, default_value = "differences.txt")]
    pub log: PathBuf,

    /// Class-file extension to use for class-mode lookup.
    #[arg(long, default_value = "smali")]
    pub extension: String,
}
