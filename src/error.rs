//! Error taxonomy for the comparison tool.
//!
//! Only `MissingInput` ends the process; everything else is reported
//! and the session moves on to the next keyword.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed source error, keeping adapter crates out of the public type.
type Source = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by the comparison core and its adapters.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The source archive is not a valid compressed container.
    #[error("{}: not a valid archive: {source}", path.display())]
    InvalidArchive {
        /// Path of the offending archive.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: Source,
    },

    /// A required input file is absent at startup.
    #[error("required input file is missing: {}", .0.display())]
    MissingInput(PathBuf),

    /// Class-mode lookup failed on one or both sides.
    #[error("class '{0}' not found in one or both directories")]
    LookupMiss(String),

    /// An I/O operation on a concrete path failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path the operation was attempted on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from the interactive input source failed.
    #[error("could not read input: {0}")]
    Input(#[source] std::io::Error),

    /// The interactive input source reached end-of-stream.
    #[error("input stream closed")]
    InputClosed,
}
