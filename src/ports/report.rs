//! Reporting port: human-facing output and the append-only log.

use crate::compare::ComparisonResult;
use crate::error::CompareError;

/// Renders comparison output to a human-facing channel.
pub trait ReportSink: Send + Sync {
    /// Prints raw text with no styling, used for the startup banner
    /// and menus.
    fn banner(&self, text: &str);

    /// Announces the start of a comparison pass.
    fn heading(&self, message: &str);

    /// Prints an informational message.
    fn info(&self, message: &str);

    /// Prints a warning or failure message.
    fn warn(&self, message: &str);

    /// Renders one comparison result with added and removed lines
    /// visually distinguished.
    fn emit(&self, result: &ComparisonResult);

    /// Appends a plain-text rendering of `result` to the persistent
    /// log, when one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Io`] when the log cannot be written.
    fn log(&self, result: &ComparisonResult) -> Result<(), CompareError>;
}
