//! Interactive input port.

use crate::error::CompareError;

/// Supplies user input one prompted line at a time.
///
/// The session state machine is driven entirely through this trait, so
/// a scripted implementation can exercise whole sessions in tests.
pub trait InputSource {
    /// Displays `prompt` and reads one line, trimmed of surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InputClosed`] at end-of-stream and
    /// [`CompareError::Input`] when the read itself fails.
    fn read_line(&mut self, prompt: &str) -> Result<String, CompareError>;
}
