//! Archive extraction port.

use std::path::Path;

use crate::error::CompareError;

/// Extracts a compressed archive into a destination directory.
pub trait ArchiveExtractor: Send + Sync {
    /// Populates `dest` with the file tree contained in `archive`.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidArchive`] when the file is not a
    /// valid container, or [`CompareError::Io`] when reading or writing
    /// fails. No partial extraction is assumed usable afterwards.
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), CompareError>;
}
