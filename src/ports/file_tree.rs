//! File tree enumeration and text loading port.

use std::path::{Path, PathBuf};

use crate::error::CompareError;

/// Read access to an extracted directory tree.
pub trait FileTree: Send + Sync {
    /// Returns the regular files under `root`, as paths relative to
    /// `root`, sorted lexicographically.
    ///
    /// The sorted order is a contract: class lookup takes the first
    /// stem match, so enumeration order decides which file wins.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Io`] when the tree cannot be walked.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, CompareError>;

    /// Loads a file as an ordered sequence of lines.
    ///
    /// Undecodable bytes are replaced rather than reported; a smali
    /// tree occasionally embeds raw string data.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Io`] when the file cannot be read.
    fn load_lines(&self, path: &Path) -> Result<Vec<String>, CompareError>;
}
