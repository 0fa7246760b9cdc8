//! Filesystem tree adapter built on `walkdir`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CompareError;
use crate::ports::FileTree;

/// Walks real directory trees and loads files with lossy decoding.
pub struct WalkTree;

impl FileTree for WalkTree {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, CompareError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|source| CompareError::Io {
                path: root.to_path_buf(),
                source: source.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(rel) = entry.path().strip_prefix(root) {
                files.push(rel.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }

    fn load_lines(&self, path: &Path) -> Result<Vec<String>, CompareError> {
        let bytes = std::fs::read(path)
            .map_err(|source| CompareError::Io { path: path.to_path_buf(), source })?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text.lines().map(ToString::to_string).collect())
    }
}
