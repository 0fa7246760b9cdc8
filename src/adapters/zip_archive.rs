//! Archive adapter built on the `zip` crate.

use std::fs::File;
use std::path::Path;

use crate::error::CompareError;
use crate::ports::ArchiveExtractor;

/// Extracts zip containers into a destination directory.
pub struct ZipExtractor;

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), CompareError> {
        let file = File::open(archive)
            .map_err(|source| CompareError::Io { path: archive.to_path_buf(), source })?;
        let mut zip = zip::ZipArchive::new(file).map_err(|source| {
            CompareError::InvalidArchive { path: archive.to_path_buf(), source: Box::new(source) }
        })?;
        zip.extract(dest).map_err(|source| CompareError::InvalidArchive {
            path: archive.to_path_buf(),
            source: Box::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ZipExtractor;
    use crate::error::CompareError;
    use crate::ports::ArchiveExtractor;
    use std::io::Write;

    fn write_zip(path: &std::path::Path, files: &[(&str, &str)]) {
        let file = std::fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (name, content) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn extracts_the_archived_tree() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("ori.zip");
        write_zip(&archive, &[("com/app/Main.smali", ".class Main\n")]);

        let dest = tempfile::tempdir().unwrap();
        ZipExtractor.extract(&archive, dest.path()).unwrap();

        let extracted = std::fs::read_to_string(dest.path().join("com/app/Main.smali")).unwrap();
        assert_eq!(extracted, ".class Main\n");
    }

    #[test]
    fn a_non_archive_file_is_an_invalid_archive() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("not_a.zip");
        std::fs::write(&archive, "plain text, no container").unwrap();

        let dest = tempfile::tempdir().unwrap();
        let result = ZipExtractor.extract(&archive, dest.path());
        assert!(matches!(result, Err(CompareError::InvalidArchive { .. })));
    }

    #[test]
    fn a_missing_archive_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ZipExtractor.extract(&dir.path().join("absent.zip"), dir.path());
        assert!(matches!(result, Err(CompareError::Io { .. })));
    }
}
