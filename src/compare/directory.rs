//! Directory-level orchestration of one comparison pass.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::compare::class::compare_classes;
use crate::compare::keyword::stem_matches;
use crate::compare::method::{compare_method_content, compare_method_names, MethodDiff};
use crate::compare::{ComparisonResult, SearchMode};
use crate::error::CompareError;
use crate::ports::{FileTree, ReportSink};

/// Runs one keyword+mode comparison pass over two directory trees.
pub struct DirectoryComparator<'a> {
    tree: &'a dyn FileTree,
    report: &'a dyn ReportSink,
    extension: &'a str,
}

impl<'a> DirectoryComparator<'a> {
    /// Builds a comparator over the given tree access and report sink.
    ///
    /// `extension` is the class-file extension (without dot) used for
    /// class-mode lookup.
    #[must_use]
    pub fn new(tree: &'a dyn FileTree, report: &'a dyn ReportSink, extension: &'a str) -> Self {
        Self { tree, report, extension }
    }

    /// Compares `dir_a` (original) against `dir_b` (modified) for one
    /// keyword at the given granularity.
    ///
    /// Returns `true` when at least one comparison produced a non-empty
    /// set of changed lines. Files present on only one side are skipped
    /// silently in the method-based modes.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::LookupMiss`] when class-mode lookup
    /// fails on either side, or [`CompareError::Io`] when a tree cannot
    /// be read. Neither aborts the surrounding session.
    pub fn compare(
        &self,
        dir_a: &Path,
        dir_b: &Path,
        keyword: &str,
        mode: SearchMode,
    ) -> Result<bool, CompareError> {
        self.report.heading(&format!(
            "Comparing with keyword: '{keyword}', search type: '{}'",
            mode.label()
        ));
        match mode {
            SearchMode::Class => self.compare_class(dir_a, dir_b, keyword),
            SearchMode::MethodName | SearchMode::MethodContent => {
                self.compare_methods(dir_a, dir_b, keyword, mode)
            }
        }
    }

    fn compare_class(
        &self,
        dir_a: &Path,
        dir_b: &Path,
        keyword: &str,
    ) -> Result<bool, CompareError> {
        let Some(file_a) = self.find_class(dir_a, keyword)? else {
            return Err(CompareError::LookupMiss(keyword.to_string()));
        };
        let Some(file_b) = self.find_class(dir_b, keyword)? else {
            return Err(CompareError::LookupMiss(keyword.to_string()));
        };

        let lines_a = self.tree.load_lines(&dir_a.join(&file_a))?;
        let lines_b = self.tree.load_lines(&dir_b.join(&file_b))?;
        let entries = compare_classes(&lines_a, &lines_b);
        if entries.is_empty() {
            return Ok(false);
        }

        self.report.emit(&ComparisonResult {
            file: file_a,
            keyword: keyword.to_string(),
            mode: SearchMode::Class,
            signature: None,
            entries,
        });
        Ok(true)
    }

    fn compare_methods(
        &self,
        dir_a: &Path,
        dir_b: &Path,
        keyword: &str,
        mode: SearchMode,
    ) -> Result<bool, CompareError> {
        let mut found = false;

        for file in self.common_files(dir_a, dir_b)? {
            let lines_a = self.tree.load_lines(&dir_a.join(&file))?;
            let lines_b = self.tree.load_lines(&dir_b.join(&file))?;

            let diffs = match mode {
                SearchMode::MethodName => compare_method_names(&lines_a, &lines_b, keyword),
                SearchMode::MethodContent => compare_method_content(&lines_a, &lines_b, keyword),
                SearchMode::Class => unreachable!("class mode never reaches per-file methods"),
            };

            for MethodDiff { signature, entries } in diffs {
                found = true;
                let result = ComparisonResult {
                    file: file.clone(),
                    keyword: keyword.to_string(),
                    mode,
                    signature: Some(signature),
                    entries,
                };
                self.report.emit(&result);
                if mode == SearchMode::MethodName {
                    if let Err(err) = self.report.log(&result) {
                        self.report.warn(&format!("could not append to log: {err}"));
                    }
                }
            }
        }

        Ok(found)
    }

    /// First file whose stem equals `keyword`, in lexicographic path
    /// order, restricted to the configured class-file extension.
    fn find_class(&self, root: &Path, keyword: &str) -> Result<Option<PathBuf>, CompareError> {
        let files = self.tree.list_files(root)?;
        Ok(files
            .into_iter()
            .filter(|path| path.extension().and_then(std::ffi::OsStr::to_str) == Some(self.extension))
            .find(|path| stem_matches(path, keyword)))
    }

    /// Relative paths present in both trees, in sorted order.
    fn common_files(&self, dir_a: &Path, dir_b: &Path) -> Result<Vec<PathBuf>, CompareError> {
        let in_a: BTreeSet<PathBuf> = self.tree.list_files(dir_a)?.into_iter().collect();
        let in_b: BTreeSet<PathBuf> = self.tree.list_files(dir_b)?.into_iter().collect();
        Ok(in_a.intersection(&in_b).cloned().collect())
    }
}
