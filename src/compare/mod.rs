//! Comparison engine: types and per-granularity comparators.
//!
//! A comparison pass works over two directory trees holding smali class
//! files. [`boundaries`] finds method ranges inside a file, [`keyword`]
//! selects candidates, [`differ`] aligns line sequences, and the
//! comparators in [`class`], [`method`] and [`directory`] combine those
//! into keyword-scoped results.

pub mod boundaries;
pub mod class;
pub mod differ;
pub mod directory;
pub mod keyword;
pub mod method;

use std::path::PathBuf;

/// Granularity of one comparison pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Compare one whole class file, looked up by exact file stem.
    Class,
    /// Diff methods whose signature line contains the keyword.
    MethodName,
    /// Diff method ranges whose body contains the keyword on either side.
    MethodContent,
}

impl SearchMode {
    /// Human-readable label used in headings and prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::MethodName => "method name",
            Self::MethodContent => "method content",
        }
    }
}

/// Classification of one aligned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    /// Present in both sequences at the aligned position.
    Unchanged,
    /// Present only in the left (original) sequence.
    Removed,
    /// Present only in the right (modified) sequence.
    Added,
}

impl DiffTag {
    /// Single-character marker used when rendering a diff line.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Unchanged => ' ',
            Self::Removed => '-',
            Self::Added => '+',
        }
    }
}

/// One line from an alignment between two line sequences.
///
/// `line` is a true 1-based source position: for `Removed` and
/// `Unchanged` entries it indexes the left sequence, for `Added` entries
/// the right sequence, offset by the method-range start where one
/// applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    /// Classification of this line.
    pub tag: DiffTag,
    /// 1-based source line number.
    pub line: usize,
    /// Raw line text.
    pub text: String,
}

/// Inclusive line-index range delimiting one method definition.
///
/// `start` is the index of the method-open marker line, `end` the index
/// of the matching close marker. Ranges never overlap within one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodRange {
    /// Index of the method-open marker line.
    pub start: usize,
    /// Index of the matching method-close marker line.
    pub end: usize,
}

impl MethodRange {
    /// Returns the lines covered by this range.
    ///
    /// The range is clamped to the sequence, so a file shorter than
    /// `end` yields a truncated (possibly empty) slice rather than a
    /// panic. This is what positional matching against the other side
    /// of a comparison relies on.
    #[must_use]
    pub fn slice<'a>(&self, lines: &'a [String]) -> &'a [String] {
        let start = self.start.min(lines.len());
        let end = (self.end + 1).min(lines.len());
        &lines[start..end]
    }

    /// The method's signature: its first line, trimmed.
    #[must_use]
    pub fn signature<'a>(&self, lines: &'a [String]) -> &'a str {
        lines.get(self.start).map_or("", |line| line.trim())
    }
}

/// Changed lines produced by one comparison invocation, plus the
/// metadata needed to report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    /// File the differences were found in (relative to the tree root).
    pub file: PathBuf,
    /// Keyword the comparison was scoped to.
    pub keyword: String,
    /// Granularity the comparison ran at.
    pub mode: SearchMode,
    /// Signature of the method the differences belong to, when the
    /// comparison was method-scoped.
    pub signature: Option<String>,
    /// Changed entries only; `Unchanged` lines are filtered out before
    /// a result is built.
    pub entries: Vec<DiffEntry>,
}

impl ComparisonResult {
    /// Headline describing where the differences were found.
    #[must_use]
    pub fn headline(&self) -> String {
        let file = self.file.display();
        match self.mode {
            SearchMode::Class => {
                format!("Differences found in class '{}' ({file}):", self.keyword)
            }
            SearchMode::MethodName => {
                format!("Differences found in file: {file} (inside method '{}')", self.keyword)
            }
            SearchMode::MethodContent => {
                format!(
                    "Differences found in file: {file} (method content containing '{}')",
                    self.keyword
                )
            }
        }
    }

    /// Plain-text rendering used for the append-only log.
    #[must_use]
    pub fn render_plain(&self) -> String {
        let mut lines = vec![self.headline()];
        if let Some(signature) = &self.signature {
            lines.push(format!("  {signature}"));
        }
        for entry in &self.entries {
            lines.push(format!("{}: {} {}", entry.line, entry.tag.marker(), entry.text));
        }
        lines.join("\n")
    }
}
