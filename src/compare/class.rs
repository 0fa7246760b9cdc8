//! Whole-file comparison for class mode.

use crate::compare::differ::changed_lines;
use crate::compare::DiffEntry;

/// Diffs two whole class files and returns only the changed lines.
///
/// Entries carry 1-based positions into their own file: removed lines
/// index the original, added lines the modified side.
#[must_use]
pub fn compare_classes(old: &[String], new: &[String]) -> Vec<DiffEntry> {
    changed_lines(old, new, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::compare_classes;
    use crate::compare::DiffTag;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn identical_files_produce_nothing() {
        let file = lines(&[".class Foo", ".method a()V", ".end method"]);
        assert!(compare_classes(&file, &file).is_empty());
    }

    #[test]
    fn changed_lines_carry_one_based_positions() {
        let old = lines(&[".class Foo", "const/4 v0, 0x0", "return v0"]);
        let new = lines(&[".class Foo", "const/4 v0, 0x1", "return v0"]);
        let changed = compare_classes(&old, &new);
        assert_eq!(changed.len(), 2);
        assert_eq!((changed[0].tag, changed[0].line), (DiffTag::Removed, 2));
        assert_eq!((changed[1].tag, changed[1].line), (DiffTag::Added, 2));
    }
}
