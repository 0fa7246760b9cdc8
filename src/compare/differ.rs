//! Line-sequence alignment built on the `similar` crate.

use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::compare::{DiffEntry, DiffTag};

/// Aligns `old` against `new` and returns every entry, in order.
///
/// Line numbers are true 1-based source positions: removed and
/// unchanged entries index `old`, added entries index `new`. The
/// offsets shift those positions when the slices were cut out of a
/// larger file, so method-scoped diffs report file positions.
///
/// Myers alignment is order-preserving and deterministic; two identical
/// inputs always produce only `Unchanged` entries.
#[must_use]
pub fn diff_lines(
    old: &[String],
    new: &[String],
    old_offset: usize,
    new_offset: usize,
) -> Vec<DiffEntry> {
    let mut entries = Vec::new();

    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        match op {
            DiffOp::Equal { old_index, len, .. } => {
                for i in 0..len {
                    entries.push(DiffEntry {
                        tag: DiffTag::Unchanged,
                        line: old_offset + old_index + i + 1,
                        text: old[old_index + i].clone(),
                    });
                }
            }
            DiffOp::Delete { old_index, old_len, .. } => {
                push_removed(&mut entries, old, old_index, old_len, old_offset);
            }
            DiffOp::Insert { new_index, new_len, .. } => {
                push_added(&mut entries, new, new_index, new_len, new_offset);
            }
            DiffOp::Replace { old_index, old_len, new_index, new_len } => {
                push_removed(&mut entries, old, old_index, old_len, old_offset);
                push_added(&mut entries, new, new_index, new_len, new_offset);
            }
        }
    }

    entries
}

/// Like [`diff_lines`] but keeps only `Removed` and `Added` entries.
#[must_use]
pub fn changed_lines(
    old: &[String],
    new: &[String],
    old_offset: usize,
    new_offset: usize,
) -> Vec<DiffEntry> {
    diff_lines(old, new, old_offset, new_offset)
        .into_iter()
        .filter(|entry| entry.tag != DiffTag::Unchanged)
        .collect()
}

fn push_removed(
    entries: &mut Vec<DiffEntry>,
    old: &[String],
    index: usize,
    len: usize,
    offset: usize,
) {
    for i in 0..len {
        entries.push(DiffEntry {
            tag: DiffTag::Removed,
            line: offset + index + i + 1,
            text: old[index + i].clone(),
        });
    }
}

fn push_added(
    entries: &mut Vec<DiffEntry>,
    new: &[String],
    index: usize,
    len: usize,
    offset: usize,
) {
    for i in 0..len {
        entries.push(DiffEntry {
            tag: DiffTag::Added,
            line: offset + index + i + 1,
            text: new[index + i].clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{changed_lines, diff_lines};
    use crate::compare::DiffTag;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn identical_sequences_have_no_changed_lines() {
        let a = lines(&["one", "two", "three"]);
        assert!(changed_lines(&a, &a, 0, 0).is_empty());
    }

    #[test]
    fn single_appended_line_is_one_added_entry() {
        let a = lines(&["one", "two"]);
        let b = lines(&["one", "two", "x"]);
        let changed = changed_lines(&a, &b, 0, 0);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].tag, DiffTag::Added);
        assert_eq!(changed[0].text, "x");
        assert_eq!(changed[0].line, 3);
    }

    #[test]
    fn single_dropped_line_is_one_removed_entry() {
        let a = lines(&["one", "two", "x"]);
        let b = lines(&["one", "two"]);
        let changed = changed_lines(&a, &b, 0, 0);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].tag, DiffTag::Removed);
        assert_eq!(changed[0].text, "x");
        assert_eq!(changed[0].line, 3);
    }

    #[test]
    fn replaced_line_reports_both_sides_with_source_numbers() {
        let a = lines(&["one", "old", "three"]);
        let b = lines(&["one", "new", "three"]);
        let changed = changed_lines(&a, &b, 0, 0);
        assert_eq!(changed.len(), 2);
        assert_eq!((changed[0].tag, changed[0].line, changed[0].text.as_str()), (DiffTag::Removed, 2, "old"));
        assert_eq!((changed[1].tag, changed[1].line, changed[1].text.as_str()), (DiffTag::Added, 2, "new"));
    }

    #[test]
    fn offsets_shift_reported_positions() {
        let a = lines(&["head", "old"]);
        let b = lines(&["head", "new"]);
        let changed = changed_lines(&a, &b, 10, 20);
        assert_eq!(changed[0].line, 12);
        assert_eq!(changed[1].line, 22);
    }

    #[test]
    fn alignment_preserves_input_order() {
        let a = lines(&["a", "b", "c"]);
        let b = lines(&["a", "x", "b", "c", "y"]);
        let all = diff_lines(&a, &b, 0, 0);
        let texts: Vec<&str> = all.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "x", "b", "c", "y"]);
    }

    #[test]
    fn unchanged_entries_are_computed_but_filterable() {
        let a = lines(&["same", "old"]);
        let b = lines(&["same", "new"]);
        let all = diff_lines(&a, &b, 0, 0);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].tag, DiffTag::Unchanged);
        assert_eq!(changed_lines(&a, &b, 0, 0).len(), 2);
    }
}
