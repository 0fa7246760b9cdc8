//! Method-scoped comparison: signature-matched and content-matched modes.

use crate::compare::boundaries::scan_methods;
use crate::compare::differ::changed_lines;
use crate::compare::keyword::signature_matches;
use crate::compare::DiffEntry;

/// Changed lines for one method pairing, with the signature the pairing
/// was selected by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDiff {
    /// Signature line of the method on the original side.
    pub signature: String,
    /// Changed entries only; empty pairings are never returned.
    pub entries: Vec<DiffEntry>,
}

/// Signature-matched mode: diffs every cross-product pairing of methods
/// whose signature contains `keyword` on both sides.
///
/// With N matching methods in `old` and M in `new`, N×M diffs are
/// attempted; pairings with no changed lines are dropped. Entry
/// positions are file positions (each side offset by its own range
/// start).
#[must_use]
pub fn compare_method_names(old: &[String], new: &[String], keyword: &str) -> Vec<MethodDiff> {
    let old_ranges = scan_methods(old);
    let new_ranges = scan_methods(new);
    let mut diffs = Vec::new();

    for old_range in &old_ranges {
        let signature = old_range.signature(old);
        if !signature_matches(signature, keyword) {
            continue;
        }
        for new_range in &new_ranges {
            if !signature_matches(new_range.signature(new), keyword) {
                continue;
            }
            let entries = changed_lines(
                old_range.slice(old),
                new_range.slice(new),
                old_range.start,
                new_range.start,
            );
            if !entries.is_empty() {
                diffs.push(MethodDiff { signature: signature.to_string(), entries });
            }
        }
    }

    diffs
}

/// Content-matched mode: for each method range in `old`, diffs it
/// against the same index range in `new` when `keyword` appears in
/// either side's slice.
///
/// Correspondence is positional, not content-matched: the modified side
/// is cut at the original side's indices, truncated when the modified
/// file is shorter. Both sides' entries are offset by the original
/// range start.
#[must_use]
pub fn compare_method_content(old: &[String], new: &[String], keyword: &str) -> Vec<MethodDiff> {
    let mut diffs = Vec::new();

    for range in scan_methods(old) {
        let old_slice = range.slice(old);
        let new_slice = range.slice(new);
        let mentioned = old_slice.iter().chain(new_slice).any(|line| line.contains(keyword));
        if !mentioned {
            continue;
        }
        let entries = changed_lines(old_slice, new_slice, range.start, range.start);
        if !entries.is_empty() {
            diffs.push(MethodDiff { signature: range.signature(old).to_string(), entries });
        }
    }

    diffs
}
