//! Method boundary detection within a smali class file.

use crate::compare::MethodRange;

/// Trimmed prefix that opens a method definition.
pub const METHOD_OPEN: &str = ".method";
/// Trimmed prefix that closes a method definition.
pub const METHOD_CLOSE: &str = ".end method";

/// Scans `lines` in order and returns the method ranges found.
///
/// A line whose trimmed content starts with [`METHOD_OPEN`] begins a
/// pending range, replacing any earlier unmatched open; a line starting
/// with [`METHOD_CLOSE`] completes the pending range, if any. A close
/// with no pending open is ignored, and an open never matched by a
/// close yields no range. Nested definitions do not occur in the smali
/// format and are not supported.
#[must_use]
pub fn scan_methods(lines: &[String]) -> Vec<MethodRange> {
    let mut ranges = Vec::new();
    let mut pending: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with(METHOD_CLOSE) {
            if let Some(start) = pending.take() {
                ranges.push(MethodRange { start, end: index });
            }
        } else if trimmed.starts_with(METHOD_OPEN) {
            pending = Some(index);
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::scan_methods;
    use crate::compare::MethodRange;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn balanced_markers_yield_one_range_per_method() {
        let file = lines(&[
            ".class public Lcom/app/Billing;",
            ".method public isPro()Z",
            "    const/4 v0, 0x0",
            "    return v0",
            ".end method",
            "",
            ".method public isVip()Z",
            "    return v0",
            ".end method",
        ]);
        let ranges = scan_methods(&file);
        assert_eq!(
            ranges,
            vec![MethodRange { start: 1, end: 4 }, MethodRange { start: 6, end: 8 }]
        );
    }

    #[test]
    fn ranges_are_sorted_and_non_overlapping() {
        let file = lines(&[
            ".method a()V",
            ".end method",
            ".method b()V",
            ".end method",
            ".method c()V",
            ".end method",
        ]);
        let ranges = scan_methods(&file);
        assert_eq!(ranges.len(), 3);
        for pair in ranges.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
        for range in &ranges {
            assert!(range.start < range.end);
        }
    }

    #[test]
    fn unterminated_open_yields_no_range() {
        let file = lines(&[".method a()V", "    return-void"]);
        assert!(scan_methods(&file).is_empty());
    }

    #[test]
    fn later_open_replaces_unmatched_earlier_one() {
        let file = lines(&[".method a()V", ".method b()V", "    return-void", ".end method"]);
        assert_eq!(scan_methods(&file), vec![MethodRange { start: 1, end: 3 }]);
    }

    #[test]
    fn stray_close_is_ignored() {
        let file = lines(&[".end method", ".method a()V", ".end method"]);
        assert_eq!(scan_methods(&file), vec![MethodRange { start: 1, end: 2 }]);
    }

    #[test]
    fn markers_are_matched_on_trimmed_prefix() {
        let file = lines(&["    .method public run()V", "        nop", "    .end method"]);
        assert_eq!(scan_methods(&file), vec![MethodRange { start: 0, end: 2 }]);
    }
}
