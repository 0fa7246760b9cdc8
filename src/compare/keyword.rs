//! Keyword matching for method signatures and class-file stems.

use std::ffi::OsStr;
use std::path::Path;

/// Returns `true` when `signature` contains `keyword`.
///
/// The test is a case-sensitive substring match; `isPro` does not match
/// a signature mentioning only `ispro`.
#[must_use]
pub fn signature_matches(signature: &str, keyword: &str) -> bool {
    signature.contains(keyword)
}

/// Returns `true` when the file stem of `path` equals `class_name`.
///
/// Class lookup is an exact-equality match on the name without its
/// extension, not a substring test.
#[must_use]
pub fn stem_matches(path: &Path, class_name: &str) -> bool {
    path.file_stem() == Some(OsStr::new(class_name))
}

#[cfg(test)]
mod tests {
    use super::{signature_matches, stem_matches};
    use std::path::Path;

    #[test]
    fn substring_match_is_case_sensitive() {
        assert!(signature_matches("fooBarBaz", "Bar"));
        assert!(!signature_matches("foobarbaz", "Bar"));
    }

    #[test]
    fn keyword_matches_anywhere_in_signature() {
        assert!(signature_matches(".method public isProUser()Z", "isPro"));
        assert!(!signature_matches(".method public isFree()Z", "isPro"));
    }

    #[test]
    fn stem_match_is_exact_not_substring() {
        assert!(stem_matches(Path::new("com/app/MainActivity.smali"), "MainActivity"));
        assert!(!stem_matches(Path::new("com/app/MainActivity2.smali"), "MainActivity"));
        assert!(!stem_matches(Path::new("com/app/MainActivity.smali"), "Main"));
    }
}
