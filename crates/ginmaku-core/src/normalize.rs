//! Search-term normalization for trending-store keys.
//!
//! Two terms that differ only in case, compatibility form, or spacing
//! must land on the same counter document.

use unicode_normalization::UnicodeNormalization;

/// Normalize a search term into its store key.
pub fn normalize_term(s: &str) -> String {
    let s = unicode_normalize(s);
    collapse_whitespace(&s)
}

/// NFKC-fold and lowercase, so fullwidth forms and loose diacritics
/// compare equal to their plain spellings.
fn unicode_normalize(s: &str) -> String {
    s.nfkc().collect::<String>().to_lowercase()
}

/// Trim and collapse whitespace runs to a single space.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_folding() {
        assert_eq!(normalize_term("Batman"), "batman");
        assert_eq!(normalize_term("THE DARK KNIGHT"), "the dark knight");
    }

    #[test]
    fn fullwidth_ascii() {
        assert_eq!(normalize_term("ＢＡＴＭＡＮ"), "batman");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(normalize_term("  dark   knight  "), "dark knight");
        assert_eq!(normalize_term("dark\tknight"), "dark knight");
    }

    #[test]
    fn diacritics_preserved() {
        // NFKC composes diacritics but does not strip them.
        assert_eq!(normalize_term("Amélie"), "amélie");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_term(""), "");
        assert_eq!(normalize_term("   "), "");
    }

    #[test]
    fn idempotent() {
        let once = normalize_term("  The MATRIX  Reloaded ");
        assert_eq!(normalize_term(&once), once);
    }
}
