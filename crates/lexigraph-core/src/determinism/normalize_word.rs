//! Word normalization rules.
//!
//! Lexicon entries and candidate chain words go through the same folding so
//! that identical logical words compare equal:
//! - surrounding whitespace (including a UTF-8 BOM) is removed
//! - letters are lowercased
//!
//! Lexicon entries are additionally required to be non-empty and made only of
//! ASCII letters `a..=z`.

/// Fold a raw string into its comparison form without rejecting anything.
pub fn fold_word(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_lowercase()
}

/// Normalize a lexicon entry.
///
/// Returns `None` if the folded entry is empty or contains anything other than
/// ASCII letters.
pub fn normalize_word(input: &str) -> Option<String> {
    let folded = fold_word(input);
    if is_word(&folded) {
        Some(folded)
    } else {
        None
    }
}

/// True if `s` is a non-empty lowercase ASCII alphabetic string.
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}
