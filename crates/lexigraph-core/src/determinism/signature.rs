//! Anagram signatures.
//!
//! The signature of a word is its letters in sorted order. Two words are
//! anagrams of each other exactly when their signatures are equal.
//!
//! Computing a signature costs O(k log k) for a word of k characters and
//! involves no lexicon access.

use itertools::Itertools;

/// Sorted-letter key of `word`.
pub fn signature(word: &str) -> String {
    word.chars().sorted_unstable().collect()
}
