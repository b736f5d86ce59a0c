//! Immutable lexicon with a precomputed anagram signature index.
//!
//! The lexicon is built once from an externally supplied word bank and is
//! read-only afterwards, so a single instance (typically behind an `Arc`) can
//! be shared by any number of concurrent explorations and validations.
//!
//! Construction, in one pass over the input:
//! - each entry is folded (trimmed, lowercased) and rejected unless it is
//!   made only of ASCII letters
//! - duplicates are dropped
//! - every accepted word is filed under its signature (sorted letters)
//!
//! Signatures shared by two or more words form the `SignatureIndex`; words
//! with a unique signature have no anagram partner inside the lexicon and are
//! kept aside so that queries for non-member words stay exact.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::info;

use crate::determinism::{normalize_word, signature};
use crate::errors::{LexiError, LexiResult};

/// Mapping from signature to the (sorted) words sharing it.
///
/// Only signatures with at least two words are present. Fully derived from the
/// lexicon it belongs to; there is no way to mutate it independently.
#[derive(Debug, Clone, Default)]
pub struct SignatureIndex {
    buckets: HashMap<String, Vec<String>>,
}

impl SignatureIndex {
    /// Words filed under `sig`, in lexical order.
    pub fn bucket(&self, sig: &str) -> Option<&[String]> {
        self.buckets.get(sig).map(Vec::as_slice)
    }

    /// Number of signature buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate over `(signature, words)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Counters describing how the input word bank was consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconStats {
    pub accepted: usize,
    pub rejected: usize,
    pub duplicates: usize,
}

/// The set of valid words.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashSet<String>,
    index: SignatureIndex,
    /// signature -> the only word carrying it
    solitary: HashMap<String, String>,
    stats: LexiconStats,
}

impl Lexicon {
    /// Build a lexicon from raw entries.
    ///
    /// Fails with `LexiError::EmptyLexicon` if no entry survives normalization.
    pub fn from_words<I, S>(entries: I) -> LexiResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = HashSet::new();
        let mut by_signature: HashMap<String, Vec<String>> = HashMap::new();
        let mut stats = LexiconStats::default();

        for entry in entries {
            let Some(word) = normalize_word(entry.as_ref()) else {
                stats.rejected += 1;
                continue;
            };
            if words.contains(&word) {
                stats.duplicates += 1;
                continue;
            }
            by_signature
                .entry(signature(&word))
                .or_default()
                .push(word.clone());
            words.insert(word);
            stats.accepted += 1;
        }

        if words.is_empty() {
            return Err(LexiError::EmptyLexicon {
                rejected: stats.rejected,
            });
        }

        let mut buckets = HashMap::new();
        let mut solitary = HashMap::new();
        for (sig, mut group) in by_signature {
            if group.len() == 1 {
                if let Some(word) = group.pop() {
                    solitary.insert(sig, word);
                }
            } else {
                group.sort_unstable();
                buckets.insert(sig, group);
            }
        }

        info!(
            accepted = stats.accepted,
            rejected = stats.rejected,
            duplicates = stats.duplicates,
            anagram_buckets = buckets.len(),
            "lexicon built"
        );

        Ok(Self {
            words,
            index: SignatureIndex { buckets },
            solitary,
            stats,
        })
    }

    /// Membership test, O(1) amortized.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The lexicon's own copy of `word`, if it is a member.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Lexicon words that are anagrams of `word`, excluding `word` itself.
    ///
    /// Costs one signature computation and one bucket lookup; `word` need not
    /// be a member.
    pub fn anagrams_of(&self, word: &str) -> BTreeSet<&str> {
        let sig = signature(word);
        if let Some(bucket) = self.index.bucket(&sig) {
            return bucket
                .iter()
                .map(String::as_str)
                .filter(|w| *w != word)
                .collect();
        }
        match self.solitary.get(&sig) {
            Some(only) if only != word => BTreeSet::from([only.as_str()]),
            _ => BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed lexicon; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn signature_index(&self) -> &SignatureIndex {
        &self.index
    }

    pub fn stats(&self) -> LexiconStats {
        self.stats
    }

    /// Iterate over all words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All words in lexical order.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.iter().collect();
        v.sort_unstable();
        v
    }
}
