//! lexigraph data models.
//!
//! Models are mostly "dumb" data. Chains are ephemeral: they are created by an
//! exploration or handed to a validation, then emitted or reported and dropped.
//! Nothing here is persisted.
//!
//! Notes on serde:
//! - With the `serde` feature enabled, a `Chain` serializes as a plain JSON
//!   array of words and a `Discovery` as `{ "chain": [...], "counts": {...}, ... }`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rules::{TransformCounts, TransformKinds};

/// An ordered sequence of words.
///
/// Chains produced by exploration never repeat a word and have a legal edge
/// between every consecutive pair. Chains read from outside carry no such
/// guarantee until checked by `pipeline::verify`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Chain(Vec<String>);

impl Chain {
    pub fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    /// Single-word chain holding the exploration seed.
    pub fn seed(word: impl Into<String>) -> Self {
        Self(vec![word.into()])
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn into_words(self) -> Vec<String> {
        self.0
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges (words minus one).
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    /// Copy of `self` with `word` appended.
    pub fn extended(&self, word: &str) -> Self {
        let mut words = Vec::with_capacity(self.0.len() + 1);
        words.extend(self.0.iter().cloned());
        words.push(word.to_string());
        Self(words)
    }
}

impl AsRef<[String]> for Chain {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Chain {
    fn from(words: Vec<String>) -> Self {
        Self(words)
    }
}

impl<'a> From<Vec<&'a str>> for Chain {
    fn from(words: Vec<&'a str>) -> Self {
        Self(words.into_iter().map(str::to_string).collect())
    }
}

/// A newly discovered chain emitted by exploration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Discovery {
    pub chain: Chain,
    /// Tally of edge kinds along the whole chain.
    pub counts: TransformCounts,
    /// Kinds of the final edge.
    pub last_edge: TransformKinds,
}

impl Discovery {
    pub fn depth(&self) -> usize {
        self.chain.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_counts_edges() {
        let c = Chain::seed("cat");
        assert_eq!(c.depth(), 0);
        let c = c.extended("cats");
        assert_eq!(c.len(), 2);
        assert_eq!(c.depth(), 1);
        assert_eq!(c.last(), Some("cats"));
        assert!(c.contains("cat"));
        assert_eq!(Chain::default().depth(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn chain_serializes_as_array() {
        let c = Chain::from(vec!["cat", "cats"]);
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"["cat","cats"]"#);
    }
}
