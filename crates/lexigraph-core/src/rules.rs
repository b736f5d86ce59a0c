//! Single-edit adjacency rules over a lexicon.
//!
//! Two words are adjacent when one is produced from the other by exactly one
//! of four edits:
//! - `Deletion`: drop one character
//! - `Insertion`: add one letter `a..=z` at any position
//! - `Substitution`: replace one character with a different letter
//! - `Anagram`: rearrange all letters
//!
//! Every rule takes an arbitrary input string (it need not be a lexicon
//! member) and returns the lexicon members reachable by one edit, never the
//! input itself. Deletion and insertion are inverse relations; substitution
//! and anagram are symmetric.
//!
//! Cost per query, for a word of k characters:
//! - deletions: k lexicon probes
//! - insertions: 26 * (k + 1) probes
//! - substitutions: 25 * k probes
//! - anagrams: one signature plus one bucket lookup (never a lexicon scan)

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::defaults::ALPHABET;
use crate::determinism::signature;
use crate::lexicon::Lexicon;

/// Category of a single-step edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransformKind {
    Deletion,
    Insertion,
    Substitution,
    Anagram,
}

impl TransformKind {
    /// All kinds, in labeling priority order.
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Deletion,
        TransformKind::Insertion,
        TransformKind::Substitution,
        TransformKind::Anagram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deletion => "deletion",
            Self::Insertion => "insertion",
            Self::Substitution => "substitution",
            Self::Anagram => "anagram",
        }
    }

    /// One-character tag used in compact chain listings.
    pub fn symbol(&self) -> char {
        match self {
            Self::Deletion => '-',
            Self::Insertion => '+',
            Self::Substitution => 'r',
            Self::Anagram => 'a',
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of transform kinds.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<TransformKind>", from = "Vec<TransformKind>")
)]
pub struct TransformKinds(u8);

impl TransformKinds {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn single(kind: TransformKind) -> Self {
        Self(kind.bit())
    }

    pub fn insert(&mut self, kind: TransformKind) {
        self.0 |= kind.bit();
    }

    pub fn contains(&self, kind: TransformKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Members in priority order.
    pub fn iter(&self) -> impl Iterator<Item = TransformKind> + '_ {
        TransformKind::ALL
            .into_iter()
            .filter(move |k| self.contains(*k))
    }

    /// First member in priority order (Deletion, Insertion, Substitution, Anagram).
    pub fn primary(&self) -> Option<TransformKind> {
        self.iter().next()
    }
}

impl fmt::Debug for TransformKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for TransformKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, k) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            f.write_str(k.as_str())?;
        }
        Ok(())
    }
}

impl FromIterator<TransformKind> for TransformKinds {
    fn from_iter<I: IntoIterator<Item = TransformKind>>(iter: I) -> Self {
        let mut set = Self::empty();
        for k in iter {
            set.insert(k);
        }
        set
    }
}

impl From<TransformKinds> for Vec<TransformKind> {
    fn from(set: TransformKinds) -> Self {
        set.iter().collect()
    }
}

impl From<Vec<TransformKind>> for TransformKinds {
    fn from(kinds: Vec<TransformKind>) -> Self {
        kinds.into_iter().collect()
    }
}

/// Per-kind tally of the edges along a chain.
///
/// An edge reached by several kinds at once increments every one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransformCounts {
    pub deletion: u32,
    pub insertion: u32,
    pub substitution: u32,
    pub anagram: u32,
}

impl TransformCounts {
    pub fn record(&mut self, kinds: TransformKinds) {
        for k in kinds.iter() {
            *self.slot(k) += 1;
        }
    }

    /// Copy of `self` with `kinds` recorded.
    pub fn with(mut self, kinds: TransformKinds) -> Self {
        self.record(kinds);
        self
    }

    pub fn get(&self, kind: TransformKind) -> u32 {
        match kind {
            TransformKind::Deletion => self.deletion,
            TransformKind::Insertion => self.insertion,
            TransformKind::Substitution => self.substitution,
            TransformKind::Anagram => self.anagram,
        }
    }

    /// Deletion plus insertion edges.
    pub fn edit_count(&self) -> u32 {
        self.deletion + self.insertion
    }

    pub fn total(&self) -> u32 {
        self.deletion + self.insertion + self.substitution + self.anagram
    }

    fn slot(&mut self, kind: TransformKind) -> &mut u32 {
        match kind {
            TransformKind::Deletion => &mut self.deletion,
            TransformKind::Insertion => &mut self.insertion,
            TransformKind::Substitution => &mut self.substitution,
            TransformKind::Anagram => &mut self.anagram,
        }
    }
}

impl fmt::Display for TransformCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-{} +{} r{} a{}",
            self.deletion, self.insertion, self.substitution, self.anagram
        )
    }
}

/// Adjacency oracle over a borrowed lexicon.
#[derive(Debug, Clone, Copy)]
pub struct EdgeRules<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> EdgeRules<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Members obtained by removing one character of `word`.
    pub fn deletions(&self, word: &str) -> BTreeSet<&'a str> {
        let mut out = BTreeSet::new();
        let mut buf = String::with_capacity(word.len());
        for (i, c) in word.char_indices() {
            buf.clear();
            buf.push_str(&word[..i]);
            buf.push_str(&word[i + c.len_utf8()..]);
            self.probe(&buf, word, &mut out);
        }
        out
    }

    /// Members obtained by inserting one letter anywhere in `word`.
    pub fn insertions(&self, word: &str) -> BTreeSet<&'a str> {
        let mut out = BTreeSet::new();
        let mut buf = String::with_capacity(word.len() + 1);
        let positions = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()));
        for i in positions {
            for &letter in ALPHABET {
                buf.clear();
                buf.push_str(&word[..i]);
                buf.push(letter as char);
                buf.push_str(&word[i..]);
                self.probe(&buf, word, &mut out);
            }
        }
        out
    }

    /// Members obtained by replacing one character of `word` with another letter.
    pub fn substitutions(&self, word: &str) -> BTreeSet<&'a str> {
        let mut out = BTreeSet::new();
        let mut buf = String::with_capacity(word.len());
        for (i, c) in word.char_indices() {
            for &letter in ALPHABET {
                if letter as char == c {
                    continue;
                }
                buf.clear();
                buf.push_str(&word[..i]);
                buf.push(letter as char);
                buf.push_str(&word[i + c.len_utf8()..]);
                self.probe(&buf, word, &mut out);
            }
        }
        out
    }

    /// Members that rearrange the letters of `word`.
    pub fn anagrams(&self, word: &str) -> BTreeSet<&'a str> {
        self.lexicon.anagrams_of(word)
    }

    pub fn neighbors(&self, kind: TransformKind, word: &str) -> BTreeSet<&'a str> {
        match kind {
            TransformKind::Deletion => self.deletions(word),
            TransformKind::Insertion => self.insertions(word),
            TransformKind::Substitution => self.substitutions(word),
            TransformKind::Anagram => self.anagrams(word),
        }
    }

    /// Every neighbor of `word` with all the kinds that reach it.
    pub fn all_neighbors(&self, word: &str) -> BTreeMap<&'a str, TransformKinds> {
        let [del, ins, sub, ana] = self.neighbor_sets(word);
        let mut out: BTreeMap<&'a str, TransformKinds> = BTreeMap::new();
        for (kind, set) in TransformKind::ALL.into_iter().zip([del, ins, sub, ana]) {
            for n in set {
                out.entry(n).or_default().insert(kind);
            }
        }
        out
    }

    /// Kinds `k` for which `to ∈ neighbors(k, from)`.
    ///
    /// Checks the structure of the pair directly instead of enumerating
    /// neighbor sets.
    pub fn connecting_kinds(&self, from: &str, to: &str) -> TransformKinds {
        let mut kinds = TransformKinds::empty();
        if from == to || !self.lexicon.contains(to) {
            return kinds;
        }

        let a: Vec<char> = from.chars().collect();
        let b: Vec<char> = to.chars().collect();

        if a.len() == b.len() + 1 && is_single_deletion(&a, &b) {
            kinds.insert(TransformKind::Deletion);
        }
        if b.len() == a.len() + 1 && is_single_deletion(&b, &a) {
            kinds.insert(TransformKind::Insertion);
        }
        if a.len() == b.len() {
            let differing = a.iter().zip(&b).filter(|(x, y)| x != y).count();
            if differing == 1 {
                kinds.insert(TransformKind::Substitution);
            }
            if signature(from) == signature(to) {
                kinds.insert(TransformKind::Anagram);
            }
        }
        kinds
    }

    /// Highest-priority kind connecting `from` to `to`, if any.
    pub fn connects(&self, from: &str, to: &str) -> Option<TransformKind> {
        self.connecting_kinds(from, to).primary()
    }

    fn probe(&self, candidate: &str, original: &str, out: &mut BTreeSet<&'a str>) {
        if candidate == original {
            return;
        }
        if let Some(w) = self.lexicon.get(candidate) {
            out.insert(w);
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn neighbor_sets(&self, word: &str) -> [BTreeSet<&'a str>; 4] {
        [
            self.deletions(word),
            self.insertions(word),
            self.substitutions(word),
            self.anagrams(word),
        ]
    }

    /// The four kinds only read the lexicon, so they run concurrently and are
    /// merged by the caller.
    #[cfg(feature = "parallel")]
    fn neighbor_sets(&self, word: &str) -> [BTreeSet<&'a str>; 4] {
        let ((del, ins), (sub, ana)) = rayon::join(
            || rayon::join(|| self.deletions(word), || self.insertions(word)),
            || rayon::join(|| self.substitutions(word), || self.anagrams(word)),
        );
        [del, ins, sub, ana]
    }
}

/// True if removing exactly one character of `long` yields `short`.
fn is_single_deletion(long: &[char], short: &[char]) -> bool {
    if long.len() != short.len() + 1 {
        return false;
    }
    let i = long.iter().zip(short).take_while(|(x, y)| x == y).count();
    long[i + 1..] == short[i..]
}
