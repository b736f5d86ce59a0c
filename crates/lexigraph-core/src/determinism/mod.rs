//! Deterministic building blocks: word folding, anagram signatures and
//! neighbor ordering.

pub mod normalize_word;
pub mod ordering;
pub mod signature;

pub use normalize_word::{fold_word, is_word, normalize_word};
pub use ordering::NeighborSequencer;
pub use signature::signature;
