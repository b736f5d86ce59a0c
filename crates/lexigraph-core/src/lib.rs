//! lexigraph-core
//!
//! Core primitives for lexigraph, a word-transformation graph explorer:
//! - an immutable `Lexicon` with a precomputed anagram signature index
//! - `EdgeRules`: single deletion, insertion, substitution and anagram adjacency
//! - `GraphExplorer`: bounded, lazy, breadth-first chain discovery from a seed
//! - `ChainValidator`: batch verification of candidate chains with structured
//!   diagnostics
//!
//! The lexicon is read-only after construction; share one instance (e.g. in an
//! `Arc`) across any number of explorations and validations.

pub mod config;
pub mod determinism;
pub mod errors;
pub mod lexicon;
pub mod model;
pub mod pipeline;
pub mod rules;

pub use crate::errors::{LexiError, LexiResult};

/// Default settings.
pub mod defaults {
    /// Letters tried by insertion and substitution.
    pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
    /// Default maximum chain depth, in edges.
    pub const MAX_DEPTH: usize = 8;
    /// Default node budget per exploration.
    pub const MAX_NODES: usize = 1_000_000;
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{
        ExploreConfig, InterestThreshold, LimitsConfig, NeighborOrder, StopPolicy,
    };
    pub use crate::lexicon::{Lexicon, LexiconStats, SignatureIndex};
    pub use crate::model::{Chain, Discovery};
    pub use crate::pipeline::{
        ChainValidator, ChainVerdict, Diagnostic, DiagnosticKind, DiagnosticLevel, Exploration,
        GraphExplorer, Position, ValidationReport,
    };
    pub use crate::rules::{EdgeRules, TransformCounts, TransformKind, TransformKinds};
    pub use crate::{LexiError, LexiResult};
}
