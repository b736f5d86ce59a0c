//! Error types for lexigraph-core.
//!
//! Only unrecoverable conditions are errors. Faults found while checking
//! candidate chains are reported as `pipeline::Diagnostic` values instead.

use thiserror::Error;

/// Result alias used across the core crate.
pub type LexiResult<T> = Result<T, LexiError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiError {
    /// Lexicon construction produced no usable words.
    #[error("lexicon is empty ({rejected} entries rejected)")]
    EmptyLexicon { rejected: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl LexiError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
