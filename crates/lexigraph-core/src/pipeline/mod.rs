//! Graph pipelines over a lexicon.
//!
//! Two consumers drive the same adjacency rules:
//! - `explore`: grow chains outward from a seed word, up to a depth bound
//! - `verify`: check a batch of externally supplied chains
//!
//! Both report problems through `Diagnostic` values rather than errors. A
//! diagnostic carries enough position information to locate the problem in
//! the input batch, so it serves both human-readable reporting and machine
//! assertions.
//!
//! The core crate does not do filesystem I/O. Higher-level crates read word
//! banks and chain files and pass strings into these pipelines.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod explore;
pub mod verify;

pub use explore::{Exploration, GraphExplorer};
pub use verify::{ChainValidator, ChainVerdict, ValidationReport};

/// Category of a reported problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiagnosticKind {
    /// Exploration seed is not a lexicon member. Non-fatal.
    UnknownWord,
    /// A candidate chain word is not a lexicon member.
    WordNotInLexicon,
    /// A candidate chain has fewer than two words.
    ChainTooShort,
    /// No rule connects a consecutive pair of a candidate chain.
    InvalidEdge,
}

impl DiagnosticKind {
    /// Stable dot-delimited code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownWord => "explore.unknown_word",
            Self::WordNotInLexicon => "chain.word.not_in_lexicon",
            Self::ChainTooShort => "chain.too_short",
            Self::InvalidEdge => "chain.edge.invalid",
        }
    }

    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Self::UnknownWord => DiagnosticLevel::Warning,
            _ => DiagnosticLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

/// Where in a chain a diagnostic points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "at", rename_all = "snake_case"))]
pub enum Position {
    /// The chain as a whole.
    Chain,
    /// A single word, by index.
    Word { index: usize },
    /// The edge between two consecutive words.
    Transition { from: usize, to: usize },
}

impl Position {
    pub fn transition(from: usize) -> Self {
        Self::Transition { from, to: from + 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain => f.write_str("chain"),
            Self::Word { index } => write!(f, "word {index}"),
            Self::Transition { from, to } => write!(f, "transition {from}→{to}"),
        }
    }
}

/// A structured report of one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// Index of the chain in the input batch (0 for an exploration seed).
    pub chain: usize,
    pub position: Position,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        chain: usize,
        position: Position,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            chain,
            position,
            kind,
            message: message.into(),
        }
    }

    pub fn level(&self) -> DiagnosticLevel {
        self.kind.level()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::Chain => write!(f, "chain {}: {}", self.chain, self.message),
            pos => write!(f, "chain {}, {}: {}", self.chain, pos, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_locates_problem() {
        let d = Diagnostic::new(
            2,
            Position::transition(0),
            DiagnosticKind::InvalidEdge,
            "no rule connects 'cat' to 'dog'",
        );
        assert_eq!(
            d.to_string(),
            "chain 2, transition 0→1: no rule connects 'cat' to 'dog'"
        );
        assert_eq!(d.level(), DiagnosticLevel::Error);

        let d = Diagnostic::new(0, Position::Chain, DiagnosticKind::ChainTooShort, "too short");
        assert_eq!(d.to_string(), "chain 0: too short");
    }

    #[test]
    fn unknown_word_is_a_warning() {
        assert_eq!(DiagnosticKind::UnknownWord.level(), DiagnosticLevel::Warning);
        assert_eq!(DiagnosticKind::InvalidEdge.code(), "chain.edge.invalid");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn position_serializes_with_tag() {
        let v = serde_json::to_value(Position::transition(3)).unwrap();
        assert_eq!(v, serde_json::json!({"at": "transition", "from": 3, "to": 4}));
        let v = serde_json::to_value(Position::Chain).unwrap();
        assert_eq!(v, serde_json::json!({"at": "chain"}));
    }
}
