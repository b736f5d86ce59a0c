//! Batch verification of candidate chains.
//!
//! This module checks chains that were not necessarily produced by
//! exploration (hand-written puzzle files, API payloads, CI fixtures) against
//! the same adjacency rules.
//!
//! Checks per chain:
//! - the chain has at least two words, otherwise `ChainTooShort` and nothing
//!   else is checked for it
//! - every word is a lexicon member (`WordNotInLexicon`)
//! - every consecutive pair is connected by some rule and does not step back
//!   onto a word used earlier in the chain (`InvalidEdge`)
//!
//! Verification never stops early: every problem in every chain of the batch
//! is collected into one report. Words are folded (trimmed, lowercased) before
//! checking.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::determinism::fold_word;
use crate::lexicon::Lexicon;
use crate::pipeline::{Diagnostic, DiagnosticKind, Position};
use crate::rules::{EdgeRules, TransformKind};

/// Outcome for one chain of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainVerdict {
    pub index: usize,
    pub valid: bool,
    /// Label of each transition: the highest-priority connecting kind, or
    /// `None` for an invalid edge. Empty for chains that are too short.
    pub edges: Vec<Option<TransformKind>>,
}

/// Verification report for a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
    pub chains: Vec<ChainVerdict>,
    pub valid_chains: usize,
    pub invalid_chains: usize,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Process exit status: 0 without diagnostics, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_ok() {
            0
        } else {
            1
        }
    }

    pub fn total_chains(&self) -> usize {
        self.valid_chains + self.invalid_chains
    }

    /// Diagnostics belonging to chain `index`.
    pub fn diagnostics_for(&self, index: usize) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.chain == index)
    }
}

/// Verifies candidate chains against a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct ChainValidator<'a> {
    rules: EdgeRules<'a>,
}

impl<'a> ChainValidator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            rules: EdgeRules::new(lexicon),
        }
    }

    /// Verify every chain of `batch` and collect all diagnostics.
    pub fn validate<C, S>(&self, batch: &[C]) -> ValidationReport
    where
        C: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut report = ValidationReport::default();

        for (index, chain) in batch.iter().enumerate() {
            let verdict = self.validate_chain(index, chain.as_ref(), &mut report.diagnostics);
            if verdict.valid {
                report.valid_chains += 1;
            } else {
                report.invalid_chains += 1;
            }
            report.chains.push(verdict);
        }

        debug!(
            chains = report.total_chains(),
            valid = report.valid_chains,
            invalid = report.invalid_chains,
            diagnostics = report.diagnostics.len(),
            "validation finished"
        );

        report
    }

    /// Verify one chain, appending its diagnostics to `out`.
    pub fn validate_chain<S: AsRef<str>>(
        &self,
        index: usize,
        chain: &[S],
        out: &mut Vec<Diagnostic>,
    ) -> ChainVerdict {
        let before = out.len();

        if chain.len() < 2 {
            out.push(Diagnostic::new(
                index,
                Position::Chain,
                DiagnosticKind::ChainTooShort,
                format!(
                    "chain too short: needs at least 2 words, found {}",
                    chain.len()
                ),
            ));
            return ChainVerdict {
                index,
                valid: false,
                edges: Vec::new(),
            };
        }

        let raw: Vec<&str> = chain.iter().map(AsRef::as_ref).collect();
        let words: Vec<String> = raw.iter().map(|w| fold_word(w)).collect();
        let lexicon = self.rules.lexicon();

        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(&words[0]);
        let mut edges = Vec::with_capacity(words.len() - 1);

        for i in 0..words.len() {
            if !lexicon.contains(&words[i]) {
                out.push(Diagnostic::new(
                    index,
                    Position::Word { index: i },
                    DiagnosticKind::WordNotInLexicon,
                    format!("'{}' is not in the lexicon", raw[i]),
                ));
            }

            if i + 1 == words.len() {
                break;
            }

            let (from, to) = (&words[i], &words[i + 1]);
            let edge = if !seen.insert(to) {
                out.push(Diagnostic::new(
                    index,
                    Position::transition(i),
                    DiagnosticKind::InvalidEdge,
                    format!(
                        "'{}' → '{}': '{}' already appears earlier in the chain",
                        raw[i],
                        raw[i + 1],
                        raw[i + 1]
                    ),
                ));
                None
            } else {
                let kind = self.rules.connects(from, to);
                if kind.is_none() {
                    out.push(Diagnostic::new(
                        index,
                        Position::transition(i),
                        DiagnosticKind::InvalidEdge,
                        format!("'{}' → '{}': no single edit connects them", raw[i], raw[i + 1]),
                    ));
                }
                kind
            };
            edges.push(edge);
        }

        ChainVerdict {
            index,
            valid: out.len() == before,
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["cat", "cats", "bat", "cut", "act", "tac"]).unwrap()
    }

    #[test]
    fn valid_chain_reports_edge_kind() {
        let lex = lexicon();
        let report = ChainValidator::new(&lex).validate(&[vec!["cat", "cats"]]);

        assert!(report.is_ok());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.valid_chains, 1);
        assert_eq!(report.chains[0].edges, vec![Some(TransformKind::Insertion)]);
    }

    #[test]
    fn unknown_word_and_invalid_edge() {
        let lex = lexicon();
        let report = ChainValidator::new(&lex).validate(&[vec!["cat", "dog"]]);

        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.invalid_chains, 1);
        let kinds: Vec<_> = report.diagnostics.iter().map(|d| (d.kind, d.position)).collect();
        assert_eq!(
            kinds,
            vec![
                (DiagnosticKind::InvalidEdge, Position::Transition { from: 0, to: 1 }),
                (DiagnosticKind::WordNotInLexicon, Position::Word { index: 1 }),
            ]
        );
        assert_eq!(report.chains[0].edges, vec![None]);
    }

    #[test]
    fn short_chain() {
        let lex = lexicon();
        let report = ChainValidator::new(&lex).validate(&[vec!["cat"]]);

        assert_eq!(report.diagnostics.len(), 1);
        let d = &report.diagnostics[0];
        assert_eq!(d.kind, DiagnosticKind::ChainTooShort);
        assert_eq!(d.chain, 0);
        assert_eq!(d.position, Position::Chain);

        let empty: Vec<Vec<&str>> = vec![vec![]];
        let report = ChainValidator::new(&lex).validate(&empty);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::ChainTooShort);
    }

    #[test]
    fn collects_everything_across_the_batch() {
        let lex = lexicon();
        let batch = vec![
            vec!["cat"],
            vec!["cat", "dog", "cut"],
            vec!["cat", "cats", "cat"],
            vec!["bat", "cat", "act", "tac"],
        ];
        let report = ChainValidator::new(&lex).validate(&batch);

        assert_eq!(report.valid_chains, 1);
        assert_eq!(report.invalid_chains, 3);
        assert_eq!(report.total_chains(), 4);

        // Chain 1: 'dog' missing, both transitions invalid.
        assert_eq!(report.diagnostics_for(1).count(), 3);
        // Chain 2: steps back onto 'cat'.
        let back: Vec<_> = report.diagnostics_for(2).collect();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].position, Position::transition(1));
        assert!(back[0].message.contains("already appears"));

        assert_eq!(
            report.chains[3].edges,
            vec![
                Some(TransformKind::Substitution),
                Some(TransformKind::Anagram),
                Some(TransformKind::Anagram),
            ]
        );
    }

    #[test]
    fn words_are_folded_before_checking() {
        let lex = lexicon();
        let report = ChainValidator::new(&lex).validate(&[vec!["Cat", " CATS "]]);
        assert!(report.is_ok());
    }

    #[test]
    fn diagnostics_keep_input_order() {
        let lex = lexicon();
        let report = ChainValidator::new(&lex).validate(&[vec!["xx", "yy", "cat"]]);
        let order: Vec<_> = report.diagnostics.iter().map(|d| d.position).collect();
        assert_eq!(
            order,
            vec![
                Position::Word { index: 0 },
                Position::transition(0),
                Position::Word { index: 1 },
                Position::transition(1),
            ]
        );
    }
}
