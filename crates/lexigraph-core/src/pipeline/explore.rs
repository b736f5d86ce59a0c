//! Bounded exploration of the word graph.
//!
//! The graph is implicit: nodes are strings, edges are given by `EdgeRules`.
//! Exploration starts from a seed word and grows chains outward breadth-first
//! using an explicit frontier of `(chain, counts)` entries:
//! 1. pop the next entry; entries whose chain already has `max_depth` edges
//!    are leaves and are never queued
//! 2. compute all neighbors of the chain's last word
//! 3. drop neighbors already visited in this exploration
//! 4. for each remaining neighbor, in the configured order: mark it visited,
//!    emit the extended chain with updated counts, queue it for expansion
//!
//! Marking a neighbor visited at discovery time means no other branch can
//! claim it later, so no emitted chain repeats a word and the visited set is
//! bounded by the lexicon size. Exploration therefore always terminates.
//!
//! Results are produced lazily through the `Exploration` iterator; nothing is
//! computed until the caller pulls.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, warn};

use crate::config::{validate_config, ExploreConfig, StopPolicy};
use crate::determinism::{fold_word, NeighborSequencer};
use crate::errors::LexiResult;
use crate::lexicon::Lexicon;
use crate::model::{Chain, Discovery};
use crate::pipeline::{Diagnostic, DiagnosticKind, Position};
use crate::rules::{EdgeRules, TransformCounts, TransformKinds};

/// Explores the word graph defined by a lexicon.
#[derive(Debug, Clone)]
pub struct GraphExplorer<'a> {
    rules: EdgeRules<'a>,
    config: ExploreConfig,
}

impl<'a> GraphExplorer<'a> {
    /// Create an explorer; fails if `config` is invalid.
    pub fn new(lexicon: &'a Lexicon, config: ExploreConfig) -> LexiResult<Self> {
        validate_config(&config)?;
        Ok(Self {
            rules: EdgeRules::new(lexicon),
            config,
        })
    }

    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    /// Start a lazy exploration from `start`.
    ///
    /// `start` is folded (trimmed, lowercased) first. It need not be a lexicon
    /// member: in that case an `UnknownWord` diagnostic is recorded and
    /// exploration proceeds anyway.
    pub fn explore(&self, start: &str) -> Exploration<'a> {
        Exploration::start(self.rules, &self.config, self.config.stop.clone(), start)
    }

    /// Explore from `start` until a discovered chain satisfies `policy`.
    ///
    /// Overrides any stop policy in the configuration. Returns `None` if the
    /// reachable graph is exhausted without a match.
    pub fn first_match(&self, start: &str, policy: &StopPolicy) -> Option<Discovery> {
        Exploration::start(self.rules, &self.config, Some(policy.clone()), start).next()
    }
}

#[derive(Debug)]
struct FrontierEntry {
    chain: Chain,
    counts: TransformCounts,
}

/// One running exploration. Yields every newly discovered chain, or only the
/// first chain satisfying the stop policy when one is configured.
#[derive(Debug)]
pub struct Exploration<'a> {
    rules: EdgeRules<'a>,
    max_depth: usize,
    max_nodes: usize,
    stop: Option<StopPolicy>,
    sequencer: NeighborSequencer,

    frontier: VecDeque<FrontierEntry>,
    pending: VecDeque<Discovery>,
    visited: HashSet<&'a str>,
    /// Distinct words seen, the start word included.
    nodes: usize,

    diagnostics: Vec<Diagnostic>,
    budget_exhausted: bool,
    matched: bool,
}

impl<'a> Exploration<'a> {
    fn start(
        rules: EdgeRules<'a>,
        config: &ExploreConfig,
        stop: Option<StopPolicy>,
        start: &str,
    ) -> Self {
        let start = fold_word(start);
        let mut visited = HashSet::new();
        let mut diagnostics = Vec::new();

        match rules.lexicon().get(&start) {
            Some(member) => {
                visited.insert(member);
            }
            None => {
                warn!(word = %start, "start word is not in the lexicon");
                diagnostics.push(Diagnostic::new(
                    0,
                    Position::Word { index: 0 },
                    DiagnosticKind::UnknownWord,
                    format!("'{start}' is not in the lexicon"),
                ));
            }
        }

        debug!(
            word = %start,
            max_depth = config.max_depth,
            order = config.order.as_str(),
            early_stop = stop.is_some(),
            "exploration started"
        );

        let mut frontier = VecDeque::new();
        frontier.push_back(FrontierEntry {
            chain: Chain::seed(start),
            counts: TransformCounts::default(),
        });

        Self {
            rules,
            max_depth: config.max_depth,
            max_nodes: config.limits.max_nodes,
            stop,
            sequencer: NeighborSequencer::new(config.order),
            frontier,
            pending: VecDeque::new(),
            visited,
            nodes: 1,
            diagnostics,
            budget_exhausted: false,
            matched: false,
        }
    }

    /// Non-fatal diagnostics recorded so far (at most one `UnknownWord`).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True once the node budget stopped further discovery.
    pub fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    /// Number of distinct words seen so far, the start word included.
    pub fn visited_count(&self) -> usize {
        self.nodes
    }

    fn expand(&mut self, entry: FrontierEntry) {
        let word = entry.chain.last().unwrap_or_default();
        let mut fresh: Vec<(&'a str, TransformKinds)> = self
            .rules
            .all_neighbors(word)
            .into_iter()
            .filter(|(n, _)| !self.visited.contains(n))
            .collect();
        self.sequencer.arrange(&mut fresh);

        for (neighbor, kinds) in fresh {
            if self.nodes >= self.max_nodes {
                warn!(max_nodes = self.max_nodes, "node budget exhausted");
                self.budget_exhausted = true;
                self.frontier.clear();
                return;
            }
            self.visited.insert(neighbor);
            self.nodes += 1;

            let chain = entry.chain.extended(neighbor);
            let counts = entry.counts.with(kinds);
            let discovery = Discovery {
                chain: chain.clone(),
                counts,
                last_edge: kinds,
            };

            match &self.stop {
                Some(policy) if policy.matches(discovery.depth(), &counts) => {
                    debug!(depth = discovery.depth(), "stop policy matched");
                    self.pending.push_back(discovery);
                    self.frontier.clear();
                    self.matched = true;
                    return;
                }
                Some(_) => {}
                None => self.pending.push_back(discovery),
            }

            if chain.depth() < self.max_depth {
                self.frontier.push_back(FrontierEntry { chain, counts });
            }
        }
    }
}

impl<'a> Iterator for Exploration<'a> {
    type Item = Discovery;

    fn next(&mut self) -> Option<Discovery> {
        loop {
            if let Some(d) = self.pending.pop_front() {
                return Some(d);
            }
            if self.matched {
                return None;
            }
            let entry = self.frontier.pop_front()?;
            if entry.chain.depth() < self.max_depth {
                self.expand(entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterestThreshold;
    use crate::rules::TransformKind;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["cat", "cot", "cog", "dog", "dot", "act"]).unwrap()
    }

    fn chains(it: impl Iterator<Item = Discovery>) -> Vec<Vec<String>> {
        it.map(|d| d.chain.into_words()).collect()
    }

    fn words(v: &[&[&str]]) -> Vec<Vec<String>> {
        v.iter()
            .map(|c| c.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn lexical_breadth_first_order() {
        let lex = lexicon();
        let explorer = GraphExplorer::new(&lex, ExploreConfig::default().with_max_depth(3)).unwrap();

        let got = chains(explorer.explore("cat"));
        assert_eq!(
            got,
            words(&[
                &["cat", "act"],
                &["cat", "cot"],
                &["cat", "cot", "cog"],
                &["cat", "cot", "dot"],
                &["cat", "cot", "cog", "dog"],
            ])
        );
    }

    #[test]
    fn depth_bound_limits_chain_length() {
        let lex = lexicon();
        for depth in 1..=4 {
            let explorer =
                GraphExplorer::new(&lex, ExploreConfig::default().with_max_depth(depth)).unwrap();
            for d in explorer.explore("cat") {
                assert!(d.chain.len() <= depth + 1);
            }
        }

        let explorer = GraphExplorer::new(&lex, ExploreConfig::default().with_max_depth(1)).unwrap();
        assert_eq!(explorer.explore("cat").count(), 2);
    }

    #[test]
    fn counts_follow_the_chain() {
        let lex = lexicon();
        let explorer = GraphExplorer::new(&lex, ExploreConfig::default()).unwrap();

        let last = explorer.explore("cat").last().unwrap();
        assert_eq!(last.chain.words(), ["cat", "cot", "cog", "dog"]);
        assert_eq!(last.counts.substitution, 3);
        assert_eq!(last.counts.total(), 3);
        assert_eq!(last.last_edge, TransformKinds::single(TransformKind::Substitution));

        let first = explorer.explore("cat").next().unwrap();
        assert_eq!(first.counts.anagram, 1);
    }

    #[test]
    fn unknown_start_word_is_not_fatal() {
        let lex = lexicon();
        let explorer = GraphExplorer::new(&lex, ExploreConfig::default()).unwrap();

        let mut run = explorer.explore("cpat");
        assert_eq!(run.diagnostics().len(), 1);
        assert_eq!(run.diagnostics()[0].kind, DiagnosticKind::UnknownWord);

        let first = run.next().unwrap();
        assert_eq!(first.chain.words(), ["cpat", "cat"]);
        assert_eq!(first.counts.deletion, 1);
    }

    #[test]
    fn start_word_is_folded() {
        let lex = lexicon();
        let explorer = GraphExplorer::new(&lex, ExploreConfig::default()).unwrap();
        let run = explorer.explore(" CAT ");
        assert!(run.diagnostics().is_empty());
        let all = chains(run);
        assert!(all.iter().all(|c| c[0] == "cat"));
        assert!(all.iter().all(|c| c[1..].iter().all(|w| w != "cat")));
    }

    #[test]
    fn early_stop_returns_single_chain() {
        let lex = lexicon();
        let cfg = ExploreConfig::default().stop_when(InterestThreshold {
            min_depth: 3,
            ..Default::default()
        });
        let explorer = GraphExplorer::new(&lex, cfg).unwrap();

        let got = chains(explorer.explore("cat"));
        assert_eq!(got, words(&[&["cat", "cot", "cog", "dog"]]));
    }

    #[test]
    fn first_match_with_closure_policy() {
        let lex = lexicon();
        let explorer = GraphExplorer::new(&lex, ExploreConfig::default()).unwrap();

        let policy = StopPolicy::new(|_, counts| counts.substitution >= 2);
        let found = explorer.first_match("cat", &policy).unwrap();
        assert_eq!(found.chain.words(), ["cat", "cot", "cog"]);

        let never = StopPolicy::new(|depth, _| depth > 10);
        assert!(explorer.first_match("cat", &never).is_none());
    }

    #[test]
    fn shuffled_runs_are_reproducible() {
        let lex = lexicon();
        let cfg = ExploreConfig::default().shuffled(42);
        let explorer = GraphExplorer::new(&lex, cfg).unwrap();

        let a = chains(explorer.explore("cat"));
        let b = chains(explorer.explore("cat"));
        assert_eq!(a, b);

        // Breadth-first discovery reaches the same words in any order.
        let lexical = GraphExplorer::new(&lex, ExploreConfig::default()).unwrap();
        let mut ends_a: Vec<String> = a.iter().filter_map(|c| c.last().cloned()).collect();
        let mut ends_l: Vec<String> = chains(lexical.explore("cat"))
            .iter()
            .filter_map(|c| c.last().cloned())
            .collect();
        ends_a.sort();
        ends_l.sort();
        assert_eq!(ends_a, ends_l);
    }

    #[test]
    fn node_budget_stops_discovery() {
        let lex = lexicon();
        let mut cfg = ExploreConfig::default();
        cfg.limits.max_nodes = 3;
        let explorer = GraphExplorer::new(&lex, cfg).unwrap();

        let mut run = explorer.explore("cat");
        let got: Vec<Discovery> = run.by_ref().collect();
        assert_eq!(got.len(), 2);
        assert!(run.budget_exhausted());
        assert_eq!(run.visited_count(), 3);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let lex = lexicon();
        assert!(GraphExplorer::new(&lex, ExploreConfig::default().with_max_depth(0)).is_err());
    }
}
