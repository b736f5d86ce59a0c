//! Configuration structures for lexigraph-core.
//!
//! This module defines explicit configuration objects used by higher-level
//! components (CLI, services, tests) to control how the word graph is explored:
//! depth bound, neighbor ordering, early-stop policy and node budget.
//!
//! The core crate itself does not read environment variables. All configuration
//! must be provided explicitly by the caller so runs stay reproducible.

use std::fmt;
use std::sync::Arc;

use crate::errors::{LexiError, LexiResult};
use crate::rules::TransformCounts;

/// Exploration configuration.
#[derive(Debug, Clone)]
pub struct ExploreConfig {
    /// Maximum number of edges in an emitted chain.
    pub max_depth: usize,
    pub order: NeighborOrder,
    /// When set, exploration halts on the first chain satisfying the policy
    /// and only that chain is emitted.
    pub stop: Option<StopPolicy>,
    pub limits: LimitsConfig,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            max_depth: crate::defaults::MAX_DEPTH,
            order: NeighborOrder::Lexical,
            stop: None,
            limits: LimitsConfig::default(),
        }
    }
}

impl ExploreConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn shuffled(mut self, seed: u64) -> Self {
        self.order = NeighborOrder::Shuffled { seed };
        self
    }

    pub fn stop_when(mut self, policy: impl Into<StopPolicy>) -> Self {
        self.stop = Some(policy.into());
        self
    }
}

/// Order in which newly discovered neighbors are emitted and queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborOrder {
    /// Stable lexical order; repeatable and exhaustive.
    Lexical,
    /// Neighbors shuffled by a generator seeded with `seed`.
    Shuffled { seed: u64 },
}

impl NeighborOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Shuffled { .. } => "shuffled",
        }
    }
}

/// Resource limits guarding against pathological inputs.
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    /// Maximum number of distinct words one exploration may visit,
    /// the start word included.
    pub max_nodes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_nodes: crate::defaults::MAX_NODES,
        }
    }
}

/// Caller-supplied early-stop predicate over `(depth, counts)`.
///
/// `depth` is the number of edges in the discovered chain.
#[derive(Clone)]
pub struct StopPolicy {
    predicate: Arc<dyn Fn(usize, &TransformCounts) -> bool + Send + Sync>,
}

impl StopPolicy {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(usize, &TransformCounts) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    pub fn matches(&self, depth: usize, counts: &TransformCounts) -> bool {
        (self.predicate)(depth, counts)
    }
}

impl fmt::Debug for StopPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StopPolicy(..)")
    }
}

impl From<InterestThreshold> for StopPolicy {
    fn from(t: InterestThreshold) -> Self {
        StopPolicy::new(move |depth, counts| t.is_met(depth, counts))
    }
}

/// Threshold form of the "interesting chain" rule.
///
/// A chain is interesting when it is at least `min_depth` edges long, uses
/// at least `min_edits` deletion/insertion edges and, if requested, at least
/// one substitution or anagram edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterestThreshold {
    pub min_depth: usize,
    pub min_edits: u32,
    pub require_substitution_or_anagram: bool,
}

impl InterestThreshold {
    pub fn is_met(&self, depth: usize, counts: &TransformCounts) -> bool {
        if depth < self.min_depth || counts.edit_count() < self.min_edits {
            return false;
        }
        !self.require_substitution_or_anagram || counts.substitution + counts.anagram > 0
    }
}

/// Validate an exploration configuration.
pub fn validate_config(cfg: &ExploreConfig) -> LexiResult<()> {
    if cfg.max_depth == 0 {
        return Err(LexiError::invalid_argument(
            "max_depth must be greater than zero",
        ));
    }

    if cfg.limits.max_nodes == 0 {
        return Err(LexiError::invalid_argument(
            "max_nodes must be greater than zero",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ExploreConfig::default();
        validate_config(&cfg).unwrap();
        assert_eq!(cfg.order, NeighborOrder::Lexical);
    }

    #[test]
    fn zero_depth_detected() {
        let cfg = ExploreConfig::default().with_max_depth(0);
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn zero_node_budget_detected() {
        let mut cfg = ExploreConfig::default();
        cfg.limits.max_nodes = 0;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn threshold_policy() {
        let t = InterestThreshold {
            min_depth: 3,
            min_edits: 2,
            require_substitution_or_anagram: true,
        };
        let policy = StopPolicy::from(t);

        let mut counts = TransformCounts::default();
        counts.deletion = 1;
        counts.insertion = 1;
        assert!(!policy.matches(3, &counts));

        counts.anagram = 1;
        assert!(policy.matches(3, &counts));
        assert!(!policy.matches(2, &counts));
    }

    #[test]
    fn closure_policy() {
        let policy = StopPolicy::new(|depth, counts| depth > 1 && counts.substitution > 0);
        let mut counts = TransformCounts::default();
        counts.substitution = 1;
        assert!(policy.matches(2, &counts));
        assert!(!policy.matches(1, &counts));
    }
}
