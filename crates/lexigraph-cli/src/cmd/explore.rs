use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use lexigraph_core::config::{ExploreConfig, InterestThreshold, LimitsConfig, NeighborOrder};
use lexigraph_core::lexicon::Lexicon;
use lexigraph_core::model::{Chain, Discovery};
use lexigraph_core::pipeline::GraphExplorer;
use lexigraph_core::rules::{TransformCounts, TransformKinds};

use crate::args::ExploreArgs;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ChainOut<'a> {
    pub start: &'a str,
    pub chain: &'a Chain,
    pub counts: &'a TransformCounts,
    pub last_edge: &'a TransformKinds,
}

pub fn run(lexicon: &Lexicon, args: &ExploreArgs) -> Result<ExitCode> {
    let threshold = InterestThreshold {
        min_depth: args.min_depth,
        min_edits: args.min_edits,
        require_substitution_or_anagram: args.require_substitution_or_anagram,
    };

    let mut cfg = ExploreConfig {
        max_depth: args.depth,
        order: match args.seed {
            Some(seed) => NeighborOrder::Shuffled { seed },
            None => NeighborOrder::Lexical,
        },
        stop: None,
        limits: LimitsConfig {
            max_nodes: args.max_nodes,
        },
    };
    if args.first {
        cfg = cfg.stop_when(threshold);
    }
    let explorer = GraphExplorer::new(lexicon, cfg)?;

    if !args.words.is_empty() {
        for word in &args.words {
            explore_one(&explorer, word, &threshold, args.limit)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    // One exploration per line of stdin.
    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && !output::is_json();
    loop {
        if interactive {
            eprint!("word> ");
            io::stderr().flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        explore_one(&explorer, word, &threshold, args.limit)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn explore_one(
    explorer: &GraphExplorer<'_>,
    start: &str,
    threshold: &InterestThreshold,
    limit: Option<usize>,
) -> Result<()> {
    let mut run = explorer.explore(start);
    let mut printed = 0usize;

    // With --first the threshold is already the stop policy.
    let filter = explorer.config().stop.is_none();

    for d in run.by_ref() {
        if filter && !threshold.is_met(d.depth(), &d.counts) {
            continue;
        }
        print_discovery(start, &d)?;
        printed += 1;
        if limit.is_some_and(|n| printed >= n) {
            break;
        }
    }

    tracing::info!(
        start,
        printed,
        visited = run.visited_count(),
        budget_exhausted = run.budget_exhausted(),
        "exploration finished"
    );
    Ok(())
}

fn print_discovery(start: &str, d: &Discovery) -> Result<()> {
    if output::is_json() {
        return output::print_line(&ChainOut {
            start,
            chain: &d.chain,
            counts: &d.counts,
            last_edge: &d.last_edge,
        });
    }
    let words = serde_json::to_string(&d.chain)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{words} {}", d.counts)?;
    Ok(())
}
