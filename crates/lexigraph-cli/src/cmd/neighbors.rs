use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use lexigraph_core::determinism::fold_word;
use lexigraph_core::lexicon::Lexicon;
use lexigraph_core::rules::{EdgeRules, TransformKinds};

use crate::output;

#[derive(Debug, Serialize)]
pub struct NeighborOut<'a> {
    pub word: &'a str,
    pub kinds: TransformKinds,
}

#[derive(Debug, Serialize)]
pub struct NeighborsOut<'a> {
    pub word: &'a str,
    pub in_lexicon: bool,
    pub neighbors: Vec<NeighborOut<'a>>,
}

pub fn run(lexicon: &Lexicon, word: &str) -> Result<ExitCode> {
    let word = fold_word(word);
    let rules = EdgeRules::new(lexicon);
    let in_lexicon = lexicon.contains(&word);
    if !in_lexicon {
        tracing::warn!(word = %word, "word is not in the lexicon");
    }

    let neighbors: Vec<NeighborOut<'_>> = rules
        .all_neighbors(&word)
        .into_iter()
        .map(|(w, kinds)| NeighborOut { word: w, kinds })
        .collect();

    if output::is_json() {
        output::print(&NeighborsOut {
            word: &word,
            in_lexicon,
            neighbors,
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut out = output::stdout();
    for n in &neighbors {
        writeln!(out, "{:<20} {}", n.word, n.kinds)?;
    }
    if neighbors.is_empty() {
        output::eprintln_line(&format!("no neighbors for '{word}'"));
    }
    Ok(ExitCode::SUCCESS)
}
