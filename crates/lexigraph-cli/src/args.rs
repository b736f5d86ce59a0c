use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "lexigraph",
    version,
    about = "Explore and validate word-transformation chains"
)]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Word bank: a JSON array of strings, or one word per line.
    #[arg(long, global = true, env = "LEXIGRAPH_LEXICON")]
    pub lexicon: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Explore transformation chains outward from start words.
    Explore(ExploreArgs),

    /// Validate a JSON file of candidate chains (array of arrays of words).
    Validate {
        /// Chains file.
        chains: PathBuf,
    },

    /// List every neighbor of a word with the edits that reach it.
    Neighbors { word: String },
}

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    /// Start words. Read from stdin, one per line, when omitted.
    pub words: Vec<String>,

    /// Maximum chain depth, in edges.
    #[arg(long, default_value_t = lexigraph_core::defaults::MAX_DEPTH)]
    pub depth: usize,

    /// Shuffle neighbor order with this seed instead of lexical order.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only report chains with at least this many edges.
    #[arg(long, default_value_t = 0)]
    pub min_depth: usize,

    /// Only report chains with at least this many deletion + insertion edges.
    #[arg(long, default_value_t = 0)]
    pub min_edits: u32,

    /// Only report chains using at least one substitution or anagram edge.
    #[arg(long)]
    pub require_substitution_or_anagram: bool,

    /// Stop at the first chain meeting the thresholds above.
    #[arg(long)]
    pub first: bool,

    /// Report at most this many chains per start word.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Maximum number of distinct words visited per start word.
    #[arg(long, default_value_t = lexigraph_core::defaults::MAX_NODES)]
    pub max_nodes: usize,
}
