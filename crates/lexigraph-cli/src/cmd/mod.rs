use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use lexigraph_core::lexicon::Lexicon;

use crate::args::{Cli, Command};
use crate::io::input;
use crate::output;

mod explore;
mod neighbors;
mod validate;

pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    let lexicon_path = cli
        .lexicon
        .as_deref()
        .ok_or_else(|| anyhow!("no word bank given: pass --lexicon or set LEXIGRAPH_LEXICON"))?;
    let lexicon = load_lexicon(lexicon_path)?;

    match cli.command {
        Command::Explore(args) => explore::run(&lexicon, &args),
        Command::Validate { chains } => validate::run(&lexicon, &chains),
        Command::Neighbors { word } => neighbors::run(&lexicon, &word),
    }
}

fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let pb = if output::is_json() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));

    pb.set_message("reading word bank");
    let words = input::read_word_bank(path)?;

    pb.set_message(format!("indexing {} words", words.len()));
    let lexicon = Lexicon::from_words(&words)
        .with_context(|| format!("cannot build lexicon from {}", path.display()))?;

    pb.finish_and_clear();

    let stats = lexicon.stats();
    tracing::info!(
        path = %path.display(),
        words = lexicon.len(),
        rejected = stats.rejected,
        "word bank loaded"
    );
    Ok(lexicon)
}
