use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Read a word bank.
///
/// Accepts either a JSON array of strings or plain text with one word per
/// line (blank lines and `#` comments ignored). A leading `[` selects JSON.
pub fn read_word_bank<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read word bank {}", path.display()))?;
    parse_word_bank(&raw).with_context(|| format!("invalid word bank {}", path.display()))
}

pub fn parse_word_bank(raw: &str) -> Result<Vec<String>> {
    if raw.trim_start().starts_with('[') {
        let words: Vec<String> =
            serde_json::from_str(raw).map_err(|e| anyhow!("invalid json: {e}"))?;
        return Ok(words);
    }

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Read a batch of candidate chains: a JSON array of arrays of strings.
pub fn read_chains<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let v = read_json_file(path)?;
    serde_json::from_value(v)
        .map_err(|e| anyhow!("{}: expected an array of arrays of words: {e}", path.display()))
}

pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let v: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| anyhow!("invalid json: {e}"))?;
    Ok(v)
}
