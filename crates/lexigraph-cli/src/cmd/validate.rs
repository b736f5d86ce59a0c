use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;
use termcolor::Color;

use lexigraph_core::lexicon::Lexicon;
use lexigraph_core::pipeline::{ChainValidator, ValidationReport};

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ValidateOut<'a> {
    pub ok: bool,
    #[serde(flatten)]
    pub report: &'a ValidationReport,
}

pub fn run(lexicon: &Lexicon, chains_path: &Path) -> Result<ExitCode> {
    let chains = input::read_chains(chains_path)?;
    let report = ChainValidator::new(lexicon).validate(&chains);

    if output::is_json() {
        output::print(&ValidateOut {
            ok: report.is_ok(),
            report: &report,
        })?;
    } else {
        print_human(&report)?;
    }

    Ok(ExitCode::from(report.exit_code() as u8))
}

fn print_human(report: &ValidationReport) -> Result<()> {
    let total = report.total_chains();
    let rule = "=".repeat(60);
    let mut out = output::stdout();

    writeln!(out, "Validating {total} chains...")?;
    writeln!(out)?;

    if !report.is_ok() {
        output::write_colored(&mut out, Color::Red, "VALIDATION ERRORS:")?;
        writeln!(out)?;
        writeln!(out, "{rule}")?;
        for d in &report.diagnostics {
            writeln!(out, "  {d}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "Valid chains: {}/{total}", report.valid_chains)?;
    writeln!(out, "Invalid chains: {}/{total}", report.invalid_chains)?;

    if report.is_ok() {
        writeln!(out)?;
        output::write_colored(&mut out, Color::Green, "All chains are valid!")?;
        writeln!(out)?;
    } else {
        writeln!(out)?;
        writeln!(out, "Total errors: {}", report.diagnostics.len())?;
    }
    Ok(())
}
