//! `sigsum text` / `sigsum file` – print the report, or the prompt on empty input.

use anyhow::{Context, Result};
use sigsum_core::config::OutputFormat;
use sigsum_core::{sign, InputSource, SignOptions};
use std::io::Write;

pub fn run_sign(
    source: &InputSource,
    opts: SignOptions,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = sign(source, opts)?;
    let rendered = outcome
        .render(format)
        .context("render report as json")?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
