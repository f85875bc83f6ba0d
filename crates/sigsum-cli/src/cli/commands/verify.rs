//! `sigsum verify` – report which algorithms produced the expected value.

use anyhow::{bail, Result};
use sigsum_core::{sign, Algorithm, InputSource, SignOptions, SignOutcome, PROMPT_MESSAGE};
use std::io::Write;

pub fn run_verify(
    source: &InputSource,
    expected: &str,
    only: Option<Algorithm>,
    opts: SignOptions,
    out: &mut impl Write,
) -> Result<()> {
    let report = match sign(source, opts)? {
        SignOutcome::Report(report) => report,
        SignOutcome::NothingToSign => bail!("{PROMPT_MESSAGE}"),
    };

    let mut matched = report.matches(expected);
    if let Some(only) = only {
        matched.retain(|a| *a == only);
    }
    if matched.is_empty() {
        bail!(
            "{} does not match {} for {}",
            expected.trim(),
            only.map_or("any algorithm", Algorithm::name),
            source.describe()
        );
    }
    tracing::info!(?matched, "verified {}", source.describe());
    for algorithm in matched {
        writeln!(out, "{}: OK", algorithm.name())?;
    }
    Ok(())
}
