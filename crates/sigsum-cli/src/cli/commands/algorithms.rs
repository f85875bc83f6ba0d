//! `sigsum algorithms` – list the battery in report order.

use anyhow::Result;
use sigsum_core::{Algorithm, AlgorithmKind};
use std::io::Write;

pub fn run_algorithms(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<12} {:<9} {}", "NAME", "KIND", "BITS")?;
    for algorithm in Algorithm::ALL {
        let kind = match algorithm.kind() {
            AlgorithmKind::Checksum => "checksum",
            AlgorithmKind::Digest => "digest",
        };
        writeln!(
            out,
            "{:<12} {:<9} {}",
            algorithm.name(),
            kind,
            algorithm.output_bits()
        )?;
    }
    Ok(())
}
