//! CLI for sigsum.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sigsum_core::config::{self, OutputFormat, SigsumConfig};
use sigsum_core::{Algorithm, InputSource, SignOptions};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use commands::{run_algorithms, run_completions, run_sign, run_verify};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sigsum")]
#[command(about = "Checksums and digests (CRC32, MD5, SHA-2, SHA-3, ...) of text or files", long_about = None)]
pub struct Cli {
    /// Report format: plain (name=value lines) or json. Overrides config.toml.
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Sign text (UTF-8). Reads stdin when TEXT is omitted.
    Text {
        /// Text to hash.
        text: Option<String>,
    },

    /// Sign a file's raw bytes.
    File {
        /// Path to the file.
        path: PathBuf,
    },

    /// Check which algorithm, if any, produced an expected value.
    Verify {
        /// Expected checksum (decimal) or digest (hex).
        expected: String,

        /// Only check this algorithm (e.g. sha256, sha3-512, crc32c).
        #[arg(long, short = 'a', value_name = "NAME")]
        algorithm: Option<Algorithm>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List the algorithms in report order.
    Algorithms,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

/// Exactly one input for `verify`.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Text to hash.
    #[arg(long)]
    pub text: Option<String>,

    /// File to hash.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl SourceArgs {
    fn into_source(self) -> InputSource {
        match (self.text, self.file) {
            (_, Some(path)) => InputSource::File(path),
            (text, None) => InputSource::Text(text.unwrap_or_default()),
        }
    }
}

/// A config that cannot be read or parsed falls back to defaults so every
/// subcommand keeps working.
fn config_or_default(loaded: Result<SigsumConfig>) -> SigsumConfig {
    match loaded {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            SigsumConfig::default()
        }
    }
}

/// `--format` wins over the config file.
fn sign_settings(format: Option<OutputFormat>, cfg: &SigsumConfig) -> (OutputFormat, SignOptions) {
    let opts = SignOptions {
        read_buffer_bytes: cfg.read_buffer_bytes,
    };
    (format.unwrap_or(cfg.output_format), opts)
}

/// The TEXT argument, or everything on `stdin` (verbatim) when omitted.
fn text_or_stdin(text: Option<String>, stdin: impl Read) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => Ok(io::read_to_string(stdin)?),
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config_or_default(config::load_or_init());
        tracing::debug!("loaded config: {:?}", cfg);

        let (format, opts) = sign_settings(cli.format, &cfg);
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Text { text } => {
                let text = text_or_stdin(text, io::stdin())?;
                run_sign(&InputSource::Text(text), opts, format, &mut out)?;
            }
            CliCommand::File { path } => {
                run_sign(&InputSource::File(path), opts, format, &mut out)?;
            }
            CliCommand::Verify {
                expected,
                algorithm,
                source,
            } => {
                run_verify(&source.into_source(), &expected, algorithm, opts, &mut out)?;
            }
            CliCommand::Algorithms => run_algorithms(&mut out)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut out)?,
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
