//! Sign workflow: resolve an input source, hash it, and produce what the
//! user sees (a report, or a prompt when there is nothing to sign).

use crate::checksum::{self, DEFAULT_BUF_SIZE};
use crate::config::OutputFormat;
use crate::error::{ChecksumError, InputError};
use crate::input::{self, InputSource};
use crate::report::ChecksumReport;

/// Shown in place of a report when the input is empty.
pub const PROMPT_MESSAGE: &str = "please provide or select an object to sign";

/// Result of signing one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutcome {
    Report(ChecksumReport),
    /// Empty text or a zero-byte file.
    NothingToSign,
}

impl SignOutcome {
    pub fn report(&self) -> Option<&ChecksumReport> {
        match self {
            SignOutcome::Report(r) => Some(r),
            SignOutcome::NothingToSign => None,
        }
    }

    /// Text to display. The prompt is the same in every format.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match (self, format) {
            (SignOutcome::NothingToSign, _) => Ok(PROMPT_MESSAGE.to_string()),
            (SignOutcome::Report(r), OutputFormat::Plain) => Ok(r.to_plain()),
            (SignOutcome::Report(r), OutputFormat::Json) => r.to_json(),
        }
    }
}

/// Options for [`sign`].
#[derive(Debug, Clone, Copy)]
pub struct SignOptions {
    /// Chunk size for streaming file input.
    pub read_buffer_bytes: usize,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            read_buffer_bytes: DEFAULT_BUF_SIZE,
        }
    }
}

/// Hash `source`. Text is hashed in one shot; files are streamed so large
/// files are not held in memory. I/O failures are errors, never empty input.
pub fn sign(source: &InputSource, opts: SignOptions) -> Result<SignOutcome, InputError> {
    tracing::debug!(source = %source.describe(), "signing");
    let result = match source {
        InputSource::Text(_) => checksum::compute(&source.read_bytes()?),
        InputSource::File(path) => checksum::compute_path(path, opts.read_buffer_bytes),
    };
    match result {
        Ok(report) => Ok(SignOutcome::Report(report)),
        Err(ChecksumError::EmptyInput) => {
            tracing::debug!(source = %source.describe(), "nothing to sign");
            Ok(SignOutcome::NothingToSign)
        }
        Err(ChecksumError::Io(e)) => match source {
            InputSource::File(path) => Err(input::io_error(path, e)),
            InputSource::Text(_) => Err(InputError::Read(e)),
        },
    }
}
