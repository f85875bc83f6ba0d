//! Error types shared by the checksum battery and the byte-acquisition step.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of the checksum battery itself.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// Input resolved to zero bytes; there is nothing to hash.
    #[error("nothing to hash: input is empty")]
    EmptyInput,
    /// A streaming source failed mid-read.
    #[error("read failed while hashing: {0}")]
    Io(#[from] io::Error),
}

/// Failure while turning an input source into bytes. Never produced for
/// empty input; an empty file reads fine and is reported by the battery.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An in-memory source failed to read; not expected for plain text.
    #[error("cannot read input: {0}")]
    Read(#[source] io::Error),
}

/// Algorithm name that is not part of the battery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}` (see `sigsum algorithms`)")]
pub struct UnknownAlgorithm(pub String);
