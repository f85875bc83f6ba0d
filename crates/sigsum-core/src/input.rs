//! Byte acquisition: turn typed text or a chosen file into input bytes.

use crate::error::InputError;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the bytes to sign come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Typed text, hashed as its UTF-8 encoding.
    Text(String),
    /// A file, hashed as its raw on-disk bytes.
    File(PathBuf),
}

impl InputSource {
    pub fn text(s: impl Into<String>) -> Self {
        InputSource::Text(s.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        InputSource::File(path.into())
    }

    /// Read the whole source into memory. Text is borrowed, files are read.
    /// [`crate::sign`] streams files instead; this is for callers that need
    /// the bytes themselves.
    pub fn read_bytes(&self) -> Result<Cow<'_, [u8]>, InputError> {
        match self {
            InputSource::Text(s) => Ok(Cow::Borrowed(s.as_bytes())),
            InputSource::File(path) => fs::read(path)
                .map(Cow::Owned)
                .map_err(|source| io_error(path, source)),
        }
    }

    /// Short label for logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Text(s) => format!("text ({} bytes)", s.len()),
            InputSource::File(path) => format!("file {}", path.display()),
        }
    }
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> InputError {
    InputError::Io {
        path: path.to_path_buf(),
        source,
    }
}
