//! Checksum/digest battery over typed text or file bytes.
//!
//! [`sign`] is the usual entry point: give it an [`InputSource`] and it
//! returns either a [`ChecksumReport`] or [`SignOutcome::NothingToSign`].

pub mod config;
pub mod logging;

pub mod algorithm;
pub mod checksum;
pub mod error;
pub mod input;
pub mod report;
pub mod sign;

pub use algorithm::{Algorithm, AlgorithmKind};
pub use checksum::{compute, compute_path, compute_reader};
pub use error::{ChecksumError, InputError, UnknownAlgorithm};
pub use input::InputSource;
pub use report::ChecksumReport;
pub use sign::{sign, SignOptions, SignOutcome, PROMPT_MESSAGE};
