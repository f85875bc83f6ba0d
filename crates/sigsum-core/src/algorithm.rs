//! The fixed battery of checksum and digest algorithms.
//!
//! Declaration order is report order; anything parsing `sigsum` output relies
//! on it, so new algorithms must only ever be appended.

use crate::error::UnknownAlgorithm;
use std::fmt;
use std::str::FromStr;

/// How an algorithm's value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// Error-detection code, rendered as an unsigned decimal integer.
    Checksum,
    /// Hash digest, rendered as lowercase hex.
    Digest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Crc32,
    Crc32c,
    Md2,
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Sha512_224,
    Sha512_256,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 14] = [
        Algorithm::Crc32,
        Algorithm::Crc32c,
        Algorithm::Md2,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
    ];

    /// Report key, e.g. `CRC32` or `sha3_256`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Crc32 => "CRC32",
            Algorithm::Crc32c => "CRC32C",
            Algorithm::Md2 => "md2",
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            Algorithm::Sha3_224 => "sha3_224",
            Algorithm::Sha3_256 => "sha3_256",
            Algorithm::Sha3_384 => "sha3_384",
            Algorithm::Sha3_512 => "sha3_512",
            Algorithm::Sha512_224 => "sha512_224",
            Algorithm::Sha512_256 => "sha512_256",
        }
    }

    pub fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::Crc32 | Algorithm::Crc32c => AlgorithmKind::Checksum,
            _ => AlgorithmKind::Digest,
        }
    }

    /// Size of the raw output in bits.
    pub fn output_bits(self) -> usize {
        match self {
            Algorithm::Crc32 | Algorithm::Crc32c => 32,
            Algorithm::Md2 | Algorithm::Md5 => 128,
            Algorithm::Sha1 => 160,
            Algorithm::Sha3_224 | Algorithm::Sha512_224 => 224,
            Algorithm::Sha256 | Algorithm::Sha3_256 | Algorithm::Sha512_256 => 256,
            Algorithm::Sha384 | Algorithm::Sha3_384 => 384,
            Algorithm::Sha512 | Algorithm::Sha3_512 => 512,
        }
    }

    /// Length of the rendered hex string, or `None` for decimal checksums.
    pub fn hex_len(self) -> Option<usize> {
        match self.kind() {
            AlgorithmKind::Checksum => None,
            AlgorithmKind::Digest => Some(self.output_bits() / 4),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive; `-` is accepted in place of `_` (`sha3-256`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
