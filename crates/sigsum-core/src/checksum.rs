//! The checksum battery: every algorithm in [`Algorithm::ALL`] over one input.
//!
//! All hashers are fed the same chunks in a single pass, so streaming a file
//! and hashing a whole buffer give bit-identical reports.

use crate::algorithm::Algorithm;
use crate::error::ChecksumError;
use crate::report::ChecksumReport;
use md2::Md2;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Default chunk size for streaming sources.
pub const DEFAULT_BUF_SIZE: usize = 64 * 1024;

/// Upper bound on the chunk size; larger requests are clamped.
pub const MAX_BUF_SIZE: usize = 8 * 1024 * 1024;

fn effective_buf_size(buf_size: usize) -> usize {
    match buf_size {
        0 => DEFAULT_BUF_SIZE,
        n => n.min(MAX_BUF_SIZE),
    }
}

/// Running state of all algorithms.
struct Battery {
    len: u64,
    crc32: crc32fast::Hasher,
    crc32c: u32,
    md2: Md2,
    md5: Md5,
    sha1: Sha1,
    sha256: Sha256,
    sha384: Sha384,
    sha512: Sha512,
    sha3_224: Sha3_224,
    sha3_256: Sha3_256,
    sha3_384: Sha3_384,
    sha3_512: Sha3_512,
    sha512_224: Sha512_224,
    sha512_256: Sha512_256,
}

impl Battery {
    fn new() -> Self {
        Self {
            len: 0,
            crc32: crc32fast::Hasher::new(),
            crc32c: 0,
            md2: Md2::new(),
            md5: Md5::new(),
            sha1: Sha1::new(),
            sha256: Sha256::new(),
            sha384: Sha384::new(),
            sha512: Sha512::new(),
            sha3_224: Sha3_224::new(),
            sha3_256: Sha3_256::new(),
            sha3_384: Sha3_384::new(),
            sha3_512: Sha3_512::new(),
            sha512_224: Sha512_224::new(),
            sha512_256: Sha512_256::new(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.len += data.len() as u64;
        self.crc32.update(data);
        self.crc32c = crc32c::crc32c_append(self.crc32c, data);
        self.md2.update(data);
        self.md5.update(data);
        self.sha1.update(data);
        self.sha256.update(data);
        self.sha384.update(data);
        self.sha512.update(data);
        self.sha3_224.update(data);
        self.sha3_256.update(data);
        self.sha3_384.update(data);
        self.sha3_512.update(data);
        self.sha512_224.update(data);
        self.sha512_256.update(data);
    }

    fn finish(self) -> Result<ChecksumReport, ChecksumError> {
        if self.len == 0 {
            return Err(ChecksumError::EmptyInput);
        }
        tracing::debug!(bytes = self.len, "checksum battery finished");
        let entries = vec![
            (Algorithm::Crc32, self.crc32.finalize().to_string()),
            (Algorithm::Crc32c, self.crc32c.to_string()),
            (Algorithm::Md2, hex::encode(self.md2.finalize())),
            (Algorithm::Md5, hex::encode(self.md5.finalize())),
            (Algorithm::Sha1, hex::encode(self.sha1.finalize())),
            (Algorithm::Sha256, hex::encode(self.sha256.finalize())),
            (Algorithm::Sha384, hex::encode(self.sha384.finalize())),
            (Algorithm::Sha512, hex::encode(self.sha512.finalize())),
            (Algorithm::Sha3_224, hex::encode(self.sha3_224.finalize())),
            (Algorithm::Sha3_256, hex::encode(self.sha3_256.finalize())),
            (Algorithm::Sha3_384, hex::encode(self.sha3_384.finalize())),
            (Algorithm::Sha3_512, hex::encode(self.sha3_512.finalize())),
            (Algorithm::Sha512_224, hex::encode(self.sha512_224.finalize())),
            (Algorithm::Sha512_256, hex::encode(self.sha512_256.finalize())),
        ];
        Ok(ChecksumReport::from_entries(entries))
    }
}

/// Compute the full report over `bytes`. Empty input is an error, not a
/// report of empty-input digests.
pub fn compute(bytes: &[u8]) -> Result<ChecksumReport, ChecksumError> {
    let mut battery = Battery::new();
    battery.update(bytes);
    battery.finish()
}

/// Compute the full report over everything `reader` yields, `buf_size`
/// bytes at a time (0 means [`DEFAULT_BUF_SIZE`], capped at [`MAX_BUF_SIZE`]).
pub fn compute_reader<R: Read>(
    mut reader: R,
    buf_size: usize,
) -> Result<ChecksumReport, ChecksumError> {
    let buf_size = effective_buf_size(buf_size);
    let mut battery = Battery::new();
    let mut buf = vec![0u8; buf_size];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ChecksumError::Io(e)),
        };
        battery.update(&buf[..n]);
    }
    battery.finish()
}

/// Compute the full report over a file, streamed in chunks so large files
/// keep memory use bounded. Open and read failures are `Io`; a zero-byte
/// file is `EmptyInput`.
pub fn compute_path(path: &Path, buf_size: usize) -> Result<ChecksumReport, ChecksumError> {
    let f = File::open(path)?;
    compute_reader(f, buf_size)
}
