//! Checksum report value and its renderings.

use crate::algorithm::{Algorithm, AlgorithmKind};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Ordered `algorithm -> rendered value` mapping produced by one computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumReport {
    entries: Vec<(Algorithm, String)>,
}

impl ChecksumReport {
    /// Entries must already be in `Algorithm::ALL` order.
    pub(crate) fn from_entries(entries: Vec<(Algorithm, String)>) -> Self {
        debug_assert!(entries.iter().map(|(a, _)| *a).eq(Algorithm::ALL));
        Self { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Algorithm, &str)> + '_ {
        self.entries.iter().map(|(a, v)| (*a, v.as_str()))
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `name=value` lines in report order, without a trailing newline.
    pub fn to_plain(&self) -> String {
        self.to_string()
    }

    /// JSON object keyed by algorithm name, keys in report order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Algorithms whose value equals `expected`. Hex digests compare
    /// case-insensitively; surrounding whitespace is ignored.
    pub fn matches(&self, expected: &str) -> Vec<Algorithm> {
        let expected = expected.trim();
        self.entries()
            .filter(|(a, v)| match a.kind() {
                AlgorithmKind::Checksum => *v == expected,
                AlgorithmKind::Digest => v.eq_ignore_ascii_case(expected),
            })
            .map(|(a, _)| a)
            .collect()
    }
}

impl fmt::Display for ChecksumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (algorithm, value)) in self.entries().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}={}", algorithm.name(), value)?;
        }
        Ok(())
    }
}

impl Serialize for ChecksumReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (algorithm, value) in self.entries() {
            map.serialize_entry(algorithm.name(), value)?;
        }
        map.end()
    }
}
