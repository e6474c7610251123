//! Fingerprints: lowercase hex digests of `seed + index`, optionally stretched
//! by re-hashing the hex text.

use crate::HashKeysError;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Digest used to derive fingerprints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// 128-bit MD5, the reference fingerprint (32 hex characters).
    #[default]
    Md5,
    /// SHA-256 (64 hex characters).
    Sha256,
}

impl HashAlgorithm {
    /// Hash `data` and render the digest as lowercase hex.
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Md5 => hex::encode(Md5::digest(data)),
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
        }
    }

    /// Number of hex characters in a fingerprint.
    pub fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha256 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Md5 => f.write_str("md5"),
            HashAlgorithm::Sha256 => f.write_str("sha256"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashKeysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            other => Err(HashKeysError::Config(format!(
                "unknown hash algorithm '{other}', expected md5 or sha256"
            ))),
        }
    }
}

/// Derives the fingerprint of a seed at a given index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprinter {
    pub algorithm: HashAlgorithm,
    /// Extra hashing rounds applied to the hex digest.
    pub stretch: u32,
}

impl Fingerprinter {
    pub fn new(algorithm: HashAlgorithm, stretch: u32) -> Self {
        Self { algorithm, stretch }
    }

    /// Fingerprint of `seed` followed by the decimal rendering of `index`.
    ///
    /// The first digest is taken over the raw seed bytes; each of the
    /// `stretch` extra rounds hashes the lowercase hex text of the previous
    /// round.
    pub fn fingerprint(&self, seed: &str, index: u64) -> String {
        let mut hex = self.algorithm.hex_digest(format!("{seed}{index}").as_bytes());
        for _ in 0..self.stretch {
            hex = self.algorithm.hex_digest(hex.as_bytes());
        }
        hex
    }
}
