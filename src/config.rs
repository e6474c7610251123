use crate::fingerprint::{Fingerprinter, HashAlgorithm};
use crate::{HashKeysError, DEFAULT_KEY_COUNT, DEFAULT_LOOKAHEAD, STRETCH_ROUNDS};
use serde::{Deserialize, Serialize};

/// Parameters of one key search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Digest used for fingerprints.
    pub algorithm: HashAlgorithm,
    /// Extra hashing rounds per fingerprint.
    pub stretch: u32,
    /// Number of later scans that may confirm a candidate.
    pub lookahead: u64,
    /// How many keys the search must produce.
    pub key_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Md5,
            stretch: 0,
            lookahead: DEFAULT_LOOKAHEAD,
            key_count: DEFAULT_KEY_COUNT,
        }
    }
}

impl SearchConfig {
    /// Defaults with stretched fingerprints.
    pub fn part_two() -> Self {
        Self {
            stretch: STRETCH_ROUNDS,
            ..Self::default()
        }
    }

    pub fn fingerprinter(&self) -> Fingerprinter {
        Fingerprinter::new(self.algorithm, self.stretch)
    }

    pub fn validate(&self) -> Result<(), HashKeysError> {
        if self.lookahead == 0 {
            return Err(HashKeysError::Config("lookahead must be at least 1".into()));
        }
        if self.key_count == 0 {
            return Err(HashKeysError::Config("key count must be at least 1".into()));
        }
        Ok(())
    }
}
