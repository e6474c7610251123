//! Delayed-confirmation key search over hashed fingerprints.
//!
//! A key is an index whose fingerprint holds a run of three identical
//! characters that reappears as a run of five in one of the next thousand
//! fingerprints. [`KeySearch`] scans indices one at a time and keeps the
//! unconfirmed candidates in a bounded window.

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod io_utils;
pub mod report;
pub mod runs;
pub mod search;
pub mod stats;
pub mod window;

pub use checkpoint::{load_checkpoint, resume_or_start, save_checkpoint, CheckpointWriter};
pub use config::SearchConfig;
pub use error::HashKeysError;
pub use fingerprint::{Fingerprinter, HashAlgorithm};
pub use runs::{scan_runs, RunScan};
pub use search::{KeySearch, Step};
pub use stats::SearchStats;
pub use window::{Candidate, CandidateWindow};

/// Scans after a candidate during which it may be confirmed.
pub const DEFAULT_LOOKAHEAD: u64 = 1000;
/// Keys required for the one-time pad.
pub const DEFAULT_KEY_COUNT: usize = 64;
/// Extra hashing rounds of stretched fingerprints.
pub const STRETCH_ROUNDS: u32 = 2016;
