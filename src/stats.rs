//! `SearchStats` counts what happened during a search; nothing is logged
//! until `report` is called.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub scanned: u64,
    pub candidates: u64,
    pub confirmed: u64,
    pub evicted: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_scan(&mut self) {
        self.scanned += 1;
    }

    pub fn log_candidate(&mut self) {
        self.candidates += 1;
    }

    pub fn log_confirmed(&mut self, count: usize) {
        self.confirmed += count as u64;
    }

    pub fn log_evicted(&mut self, count: usize) {
        self.evicted += count as u64;
    }

    /// Candidates neither confirmed nor evicted yet.
    pub fn pending(&self) -> u64 {
        self.candidates - self.confirmed - self.evicted
    }

    pub fn report(&self, label: &str) {
        eprintln!(
            "{label}: scanned {} fingerprints, candidates {}, confirmed {}, evicted {}, pending {}",
            self.scanned,
            self.candidates,
            self.confirmed,
            self.evicted,
            self.pending()
        );
    }
}
