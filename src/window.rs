//! Bounded queue of unconfirmed candidates.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// An index awaiting a quintuple of `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub index: u64,
    pub symbol: char,
}

/// Live candidates ordered by creation index, oldest first.
///
/// A candidate created at `index` may be confirmed by any scan in
/// `index + 1 ..= index + lookahead`; it is evicted before the scan at
/// `index + lookahead + 1` is processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateWindow {
    lookahead: u64,
    live: VecDeque<Candidate>,
}

impl CandidateWindow {
    pub fn new(lookahead: u64) -> Self {
        Self {
            lookahead,
            live: VecDeque::new(),
        }
    }

    pub fn lookahead(&self) -> u64 {
        self.lookahead
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.live.iter()
    }

    pub fn oldest(&self) -> Option<&Candidate> {
        self.live.front()
    }

    /// Drop every candidate that can no longer be confirmed at scan `current`.
    /// Returns how many were dropped.
    pub fn evict_expired(&mut self, current: u64) -> usize {
        let mut evicted = 0;
        while let Some(front) = self.live.front() {
            if front.index.saturating_add(self.lookahead) >= current {
                break;
            }
            self.live.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Remove every candidate waiting on `symbol` and return their indices in
    /// creation order.
    pub fn confirm(&mut self, symbol: char) -> Vec<u64> {
        let mut confirmed = Vec::new();
        self.live.retain(|c| {
            if c.symbol == symbol {
                confirmed.push(c.index);
                false
            } else {
                true
            }
        });
        confirmed
    }

    /// Append a candidate; creation indices must be strictly increasing.
    pub fn push(&mut self, candidate: Candidate) {
        debug_assert!(self
            .live
            .back()
            .map_or(true, |last| last.index < candidate.index));
        self.live.push_back(candidate);
    }
}
