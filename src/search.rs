//! Delayed-confirmation key search.
//!
//! Every scan index yields a fingerprint. A fingerprint whose first run of
//! three characters is `c` makes its index a candidate; the candidate becomes
//! a key when one of the next `lookahead` fingerprints holds a run of five
//! `c`. Candidates that are not confirmed in time are discarded.
//!
//! Confirmations do not arrive in index order, so the key list is re-sorted
//! whenever it grows and the lowest keys are only final once every older
//! candidate has been confirmed or evicted (see [`KeySearch::find_keys`]).

use crate::config::SearchConfig;
use crate::fingerprint::Fingerprinter;
use crate::runs::scan_runs;
use crate::stats::SearchStats;
use crate::window::{Candidate, CandidateWindow};
use crate::{HashKeysError, DEFAULT_KEY_COUNT};
use serde::{Deserialize, Serialize};

/// What a single scan did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Scan index that was consumed.
    pub index: u64,
    /// Character of the candidate created at `index`, if any.
    pub created: Option<char>,
    /// Candidate indices confirmed by this fingerprint.
    pub confirmed: Vec<u64>,
    /// Candidates dropped for falling out of the window.
    pub evicted: usize,
}

/// Explicit state of one search: seed, counter, live candidates and keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySearch {
    seed: String,
    fingerprinter: Fingerprinter,
    key_count: usize,
    next_index: u64,
    keys: Vec<u64>,
    window: CandidateWindow,
    stats: SearchStats,
}

impl KeySearch {
    /// Start a search for `seed` using the fingerprint settings, lookahead
    /// and key count of `config`.
    pub fn new(seed: impl Into<String>, config: &SearchConfig) -> Result<Self, HashKeysError> {
        config.validate()?;
        Ok(
            Self::with_fingerprinter(seed, config.fingerprinter(), config.lookahead)
                .with_key_count(config.key_count),
        )
    }

    pub fn with_fingerprinter(
        seed: impl Into<String>,
        fingerprinter: Fingerprinter,
        lookahead: u64,
    ) -> Self {
        Self {
            seed: seed.into(),
            fingerprinter,
            key_count: DEFAULT_KEY_COUNT,
            next_index: 0,
            keys: Vec::new(),
            window: CandidateWindow::new(lookahead),
            stats: SearchStats::new(),
        }
    }

    /// Number of keys [`run`](Self::run) looks for.
    pub fn with_key_count(mut self, key_count: usize) -> Self {
        self.key_count = key_count;
        self
    }

    pub fn key_count(&self) -> usize {
        self.key_count
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn fingerprinter(&self) -> Fingerprinter {
        self.fingerprinter
    }

    pub fn lookahead(&self) -> u64 {
        self.window.lookahead()
    }

    /// Index the next call to [`advance`](Self::advance) will scan.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Confirmed keys so far, ascending.
    pub fn keys(&self) -> &[u64] {
        &self.keys
    }

    /// Live candidates, oldest first.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.window.iter()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Fingerprint the next index and consume it.
    pub fn advance(&mut self) -> Step {
        let fingerprint = self.fingerprinter.fingerprint(&self.seed, self.next_index);
        self.consume(&fingerprint)
    }

    /// Consume `fingerprint` as the fingerprint of the next index.
    ///
    /// Expired candidates are evicted first. Each quintuple then confirms all
    /// live candidates of its character. The triple, if any, is queued last
    /// so a fingerprint never confirms its own candidate.
    pub fn consume(&mut self, fingerprint: &str) -> Step {
        let index = self.next_index;
        self.next_index += 1;
        self.stats.tick_scan();

        let evicted = self.window.evict_expired(index);
        self.stats.log_evicted(evicted);

        let scan = scan_runs(fingerprint);
        let mut confirmed = Vec::new();
        for &symbol in &scan.quintuples {
            confirmed.extend(self.window.confirm(symbol));
        }
        if !confirmed.is_empty() {
            self.stats.log_confirmed(confirmed.len());
            self.keys.extend_from_slice(&confirmed);
            self.keys.sort_unstable();
        }

        if let Some(symbol) = scan.triple {
            self.window.push(Candidate { index, symbol });
            self.stats.log_candidate();
        }

        Step {
            index,
            created: scan.triple,
            confirmed,
            evicted,
        }
    }

    /// At least `n` keys have been confirmed. They are not necessarily the
    /// lowest `n` keys yet.
    pub fn has_found(&self, n: usize) -> bool {
        self.keys.len() >= n
    }

    /// The lowest `n` keys can no longer change: `n` keys exist and no live
    /// candidate is older than the `n`th of them.
    pub fn is_settled(&self, n: usize) -> bool {
        if n == 0 {
            return true;
        }
        match self.keys.get(n - 1) {
            Some(&nth) => self.window.oldest().map_or(true, |c| c.index > nth),
            None => false,
        }
    }

    /// Advance until `n` keys exist, then `lookahead` more scans so that every
    /// candidate older than the `n`th key is resolved, and return the lowest
    /// `n` keys.
    pub fn find_keys(&mut self, n: usize) -> Vec<u64> {
        self.find_keys_with(n, |_, _| {})
    }

    /// [`find_keys`](Self::find_keys) calling `on_step` with the step and the
    /// updated search after every scan.
    pub fn find_keys_with<F: FnMut(&Step, &KeySearch)>(&mut self, n: usize, mut on_step: F) -> Vec<u64> {
        if n == 0 {
            return Vec::new();
        }
        while !self.has_found(n) {
            let step = self.advance();
            on_step(&step, self);
        }
        for _ in 0..self.lookahead() {
            let step = self.advance();
            on_step(&step, self);
        }
        self.keys[..n].to_vec()
    }

    /// Find the configured number of keys.
    pub fn run(&mut self) -> Vec<u64> {
        self.find_keys(self.key_count)
    }

    /// [`run`](Self::run) with a per-scan callback.
    pub fn run_with<F: FnMut(&Step, &KeySearch)>(&mut self, on_step: F) -> Vec<u64> {
        self.find_keys_with(self.key_count, on_step)
    }

    /// The `n`th key (1-based).
    pub fn nth_key(&mut self, n: usize) -> Result<u64, HashKeysError> {
        if n == 0 {
            return Err(HashKeysError::Config("key rank starts at 1".into()));
        }
        let keys = self.find_keys(n);
        Ok(keys[n - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "0123456789abcdef";

    fn synthetic(lookahead: u64) -> KeySearch {
        KeySearch::with_fingerprinter("test", Fingerprinter::default(), lookahead)
    }

    #[test]
    fn quintuple_without_candidate_is_ignored() {
        let mut s = synthetic(1000);
        s.consume("x777y");
        let before: Vec<_> = s.candidates().copied().collect();
        let step = s.consume("aaaaa1");
        assert!(step.confirmed.is_empty());
        let after: Vec<_> = s.candidates().copied().collect();
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.len(), before.len() + 1);
        assert!(s.keys().is_empty());
    }

    #[test]
    fn candidate_never_confirms_itself() {
        let mut s = synthetic(1000);
        let step = s.consume("1ddddd2");
        assert_eq!(step.created, Some('d'));
        assert!(step.confirmed.is_empty());
        assert!(s.keys().is_empty());

        let step = s.consume("ddddd");
        assert_eq!(step.confirmed, vec![0]);
        assert_eq!(s.keys(), &[0]);
        assert_eq!(s.candidates().map(|c| c.index).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn confirmation_at_edge_of_window() {
        let mut s = synthetic(3);
        s.consume("aaa");
        s.consume(PLAIN);
        s.consume(PLAIN);
        let step = s.consume("aaaaa");
        assert_eq!(step.confirmed, vec![0]);
    }

    #[test]
    fn candidate_expires_after_window() {
        let mut s = synthetic(3);
        s.consume("aaa");
        for _ in 0..3 {
            s.consume(PLAIN);
        }
        let step = s.consume("aaaaa");
        assert_eq!(step.evicted, 1);
        assert!(step.confirmed.is_empty());
        assert!(s.keys().is_empty());
        assert_eq!(s.stats().evicted, 1);
    }

    #[test]
    fn only_matching_character_confirms() {
        let mut s = synthetic(1000);
        s.consume("bbb");
        s.consume("ccccc");
        assert!(s.keys().is_empty());
        s.consume("bbbbb");
        assert_eq!(s.keys(), &[0]);
    }

    #[test]
    fn shared_character_confirms_all_candidates() {
        let mut s = synthetic(1000);
        s.consume("aaa");
        s.consume("1aaa");
        s.consume("eee");
        let step = s.consume("9aaaaa");
        assert_eq!(step.confirmed, vec![0, 1]);
        assert_eq!(s.candidates().map(|c| c.index).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn late_confirmation_keeps_keys_sorted() {
        let mut s = synthetic(1000);
        s.consume("aaa");
        s.consume("bbb");
        s.consume("bbbbb");
        assert_eq!(s.keys(), &[1]);
        s.consume("aaaaa");
        assert_eq!(s.keys(), &[0, 1]);
    }

    #[test]
    fn several_quintuples_in_one_fingerprint() {
        let mut s = synthetic(1000);
        s.consume("ccc");
        s.consume("aaa");
        let step = s.consume("aaaaa0ccccc");
        assert_eq!(step.confirmed, vec![1, 0]);
        assert_eq!(s.keys(), &[0, 1]);
    }

    #[test]
    fn settled_waits_for_older_candidates() {
        let mut s = synthetic(1000);
        s.consume("aaa");
        s.consume("bbb");
        s.consume("bbbbb");
        assert!(s.has_found(1));
        assert!(!s.is_settled(1));
        s.consume("aaaaa");
        assert!(s.is_settled(1));
        assert!(s.is_settled(2));
        assert!(!s.is_settled(3));
        assert!(s.is_settled(0));
    }

    #[test]
    fn stats_track_candidate_lifecycle() {
        let mut s = synthetic(2);
        s.consume("aaa");
        s.consume("bbb");
        s.consume("bbbbb");
        s.consume(PLAIN);
        let stats = s.stats();
        assert_eq!(stats.scanned, 4);
        assert_eq!(stats.candidates, 3);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(stats.evicted, 1);
        assert_eq!(stats.pending(), 1);
    }

    #[test]
    fn find_keys_on_reference_seed() {
        let mut s = KeySearch::new("abc", &SearchConfig::default()).unwrap();
        let keys = s.find_keys(1);
        assert_eq!(keys, vec![39]);
        assert!(s.keys().contains(&92));
        assert!(s.next_index() > 816);
    }

    #[test]
    fn nth_key_rejects_zero() {
        let mut s = synthetic(10);
        assert!(matches!(s.nth_key(0), Err(HashKeysError::Config(_))));
        assert!(s.find_keys(0).is_empty());
        assert_eq!(s.next_index(), 0);
    }

    #[test]
    fn run_uses_configured_key_count() {
        let cfg = SearchConfig {
            key_count: 2,
            ..SearchConfig::default()
        };
        let mut s = KeySearch::new("abc", &cfg).unwrap();
        assert_eq!(s.key_count(), 2);
        assert_eq!(s.run(), vec![39, 92]);
        assert_eq!(synthetic(10).key_count(), 64);
    }

    #[test]
    fn callback_sees_state_after_each_scan() {
        let cfg = SearchConfig {
            key_count: 1,
            ..SearchConfig::default()
        };
        let mut s = KeySearch::new("abc", &cfg).unwrap();
        let mut seen = 0u64;
        s.run_with(|step, search| {
            assert_eq!(search.next_index(), step.index + 1);
            seen += 1;
        });
        assert_eq!(seen, s.next_index());
    }

    #[test]
    fn new_validates_config() {
        let cfg = SearchConfig {
            lookahead: 0,
            ..SearchConfig::default()
        };
        assert!(KeySearch::new("abc", &cfg).is_err());
    }
}
