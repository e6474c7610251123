//! Character-run scanning of fingerprints.

/// Run length that creates a candidate.
pub const TRIPLE_LEN: usize = 3;
/// Run length that confirms a candidate.
pub const QUINTUPLE_LEN: usize = 5;

/// Repetition patterns found in one fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunScan {
    /// Character of the first run of three, if any.
    pub triple: Option<char>,
    /// Every distinct character with a run of five, in order of appearance.
    pub quintuples: Vec<char>,
}

impl RunScan {
    pub fn is_empty(&self) -> bool {
        self.triple.is_none() && self.quintuples.is_empty()
    }
}

/// Scan `fingerprint` for its first triple and all of its quintuples.
///
/// Runs are counted as "at least": `aaaa` holds a triple of `a`, and a run of
/// five also counts as the triple when it is the first one.
pub fn scan_runs(fingerprint: &str) -> RunScan {
    let mut scan = RunScan::default();
    let mut chars = fingerprint.chars();
    let Some(mut current) = chars.next() else {
        return scan;
    };
    let mut run = 1usize;

    for c in chars {
        if c == current {
            run += 1;
        } else {
            current = c;
            run = 1;
        }
        if run == TRIPLE_LEN && scan.triple.is_none() {
            scan.triple = Some(c);
        }
        if run == QUINTUPLE_LEN && !scan.quintuples.contains(&c) {
            scan.quintuples.push(c);
        }
    }
    scan
}
