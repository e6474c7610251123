//! Final keys in exportable form: CSV rows and a JSON summary.

use crate::fingerprint::Fingerprinter;
use crate::HashKeysError;
use serde::Serialize;
use std::path::Path;

/// One final key of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRecord {
    pub part: u8,
    pub rank: usize,
    pub index: u64,
    pub fingerprint: String,
}

/// Records for `keys` (ascending), recomputing each fingerprint.
pub fn key_records(part: u8, seed: &str, fingerprinter: &Fingerprinter, keys: &[u64]) -> Vec<KeyRecord> {
    keys.iter()
        .enumerate()
        .map(|(i, &index)| KeyRecord {
            part,
            rank: i + 1,
            index,
            fingerprint: fingerprinter.fingerprint(seed, index),
        })
        .collect()
}

pub fn write_csv<P: AsRef<Path>>(path: P, records: &[KeyRecord]) -> Result<(), HashKeysError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// JSON summary printed by `hashkeys --json`.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub seed: String,
    pub algorithm: String,
    pub key_count: usize,
    pub part_one: u64,
    pub part_two: u64,
    pub stretch: u32,
    pub scanned: u64,
    pub elapsed_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::HashAlgorithm;

    #[test]
    fn records_are_ranked_from_one() {
        let fp = Fingerprinter::new(HashAlgorithm::Md5, 0);
        let records = key_records(1, "abc", &fp, &[39, 92]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[1].index, 92);
        assert!(records[0].fingerprint.contains("eee"));
    }

    #[test]
    fn csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.csv");
        let fp = Fingerprinter::default();
        write_csv(&path, &key_records(2, "abc", &fp, &[1, 2, 3])).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("part,rank,index,fingerprint"));
        assert_eq!(lines.count(), 3);
    }
}
