//! Persist a [`KeySearch`] to disk with bincode and resume it later.
//!
//! Stretched searches hash every index thousands of times; a checkpoint lets
//! a rerun continue from the saved counter instead of index 0.

use crate::config::SearchConfig;
use crate::search::{KeySearch, Step};
use crate::HashKeysError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CHECKPOINT_VERSION: u8 = 1;

#[derive(Serialize)]
struct CheckpointRef<'a> {
    version: u8,
    search: &'a KeySearch,
}

#[derive(Deserialize)]
struct CheckpointFile {
    version: u8,
    search: KeySearch,
}

/// Write `search` to `path`, replacing any previous checkpoint.
///
/// The data goes to a sibling `.tmp` file first and is renamed into place, so
/// an interrupted write never leaves a truncated checkpoint behind.
pub fn save_checkpoint<P: AsRef<Path>>(search: &KeySearch, path: P) -> Result<(), HashKeysError> {
    let path = path.as_ref();
    let data = bincode::serialize(&CheckpointRef {
        version: CHECKPOINT_VERSION,
        search,
    })
    .map_err(|e| HashKeysError::Checkpoint(e.to_string()))?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Saves a search every `every` scans from a
/// [`KeySearch::find_keys_with`] callback.
///
/// The callback cannot fail, so the first save error is kept and the writer
/// stops saving; [`finish`](Self::finish) reports it.
pub struct CheckpointWriter {
    path: PathBuf,
    every: u64,
    error: Option<HashKeysError>,
}

impl CheckpointWriter {
    pub fn new(path: impl Into<PathBuf>, every: u64) -> Result<Self, HashKeysError> {
        if every == 0 {
            return Err(HashKeysError::Config(
                "checkpoint interval must be at least 1".into(),
            ));
        }
        Ok(Self {
            path: path.into(),
            every,
            error: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn on_step(&mut self, step: &Step, search: &KeySearch) {
        if self.error.is_some() || (step.index + 1) % self.every != 0 {
            return;
        }
        if let Err(e) = save_checkpoint(search, &self.path) {
            self.error = Some(e);
        }
    }

    /// Save the final state and surface any error from the periodic saves.
    pub fn finish(self, search: &KeySearch) -> Result<(), HashKeysError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        save_checkpoint(search, &self.path)
    }
}

/// Read a search previously written by [`save_checkpoint`].
pub fn load_checkpoint<P: AsRef<Path>>(path: P) -> Result<KeySearch, HashKeysError> {
    let data = fs::read(path)?;
    let file: CheckpointFile =
        bincode::deserialize(&data).map_err(|e| HashKeysError::Checkpoint(e.to_string()))?;
    if file.version != CHECKPOINT_VERSION {
        return Err(HashKeysError::Checkpoint(format!(
            "unsupported checkpoint version {}",
            file.version
        )));
    }
    Ok(file.search)
}

/// Load the checkpoint at `path` if it exists, otherwise start a new search.
///
/// A checkpoint recorded for another seed, fingerprint setting or lookahead
/// is rejected rather than silently mixed into this search.
pub fn resume_or_start<P: AsRef<Path>>(
    path: P,
    seed: &str,
    config: &SearchConfig,
) -> Result<KeySearch, HashKeysError> {
    let path = path.as_ref();
    if !path.exists() {
        return KeySearch::new(seed, config);
    }
    config.validate()?;
    let search = load_checkpoint(path)?;
    if search.seed() != seed {
        return Err(HashKeysError::Checkpoint(format!(
            "checkpoint is for seed '{}', not '{}'",
            search.seed(),
            seed
        )));
    }
    if search.fingerprinter() != config.fingerprinter() || search.lookahead() != config.lookahead {
        return Err(HashKeysError::Checkpoint(
            "checkpoint was recorded with different search settings".into(),
        ));
    }
    Ok(search.with_key_count(config.key_count))
}
