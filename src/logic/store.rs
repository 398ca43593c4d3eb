//! Durable storage for the calculation history.
//!
//! The history is always written as a whole: a JSON array of record strings,
//! most recent first. Readers treat a missing or unparsable payload as "never saved".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Well-known key the history is stored under (also the file stem of the JSON store).
pub const HISTORY_KEY: &str = "calculatorHistory";

/// Failure while writing the history.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be written.
    #[error("failed to write history to {path}: {source}")]
    Io {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The history could not be serialized.
    #[error("failed to serialize history: {0}")]
    Json(#[from] serde_json::Error),
    /// The in-memory slot is unusable (poisoned lock).
    #[error("history store is unavailable")]
    Unavailable,
}

/// Load/save contract between the accumulator and durable storage.
pub trait HistoryStore: Send + std::fmt::Debug {
    /// What: Read the previously saved history.
    ///
    /// Output:
    /// - `Some(records)` most-recent-first, or `None` if nothing usable was saved.
    fn load(&self) -> Option<Vec<String>>;

    /// What: Overwrite the saved history with `records`.
    ///
    /// # Errors
    /// - Returns a [`StoreError`] when the payload cannot be serialized or written.
    fn save(&mut self, records: &[String]) -> Result<(), StoreError>;
}

/// History persisted as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Target file.
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. Nothing is read or written until used.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/calculatorHistory.json`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{HISTORY_KEY}.json")))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Option<Vec<String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "[Persist] No saved history yet");
                return None;
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "[Persist] Failed to read history; starting empty"
                );
                return None;
            }
        };
        match serde_json::from_str::<Vec<String>>(&text) {
            Ok(records) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = records.len(),
                    "[Persist] Loaded history"
                );
                Some(records)
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "[Persist] History file is not a JSON string array; ignoring it"
                );
                None
            }
        }
    }

    fn save(&mut self, records: &[String]) -> Result<(), StoreError> {
        let s = serde_json::to_string(records)?;
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        tracing::trace!(
            path = %self.path.display(),
            bytes = s.len(),
            "[Persist] Writing history to disk"
        );
        fs::write(&self.path, &s).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Session-only store. Clones share the same slot, so a test can keep a handle
/// and inspect what the accumulator saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Last saved payload, `None` until the first save.
    slot: Arc<Mutex<Option<Vec<String>>>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded as if `records` had been saved earlier.
    #[must_use]
    pub fn with_records(records: Vec<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(records))),
        }
    }

    /// Snapshot of what is currently saved.
    #[must_use]
    pub fn saved(&self) -> Option<Vec<String>> {
        self.slot.lock().ok().and_then(|guard| guard.clone())
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Option<Vec<String>> {
        self.saved()
    }

    fn save(&mut self, records: &[String]) -> Result<(), StoreError> {
        let mut guard = self.slot.lock().map_err(|_| StoreError::Unavailable)?;
        *guard = Some(records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: A JSON file store round-trips an ordered history.
    ///
    /// Inputs:
    /// - Temporary directory, two records saved then loaded, then re-saved.
    ///
    /// Output:
    /// - Loaded records equal the saved ones in order; file content is a JSON array.
    fn json_store_round_trips_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = JsonFileStore::in_dir(dir.path());
        assert_eq!(store.load(), None);

        let records = vec!["7 − 5 = 2".to_string(), "3 + 4 = 7".to_string()];
        store.save(&records).expect("save");
        let loaded = store.load().expect("history present");
        assert_eq!(loaded, records);

        store.save(&loaded).expect("resave");
        assert_eq!(store.load(), Some(records));
        let raw = fs::read_to_string(store.path()).expect("read raw");
        assert!(raw.starts_with('[') && raw.ends_with(']'));
        assert!(store.path().ends_with("calculatorHistory.json"));
    }

    #[test]
    /// What: Corrupt or wrongly-shaped files load as absent.
    ///
    /// Inputs:
    /// - Files containing garbage and a JSON object.
    ///
    /// Output:
    /// - `load()` returns `None` for both.
    fn json_store_ignores_unparsable_payloads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::in_dir(dir.path());
        fs::write(store.path(), "not json").expect("write garbage");
        assert_eq!(store.load(), None);
        fs::write(store.path(), r#"{"a":1}"#).expect("write object");
        assert_eq!(store.load(), None);
    }

    #[test]
    /// What: Saving into a path whose parent is a regular file reports an I/O error.
    fn json_store_reports_unwritable_target() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").expect("write blocker");
        let mut store = JsonFileStore::new(blocker.join("calculatorHistory.json"));
        let err = store.save(&["1 + 1 = 2".to_string()]).expect_err("must fail");
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    /// What: Memory store clones share their slot.
    fn memory_store_clones_share_state() {
        let handle = MemoryStore::new();
        let mut writer = handle.clone();
        writer.save(&["2 × 3 = 6".to_string()]).expect("save");
        assert_eq!(handle.saved(), Some(vec!["2 × 3 = 6".to_string()]));
        assert_eq!(handle.load(), handle.saved());
    }
}
