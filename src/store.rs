//! Persisted preference storage.
//!
//! One record under one fixed key. A corrupted record is discarded, never
//! repaired, and every failure is silent: a broken stored preference must
//! never block the caller.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::prefs::PrefRecord;

/// Fixed storage key for the preference record.
pub const STORAGE_KEY: &str = "dateFormat";

/// A backend holding the single serialized preference record.
pub trait PrefStore: Send + Sync {
    /// Read the stored record. `None` when the backend is unavailable,
    /// no record exists, or the stored text fails to parse — the three
    /// cases are indistinguishable to the caller.
    fn load(&self) -> Option<PrefRecord>;

    /// Serialize and write the full record. No-op when unavailable.
    fn save(&self, record: &PrefRecord);

    /// Remove the record. No-op when unavailable.
    fn clear(&self);
}

impl<S: PrefStore> PrefStore for Arc<S> {
    fn load(&self) -> Option<PrefRecord> {
        (**self).load()
    }

    fn save(&self, record: &PrefRecord) {
        (**self).save(record)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// File-backed store under the platform config directory.
#[derive(Debug)]
pub struct FileStore {
    /// `None` means no persistence backend is available.
    path: Option<PathBuf>,
}

impl FileStore {
    /// Store under `{config_dir}/dateprefs/dateFormat.json`.
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .map(|dir| dir.join("dateprefs").join(format!("{STORAGE_KEY}.json")));
        FileStore { path }
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        FileStore { path: Some(path) }
    }

    /// A store with no backend: loads nothing, writes nowhere.
    pub fn unavailable() -> Self {
        FileStore { path: None }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefStore for FileStore {
    fn load(&self) -> Option<PrefRecord> {
        let path = self.path.as_ref()?;
        let text = fs::read_to_string(path).ok()?;
        serde_json::from_str(&text).ok()
    }

    fn save(&self, record: &PrefRecord) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Ok(json) = serde_json::to_string(record) {
            let _ = fs::write(path, json);
        }
    }

    fn clear(&self) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        let _ = fs::remove_file(path);
    }
}

/// In-process store holding the serialized text, for hosts without
/// durable storage and for tests.
///
/// Keeps the text round trip of the file store: `save` serializes,
/// `load` re-parses.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored text, possibly corrupt.
    pub fn with_raw(text: impl Into<String>) -> Self {
        MemoryStore {
            slot: Mutex::new(Some(text.into())),
        }
    }
}

impl PrefStore for MemoryStore {
    fn load(&self) -> Option<PrefRecord> {
        let slot = self.slot.lock().ok()?;
        serde_json::from_str(slot.as_deref()?).ok()
    }

    fn save(&self, record: &PrefRecord) {
        if let (Ok(mut slot), Ok(json)) = (self.slot.lock(), serde_json::to_string(record)) {
            *slot = Some(json);
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{TimeFormat, WeekStart};

    #[test]
    fn test_memory_round_trip() {
        let store = MemoryStore::new();
        let record = PrefRecord {
            week_start_day: WeekStart::Monday,
            time_format: TimeFormat::H24,
        };
        store.save(&record);
        assert_eq!(store.load(), Some(record));
    }

    #[test]
    fn test_memory_empty_and_cleared() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);
        store.save(&PrefRecord::default());
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_text_is_discarded() {
        let store = MemoryStore::with_raw("{not json");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_unavailable_file_store_is_inert() {
        let store = FileStore::unavailable();
        assert_eq!(store.load(), None);
        store.save(&PrefRecord::default());
        store.clear();
        assert_eq!(store.load(), None);
    }
}
