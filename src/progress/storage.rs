//! Storage for mastered words
//!
//! File layout in the data directory:
//! ```text
//! wordwizards/
//! └── progress.json   # { "masteredWordIDs_Y3": [uuid, ...], ..., "updatedAt": ... }
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::vocabulary::YearGroup;

const KEY_PREFIX: &str = "masteredWordIDs_";
const PROGRESS_FILE: &str = "progress.json";

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ProgressError>;

/// Records which words have been mastered in each year group
///
/// Marking is append-only and idempotent. Reads reflect every earlier write
/// made through the same store.
pub trait ProgressStore: Send + Sync {
    fn mastered_word_ids(&self, year: YearGroup) -> HashSet<Uuid>;

    fn mark_word_mastered(&self, id: Uuid, year: YearGroup);

    fn mastered_count(&self, year: YearGroup) -> usize {
        self.mastered_word_ids(year).len()
    }
}

/// On-disk shape of the progress file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressFile {
    #[serde(flatten)]
    mastered: BTreeMap<String, BTreeSet<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

fn storage_key(year: YearGroup) -> String {
    format!("{}{}", KEY_PREFIX, year.short_code())
}

/// Durable store backed by a single JSON file
pub struct JsonProgressStore {
    path: PathBuf,
    state: Mutex<ProgressFile>,
}

impl JsonProgressStore {
    /// Open the store in a data directory, creating the directory if needed
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        let path = data_dir.join(PROGRESS_FILE);

        let state = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            ProgressFile::default()
        };

        log::debug!("Progress store opened at {}", path.display());
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    /// Default data directory for the application
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("wordwizards"))
            .ok_or(ProgressError::DataDirNotFound)
    }

    fn save(&self, state: &ProgressFile) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ProgressStore for JsonProgressStore {
    fn mastered_word_ids(&self, year: YearGroup) -> HashSet<Uuid> {
        let state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        state
            .mastered
            .get(&storage_key(year))
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    fn mark_word_mastered(&self, id: Uuid, year: YearGroup) {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };

        let inserted = state.mastered.entry(storage_key(year)).or_default().insert(id);
        if !inserted {
            return;
        }

        state.updated_at = Some(Utc::now());
        match self.save(&state) {
            Ok(()) => log::info!("Marked word {} as mastered for {}", id, year),
            Err(e) => log::error!(
                "Failed to persist mastered word {} to {}: {}",
                id,
                self.path.display(),
                e
            ),
        }
    }
}

/// Process-local store, nothing is written to disk
#[derive(Default)]
pub struct MemoryProgressStore {
    mastered: Mutex<HashMap<YearGroup, HashSet<Uuid>>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn mastered_word_ids(&self, year: YearGroup) -> HashSet<Uuid> {
        let mastered = match self.mastered.lock() {
            Ok(mastered) => mastered,
            Err(poisoned) => poisoned.into_inner(),
        };
        mastered.get(&year).cloned().unwrap_or_default()
    }

    fn mark_word_mastered(&self, id: Uuid, year: YearGroup) {
        let mut mastered = match self.mastered.lock() {
            Ok(mastered) => mastered,
            Err(poisoned) => poisoned.into_inner(),
        };
        mastered.entry(year).or_default().insert(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (JsonProgressStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonProgressStore::open(temp_dir.path().to_path_buf()).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_persists_mastered_words() {
        let (store, temp) = create_test_store();
        let id = Uuid::new_v4();

        assert!(store.mastered_word_ids(YearGroup::Year3).is_empty());
        store.mark_word_mastered(id, YearGroup::Year3);
        assert!(store.mastered_word_ids(YearGroup::Year3).contains(&id));

        let reopened = JsonProgressStore::open(temp.path().to_path_buf()).unwrap();
        assert!(reopened.mastered_word_ids(YearGroup::Year3).contains(&id));
    }

    #[test]
    fn test_years_are_kept_apart() {
        let (store, _temp) = create_test_store();
        let id = Uuid::new_v4();

        store.mark_word_mastered(id, YearGroup::Year4);

        assert!(store.mastered_word_ids(YearGroup::Year3).is_empty());
        assert_eq!(store.mastered_count(YearGroup::Year4), 1);
    }

    #[test]
    fn test_marking_twice_is_idempotent() {
        let (store, _temp) = create_test_store();
        let id = Uuid::new_v4();

        store.mark_word_mastered(id, YearGroup::Year5);
        store.mark_word_mastered(id, YearGroup::Year5);

        assert_eq!(store.mastered_count(YearGroup::Year5), 1);
    }

    #[test]
    fn test_file_uses_short_code_keys() {
        let (store, temp) = create_test_store();
        let id = Uuid::new_v4();

        store.mark_word_mastered(id, YearGroup::Year6);

        let content = fs::read_to_string(temp.path().join(PROGRESS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["masteredWordIDs_Y6"][0], id.to_string());
        assert!(value["updatedAt"].is_string());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROGRESS_FILE), "[1, 2").unwrap();

        let result = JsonProgressStore::open(temp_dir.path().to_path_buf());
        assert!(matches!(result, Err(ProgressError::Json(_))));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryProgressStore::new();
        let id = Uuid::new_v4();

        store.mark_word_mastered(id, YearGroup::Year3);
        store.mark_word_mastered(id, YearGroup::Year3);

        assert_eq!(store.mastered_word_ids(YearGroup::Year3).len(), 1);
        assert!(store.mastered_word_ids(YearGroup::Year4).is_empty());
    }
}
