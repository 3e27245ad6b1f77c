//! Local history store
//!
//! Whole-file JSON collections for history the client keeps on disk. Each
//! collection is one array in one file; every mutation rewrites the file
//! through a temp-file rename so a crash never leaves a half-written
//! collection. Suited to personal-history volumes, not concurrent writers.

use gymtrack_shared::models::{JournalEntry, ScheduleItem};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const JOURNAL_COLLECTION: &str = "journal-entries";
pub const SCHEDULE_COLLECTION: &str = "schedule-items";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("History serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Record stored in a local history collection
pub trait HistoryRecord: Serialize + DeserializeOwned {
    fn id(&self) -> &str;
}

impl HistoryRecord for JournalEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HistoryRecord for ScheduleItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One on-disk JSON collection.
///
/// Records keep insertion order. Duplicate dates are permitted here; the
/// remote storage boundary is where per-date uniqueness is enforced.
pub struct LocalHistory<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: HistoryRecord> LocalHistory<T> {
    /// Open (or create) the collection file under `data_dir`
    pub fn open(data_dir: &Path, collection: &str) -> Result<Self, HistoryError> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(format!("{collection}.json")),
            _marker: PhantomData,
        })
    }

    /// All records in insertion order. A missing or empty file is an empty
    /// collection, not an error.
    pub fn list(&self) -> Result<Vec<T>, HistoryError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one record
    pub fn append(&self, item: T) -> Result<(), HistoryError> {
        let mut items = self.list()?;
        items.push(item);
        self.write_all(&items)
    }

    /// Remove the record with the given id. Returns whether one was found.
    pub fn remove(&self, id: &str) -> Result<bool, HistoryError> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.write_all(&items)?;
        Ok(true)
    }

    fn write_all(&self, items: &[T]) -> Result<(), HistoryError> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(items)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), count = items.len(), "wrote history collection");
        Ok(())
    }
}
