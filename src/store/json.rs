//! Diary persistence
//!
//! The diary is a single JSON object keyed by ISO date string, loaded
//! whole at session start and written whole on every save. There is no
//! locking: the store must not be shared across processes (last writer
//! wins).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::DailyEntry;

/// Default store file name, kept for compatibility with existing diaries
pub const DEFAULT_STORE_FILE: &str = "fitness_diary_data.json";

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Flat-file diary store
pub struct DiaryStore {
    path: PathBuf,
}

impl DiaryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole diary. A missing file is an empty diary (first
    /// run), not an error.
    pub fn load(&self) -> StoreResult<BTreeMap<String, DailyEntry>> {
        if !self.path.exists() {
            tracing::info!("no store at {}, starting empty", self.path.display());
            return Ok(BTreeMap::new());
        }

        let file = File::open(&self.path)?;
        let entries: BTreeMap<String, DailyEntry> = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!("loaded {} entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    /// Overwrite the persisted diary with the given entries.
    ///
    /// Callers merge updated entries into the in-memory map first;
    /// persistence is whole-store, never per-entry.
    pub fn save(&self, entries: &BTreeMap<String, DailyEntry>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;

        tracing::info!("saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}
