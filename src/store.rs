// src/store.rs
//
// Memoized load of the master lead list for the dashboard. The cache is keyed
// on the file's identity (path, modification time, length): repeated loads of
// an unchanged file hand back the same shared rows.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::error::Result;
use crate::model::MasterRow;

#[derive(Clone, Debug, PartialEq, Eq)]
struct FileKey {
    path: PathBuf,
    modified: Option<SystemTime>,
    len: u64,
}

impl FileKey {
    fn of(path: &Path) -> Option<Self> {
        let meta = fs::metadata(path).ok()?;
        if !meta.is_file() {
            return None;
        }
        Some(Self {
            path: path.to_path_buf(),
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Loaded rows plus how many lines were unreadable.
#[derive(Clone, Debug, Default)]
pub struct MasterData {
    pub rows: Vec<MasterRow>,
    pub skipped: usize,
}

#[derive(Default)]
pub struct MasterCache {
    entry: Option<(FileKey, Arc<MasterData>)>,
    loads: usize,
}

impl MasterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Ok(None)` when the file is missing: the caller shows a "no data" state.
    pub fn load(&mut self, path: &Path) -> Result<Option<Arc<MasterData>>> {
        let Some(key) = FileKey::of(path) else {
            logd!("Store: {} missing", path.display());
            self.entry = None;
            return Ok(None);
        };

        if let Some((k, data)) = &self.entry {
            if *k == key {
                logd!("Store: cache hit for {}", path.display());
                return Ok(Some(Arc::clone(data)));
            }
        }

        let out = crate::csv::read_rows::<MasterRow>(path)?;
        let data = Arc::new(MasterData { rows: out.rows, skipped: out.skipped });
        self.loads += 1;
        logf!(
            "Store: loaded {} leads from {} (skipped {})",
            data.rows.len(),
            path.display(),
            data.skipped
        );
        self.entry = Some((key, Arc::clone(&data)));
        Ok(Some(data))
    }

    /// Drop the memoized rows so the next `load` rereads the file.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// How many times the file was actually read.
    pub fn loads(&self) -> usize {
        self.loads
    }
}
