use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ferry_fs::{AtomicWriteOptions, PermissionMode};
use tracing::{debug, warn};

use super::{EtagEntry, EtagStore, MemoryEtagStore};
use crate::error::{FetchError, Result};

/// [`MemoryEtagStore`] mirrored to a JSON file after every update.
#[derive(Debug)]
pub struct JsonEtagStore {
    path:   PathBuf,
    memory: MemoryEtagStore,
    // serializes flushes so an older snapshot never replaces a newer one
    flush:  Mutex<()>,
}

impl JsonEtagStore {
    /// Load the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries: BTreeMap<String, EtagEntry> = match ferry_fs::atomic_read(&path) {
            Ok(raw) => serde_json::from_slice(&raw).map_err(|source| FetchError::StoreFormat {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.is_not_found() => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), entries = entries.len(), "loaded etag store");

        Ok(Self {
            path,
            memory: MemoryEtagStore::from_entries(entries),
            flush: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn len(&self) -> usize { self.memory.len() }

    pub fn is_empty(&self) -> bool { self.memory.is_empty() }

    /// Write the current records to disk.
    pub fn flush(&self) -> Result<()> {
        let _guard = self.flush.lock().unwrap_or_else(|e| e.into_inner());
        let raw = serde_json::to_vec_pretty(&self.memory.snapshot()).map_err(|source| {
            FetchError::StoreFormat {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(dir) = self.path.parent() {
            ferry_fs::ensure_dir(dir, PermissionMode::Directory)?;
        }
        ferry_fs::atomic_write(
            &self.path,
            &raw,
            AtomicWriteOptions::new().permissions(PermissionMode::ReadWrite).sync(true),
        )?;
        Ok(())
    }
}

impl EtagStore for JsonEtagStore {
    fn get_etag_with_hash(&self, url: &str) -> Option<(Vec<u8>, String)> {
        self.memory.get_etag_with_hash(url)
    }

    fn set_etag_with_hash(&self, url: &str, hash: &[u8], etag: &str) {
        self.memory.set_etag_with_hash(url, hash, etag);
        if let Err(e) = self.flush() {
            warn!(path = %self.path.display(), url, error = %e, "failed to persist etag store");
        }
    }
}
