use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::EtagStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtagEntry {
    #[serde(with = "hex::serde")]
    pub hash: Vec<u8>,
    #[serde(default)]
    pub etag: String,
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryEtagStore {
    entries: RwLock<HashMap<String, EtagEntry>>,
}

impl MemoryEtagStore {
    pub fn new() -> Self { Self::default() }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, EtagEntry)>) -> Self {
        Self {
            entries: RwLock::new(entries.into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize { self.entries.read().unwrap_or_else(|e| e.into_inner()).len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Sorted copy of every record.
    pub fn snapshot(&self) -> BTreeMap<String, EtagEntry> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.iter().map(|(url, entry)| (url.clone(), entry.clone())).collect()
    }
}

impl EtagStore for MemoryEtagStore {
    fn get_etag_with_hash(&self, url: &str) -> Option<(Vec<u8>, String)> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(url).map(|entry| (entry.hash.clone(), entry.etag.clone()))
    }

    fn set_etag_with_hash(&self, url: &str, hash: &[u8], etag: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            url.to_string(),
            EtagEntry {
                hash: hash.to_vec(),
                etag: etag.to_string(),
            },
        );
    }
}
