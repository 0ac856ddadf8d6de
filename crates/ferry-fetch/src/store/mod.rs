//! Persistent URL → (content hash, ETag) records used for conditional requests.

mod json;
mod memory;

pub use json::JsonEtagStore;
pub use memory::{EtagEntry, MemoryEtagStore};

/// Store of the last validated (hash, ETag) pair per URL.
///
/// Shared between vehicles; implementations synchronize internally. Update
/// failures are the store's concern and never fail the fetch that produced
/// them.
pub trait EtagStore: Send + Sync {
    /// Previously recorded digest bytes and ETag for `url`.
    fn get_etag_with_hash(&self, url: &str) -> Option<(Vec<u8>, String)>;

    /// Record the digest and ETag of a validated fetch. `etag` may be empty.
    fn set_etag_with_hash(&self, url: &str, hash: &[u8], etag: &str);
}
