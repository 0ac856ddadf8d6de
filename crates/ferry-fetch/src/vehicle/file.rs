use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ferry_verify::HashType;
use tracing::debug;

use super::Vehicle;
use crate::data::{Fetched, VehicleType};
use crate::error::Result;

/// Vehicle backed by a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVehicle {
    path: PathBuf,
}

impl FileVehicle {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

#[async_trait]
impl Vehicle for FileVehicle {
    fn vehicle_type(&self) -> VehicleType { VehicleType::File }

    fn path(&self) -> &Path { &self.path }

    fn url(&self) -> String { format!("file://{}", self.path.display()) }

    fn proxy(&self) -> &str { "" }

    /// Local reads are never conditional; `old_hash` is ignored.
    async fn read(&self, _old_hash: HashType) -> Result<Fetched> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| ferry_fs::Error::Read {
            path: self.path.clone(),
            source,
        })?;
        let hash = HashType::of(&bytes);
        debug!(path = %self.path.display(), bytes = bytes.len(), %hash, "read local resource");
        Ok(Fetched::Content { bytes, hash })
    }

    fn write(&self, buf: &[u8]) -> Result<()> {
        ferry_fs::safe_write(&self.path, buf)?;
        Ok(())
    }
}
