//! The vehicle capability contract and its two implementations.

mod file;
mod http;

use std::fmt;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use ferry_verify::HashType;

use crate::data::{Fetched, VehicleType};
use crate::error::Result;

pub use file::FileVehicle;
pub use http::HttpVehicle;

/// Timeout applied to HTTP vehicles that do not configure one.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(20);

/// Fetches and stores the raw bytes of one resource.
///
/// Calls are independent and unsynchronized: concurrent [`Vehicle::write`]s
/// to the same path are last-writer-wins. Cancel a [`Vehicle::read`] by
/// dropping its future.
#[async_trait]
pub trait Vehicle: Send + Sync + fmt::Debug {
    fn vehicle_type(&self) -> VehicleType;

    /// Local path the payload is persisted to.
    fn path(&self) -> &Path;

    /// Origin identifier, for display and logging.
    fn url(&self) -> String;

    /// Proxy address; empty for direct connections.
    fn proxy(&self) -> &str;

    /// Fetch the payload. `old_hash` is the digest the caller already holds,
    /// or the invalid default when it holds nothing.
    async fn read(&self, old_hash: HashType) -> Result<Fetched>;

    fn write(&self, buf: &[u8]) -> Result<()>;
}
