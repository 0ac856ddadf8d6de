//! Resource vehicles: fetch a payload from disk or over HTTP and persist it.
//!
//! # Architecture
//!
//! - [`data`] - Plain types: [`Fetched`], [`VehicleType`], [`HeaderSet`]
//! - [`net`] - The [`Transport`] seam and its reqwest implementation
//! - [`store`] - URL → (hash, ETag) records behind [`EtagStore`]
//! - [`vehicle`] - The [`Vehicle`] contract, [`FileVehicle`] and [`HttpVehicle`]
//!
//! # Key Features
//!
//! - **Conditional GET**: `If-None-Match` is sent only when the caller's hash
//!   matches the stored one, so a `304` can never return a stale digest
//! - **Single-Pass Hashing**: the body is hashed while it is drained
//! - **Atomic Placement**: writes go through `ferry-fs::safe_write`
//! - **Mechanism-Only**: no retry or scheduling; callers decide when to read

mod config;
pub mod data;
mod error;
pub mod net;
pub mod store;
pub mod vehicle;

pub use config::VehicleConfig;
pub use data::{ETAG, Fetched, HeaderSet, IF_NONE_MATCH, VehicleType};
pub use error::{FetchError, Result};
pub use net::{BoxStream, Method, Transport, TransportError, TransportRequest, TransportResponse};
pub use store::{EtagEntry, EtagStore, JsonEtagStore, MemoryEtagStore};
pub use vehicle::{DEFAULT_HTTP_TIMEOUT, FileVehicle, HttpVehicle, Vehicle};

#[cfg(feature = "reqwest")]
pub use net::ReqwestTransport;

pub use ferry_verify::HashType;
