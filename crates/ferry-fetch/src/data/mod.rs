//! Data layer: plain types shared by vehicles and transports.

mod fetched;
mod headers;

pub use fetched::{Fetched, VehicleType};
pub use headers::{ETAG, HeaderSet, IF_NONE_MATCH};
