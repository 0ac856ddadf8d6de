mod transport;

#[cfg(feature = "reqwest")]
mod reqwest_transport;

pub use transport::{BoxStream, Method, Transport, TransportError, TransportRequest, TransportResponse};

#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;
