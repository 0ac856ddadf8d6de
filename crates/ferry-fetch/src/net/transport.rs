use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::Stream;

use crate::data::HeaderSet;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// One outgoing request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method:  Method,
    pub url:     String,
    pub headers: HeaderSet,
    pub body:    Option<Bytes>,
    /// Proxy address; empty means a direct connection.
    pub proxy:   String,
}

impl TransportRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method:  Method::Get,
            url:     url.into(),
            headers: HeaderSet::new(),
            body:    None,
            proxy:   String::new(),
        }
    }

    pub fn headers(mut self, headers: HeaderSet) -> Self {
        self.headers = headers;
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = proxy.into();
        self
    }
}

/// Status, headers and an unread body.
///
/// Dropping the response releases the body and the underlying connection.
pub struct TransportResponse {
    pub status:  u16,
    /// Reason phrase of the status line, when the transport knows it.
    pub reason:  Option<String>,
    pub headers: HeaderSet,
    pub body:    BoxStream<'static, io::Result<Bytes>>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool { (200..=299).contains(&self.status) }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid proxy address {proxy:?}: {source}")]
    InvalidProxy {
        proxy:  String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("{method} {url} failed: {source}")]
    Request {
        method: Method,
        url:    String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// HTTP transport used by [`crate::HttpVehicle`].
///
/// Implementations own connection management and proxy dialing. They must
/// not follow the body: the vehicle drains it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError>;
}
