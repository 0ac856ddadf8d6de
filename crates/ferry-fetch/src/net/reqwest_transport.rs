use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::TryStreamExt;
use reqwest::header::HeaderMap;
use reqwest::{Client, Proxy};

use super::transport::{Method, Transport, TransportError, TransportRequest, TransportResponse};
use crate::data::HeaderSet;

/// Production transport using reqwest.
///
/// Keeps one client per proxy address so connections are reused across
/// vehicles sharing a proxy. Request timeouts are left to the caller.
#[derive(Default)]
pub struct ReqwestTransport {
    clients: Mutex<HashMap<String, Client>>,
}

impl ReqwestTransport {
    pub fn new() -> Self { Self::default() }

    pub fn shared() -> Arc<Self> { Arc::new(Self::new()) }

    fn client_for(&self, proxy: &str) -> Result<Client, TransportError> {
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(client) = clients.get(proxy) {
            return Ok(client.clone());
        }

        let invalid = |source: reqwest::Error| TransportError::InvalidProxy {
            proxy:  proxy.to_string(),
            source: Box::new(source),
        };
        // an empty address is a direct connection; never fall back to *_PROXY env vars
        let builder = if proxy.is_empty() {
            Client::builder().no_proxy()
        } else {
            Client::builder().proxy(Proxy::all(proxy).map_err(invalid)?)
        };
        let client = builder.build().map_err(invalid)?;
        clients.insert(proxy.to_string(), client.clone());
        Ok(client)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let client = self.client_for(&request.proxy)?;
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = client.request(method, &request.url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| TransportError::Request {
            method: request.method,
            url:    request.url.clone(),
            source: Box::new(e),
        })?;

        let status = response.status();
        let headers = collect_headers(response.headers());
        let body = response.bytes_stream().map_err(io::Error::other);

        Ok(TransportResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            headers,
            body: Box::pin(body),
        })
    }
}

/// Non-UTF-8 (obs-text) values are decoded lossily.
fn collect_headers(headers: &HeaderMap) -> HeaderSet {
    headers
        .iter()
        .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
        .collect()
}
