use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ferry_verify::{HashType, Hasher, Sha256Hasher};
use futures_util::TryStreamExt;
use tracing::{debug, trace};

use super::{DEFAULT_HTTP_TIMEOUT, Vehicle};
use crate::data::{ETAG, Fetched, HeaderSet, IF_NONE_MATCH, VehicleType};
use crate::error::{FetchError, Result};
use crate::net::{Transport, TransportRequest};
use crate::store::EtagStore;

const NOT_MODIFIED: u16 = 304;

/// Vehicle that downloads a remote resource and persists it to a local path.
///
/// A read sends `If-None-Match` only when the caller's hash matches the hash
/// recorded in the [`EtagStore`] for this URL and a non-empty ETag was
/// recorded with it. A `304` reply to such a request yields
/// [`Fetched::Unchanged`] carrying the caller's hash.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use ferry_fetch::{HttpVehicle, MemoryEtagStore, ReqwestTransport, Vehicle};
/// use ferry_verify::HashType;
///
/// # async fn run() -> ferry_fetch::Result<()> {
/// let vehicle = HttpVehicle::new(
///     "https://example.com/rules.yaml",
///     "/var/lib/ferry/rules.yaml",
///     ReqwestTransport::shared(),
///     Arc::new(MemoryEtagStore::new()),
/// )
/// .with_header("User-Agent", "ferry/0.1")
/// .with_timeout(Duration::from_secs(10));
///
/// let fetched = vehicle.read(HashType::default()).await?;
/// if let Some(bytes) = fetched.bytes() {
///     vehicle.write(bytes)?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpVehicle {
    url:       String,
    path:      PathBuf,
    proxy:     String,
    headers:   HeaderSet,
    timeout:   Duration,
    transport: Arc<dyn Transport>,
    store:     Arc<dyn EtagStore>,
}

impl HttpVehicle {
    pub fn new(
        url: impl Into<String>,
        path: impl Into<PathBuf>,
        transport: Arc<dyn Transport>,
        store: Arc<dyn EtagStore>,
    ) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
            proxy: String::new(),
            headers: HeaderSet::new(),
            timeout: DEFAULT_HTTP_TIMEOUT,
            transport,
            store,
        }
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = proxy.into();
        self
    }

    pub fn with_headers(mut self, headers: HeaderSet) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn headers(&self) -> &HeaderSet { &self.headers }

    pub fn timeout(&self) -> Duration { self.timeout }

    /// ETag to revalidate with, if the store vouches for `old_hash`.
    fn revalidation_etag(&self, old_hash: &HashType) -> Option<String> {
        if !old_hash.is_valid() {
            return None;
        }
        let (hash, etag) = self.store.get_etag_with_hash(&self.url)?;
        (old_hash.equal_bytes(&hash) && !etag.is_empty()).then_some(etag)
    }

    async fn fetch(&self, old_hash: HashType) -> Result<Fetched> {
        // the configured headers are shared by every read; inject into a copy
        let mut headers = self.headers.clone();
        let conditional = match self.revalidation_etag(&old_hash) {
            Some(etag) => {
                headers.set(IF_NONE_MATCH, etag);
                true
            }
            None => false,
        };
        debug!(url = %self.url, conditional, proxy = %self.proxy, "requesting resource");

        let request = TransportRequest::get(&self.url).headers(headers).proxy(&self.proxy);
        let response = self.transport.request(request).await?;

        if !response.is_success() {
            if conditional && response.status == NOT_MODIFIED {
                debug!(url = %self.url, %old_hash, "resource not modified");
                return Ok(Fetched::Unchanged { hash: old_hash });
            }
            return Err(FetchError::Status {
                url:    self.url.clone(),
                status: response.status,
                reason: response.reason,
            });
        }

        let etag = response.headers.get(ETAG).unwrap_or_default().to_string();
        let mut body = response.body;
        let mut hasher = Sha256Hasher::new();
        let mut bytes = Vec::new();
        while let Some(chunk) = body.try_next().await.map_err(|source| FetchError::Body {
            url: self.url.clone(),
            source,
        })? {
            hasher.update(&chunk);
            bytes.extend_from_slice(&chunk);
        }
        let hash = hasher.finalize();

        self.store.set_etag_with_hash(&self.url, hash.as_bytes(), &etag);
        trace!(url = %self.url, %hash, etag = %etag, "recorded etag");
        debug!(url = %self.url, status = response.status, bytes = bytes.len(), "fetched resource");

        Ok(Fetched::Content { bytes, hash })
    }
}

#[async_trait]
impl Vehicle for HttpVehicle {
    fn vehicle_type(&self) -> VehicleType { VehicleType::Http }

    fn path(&self) -> &Path { &self.path }

    fn url(&self) -> String { self.url.clone() }

    fn proxy(&self) -> &str { &self.proxy }

    async fn read(&self, old_hash: HashType) -> Result<Fetched> {
        match tokio::time::timeout(self.timeout, self.fetch(old_hash)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                url:     self.url.clone(),
                timeout: self.timeout,
            }),
        }
    }

    fn write(&self, buf: &[u8]) -> Result<()> {
        ferry_fs::safe_write(&self.path, buf)?;
        Ok(())
    }
}

impl fmt::Debug for HttpVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpVehicle")
            .field("url", &self.url)
            .field("path", &self.path)
            .field("proxy", &self.proxy)
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
