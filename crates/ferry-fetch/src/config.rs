//! Serializable vehicle descriptions.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::HeaderSet;
use crate::error::{FetchError, Result};
use crate::net::Transport;
use crate::store::EtagStore;
use crate::vehicle::{DEFAULT_HTTP_TIMEOUT, FileVehicle, HttpVehicle, Vehicle};

/// Vehicle definition as it appears in a provider config.
///
/// ```
/// use ferry_fetch::VehicleConfig;
///
/// let config = VehicleConfig::from_json(r#"{
///     "type": "http",
///     "url": "https://example.com/rules.yaml",
///     "path": "./rules/example.yaml",
///     "header": { "User-Agent": ["ferry/0.1"] },
///     "timeout": 5
/// }"#).unwrap();
/// assert!(matches!(config, VehicleConfig::Http { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VehicleConfig {
    File {
        path: PathBuf,
    },
    Http {
        url:     String,
        path:    PathBuf,
        #[serde(default)]
        proxy:   String,
        #[serde(default)]
        header:  HashMap<String, Vec<String>>,
        /// Seconds; `0` selects the default.
        #[serde(default)]
        timeout: u64,
    },
}

impl VehicleConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| FetchError::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self {
            VehicleConfig::File { .. } => None,
            VehicleConfig::Http { timeout: 0, .. } => Some(DEFAULT_HTTP_TIMEOUT),
            VehicleConfig::Http { timeout, .. } => Some(Duration::from_secs(*timeout)),
        }
    }

    /// Instantiate the vehicle. File vehicles ignore `transport` and `store`.
    pub fn build(
        self,
        transport: Arc<dyn Transport>,
        store: Arc<dyn EtagStore>,
    ) -> Result<Box<dyn Vehicle>> {
        let timeout = self.timeout();
        match self {
            VehicleConfig::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(FetchError::Config("file vehicle requires a path".into()));
                }
                Ok(Box::new(FileVehicle::new(path)))
            }
            VehicleConfig::Http { url, path, proxy, header, .. } => {
                validate_http_url(&url)?;
                if path.as_os_str().is_empty() {
                    return Err(FetchError::Config(format!("http vehicle {url} requires a path")));
                }
                let vehicle = HttpVehicle::new(url, path, transport, store)
                    .with_proxy(proxy)
                    .with_headers(HeaderSet::from(header))
                    .with_timeout(timeout.unwrap_or(DEFAULT_HTTP_TIMEOUT));
                Ok(Box::new(vehicle))
            }
        }
    }
}

fn validate_http_url(url: &str) -> Result<()> {
    let scheme = url.split("://").next().unwrap_or("");
    let has_host = url.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if has_host && (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")) {
        Ok(())
    } else {
        Err(FetchError::Config(format!("unsupported url {url:?}, expected http(s)")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VehicleType;
    use crate::store::MemoryEtagStore;
    use crate::net::{TransportError, TransportRequest, TransportResponse};
    use async_trait::async_trait;

    struct NoTransport;

    #[async_trait]
    impl Transport for NoTransport {
        async fn request(
            &self,
            request: TransportRequest,
        ) -> std::result::Result<TransportResponse, TransportError> {
            Err(TransportError::Request {
                method: request.method,
                url:    request.url,
                source: "offline".into(),
            })
        }
    }

    fn build(config: VehicleConfig) -> Result<Box<dyn Vehicle>> {
        config.build(Arc::new(NoTransport), Arc::new(MemoryEtagStore::new()))
    }

    #[test]
    fn parse_file() {
        let config = VehicleConfig::from_json(r#"{"type": "file", "path": "rules.yaml"}"#).unwrap();
        assert_eq!(config, VehicleConfig::File { path: "rules.yaml".into() });
        assert_eq!(config.timeout(), None);

        let vehicle = build(config).unwrap();
        assert_eq!(vehicle.vehicle_type(), VehicleType::File);
        assert_eq!(vehicle.url(), "file://rules.yaml");
    }

    #[test]
    fn parse_http_defaults() {
        let config = VehicleConfig::from_json(
            r#"{"type": "http", "url": "https://example.com/a.yaml", "path": "a.yaml"}"#,
        )
        .unwrap();
        assert_eq!(config.timeout(), Some(DEFAULT_HTTP_TIMEOUT));

        let vehicle = build(config).unwrap();
        assert_eq!(vehicle.vehicle_type(), VehicleType::Http);
        assert_eq!(vehicle.url(), "https://example.com/a.yaml");
        assert_eq!(vehicle.proxy(), "");
    }

    #[test]
    fn parse_http_full() {
        let config = VehicleConfig::from_json(
            r#"{
                "type": "http",
                "url": "http://example.com/a.yaml",
                "path": "cache/a.yaml",
                "proxy": "http://127.0.0.1:7890",
                "header": {"User-Agent": ["ferry/0.1"]},
                "timeout": 3
            }"#,
        )
        .unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));

        let vehicle = build(config).unwrap();
        assert_eq!(vehicle.proxy(), "http://127.0.0.1:7890");
        assert_eq!(vehicle.path(), std::path::Path::new("cache/a.yaml"));
    }

    #[test]
    fn http_requires_url() {
        let err = VehicleConfig::from_json(r#"{"type": "http", "path": "a.yaml"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }

    #[test]
    fn rejects_non_http_url() {
        for url in ["ftp://example.com/a", "example.com/a", "https://"] {
            let config = VehicleConfig::Http {
                url:     url.into(),
                path:    "a.yaml".into(),
                proxy:   String::new(),
                header:  HashMap::new(),
                timeout: 0,
            };
            assert!(matches!(build(config), Err(FetchError::Config(_))), "{url}");
        }
    }

    #[test]
    fn unknown_type() {
        let err = VehicleConfig::from_json(r#"{"type": "inline", "path": "a"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }
}
