//! Error types for ferry-fetch.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::net::TransportError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Fs(#[from] ferry_fs::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("{}", status_line(.status, .reason))]
    Status {
        url:    String,
        status: u16,
        reason: Option<String>,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url:    String,
        #[source]
        source: io::Error,
    },

    #[error("invalid etag store {}: {source}", path.display())]
    StoreFormat {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid vehicle config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// HTTP status of a rejected response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn status_line(status: &u16, reason: &Option<String>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => format!("{status} {reason}"),
        _ => status.to_string(),
    }
}
