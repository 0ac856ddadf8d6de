#![allow(dead_code)]

pub mod server;

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use ferry_fetch::{HeaderSet, Method, Transport, TransportError, TransportRequest, TransportResponse};

/// Scripted reply for one request.
pub enum Reply {
    Response {
        status:  u16,
        reason:  Option<&'static str>,
        headers: Vec<(&'static str, &'static str)>,
        chunks:  Vec<io::Result<Bytes>>,
    },
    Fail(&'static str),
}

impl Reply {
    pub fn ok(body: &'static [u8]) -> Self {
        Reply::Response {
            status:  200,
            reason:  Some("OK"),
            headers: Vec::new(),
            chunks:  vec![Ok(Bytes::from_static(body))],
        }
    }

    pub fn ok_with_etag(body: &'static [u8], etag: &'static str) -> Self {
        Reply::Response {
            status:  200,
            reason:  Some("OK"),
            headers: vec![("etag", etag)],
            chunks:  vec![Ok(Bytes::from_static(body))],
        }
    }

    pub fn status(status: u16, reason: &'static str) -> Self {
        Reply::Response { status, reason: Some(reason), headers: Vec::new(), chunks: Vec::new() }
    }

    pub fn chunks(chunks: Vec<io::Result<Bytes>>) -> Self {
        Reply::Response { status: 200, reason: Some("OK"), headers: Vec::new(), chunks }
    }
}

/// In-process transport that replays scripted replies and records requests.
#[derive(Default)]
pub struct MockTransport {
    replies:  Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<TransportRequest>>,
    delay:    Option<Duration>,
}

impl MockTransport {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies:  Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            delay:    None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> { self.requests.lock().unwrap().clone() }

    pub fn last_request(&self) -> TransportRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().unwrap().pop_front().expect("unexpected request");
        match reply {
            Reply::Response { status, reason, headers, chunks } => Ok(TransportResponse {
                status,
                reason: reason.map(str::to_string),
                headers: headers.into_iter().collect::<HeaderSet>(),
                body: Box::pin(futures_util::stream::iter(chunks)),
            }),
            Reply::Fail(message) => Err(TransportError::Request {
                method: Method::Get,
                url:    request.url,
                source: message.into(),
            }),
        }
    }
}
