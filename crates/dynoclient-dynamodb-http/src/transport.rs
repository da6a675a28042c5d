//! Sending requests over the network.
//!
//! [`HttpTransport`] is the seam between the request loop and the wire. The
//! default [`ReqwestTransport`] uses a pooled `reqwest::Client`; tests swap in
//! an in-memory transport.

use std::error::Error as StdError;
use std::io;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{TransportError, TransportErrorKind};

/// Sends one fully built request and returns the buffered response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and read the full response body.
    async fn send(&self, request: http::Request<Bytes>)
    -> Result<http::Response<Bytes>, TransportError>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport, with an optional per-attempt timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(classify)?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError> {
        let request = reqwest::Request::try_from(request).map_err(classify)?;
        let response = self.client.execute(request).await.map_err(classify)?;

        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(classify)?;

        let mut builder = http::Response::builder().status(status).version(version);
        if let Some(map) = builder.headers_mut() {
            *map = headers;
        }
        builder
            .body(body)
            .map_err(|e| TransportError::with_source(TransportErrorKind::Other, e))
    }
}

/// Map a `reqwest` error to a [`TransportError`].
fn classify(err: reqwest::Error) -> TransportError {
    let kind = kind_of(&err);
    TransportError::with_source(kind, err)
}

fn kind_of(err: &reqwest::Error) -> TransportErrorKind {
    if err.is_timeout() {
        return TransportErrorKind::Timeout;
    }
    if let Some(kind) = io_kind(err) {
        return kind;
    }
    if err.is_connect() {
        if mentions_dns(err) {
            return TransportErrorKind::Dns;
        }
        return TransportErrorKind::Connect;
    }
    if err.is_body() || err.is_decode() {
        return TransportErrorKind::Read;
    }
    if err.is_request() {
        return TransportErrorKind::Write;
    }
    TransportErrorKind::Other
}

/// Kind implied by the first `io::Error` in the source chain.
fn io_kind(err: &(dyn StdError + 'static)) -> Option<TransportErrorKind> {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            return match io_err.kind() {
                io::ErrorKind::ConnectionReset
                | io::ErrorKind::ConnectionAborted
                | io::ErrorKind::BrokenPipe => Some(TransportErrorKind::ConnectionReset),
                io::ErrorKind::UnexpectedEof => Some(TransportErrorKind::UnexpectedEof),
                io::ErrorKind::TimedOut => Some(TransportErrorKind::Timeout),
                io::ErrorKind::ConnectionRefused => Some(TransportErrorKind::Connect),
                _ => None,
            };
        }
        source = cause.source();
    }
    None
}

fn mentions_dns(err: &(dyn StdError + 'static)) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(cause) = source {
        if cause.to_string().to_ascii_lowercase().contains("dns error") {
            return true;
        }
        source = cause.source();
    }
    false
}
