//! Error taxonomy of a DynamoDB call.
//!
//! [`Error`] separates the ways a call can fail: it never reached the
//! service ([`TransportError`]), the service refused it ([`ServiceError`]),
//! the service answered with something that is not DynamoDB JSON
//! (`UnexpectedResponse`), or it was rejected locally. [`is_retryable`] is the
//! single place that decides which of these are worth another attempt.

use std::fmt;

use bytes::Bytes;
use http::StatusCode;

use dynoclient_core::ConfigError;
use dynoclient_dynamodb_model::{ApiErrorBody, ServiceErrorCode, ValidationError};

use crate::signer::SignError;

/// Result alias for DynamoDB calls.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error codes retried regardless of status.
const RETRYABLE_CODES: &[&str] = &[
    "InternalError",
    "InternalServerError",
    "ProvisionedThroughputExceededException",
];

/// Any failure of a DynamoDB call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a complete response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service returned a DynamoDB error body.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The response body could not be decoded.
    #[error("unexpected response body: {source}")]
    UnexpectedResponse {
        body: Bytes,
        #[source]
        source: serde_json::Error,
    },

    /// The request was rejected before any network call.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// The request could not be encoded.
    #[error("failed to encode request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The signer refused the request.
    #[error(transparent)]
    Signing(#[from] SignError),

    /// Endpoint or credentials could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The caller cancelled the call.
    #[error("request cancelled")]
    Cancelled,
}

impl Error {
    /// The service error, if this is one.
    #[must_use]
    pub fn as_service(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// Typed service error code, if this is a service error.
    #[must_use]
    pub fn service_code(&self) -> Option<ServiceErrorCode> {
        self.as_service().map(ServiceError::error_code)
    }
}

/// A DynamoDB error response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dynamodb: {code}: {message}")]
pub struct ServiceError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Status line text, e.g. `400 Bad Request`.
    pub status_text: String,
    /// Short error code, e.g. `ConditionalCheckFailedException`.
    pub code: String,
    /// Message from the service, empty when none was sent.
    pub message: String,
}

impl ServiceError {
    /// Build from a status and a parsed error body.
    #[must_use]
    pub fn from_body(status: StatusCode, body: &ApiErrorBody) -> Self {
        Self {
            status,
            status_text: status_text(status),
            code: body.code().to_owned(),
            message: body.message.clone().unwrap_or_default(),
        }
    }

    /// Typed view of [`code`](Self::code).
    #[must_use]
    pub fn error_code(&self) -> ServiceErrorCode {
        ServiceErrorCode::from_code(&self.code)
    }
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

/// How a transport failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// Connection could not be established.
    Connect,
    /// Host name did not resolve.
    Dns,
    /// No response within the configured timeout.
    Timeout,
    /// Peer reset or aborted the connection.
    ConnectionReset,
    /// Connection closed mid-response.
    UnexpectedEof,
    /// Reading the response failed.
    Read,
    /// Writing the request failed.
    Write,
    /// The body does not match its `x-amz-crc32` checksum.
    Crc32Mismatch,
    /// Anything else, such as a malformed request.
    Other,
}

impl TransportErrorKind {
    /// Returns a short lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Dns => "dns",
            Self::Timeout => "timeout",
            Self::ConnectionReset => "connection reset",
            Self::UnexpectedEof => "unexpected eof",
            Self::Read => "read",
            Self::Write => "write",
            Self::Crc32Mismatch => "crc32 mismatch",
            Self::Other => "transport",
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure below the DynamoDB protocol.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct TransportError {
    kind: TransportErrorKind,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Build an error with no underlying cause.
    #[must_use]
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Build an error wrapping its cause.
    #[must_use]
    pub fn with_source(
        kind: TransportErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// The failure kind.
    #[must_use]
    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }
}

/// Whether a failed attempt should be tried again.
#[must_use]
pub fn is_retryable(err: &Error) -> bool {
    match err {
        Error::Transport(err) => err.kind() != TransportErrorKind::Other,
        Error::Service(err) => {
            matches!(
                err.status,
                StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE
            ) || RETRYABLE_CODES.contains(&err.code.as_str())
        }
        _ => false,
    }
}
