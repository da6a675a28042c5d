//! Request signing seam.
//!
//! The request loop calls [`Signer::sign`] on every attempt, after the
//! protocol headers are set and before the request is sent.

use bytes::Bytes;

use dynoclient_core::Credentials;

/// A signer refused or failed to sign a request.
#[derive(Debug, thiserror::Error)]
#[error("failed to sign request: {message}")]
pub struct SignError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SignError {
    /// Build from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Build from an underlying error.
    #[must_use]
    pub fn with_source(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

/// Adds authentication to an outgoing request.
///
/// Implementations typically add an `Authorization` header computed from
/// the method, URI, headers and body.
pub trait Signer: Send + Sync {
    /// Sign `request` in place with `credentials`.
    fn sign(
        &self,
        request: &mut http::Request<Bytes>,
        credentials: &Credentials,
    ) -> Result<(), SignError>;
}

/// Leaves requests unsigned, for local endpoints that skip verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsignedSigner;

impl Signer for UnsignedSigner {
    fn sign(
        &self,
        _request: &mut http::Request<Bytes>,
        _credentials: &Credentials,
    ) -> Result<(), SignError> {
        Ok(())
    }
}
