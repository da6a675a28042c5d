//! The request loop: validate, encode, sign, send, retry, decode.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use http::Uri;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use dynoclient_core::{ClientConfig, CredentialProvider, Credentials, StaticCredentialProvider};
use dynoclient_dynamodb_model::{Operation, OperationRequest};

use crate::error::{Error, Result, is_retryable};
use crate::request::build_request;
use crate::response::{classify_response, decode_output};
use crate::retry::RetryPolicy;
use crate::signer::{Signer, UnsignedSigner};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Everything needed to send a request, shared by all calls of a client.
#[derive(Clone)]
pub struct Dispatcher {
    endpoint: Uri,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn Signer>,
    credentials: Arc<dyn CredentialProvider>,
    retry: RetryPolicy,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("endpoint", &self.endpoint)
            .field("transport", &"...")
            .field("signer", &"...")
            .field("credentials", &"...")
            .field("retry", &self.retry)
            .finish()
    }
}

impl Dispatcher {
    /// Dispatcher for `endpoint` over `transport`, unsigned, with empty
    /// credentials and the default retry policy.
    #[must_use]
    pub fn new(endpoint: Uri, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            endpoint,
            transport,
            signer: Arc::new(UnsignedSigner),
            credentials: Arc::new(StaticCredentialProvider::new(Credentials::new("", ""))),
            retry: RetryPolicy::default(),
        }
    }

    /// Dispatcher built from configuration, sending through `reqwest`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Ok(Self {
            endpoint,
            transport: Arc::new(transport),
            signer: Arc::new(UnsignedSigner),
            credentials: Arc::new(StaticCredentialProvider::new(config.credentials())),
            retry: RetryPolicy::from(config),
        })
    }

    /// Replace the signer.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = signer;
        self
    }

    /// Replace the transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the credential source.
    #[must_use]
    pub fn with_credential_provider(mut self, credentials: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    /// Retry policy applied to each call.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }
}

/// Run one operation to completion.
///
/// The input is validated and encoded once; each attempt resolves
/// credentials, rebuilds and re-signs the request and sends the same body.
/// Retryable failures are retried under the dispatcher's [`RetryPolicy`],
/// and the last error is returned once it says stop. Cancelling `cancel`
/// aborts the in-flight attempt or the pause between attempts with
/// [`Error::Cancelled`].
pub async fn dispatch<T: OperationRequest>(
    dispatcher: &Dispatcher,
    input: &T,
    cancel: &CancellationToken,
) -> Result<T::Output> {
    let operation = T::OPERATION;
    let span = tracing::debug_span!("dynamodb", operation = %operation);
    async move {
        input.validate()?;
        let body = Bytes::from(serde_json::to_vec(input).map_err(Error::Serialization)?);
        let body = send_with_retry(dispatcher, operation, body, cancel).await?;
        decode_output(body)
    }
    .instrument(span)
    .await
}

async fn send_with_retry(
    dispatcher: &Dispatcher,
    operation: Operation,
    body: Bytes,
    cancel: &CancellationToken,
) -> Result<Bytes> {
    let mut attempts = dispatcher.retry.start();
    attempts.record();

    loop {
        let attempt = attempts.made();
        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!(attempt, "request cancelled");
                return Err(Error::Cancelled);
            }
            result = send_once(dispatcher, operation, body.clone()) => result,
        };

        let err = match result {
            Ok(body) => {
                tracing::debug!(attempt, "request succeeded");
                return Ok(body);
            }
            Err(err) => err,
        };

        if !is_retryable(&err) {
            return Err(err);
        }
        if !attempts.has_next() {
            tracing::debug!(attempt, error = %err, "retry budget exhausted");
            return Err(err);
        }

        let delay = attempts.delay();
        tracing::warn!(
            attempt,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "retrying DynamoDB request",
        );
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!(attempt, "request cancelled while waiting to retry");
                return Err(Error::Cancelled);
            }
            () = tokio::time::sleep(delay) => {}
        }
        attempts.record();
    }
}

async fn send_once(dispatcher: &Dispatcher, operation: Operation, body: Bytes) -> Result<Bytes> {
    let credentials = dispatcher.credentials.credentials()?;
    let mut request =
        build_request(&dispatcher.endpoint, operation, body, &credentials, Utc::now())?;
    dispatcher.signer.sign(&mut request, &credentials)?;

    tracing::debug!(uri = %request.uri(), "sending request");
    let response = dispatcher.transport.send(request).await?;
    tracing::debug!(status = %response.status(), "received response");
    classify_response(response)
}
