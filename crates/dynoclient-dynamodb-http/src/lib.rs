//! DynamoDB HTTP layer for dynoclient.
//!
//! DynamoDB uses the `awsJson1_0` protocol: every call is a `POST /` whose
//! operation is named by the `X-Amz-Target` header and whose body is JSON.
//! This crate turns a typed [`OperationRequest`] into that request, signs it,
//! sends it through an [`HttpTransport`], retries transient failures under a
//! [`RetryPolicy`], and classifies the response.
//!
//! [`OperationRequest`]: dynoclient_dynamodb_model::OperationRequest
#![allow(missing_docs)]

pub mod dispatch;
pub mod error;
pub mod request;
pub mod response;
pub mod retry;
pub mod signer;
pub mod transport;

pub use dispatch::{Dispatcher, dispatch};
pub use error::{Error, Result, ServiceError, TransportError, TransportErrorKind, is_retryable};
pub use request::{CONTENT_TYPE, build_request};
pub use retry::RetryPolicy;
pub use signer::{SignError, Signer, UnsignedSigner};
pub use transport::{HttpTransport, ReqwestTransport};
