//! Response classification and decoding.

use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;

use dynoclient_dynamodb_model::ApiErrorBody;

use crate::error::{Error, Result, ServiceError, TransportError, TransportErrorKind};

/// Header carrying the CRC32 of the response body.
pub const CRC32_HEADER: &str = "x-amz-crc32";

/// Turn a buffered response into its body or an [`Error`].
///
/// A `200` yields the raw body. Any other status is parsed as a DynamoDB
/// error body; a body that is not one becomes
/// [`Error::UnexpectedResponse`], whatever the status, and is not retried.
/// When the response carries `x-amz-crc32` the body is checked against it
/// first.
pub fn classify_response(response: http::Response<Bytes>) -> Result<Bytes> {
    let (parts, body) = response.into_parts();
    verify_crc32(&parts.headers, &body)?;

    if parts.status == StatusCode::OK {
        return Ok(body);
    }

    match serde_json::from_slice::<ApiErrorBody>(&body) {
        Ok(api_error) => Err(ServiceError::from_body(parts.status, &api_error).into()),
        Err(source) => Err(Error::UnexpectedResponse { body, source }),
    }
}

/// Decode a successful body into the operation output.
pub fn decode_output<T: DeserializeOwned>(body: Bytes) -> Result<T> {
    serde_json::from_slice(&body).map_err(|source| Error::UnexpectedResponse { body, source })
}

fn verify_crc32(headers: &http::HeaderMap, body: &[u8]) -> Result<(), TransportError> {
    let Some(value) = headers.get(CRC32_HEADER) else {
        return Ok(());
    };
    let expected = value
        .to_str()
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok());
    let actual = crc32fast::hash(body);
    match expected {
        Some(expected) if expected == actual => Ok(()),
        Some(expected) => Err(TransportError::new(
            TransportErrorKind::Crc32Mismatch,
            format!("expected {expected}, computed {actual}"),
        )),
        None => Err(TransportError::new(
            TransportErrorKind::Crc32Mismatch,
            format!("unparsable {CRC32_HEADER} header {value:?}"),
        )),
    }
}
