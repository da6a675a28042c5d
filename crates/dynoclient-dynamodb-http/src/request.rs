//! Building the HTTP request for one operation.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::header::{CONTENT_TYPE as CONTENT_TYPE_HEADER, HeaderValue};
use http::{Method, Uri};

use dynoclient_core::Credentials;
use dynoclient_dynamodb_model::Operation;

use crate::error::{Result, TransportError, TransportErrorKind};

/// Content type of every DynamoDB request and response body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// Basic ISO 8601 format used by `X-Amz-Date`.
const AMZ_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Build the unsigned `POST /` request for `operation`.
///
/// `endpoint` supplies scheme and authority; any path on it is replaced by
/// `/`.
pub fn build_request(
    endpoint: &Uri,
    operation: Operation,
    body: Bytes,
    credentials: &Credentials,
    now: DateTime<Utc>,
) -> Result<http::Request<Bytes>> {
    let mut parts = endpoint.clone().into_parts();
    parts.path_and_query = Some(http::uri::PathAndQuery::from_static("/"));
    let uri = Uri::from_parts(parts)
        .map_err(|e| TransportError::with_source(TransportErrorKind::Other, e))?;

    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE_HEADER, HeaderValue::from_static(CONTENT_TYPE))
        .header("x-amz-date", now.format(AMZ_DATE_FORMAT).to_string())
        .header("x-amz-target", operation.target());

    if let Some(token) = credentials.session_token() {
        builder = builder.header("x-amz-security-token", token);
    }

    let request = builder
        .body(body)
        .map_err(|e| TransportError::with_source(TransportErrorKind::Other, e))?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 5, 24, 14, 3, 9).single().expect("time")
    }

    #[test]
    fn test_should_set_protocol_headers() {
        let endpoint: Uri = "http://localhost:4566".parse().expect("uri");
        let request = build_request(
            &endpoint,
            Operation::GetItem,
            Bytes::from_static(b"{\"TableName\":\"t\"}"),
            &Credentials::new("AKID", "secret"),
            fixed_now(),
        )
        .expect("request");

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.uri().to_string(), "http://localhost:4566/");
        let headers = request.headers();
        assert_eq!(headers["content-type"], "application/x-amz-json-1.0");
        assert_eq!(headers["x-amz-date"], "20130524T140309Z");
        assert_eq!(headers["x-amz-target"], "DynamoDB_20120810.GetItem");
        assert!(headers.get("x-amz-security-token").is_none());
        assert_eq!(request.body().as_ref(), b"{\"TableName\":\"t\"}");
    }

    #[test]
    fn test_should_send_session_token() {
        let endpoint: Uri = "https://dynamodb.us-east-1.amazonaws.com".parse().expect("uri");
        let request = build_request(
            &endpoint,
            Operation::Scan,
            Bytes::new(),
            &Credentials::new("AKID", "secret").with_session_token("tok"),
            fixed_now(),
        )
        .expect("request");
        assert_eq!(request.headers()["x-amz-security-token"], "tok");
        assert_eq!(request.headers()["x-amz-target"], "DynamoDB_20120810.Scan");
    }

    #[test]
    fn test_should_replace_endpoint_path() {
        let endpoint: Uri = "http://localhost:8000/some/prefix?x=1".parse().expect("uri");
        let request = build_request(
            &endpoint,
            Operation::ListTables,
            Bytes::new(),
            &Credentials::new("", ""),
            fixed_now(),
        )
        .expect("request");
        assert_eq!(request.uri().path(), "/");
        assert_eq!(request.uri().query(), None);
    }

    #[test]
    fn test_should_reject_token_with_invalid_header_bytes() {
        let endpoint: Uri = "http://localhost:8000".parse().expect("uri");
        let err = build_request(
            &endpoint,
            Operation::ListTables,
            Bytes::new(),
            &Credentials::new("a", "b").with_session_token("bad\ntoken"),
            fixed_now(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Transport(ref t) if t.kind() == TransportErrorKind::Other
        ));
    }
}
