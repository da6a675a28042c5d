//! Client configuration.
//!
//! Provides [`ClientConfig`], loaded from environment variables over
//! defaults, or assembled with the typed builder.

use std::fmt;
use std::time::Duration;

use anyhow::Context;
use http::Uri;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::credentials::Credentials;
use crate::error::{ConfigError, ConfigResult};
use crate::types::AwsRegion;

/// Configuration of a DynamoDB client.
///
/// The secret access key is never serialized and never shown by `Debug`.
///
/// # Examples
///
/// ```
/// use dynoclient_core::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .endpoint_url(Some("http://localhost:4566".to_owned()))
///     .build();
/// assert_eq!(config.retry_min_attempts, 5);
/// assert_eq!(config.endpoint().unwrap().to_string(), "http://localhost:4566/");
/// ```
#[derive(Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Service endpoint. `None` means the public endpoint of `region`.
    #[builder(default)]
    pub endpoint_url: Option<String>,

    /// AWS region.
    #[builder(default)]
    pub region: AwsRegion,

    /// Access key id.
    #[builder(default)]
    pub access_key_id: String,

    /// Secret access key.
    #[builder(default)]
    #[serde(skip_serializing)]
    pub secret_access_key: String,

    /// Session token for temporary credentials.
    #[builder(default)]
    #[serde(skip_serializing)]
    pub session_token: Option<String>,

    /// Attempts made before the elapsed-time budget is consulted.
    #[builder(default = 5)]
    pub retry_min_attempts: u32,

    /// Elapsed-time budget for all attempts of one call, in milliseconds.
    #[builder(default = 5_000)]
    pub retry_total_ms: u64,

    /// Pause between attempts, in milliseconds.
    #[builder(default = 200)]
    pub retry_delay_ms: u64,

    /// Per-attempt HTTP timeout, in milliseconds.
    #[builder(default)]
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            region: AwsRegion::default(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            session_token: None,
            retry_min_attempts: 5,
            retry_total_ms: 5_000,
            retry_delay_ms: 200,
            request_timeout_ms: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .field("retry_min_attempts", &self.retry_min_attempts)
            .field("retry_total_ms", &self.retry_total_ms)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DYNAMODB_ENDPOINT`, then `AWS_ENDPOINT_URL` | `https://dynamodb.<region>.amazonaws.com` |
    /// | `AWS_REGION`, then `AWS_DEFAULT_REGION` | `us-east-1` |
    /// | `AWS_ACCESS_KEY_ID` | empty |
    /// | `AWS_SECRET_ACCESS_KEY` | empty |
    /// | `AWS_SESSION_TOKEN` | none |
    /// | `DYNAMODB_RETRY_MIN_ATTEMPTS` | `5` |
    /// | `DYNAMODB_RETRY_TOTAL_MS` | `5000` |
    /// | `DYNAMODB_RETRY_DELAY_MS` | `200` |
    /// | `DYNAMODB_REQUEST_TIMEOUT_MS` | none |
    ///
    /// Numeric values that do not parse are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let first = |names: &[&str]| names.iter().find_map(|name| lookup(name));

        if let Some(v) = first(&["DYNAMODB_ENDPOINT", "AWS_ENDPOINT_URL"]) {
            config.endpoint_url = Some(v);
        }
        if let Some(v) = first(&["AWS_REGION", "AWS_DEFAULT_REGION"]) {
            config.region = AwsRegion::new(v);
        }
        if let Some(v) = lookup("AWS_ACCESS_KEY_ID") {
            config.access_key_id = v;
        }
        if let Some(v) = lookup("AWS_SECRET_ACCESS_KEY") {
            config.secret_access_key = v;
        }
        if let Some(v) = lookup("AWS_SESSION_TOKEN") {
            config.session_token = Some(v);
        }
        if let Some(n) = parse_number(&lookup, "DYNAMODB_RETRY_MIN_ATTEMPTS") {
            config.retry_min_attempts = n;
        }
        if let Some(n) = parse_number(&lookup, "DYNAMODB_RETRY_TOTAL_MS") {
            config.retry_total_ms = n;
        }
        if let Some(n) = parse_number(&lookup, "DYNAMODB_RETRY_DELAY_MS") {
            config.retry_delay_ms = n;
        }
        if let Some(n) = parse_number(&lookup, "DYNAMODB_REQUEST_TIMEOUT_MS") {
            config.request_timeout_ms = Some(n);
        }

        config
    }

    /// The endpoint to send requests to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] unless the URL is absolute
    /// with an `http` or `https` scheme.
    pub fn endpoint(&self) -> ConfigResult<Uri> {
        let raw = self
            .endpoint_url
            .clone()
            .unwrap_or_else(|| self.region.dynamodb_endpoint());
        let uri: Uri = raw
            .parse()
            .with_context(|| format!("parsing endpoint URL `{raw}`"))?;
        match (uri.scheme_str(), uri.authority()) {
            (Some("http" | "https"), Some(_)) => Ok(uri),
            _ => Err(ConfigError::InvalidEndpoint(raw)),
        }
    }

    /// Credentials assembled from the key fields.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        let creds = Credentials::new(&self.access_key_id, &self.secret_access_key);
        match &self.session_token {
            Some(token) => creds.with_session_token(token),
            None => creds,
        }
    }

    /// Elapsed-time retry budget.
    #[must_use]
    pub fn retry_total(&self) -> Duration {
        Duration::from_millis(self.retry_total_ms)
    }

    /// Pause between attempts.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Per-attempt HTTP timeout, if any.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(
                variable = name,
                value = %raw,
                "ignoring non-numeric configuration value"
            );
            None
        }
    }
}
