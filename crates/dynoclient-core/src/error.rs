//! Error types for the dynoclient core.

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The endpoint URL is not an absolute `http` or `https` URL.
    #[error("invalid endpoint URL `{0}`: expected an absolute http or https URL")]
    InvalidEndpoint(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
