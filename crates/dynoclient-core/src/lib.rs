//! Core types and configuration shared by the dynoclient crates.
//!
//! This crate holds what every layer of the client needs to agree on: where
//! the service lives, which region it is in, which credentials to present,
//! and how patiently to retry.

mod config;
mod credentials;
mod error;
mod types;

pub use config::ClientConfig;
pub use credentials::{CredentialProvider, Credentials, StaticCredentialProvider};
pub use error::{ConfigError, ConfigResult};
pub use types::AwsRegion;
