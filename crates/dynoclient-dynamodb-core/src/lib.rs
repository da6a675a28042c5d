//! Typed async DynamoDB client.
//!
//! [`DynamoDbClient`] exposes one method per operation of the `2012-08-10`
//! API. Request and response types live in [`model`]; errors and the
//! transport seams live in [`transport`].
#![allow(clippy::doc_markdown, clippy::module_name_repetitions)]

mod client;

pub use client::DynamoDbClient;
pub use dynoclient_core::{ClientConfig, CredentialProvider, Credentials, StaticCredentialProvider};
pub use dynoclient_dynamodb_http::{Error, Result};

/// Request, response and value types.
pub use dynoclient_dynamodb_model as model;

/// Transport, signing and retry building blocks.
pub use dynoclient_dynamodb_http as transport;
