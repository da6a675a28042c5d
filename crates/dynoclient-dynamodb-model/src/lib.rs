//! DynamoDB wire model for dynoclient.
//!
//! Hand-written request, response and value types for the DynamoDB
//! `2012-08-10` JSON protocol, as seen from the client side. Every type here
//! serializes to exactly the body the service expects and decodes exactly the
//! body the service returns.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod attribute_value;
pub mod batch;
pub mod condition;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use attribute_value::AttributeValue;
pub use batch::{DeleteRequest, KeysAndAttributes, PutRequest, WriteRequest};
pub use condition::{AttributeUpdate, Condition, DeprecatedCondition};
pub use error::{ApiErrorBody, ServiceErrorCode, ValidationError};
pub use operations::{Operation, OperationRequest};
pub use types::{Item, Key};
