//! Service error bodies and local validation errors.
//!
//! DynamoDB reports failures as JSON with a `__type` field holding a
//! fully-qualified name such as
//! `com.amazonaws.dynamodb.v20120810#ResourceNotFoundException`. The short
//! code is the text after the last `#`.

use std::fmt;

use serde::Deserialize;

use crate::operations::Operation;
use crate::types::{AttributeAction, ComparisonOperator, OperandArity};

/// Well-known DynamoDB error codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorCode {
    /// Condition or `Expected` guard evaluated to false.
    ConditionalCheckFailedException,
    /// Service-side failure.
    InternalServerError,
    /// Legacy spelling of an internal failure.
    InternalError,
    /// An item collection grew past its size limit.
    ItemCollectionSizeLimitExceededException,
    /// Too many concurrent control-plane operations.
    LimitExceededException,
    /// Read or write capacity exhausted.
    ProvisionedThroughputExceededException,
    /// The table is being created, updated or deleted.
    ResourceInUseException,
    /// The table or index does not exist.
    ResourceNotFoundException,
    /// The request could not be parsed.
    SerializationException,
    /// Too many requests in a short time.
    ThrottlingException,
    /// Credentials were not recognised.
    UnrecognizedClientException,
    /// The request violates a parameter constraint.
    ValidationException,
    /// Signature missing or wrong.
    MissingAuthenticationTokenException,
    /// Signature did not match.
    InvalidSignatureException,
    /// Any other code, kept verbatim.
    Unknown(String),
}

impl ServiceErrorCode {
    /// Classify a short error code.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "ConditionalCheckFailedException" => Self::ConditionalCheckFailedException,
            "InternalServerError" => Self::InternalServerError,
            "InternalError" => Self::InternalError,
            "ItemCollectionSizeLimitExceededException" => {
                Self::ItemCollectionSizeLimitExceededException
            }
            "LimitExceededException" => Self::LimitExceededException,
            "ProvisionedThroughputExceededException" => {
                Self::ProvisionedThroughputExceededException
            }
            "ResourceInUseException" => Self::ResourceInUseException,
            "ResourceNotFoundException" => Self::ResourceNotFoundException,
            "SerializationException" => Self::SerializationException,
            "ThrottlingException" => Self::ThrottlingException,
            "UnrecognizedClientException" => Self::UnrecognizedClientException,
            "ValidationException" => Self::ValidationException,
            "MissingAuthenticationTokenException" => Self::MissingAuthenticationTokenException,
            "InvalidSignatureException" => Self::InvalidSignatureException,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ConditionalCheckFailedException => "ConditionalCheckFailedException",
            Self::InternalServerError => "InternalServerError",
            Self::InternalError => "InternalError",
            Self::ItemCollectionSizeLimitExceededException => {
                "ItemCollectionSizeLimitExceededException"
            }
            Self::LimitExceededException => "LimitExceededException",
            Self::ProvisionedThroughputExceededException => {
                "ProvisionedThroughputExceededException"
            }
            Self::ResourceInUseException => "ResourceInUseException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::SerializationException => "SerializationException",
            Self::ThrottlingException => "ThrottlingException",
            Self::UnrecognizedClientException => "UnrecognizedClientException",
            Self::ValidationException => "ValidationException",
            Self::MissingAuthenticationTokenException => "MissingAuthenticationTokenException",
            Self::InvalidSignatureException => "InvalidSignatureException",
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of a non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Fully-qualified error type.
    #[serde(rename = "__type")]
    pub error_type: String,
    /// Human-readable message. Some endpoints spell the key `Message`.
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The short code: everything after the last `#`, or the whole type
    /// when there is no `#`.
    #[must_use]
    pub fn code(&self) -> &str {
        self.error_type
            .rsplit_once('#')
            .map_or(self.error_type.as_str(), |(_, code)| code)
    }
}

/// A request rejected locally, before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `TableName` is empty.
    #[error("{0}: TableName must not be empty")]
    MissingTableName(Operation),
    /// `Key` is empty.
    #[error("{0}: Key must not be empty")]
    EmptyKey(Operation),
    /// `PutItem` without attributes.
    #[error("PutItem: Item must contain at least one attribute")]
    AtLeastOneAttributeRequired,
    /// `UpdateItem` with neither `AttributeUpdates` nor `UpdateExpression`.
    #[error("UpdateItem: either AttributeUpdates or UpdateExpression is required")]
    NothingToUpdate,
    /// `PUT` or `ADD` without a value.
    #[error("attribute `{attribute}`: {action} requires a value")]
    MissingUpdateValue {
        attribute: String,
        action: AttributeAction,
    },
    /// A malformed batch write entry.
    #[error("invalid write request: {0}")]
    InvalidWriteRequest(&'static str),
    /// `RequestItems` is empty.
    #[error("{0}: RequestItems must not be empty")]
    EmptyRequestItems(Operation),
    /// A legacy condition with the wrong number of operands.
    #[error(
        "attribute `{attribute}`: {operator} takes {expected} operand(s), found {found}"
    )]
    ConditionArity {
        attribute: String,
        operator: ComparisonOperator,
        expected: OperandArity,
        found: usize,
    },
    /// `Expected` entry with `Exists: true` and no `Value`.
    #[error("attribute `{attribute}`: Exists=true requires a Value")]
    MissingExpectedValue { attribute: String },
    /// Only one of `Segment` and `TotalSegments` was given.
    #[error("Scan: Segment and TotalSegments must be set together")]
    IncompleteSegment,
    /// `Segment` is not below `TotalSegments`.
    #[error("Scan: Segment {segment} is out of range for TotalSegments {total}")]
    SegmentOutOfRange { segment: u32, total: u32 },
    /// `CreateTable` without a key schema.
    #[error("CreateTable: KeySchema must not be empty")]
    EmptyKeySchema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_extract_code_after_last_hash() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException","message":"Requested resource not found"}"#,
        )
        .expect("parse error body");
        assert_eq!(body.code(), "ResourceNotFoundException");
        assert_eq!(body.message.as_deref(), Some("Requested resource not found"));
        assert_eq!(
            ServiceErrorCode::from_code(body.code()),
            ServiceErrorCode::ResourceNotFoundException
        );
    }

    #[test]
    fn test_should_accept_capitalized_message_key() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"__type":"com.amazon.coral.validate#ValidationException","Message":"bad"}"#,
        )
        .expect("parse error body");
        assert_eq!(body.code(), "ValidationException");
        assert_eq!(body.message.as_deref(), Some("bad"));
    }

    #[test]
    fn test_should_use_whole_type_without_hash() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"__type":"InternalError"}"#).expect("parse error body");
        assert_eq!(body.code(), "InternalError");
        assert_eq!(body.message, None);
    }

    #[test]
    fn test_should_keep_unknown_codes_verbatim() {
        let code = ServiceErrorCode::from_code("SomethingNewException");
        assert_eq!(code, ServiceErrorCode::Unknown("SomethingNewException".to_owned()));
        assert_eq!(code.to_string(), "SomethingNewException");
    }

    #[test]
    fn test_should_render_validation_messages() {
        assert_eq!(
            ValidationError::MissingTableName(Operation::GetItem).to_string(),
            "GetItem: TableName must not be empty"
        );
        let arity = ValidationError::ConditionArity {
            attribute: "age".to_owned(),
            operator: ComparisonOperator::Between,
            expected: OperandArity::Exactly(2),
            found: 3,
        };
        assert_eq!(
            arity.to_string(),
            "attribute `age`: BETWEEN takes exactly 2 operand(s), found 3"
        );
    }
}
