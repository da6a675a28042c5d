//! DynamoDB operation catalog and the request trait binding inputs to it.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// API version prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "DynamoDB_20120810";

/// Operations this client can call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Table management
    /// Create a table.
    CreateTable,
    /// Delete a table.
    DeleteTable,
    /// Describe a table.
    DescribeTable,
    /// Change throughput or global indexes of a table.
    UpdateTable,
    /// List table names.
    ListTables,

    // Items
    /// Create or replace an item.
    PutItem,
    /// Read one item by key.
    GetItem,
    /// Modify attributes of one item.
    UpdateItem,
    /// Remove one item by key.
    DeleteItem,

    // Reads over many items
    /// Read items sharing a hash key.
    Query,
    /// Read every item of a table or index.
    Scan,

    // Batches
    /// Read items from several tables.
    BatchGetItem,
    /// Put or delete items across several tables.
    BatchWriteItem,
}

impl Operation {
    /// Every operation, in catalog order.
    pub const ALL: [Self; 13] = [
        Self::CreateTable,
        Self::DeleteTable,
        Self::DescribeTable,
        Self::UpdateTable,
        Self::ListTables,
        Self::PutItem,
        Self::GetItem,
        Self::UpdateItem,
        Self::DeleteItem,
        Self::Query,
        Self::Scan,
        Self::BatchGetItem,
        Self::BatchWriteItem,
    ];

    /// Returns the operation name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateTable => "CreateTable",
            Self::DeleteTable => "DeleteTable",
            Self::DescribeTable => "DescribeTable",
            Self::UpdateTable => "UpdateTable",
            Self::ListTables => "ListTables",
            Self::PutItem => "PutItem",
            Self::GetItem => "GetItem",
            Self::UpdateItem => "UpdateItem",
            Self::DeleteItem => "DeleteItem",
            Self::Query => "Query",
            Self::Scan => "Scan",
            Self::BatchGetItem => "BatchGetItem",
            Self::BatchWriteItem => "BatchWriteItem",
        }
    }

    /// Parse an operation name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// Value of the `X-Amz-Target` header, e.g. `DynamoDB_20120810.GetItem`.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.as_str())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed request body for one operation.
///
/// Ties an input struct to the operation it calls and the output it decodes
/// into. `validate` runs before anything touches the network.
pub trait OperationRequest: Serialize + Send + Sync {
    /// Response body type.
    type Output: DeserializeOwned + Send;

    /// The operation this input calls.
    const OPERATION: Operation;

    /// Local pre-flight checks.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
