//! Response bodies, one per operation.
//!
//! Each top-level envelope rejects fields it does not know, so a 200 body of
//! the wrong shape fails to decode instead of decoding to an empty value.
//! Nested description structs stay lenient.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::batch::{KeysAndAttributes, WriteRequest};
use crate::input::{ListTablesInput, QueryInput, ScanInput};
use crate::types::{ConsumedCapacity, Item, ItemCollectionMetrics, Key, TableDescription};

// ---------------------------------------------------------------------------
// Table management
// ---------------------------------------------------------------------------

/// Output of `CreateTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateTableOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_description: Option<TableDescription>,
}

/// Output of `DeleteTable`. The table is usually still `DELETING`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DeleteTableOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_description: Option<TableDescription>,
}

/// Output of `DescribeTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DescribeTableOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableDescription>,
}

/// Output of `UpdateTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UpdateTableOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_description: Option<TableDescription>,
}

/// Output of `ListTables`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ListTablesOutput {
    #[serde(default)]
    pub table_names: Vec<String>,
    /// Present when more table names remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_table_name: Option<String>,
}

impl ListTablesOutput {
    /// The request for the next page, or `None` on the last page.
    #[must_use]
    pub fn next_input(&self, previous: &ListTablesInput) -> Option<ListTablesInput> {
        self.last_evaluated_table_name
            .as_ref()
            .map(|name| ListTablesInput {
                exclusive_start_table_name: Some(name.clone()),
                ..previous.clone()
            })
    }
}

// ---------------------------------------------------------------------------
// Single-item operations
// ---------------------------------------------------------------------------

/// Output of `GetItem`.
///
/// `item` is `None` when no item has the requested key. That is a normal
/// outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GetItemOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

impl GetItemOutput {
    /// Takes the item, `None` meaning not found.
    #[must_use]
    pub fn into_item(self) -> Option<Item> {
        self.item
    }
}

/// Output of `PutItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PutItemOutput {
    /// Previous attributes, when `ReturnValues` asked for them.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_collection_metrics: Option<ItemCollectionMetrics>,
}

/// Output of `UpdateItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UpdateItemOutput {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_collection_metrics: Option<ItemCollectionMetrics>,
}

/// Output of `DeleteItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DeleteItemOutput {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_collection_metrics: Option<ItemCollectionMetrics>,
}

// ---------------------------------------------------------------------------
// Query and Scan
// ---------------------------------------------------------------------------

/// One page of `Query` results.
///
/// A non-empty `last_evaluated_key` means more pages exist. The client never
/// pages on its own; use [`QueryOutput::next_input`] to build the follow-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct QueryOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    pub count: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub last_evaluated_key: Key,
    #[serde(default)]
    pub scanned_count: i64,
}

impl QueryOutput {
    /// Returns `true` if the service stopped before the end of the results.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.last_evaluated_key.is_empty()
    }

    /// The request for the next page, or `None` on the last page.
    #[must_use]
    pub fn next_input(&self, previous: &QueryInput) -> Option<QueryInput> {
        self.has_more().then(|| QueryInput {
            exclusive_start_key: self.last_evaluated_key.clone(),
            ..previous.clone()
        })
    }
}

/// One page of `Scan` results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ScanOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    pub count: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub last_evaluated_key: Key,
    #[serde(default)]
    pub scanned_count: i64,
}

impl ScanOutput {
    /// Returns `true` if the service stopped before the end of the segment.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.last_evaluated_key.is_empty()
    }

    /// The request for the next page, or `None` on the last page.
    #[must_use]
    pub fn next_input(&self, previous: &ScanInput) -> Option<ScanInput> {
        self.has_more().then(|| ScanInput {
            exclusive_start_key: self.last_evaluated_key.clone(),
            ..previous.clone()
        })
    }
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

/// Output of `BatchGetItem`.
///
/// Keys the service did not get to come back in `unprocessed_keys`; resubmit
/// them if needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BatchGetItemOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumed_capacity: Vec<ConsumedCapacity>,
    /// Table name to the items read from it.
    #[serde(default)]
    pub responses: HashMap<String, Vec<Item>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub unprocessed_keys: HashMap<String, KeysAndAttributes>,
}

/// Output of `BatchWriteItem`.
///
/// Writes the service did not apply come back in `unprocessed_items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BatchWriteItemOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumed_capacity: Vec<ConsumedCapacity>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub item_collection_metrics: HashMap<String, Vec<ItemCollectionMetrics>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub unprocessed_items: HashMap<String, Vec<WriteRequest>>,
}

impl BatchWriteItemOutput {
    /// Returns `true` if every write was applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unprocessed_items.values().all(Vec::is_empty)
    }
}
