//! Request bodies, one per operation.
//!
//! Every optional parameter is an `Option` or a collection that is left out of
//! the JSON body when unset, so the service applies its own default. An
//! explicit `Some(false)` is sent as `false`. Required parameters always
//! serialize.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::batch::{KeysAndAttributes, WriteRequest};
use crate::condition::{AttributeUpdate, Condition, DeprecatedCondition};
use crate::error::ValidationError;
use crate::operations::{Operation, OperationRequest};
use crate::output::{
    BatchGetItemOutput, BatchWriteItemOutput, CreateTableOutput, DeleteItemOutput,
    DeleteTableOutput, DescribeTableOutput, GetItemOutput, ListTablesOutput, PutItemOutput,
    QueryOutput, ScanOutput, UpdateItemOutput, UpdateTableOutput,
};
use crate::types::{
    AttributeDefinition, ConditionalOperator, ExpressionAttributeNames,
    ExpressionAttributeValues, GlobalSecondaryIndex, GlobalSecondaryIndexUpdate, Item, Key,
    KeySchemaElement, LocalSecondaryIndex, ProvisionedThroughput, ReturnConsumedCapacity,
    ReturnItemCollectionMetrics, ReturnValue, Select,
};

fn require_table_name(op: Operation, table_name: &str) -> Result<(), ValidationError> {
    if table_name.is_empty() {
        return Err(ValidationError::MissingTableName(op));
    }
    Ok(())
}

fn require_key(op: Operation, key: &Key) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey(op));
    }
    Ok(())
}

fn validate_conditions(conditions: &HashMap<String, Condition>) -> Result<(), ValidationError> {
    conditions
        .iter()
        .try_for_each(|(attribute, condition)| condition.validate(attribute))
}

fn validate_expected(
    expected: &HashMap<String, DeprecatedCondition>,
) -> Result<(), ValidationError> {
    expected
        .iter()
        .try_for_each(|(attribute, condition)| condition.validate(attribute))
}

// ---------------------------------------------------------------------------
// Table management
// ---------------------------------------------------------------------------

/// Input for `CreateTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableInput {
    pub attribute_definitions: Vec<AttributeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<GlobalSecondaryIndex>,
    pub key_schema: Vec<KeySchemaElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_secondary_indexes: Vec<LocalSecondaryIndex>,
    pub provisioned_throughput: ProvisionedThroughput,
    pub table_name: String,
}

impl CreateTableInput {
    /// A table with the given key schema and capacity, no secondary indexes.
    #[must_use]
    pub fn new(
        table_name: impl Into<String>,
        attribute_definitions: Vec<AttributeDefinition>,
        key_schema: Vec<KeySchemaElement>,
        provisioned_throughput: ProvisionedThroughput,
    ) -> Self {
        Self {
            attribute_definitions,
            key_schema,
            provisioned_throughput,
            table_name: table_name.into(),
            ..Self::default()
        }
    }
}

impl OperationRequest for CreateTableInput {
    type Output = CreateTableOutput;
    const OPERATION: Operation = Operation::CreateTable;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)?;
        if self.key_schema.is_empty() {
            return Err(ValidationError::EmptyKeySchema);
        }
        Ok(())
    }
}

/// Input for `DeleteTable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTableInput {
    pub table_name: String,
}

impl DeleteTableInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

impl OperationRequest for DeleteTableInput {
    type Output = DeleteTableOutput;
    const OPERATION: Operation = Operation::DeleteTable;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)
    }
}

/// Input for `DescribeTable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTableInput {
    pub table_name: String,
}

impl DescribeTableInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

impl OperationRequest for DescribeTableInput {
    type Output = DescribeTableOutput;
    const OPERATION: Operation = Operation::DescribeTable;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)
    }
}

/// Input for `UpdateTable`: change throughput, global indexes, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTableInput {
    /// Needed only when a new global index introduces key attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_definitions: Vec<AttributeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_index_updates: Vec<GlobalSecondaryIndexUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    pub table_name: String,
}

impl UpdateTableInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }
}

impl OperationRequest for UpdateTableInput {
    type Output = UpdateTableOutput;
    const OPERATION: Operation = Operation::UpdateTable;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)
    }
}

/// Input for `ListTables`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTablesInput {
    /// Resume after this table name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl OperationRequest for ListTablesInput {
    type Output = ListTablesOutput;
    const OPERATION: Operation = Operation::ListTables;
}

// ---------------------------------------------------------------------------
// Single-item operations
// ---------------------------------------------------------------------------

/// Input for `GetItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemInput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,
    pub key: Key,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    pub table_name: String,
}

impl GetItemInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>, key: Key) -> Self {
        Self {
            key,
            table_name: table_name.into(),
            ..Self::default()
        }
    }
}

impl OperationRequest for GetItemInput {
    type Output = GetItemOutput;
    const OPERATION: Operation = Operation::GetItem;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)?;
        require_key(Self::OPERATION, &self.key)
    }
}

/// Input for `PutItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expected: HashMap<String, DeprecatedCondition>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,
    pub table_name: String,
}

impl PutItemInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>, item: Item) -> Self {
        Self {
            item,
            table_name: table_name.into(),
            ..Self::default()
        }
    }
}

impl OperationRequest for PutItemInput {
    type Output = PutItemOutput;
    const OPERATION: Operation = Operation::PutItem;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)?;
        if self.item.is_empty() {
            return Err(ValidationError::AtLeastOneAttributeRequired);
        }
        validate_expected(&self.expected)
    }
}

/// Input for `UpdateItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateItemInput {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attribute_updates: HashMap<String, AttributeUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expected: HashMap<String, DeprecatedCondition>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,
    pub key: Key,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,
    pub table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_expression: Option<String>,
}

impl UpdateItemInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>, key: Key) -> Self {
        Self {
            key,
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// Adds one legacy attribute update.
    #[must_use]
    pub fn with_update(mut self, attribute: impl Into<String>, update: AttributeUpdate) -> Self {
        self.attribute_updates.insert(attribute.into(), update);
        self
    }
}

impl OperationRequest for UpdateItemInput {
    type Output = UpdateItemOutput;
    const OPERATION: Operation = Operation::UpdateItem;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)?;
        require_key(Self::OPERATION, &self.key)?;
        if self.attribute_updates.is_empty() && self.update_expression.is_none() {
            return Err(ValidationError::NothingToUpdate);
        }
        self.attribute_updates
            .iter()
            .try_for_each(|(attribute, update)| update.validate(attribute))?;
        validate_expected(&self.expected)
    }
}

/// Input for `DeleteItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteItemInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expected: HashMap<String, DeprecatedCondition>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,
    pub key: Key,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,
    pub table_name: String,
}

impl DeleteItemInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>, key: Key) -> Self {
        Self {
            key,
            table_name: table_name.into(),
            ..Self::default()
        }
    }
}

impl OperationRequest for DeleteItemInput {
    type Output = DeleteItemOutput;
    const OPERATION: Operation = Operation::DeleteItem;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)?;
        require_key(Self::OPERATION, &self.key)?;
        validate_expected(&self.expected)
    }
}

// ---------------------------------------------------------------------------
// Query and Scan
// ---------------------------------------------------------------------------

/// Input for `Query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryInput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
    /// Continuation key from the previous page.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub exclusive_start_key: Key,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_condition_expression: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub key_conditions: HashMap<String, Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub query_filter: HashMap<String, Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_index_forward: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    pub table_name: String,
}

impl QueryInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// Adds one legacy key condition.
    #[must_use]
    pub fn with_key_condition(
        mut self,
        attribute: impl Into<String>,
        condition: Condition,
    ) -> Self {
        self.key_conditions.insert(attribute.into(), condition);
        self
    }
}

impl OperationRequest for QueryInput {
    type Output = QueryOutput;
    const OPERATION: Operation = Operation::Query;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)?;
        validate_conditions(&self.key_conditions)?;
        validate_conditions(&self.query_filter)
    }
}

/// Input for `Scan`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanInput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    /// Continuation key from the previous page.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub exclusive_start_key: Key,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub scan_filter: HashMap<String, Condition>,
    /// Slice of a parallel scan, in `0..total_segments`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    pub table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_segments: Option<u32>,
}

impl ScanInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// Splits this scan into `total` parallel segments.
    ///
    /// Each returned input is a copy of `self` with `Segment` and
    /// `TotalSegments` set. The caller issues them independently and merges
    /// the results; nothing orders items across segments.
    #[must_use]
    pub fn segments(&self, total: u32) -> Vec<Self> {
        (0..total)
            .map(|segment| Self {
                segment: Some(segment),
                total_segments: Some(total),
                ..self.clone()
            })
            .collect()
    }
}

impl OperationRequest for ScanInput {
    type Output = ScanOutput;
    const OPERATION: Operation = Operation::Scan;

    fn validate(&self) -> Result<(), ValidationError> {
        require_table_name(Self::OPERATION, &self.table_name)?;
        match (self.segment, self.total_segments) {
            (None, None) => {}
            (Some(segment), Some(total)) => {
                if segment >= total {
                    return Err(ValidationError::SegmentOutOfRange { segment, total });
                }
            }
            _ => return Err(ValidationError::IncompleteSegment),
        }
        validate_conditions(&self.scan_filter)
    }
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

/// Input for `BatchGetItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetItemInput {
    /// Table name to the keys read from it.
    pub request_items: HashMap<String, KeysAndAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl BatchGetItemInput {
    #[must_use]
    pub fn new(request_items: HashMap<String, KeysAndAttributes>) -> Self {
        Self {
            request_items,
            return_consumed_capacity: None,
        }
    }
}

impl OperationRequest for BatchGetItemInput {
    type Output = BatchGetItemOutput;
    const OPERATION: Operation = Operation::BatchGetItem;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.request_items.is_empty() {
            return Err(ValidationError::EmptyRequestItems(Self::OPERATION));
        }
        self.request_items.iter().try_for_each(|(table, ka)| {
            require_table_name(Self::OPERATION, table)?;
            ka.keys
                .iter()
                .try_for_each(|key| require_key(Self::OPERATION, key))
        })
    }
}

/// Input for `BatchWriteItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchWriteItemInput {
    /// Table name to the writes applied to it.
    pub request_items: HashMap<String, Vec<WriteRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl BatchWriteItemInput {
    #[must_use]
    pub fn new(request_items: HashMap<String, Vec<WriteRequest>>) -> Self {
        Self {
            request_items,
            ..Self::default()
        }
    }
}

impl OperationRequest for BatchWriteItemInput {
    type Output = BatchWriteItemOutput;
    const OPERATION: Operation = Operation::BatchWriteItem;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.request_items.is_empty() {
            return Err(ValidationError::EmptyRequestItems(Self::OPERATION));
        }
        self.request_items.iter().try_for_each(|(table, writes)| {
            require_table_name(Self::OPERATION, table)?;
            writes.iter().try_for_each(WriteRequest::validate)
        })
    }
}
