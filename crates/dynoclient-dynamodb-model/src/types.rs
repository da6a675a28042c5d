//! Shared DynamoDB types used by the request and response models.
//!
//! Structs use `#[serde(rename_all = "PascalCase")]` to match the 2012-08-10
//! JSON protocol. Enum variants use Rust naming and map to the
//! `SCREAMING_SNAKE_CASE` wire strings through `#[serde(rename)]`.
//!
//! Input-side structs (what the client sends) keep required fields as plain
//! values. Description structs (what the service returns) make every field
//! optional, since servers omit whatever does not apply to a table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;

/// A DynamoDB item: attribute name to value.
pub type Item = HashMap<String, AttributeValue>;

/// A primary key: key attribute name to value.
pub type Key = HashMap<String, AttributeValue>;

/// Expression attribute names (`#name` placeholder to attribute name).
pub type ExpressionAttributeNames = HashMap<String, String>;

/// Expression attribute values (`:value` placeholder to attribute value).
pub type ExpressionAttributeValues = HashMap<String, AttributeValue>;

/// Implements `as_str` and `Display` for a unit-variant wire enum.
macro_rules! wire_enum_str {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Returns the wire-format string.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Role of an attribute in a key schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// Partition key.
    #[serde(rename = "HASH")]
    Hash,
    /// Sort key.
    #[serde(rename = "RANGE")]
    Range,
}

wire_enum_str!(KeyType { Hash => "HASH", Range => "RANGE" });

/// Scalar type of a key attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarAttributeType {
    /// String.
    S,
    /// Number.
    N,
    /// Binary.
    B,
}

wire_enum_str!(ScalarAttributeType { S => "S", N => "N", B => "B" });

/// Lifecycle state of a table.
///
/// Transitions happen on the service side; a client only observes them by
/// polling `DescribeTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableStatus {
    /// The table is being created.
    #[serde(rename = "CREATING")]
    Creating,
    /// Throughput or index changes are in progress.
    #[serde(rename = "UPDATING")]
    Updating,
    /// The table is being deleted.
    #[serde(rename = "DELETING")]
    Deleting,
    /// The table is ready for use.
    #[serde(rename = "ACTIVE")]
    Active,
    /// A status this client does not know about.
    #[serde(other, skip_serializing)]
    Unknown,
}

wire_enum_str!(TableStatus {
    Creating => "CREATING",
    Updating => "UPDATING",
    Deleting => "DELETING",
    Active => "ACTIVE",
    Unknown => "UNKNOWN",
});

/// Lifecycle state of a global secondary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexStatus {
    /// The index is being created.
    #[serde(rename = "CREATING")]
    Creating,
    /// The index throughput is being changed.
    #[serde(rename = "UPDATING")]
    Updating,
    /// The index is being deleted.
    #[serde(rename = "DELETING")]
    Deleting,
    /// The index is ready for use.
    #[serde(rename = "ACTIVE")]
    Active,
    /// A status this client does not know about.
    #[serde(other, skip_serializing)]
    Unknown,
}

wire_enum_str!(IndexStatus {
    Creating => "CREATING",
    Updating => "UPDATING",
    Deleting => "DELETING",
    Active => "ACTIVE",
    Unknown => "UNKNOWN",
});

/// Which attributes a secondary index carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionType {
    /// Every attribute.
    #[serde(rename = "ALL")]
    All,
    /// Only the table and index keys.
    #[serde(rename = "KEYS_ONLY")]
    KeysOnly,
    /// Keys plus the listed non-key attributes.
    #[serde(rename = "INCLUDE")]
    Include,
}

wire_enum_str!(ProjectionType {
    All => "ALL",
    KeysOnly => "KEYS_ONLY",
    Include => "INCLUDE",
});

/// What a write returns about the item it touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnValue {
    /// Nothing.
    #[serde(rename = "NONE")]
    None,
    /// The whole item as it was before the write.
    #[serde(rename = "ALL_OLD")]
    AllOld,
    /// Only the updated attributes, as they were before.
    #[serde(rename = "UPDATED_OLD")]
    UpdatedOld,
    /// The whole item as it is after the write.
    #[serde(rename = "ALL_NEW")]
    AllNew,
    /// Only the updated attributes, as they are after.
    #[serde(rename = "UPDATED_NEW")]
    UpdatedNew,
}

wire_enum_str!(ReturnValue {
    None => "NONE",
    AllOld => "ALL_OLD",
    UpdatedOld => "UPDATED_OLD",
    AllNew => "ALL_NEW",
    UpdatedNew => "UPDATED_NEW",
});

/// Level of consumed-capacity detail to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnConsumedCapacity {
    /// Totals plus a per-index breakdown.
    #[serde(rename = "INDEXES")]
    Indexes,
    /// Totals only.
    #[serde(rename = "TOTAL")]
    Total,
    /// No capacity information.
    #[serde(rename = "NONE")]
    None,
}

wire_enum_str!(ReturnConsumedCapacity {
    Indexes => "INDEXES",
    Total => "TOTAL",
    None => "NONE",
});

/// Whether item collection metrics are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnItemCollectionMetrics {
    /// Return size estimates.
    #[serde(rename = "SIZE")]
    Size,
    /// Return nothing.
    #[serde(rename = "NONE")]
    None,
}

wire_enum_str!(ReturnItemCollectionMetrics { Size => "SIZE", None => "NONE" });

/// Attributes returned by `Query` and `Scan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Select {
    /// Every attribute of each matching item.
    #[serde(rename = "ALL_ATTRIBUTES")]
    AllAttributes,
    /// Every attribute projected into the queried index.
    #[serde(rename = "ALL_PROJECTED_ATTRIBUTES")]
    AllProjectedAttributes,
    /// Only the attributes named in `AttributesToGet`.
    #[serde(rename = "SPECIFIC_ATTRIBUTES")]
    SpecificAttributes,
    /// Only the count of matching items.
    #[serde(rename = "COUNT")]
    Count,
}

wire_enum_str!(Select {
    AllAttributes => "ALL_ATTRIBUTES",
    AllProjectedAttributes => "ALL_PROJECTED_ATTRIBUTES",
    SpecificAttributes => "SPECIFIC_ATTRIBUTES",
    Count => "COUNT",
});

/// How several legacy conditions combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionalOperator {
    /// Every condition must hold.
    #[serde(rename = "AND")]
    And,
    /// At least one condition must hold.
    #[serde(rename = "OR")]
    Or,
}

wire_enum_str!(ConditionalOperator { And => "AND", Or => "OR" });

/// Comparison operator of a legacy [`Condition`](crate::condition::Condition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// Equal.
    #[serde(rename = "EQ")]
    Eq,
    /// Not equal.
    #[serde(rename = "NE")]
    Ne,
    /// Less than or equal.
    #[serde(rename = "LE")]
    Le,
    /// Less than.
    #[serde(rename = "LT")]
    Lt,
    /// Greater than or equal.
    #[serde(rename = "GE")]
    Ge,
    /// Greater than.
    #[serde(rename = "GT")]
    Gt,
    /// The attribute exists.
    #[serde(rename = "NOT_NULL")]
    NotNull,
    /// The attribute does not exist.
    #[serde(rename = "NULL")]
    Null,
    /// Substring or set-member match.
    #[serde(rename = "CONTAINS")]
    Contains,
    /// Negated substring or set-member match.
    #[serde(rename = "NOT_CONTAINS")]
    NotContains,
    /// String or binary prefix match.
    #[serde(rename = "BEGINS_WITH")]
    BeginsWith,
    /// Equal to one of the operands.
    #[serde(rename = "IN")]
    In,
    /// Inclusive range between two operands.
    #[serde(rename = "BETWEEN")]
    Between,
}

wire_enum_str!(ComparisonOperator {
    Eq => "EQ",
    Ne => "NE",
    Le => "LE",
    Lt => "LT",
    Ge => "GE",
    Gt => "GT",
    NotNull => "NOT_NULL",
    Null => "NULL",
    Contains => "CONTAINS",
    NotContains => "NOT_CONTAINS",
    BeginsWith => "BEGINS_WITH",
    In => "IN",
    Between => "BETWEEN",
});

/// Number of operands a comparison operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandArity {
    /// Exactly this many operands.
    Exactly(usize),
    /// This many operands or more.
    AtLeast(usize),
}

impl OperandArity {
    /// Returns `true` if `count` operands satisfy this arity.
    #[must_use]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for OperandArity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

impl ComparisonOperator {
    /// Operand count this operator expects in `AttributeValueList`.
    #[must_use]
    pub fn arity(self) -> OperandArity {
        match self {
            Self::Null | Self::NotNull => OperandArity::Exactly(0),
            Self::Between => OperandArity::Exactly(2),
            Self::In => OperandArity::AtLeast(1),
            Self::Eq
            | Self::Ne
            | Self::Le
            | Self::Lt
            | Self::Ge
            | Self::Gt
            | Self::Contains
            | Self::NotContains
            | Self::BeginsWith => OperandArity::Exactly(1),
        }
    }
}

/// Action of a legacy `AttributeUpdates` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeAction {
    /// Replace the attribute value.
    #[serde(rename = "PUT")]
    Put,
    /// Remove the attribute, or remove members from a set.
    #[serde(rename = "DELETE")]
    Delete,
    /// Increment a number, or add members to a set.
    #[serde(rename = "ADD")]
    Add,
}

wire_enum_str!(AttributeAction { Put => "PUT", Delete => "DELETE", Add => "ADD" });

// ---------------------------------------------------------------------------
// Key schema and attribute definitions
// ---------------------------------------------------------------------------

/// One element of a table or index key schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    /// Key attribute name.
    pub attribute_name: String,
    /// `HASH` or `RANGE`.
    pub key_type: KeyType,
}

impl KeySchemaElement {
    /// A partition-key element.
    #[must_use]
    pub fn hash(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            key_type: KeyType::Hash,
        }
    }

    /// A sort-key element.
    #[must_use]
    pub fn range(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            key_type: KeyType::Range,
        }
    }
}

/// Declares the scalar type of an attribute used in a key schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    /// Attribute name.
    pub attribute_name: String,
    /// `S`, `N` or `B`.
    pub attribute_type: ScalarAttributeType,
}

impl AttributeDefinition {
    /// Build a definition.
    #[must_use]
    pub fn new(attribute_name: impl Into<String>, attribute_type: ScalarAttributeType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            attribute_type,
        }
    }
}

// ---------------------------------------------------------------------------
// Throughput
// ---------------------------------------------------------------------------

/// Requested read/write capacity for a table or global index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    /// Strongly consistent reads per second.
    pub read_capacity_units: i64,
    /// Writes per second.
    pub write_capacity_units: i64,
}

impl ProvisionedThroughput {
    /// Build a throughput setting.
    #[must_use]
    pub fn new(read_capacity_units: i64, write_capacity_units: i64) -> Self {
        Self {
            read_capacity_units,
            write_capacity_units,
        }
    }
}

/// Throughput as reported by the service, with change timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughputDescription {
    /// Epoch seconds of the last increase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_increase_date_time: Option<f64>,
    /// Epoch seconds of the last decrease.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_decrease_date_time: Option<f64>,
    /// Decreases performed during the current UTC day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_decreases_today: Option<i64>,
    /// Provisioned read capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_capacity_units: Option<i64>,
    /// Provisioned write capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_capacity_units: Option<i64>,
}

// ---------------------------------------------------------------------------
// Secondary indexes
// ---------------------------------------------------------------------------

/// Attributes copied into a secondary index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Projection {
    /// Projection kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_type: Option<ProjectionType>,
    /// Non-key attributes, only meaningful with `INCLUDE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_key_attributes: Vec<String>,
}

impl Projection {
    /// Project every attribute.
    #[must_use]
    pub fn all() -> Self {
        Self {
            projection_type: Some(ProjectionType::All),
            non_key_attributes: Vec::new(),
        }
    }

    /// Project only the keys.
    #[must_use]
    pub fn keys_only() -> Self {
        Self {
            projection_type: Some(ProjectionType::KeysOnly),
            non_key_attributes: Vec::new(),
        }
    }

    /// Project the keys plus the named attributes.
    #[must_use]
    pub fn include<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            projection_type: Some(ProjectionType::Include),
            non_key_attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Global secondary index requested in `CreateTable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndex {
    /// Index name.
    pub index_name: String,
    /// Index key schema.
    pub key_schema: Vec<KeySchemaElement>,
    /// Projected attributes.
    pub projection: Projection,
    /// Capacity reserved for the index.
    pub provisioned_throughput: ProvisionedThroughput,
}

/// Local secondary index requested in `CreateTable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalSecondaryIndex {
    /// Index name.
    pub index_name: String,
    /// Index key schema; the hash key matches the table's.
    pub key_schema: Vec<KeySchemaElement>,
    /// Projected attributes.
    pub projection: Projection,
}

/// A global secondary index as described by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndexDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_status: Option<IndexStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeySchemaElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughputDescription>,
}

/// A local secondary index as described by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalSecondaryIndexDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeySchemaElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
}

/// One entry of `UpdateTable`'s `GlobalSecondaryIndexUpdates`.
///
/// The wire shape is a single-key object naming the action, for example
/// `{"Update":{"IndexName":"idx","ProvisionedThroughput":{..}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlobalSecondaryIndexUpdate {
    /// Add a new global index.
    Create(CreateGlobalSecondaryIndexAction),
    /// Change the throughput of an existing global index.
    Update(UpdateGlobalSecondaryIndexAction),
    /// Remove a global index.
    Delete(DeleteGlobalSecondaryIndexAction),
}

impl GlobalSecondaryIndexUpdate {
    /// Name of the index the update targets.
    #[must_use]
    pub fn index_name(&self) -> &str {
        match self {
            Self::Create(a) => &a.index_name,
            Self::Update(a) => &a.index_name,
            Self::Delete(a) => &a.index_name,
        }
    }

    /// Shorthand for a throughput change.
    #[must_use]
    pub fn update_throughput(
        index_name: impl Into<String>,
        provisioned_throughput: ProvisionedThroughput,
    ) -> Self {
        Self::Update(UpdateGlobalSecondaryIndexAction {
            index_name: index_name.into(),
            provisioned_throughput,
        })
    }
}

/// Payload of [`GlobalSecondaryIndexUpdate::Create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGlobalSecondaryIndexAction {
    pub index_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    pub projection: Projection,
    pub provisioned_throughput: ProvisionedThroughput,
}

/// Payload of [`GlobalSecondaryIndexUpdate::Update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGlobalSecondaryIndexAction {
    pub index_name: String,
    pub provisioned_throughput: ProvisionedThroughput,
}

/// Payload of [`GlobalSecondaryIndexUpdate::Delete`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGlobalSecondaryIndexAction {
    pub index_name: String,
}

// ---------------------------------------------------------------------------
// Table description
// ---------------------------------------------------------------------------

/// Table metadata returned by `CreateTable`, `DescribeTable`, `UpdateTable`
/// and `DeleteTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDescription {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_definitions: Vec<AttributeDefinition>,
    /// Epoch seconds, e.g. `1405152783.735`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<GlobalSecondaryIndexDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeySchemaElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_secondary_indexes: Vec<LocalSecondaryIndexDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughputDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_status: Option<TableStatus>,
}

impl TableDescription {
    /// Returns `true` once the service reports the table `ACTIVE`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.table_status == Some(TableStatus::Active)
    }

    /// Looks up a global index description by name.
    #[must_use]
    pub fn global_index(&self, name: &str) -> Option<&GlobalSecondaryIndexDescription> {
        self.global_secondary_indexes
            .iter()
            .find(|gsi| gsi.index_name.as_deref() == Some(name))
    }
}

// ---------------------------------------------------------------------------
// Consumed capacity and item collection metrics
// ---------------------------------------------------------------------------

/// Capacity consumed against one table or index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Capacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<f64>,
}

/// Capacity consumed by one operation.
///
/// Present only when the request set `ReturnConsumedCapacity`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsumedCapacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<f64>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub global_secondary_indexes: HashMap<String, Capacity>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub local_secondary_indexes: HashMap<String, Capacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Capacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

/// Size of the item collection a write landed in.
///
/// Only tables with local secondary indexes report this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemCollectionMetrics {
    /// Hash key of the collection.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub item_collection_key: Key,
    /// Lower and upper size bound, in gigabytes.
    #[serde(
        rename = "SizeEstimateRangeGB",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub size_estimate_range_gb: Vec<f64>,
}
