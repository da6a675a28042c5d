//! Legacy attribute-level predicates and update instructions.
//!
//! These three types carry wire rules that plain derives cannot express:
//! [`DeprecatedCondition`] drops `Value` when `Exists` is false, and
//! [`AttributeUpdate`] drops `Value` for a whole-attribute `DELETE`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attribute_value::AttributeValue;
use crate::error::ValidationError;
use crate::types::{AttributeAction, ComparisonOperator};

/// Comparison predicate used by `KeyConditions`, `QueryFilter` and
/// `ScanFilter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Condition {
    /// Operands, as many as the operator takes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_value_list: Vec<AttributeValue>,
    /// The operator.
    pub comparison_operator: ComparisonOperator,
}

impl Condition {
    /// Build a condition from an operator and its operands.
    #[must_use]
    pub fn new(
        comparison_operator: ComparisonOperator,
        attribute_value_list: impl IntoIterator<Item = AttributeValue>,
    ) -> Self {
        Self {
            attribute_value_list: attribute_value_list.into_iter().collect(),
            comparison_operator,
        }
    }

    /// `attribute = value`.
    #[must_use]
    pub fn equals(value: AttributeValue) -> Self {
        Self::new(ComparisonOperator::Eq, [value])
    }

    /// `low <= attribute <= high`.
    #[must_use]
    pub fn between(low: AttributeValue, high: AttributeValue) -> Self {
        Self::new(ComparisonOperator::Between, [low, high])
    }

    /// Prefix match.
    #[must_use]
    pub fn begins_with(prefix: AttributeValue) -> Self {
        Self::new(ComparisonOperator::BeginsWith, [prefix])
    }

    /// Checks the operand count against the operator.
    pub fn validate(&self, attribute: &str) -> Result<(), ValidationError> {
        let arity = self.comparison_operator.arity();
        if arity.accepts(self.attribute_value_list.len()) {
            Ok(())
        } else {
            Err(ValidationError::ConditionArity {
                attribute: attribute.to_owned(),
                operator: self.comparison_operator,
                expected: arity,
                found: self.attribute_value_list.len(),
            })
        }
    }
}

/// Legacy `Expected` entry: an existence or equality guard on one attribute.
///
/// With `exists == false` the wire form is exactly `{"Exists":false}` and any
/// value is dropped. With `exists == true` both `Value` and `Exists` are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedCondition {
    pub value: Option<AttributeValue>,
    pub exists: bool,
}

impl DeprecatedCondition {
    /// Guard that the attribute currently equals `value`.
    #[must_use]
    pub fn value_equals(value: AttributeValue) -> Self {
        Self {
            value: Some(value),
            exists: true,
        }
    }

    /// Guard that the attribute is absent.
    #[must_use]
    pub fn not_exists() -> Self {
        Self {
            value: None,
            exists: false,
        }
    }

    /// An existence guard cannot be checked without a value to compare.
    pub fn validate(&self, attribute: &str) -> Result<(), ValidationError> {
        if self.exists && self.value.is_none() {
            return Err(ValidationError::MissingExpectedValue {
                attribute: attribute.to_owned(),
            });
        }
        Ok(())
    }
}

impl Serialize for DeprecatedCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (&self.value, self.exists) {
            (Some(value), true) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("Value", value)?;
                map.serialize_entry("Exists", &true)?;
                map.end()
            }
            (None, true) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Exists", &true)?;
                map.end()
            }
            (_, false) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Exists", &false)?;
                map.end()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DeprecatedConditionWire {
    value: Option<AttributeValue>,
    exists: Option<bool>,
}

impl<'de> Deserialize<'de> for DeprecatedCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = DeprecatedConditionWire::deserialize(deserializer)?;
        let exists = wire.exists.unwrap_or(wire.value.is_some());
        Ok(Self {
            value: wire.value,
            exists,
        })
    }
}

/// Legacy `AttributeUpdates` entry.
///
/// A `DELETE` whose value is absent or not a set serializes as
/// `{"Action":"DELETE"}` and removes the whole attribute. A `DELETE` with a
/// set value removes just those members.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeUpdate {
    pub action: AttributeAction,
    #[serde(default)]
    pub value: Option<AttributeValue>,
}

impl AttributeUpdate {
    /// Replace the attribute with `value`.
    #[must_use]
    pub fn put(value: AttributeValue) -> Self {
        Self {
            action: AttributeAction::Put,
            value: Some(value),
        }
    }

    /// Add to a number or union into a set.
    #[must_use]
    pub fn add(value: AttributeValue) -> Self {
        Self {
            action: AttributeAction::Add,
            value: Some(value),
        }
    }

    /// Remove the whole attribute.
    #[must_use]
    pub fn delete() -> Self {
        Self {
            action: AttributeAction::Delete,
            value: None,
        }
    }

    /// Remove the listed members from a set attribute.
    #[must_use]
    pub fn delete_members(members: AttributeValue) -> Self {
        Self {
            action: AttributeAction::Delete,
            value: Some(members),
        }
    }

    /// The value actually sent on the wire.
    #[must_use]
    pub fn wire_value(&self) -> Option<&AttributeValue> {
        match (self.action, &self.value) {
            (AttributeAction::Delete, Some(v)) if !v.is_set() => None,
            (_, value) => value.as_ref(),
        }
    }

    /// `PUT` and `ADD` need a value to apply.
    pub fn validate(&self, attribute: &str) -> Result<(), ValidationError> {
        if self.action != AttributeAction::Delete && self.value.is_none() {
            return Err(ValidationError::MissingUpdateValue {
                attribute: attribute.to_owned(),
                action: self.action,
            });
        }
        Ok(())
    }
}

impl Serialize for AttributeUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.wire_value();
        let mut map = serializer.serialize_map(Some(1 + usize::from(value.is_some())))?;
        map.serialize_entry("Action", &self.action)?;
        if let Some(value) = value {
            map.serialize_entry("Value", value)?;
        }
        map.end()
    }
}
