//! Building blocks of `BatchGetItem` and `BatchWriteItem`.

use std::collections::HashMap;

use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationError;
use crate::types::{ExpressionAttributeNames, Item, Key};

/// Keys to fetch from one table in a `BatchGetItem`, plus read options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeysAndAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,
    pub keys: Vec<Key>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,
}

impl KeysAndAttributes {
    /// Fetch `keys` with the service's default read options.
    #[must_use]
    pub fn new(keys: Vec<Key>) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }
}

/// Put half of a [`WriteRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRequest {
    pub item: Item,
}

/// Delete half of a [`WriteRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRequest {
    pub key: Key,
}

/// One write inside a `BatchWriteItem`.
///
/// Exactly one of put or delete is present by construction. On the wire this
/// is a single-key object, `{"PutRequest":{..}}` or `{"DeleteRequest":{..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum WriteRequest {
    /// Store an item.
    #[serde(rename = "PutRequest")]
    Put(PutRequest),
    /// Remove an item by key.
    #[serde(rename = "DeleteRequest")]
    Delete(DeleteRequest),
}

impl WriteRequest {
    /// Store `item`.
    #[must_use]
    pub fn put(item: Item) -> Self {
        Self::Put(PutRequest { item })
    }

    /// Remove the item at `key`.
    #[must_use]
    pub fn delete(key: Key) -> Self {
        Self::Delete(DeleteRequest { key })
    }

    /// Combines two optional halves, rejecting both or neither.
    ///
    /// An empty item or key counts as absent.
    pub fn from_parts(
        put: Option<PutRequest>,
        delete: Option<DeleteRequest>,
    ) -> Result<Self, ValidationError> {
        let put = put.filter(|p| !p.item.is_empty());
        let delete = delete.filter(|d| !d.key.is_empty());
        match (put, delete) {
            (Some(put), None) => Ok(Self::Put(put)),
            (None, Some(delete)) => Ok(Self::Delete(delete)),
            (Some(_), Some(_)) => Err(ValidationError::InvalidWriteRequest(
                "both PutRequest and DeleteRequest are set",
            )),
            (None, None) => Err(ValidationError::InvalidWriteRequest(
                "neither PutRequest nor DeleteRequest is set",
            )),
        }
    }

    /// Rejects an empty item or key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Put(p) if p.item.is_empty() => Err(ValidationError::InvalidWriteRequest(
                "PutRequest has an empty Item",
            )),
            Self::Delete(d) if d.key.is_empty() => Err(ValidationError::InvalidWriteRequest(
                "DeleteRequest has an empty Key",
            )),
            _ => Ok(()),
        }
    }
}

impl Serialize for WriteRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.validate().map_err(ser::Error::custom)?;
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Put(put) => map.serialize_entry("PutRequest", put)?,
            Self::Delete(delete) => map.serialize_entry("DeleteRequest", delete)?,
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::attribute_value::AttributeValue;

    fn key(id: &str) -> Key {
        Key::from([("id".to_owned(), AttributeValue::string(id))])
    }

    #[test]
    fn test_should_serialize_put_as_single_key_object() {
        let req = WriteRequest::put(key("1"));
        assert_eq!(
            serde_json::to_value(&req).expect("serialize"),
            json!({"PutRequest": {"Item": {"id": {"S": "1"}}}})
        );
    }

    #[test]
    fn test_should_serialize_delete_as_single_key_object() {
        let req = WriteRequest::delete(key("2"));
        assert_eq!(
            serde_json::to_value(&req).expect("serialize"),
            json!({"DeleteRequest": {"Key": {"id": {"S": "2"}}}})
        );
    }

    #[test]
    fn test_should_reject_both_halves() {
        let err = WriteRequest::from_parts(
            Some(PutRequest { item: key("1") }),
            Some(DeleteRequest { key: key("1") }),
        )
        .expect_err("both set");
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn test_should_reject_neither_half() {
        let err = WriteRequest::from_parts(None, Some(DeleteRequest { key: Key::new() }))
            .expect_err("neither set");
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn test_should_build_from_single_half() {
        let req = WriteRequest::from_parts(None, Some(DeleteRequest { key: key("3") }))
            .expect("one half");
        assert_eq!(req, WriteRequest::delete(key("3")));
    }

    #[test]
    fn test_should_fail_to_serialize_empty_payload() {
        let req = WriteRequest::put(Item::new());
        let err = serde_json::to_string(&req).expect_err("empty item");
        assert!(err.to_string().contains("empty Item"));
    }

    #[test]
    fn test_should_decode_write_request() {
        let req: WriteRequest =
            serde_json::from_value(json!({"DeleteRequest": {"Key": {"id": {"S": "9"}}}}))
                .expect("deserialize");
        assert_eq!(req, WriteRequest::delete(key("9")));
    }

    #[test]
    fn test_should_omit_unset_keys_and_attributes_options() {
        let ka = KeysAndAttributes::new(vec![key("1")]);
        assert_eq!(
            serde_json::to_value(&ka).expect("serialize"),
            json!({"Keys": [{"id": {"S": "1"}}]})
        );
    }
}
