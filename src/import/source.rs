//! Named-field sources for dynamic import
//!
//! The dynamic importer only needs to ask a source for a member by name.
//! Adapters here cover rows, key/value maps, parsed JSON trees and any
//! `serde::Serialize` value.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::Serialize;

use super::row::Row;
use crate::error::{MappingError, MappingResult};
use crate::value::Value;

/// A loosely-typed object with named members
pub trait NamedFieldSource {
    /// Member value, or `None` when the source has no such member
    ///
    /// A member that exists but holds null returns `Some(Value::Null)`.
    fn try_get(&self, name: &str) -> Option<Value>;
}

impl NamedFieldSource for Row {
    fn try_get(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<S: BuildHasher> NamedFieldSource for HashMap<String, Value, S> {
    fn try_get(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl NamedFieldSource for BTreeMap<String, Value> {
    fn try_get(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl NamedFieldSource for serde_json::Map<String, serde_json::Value> {
    fn try_get(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Value::from)
    }
}

/// Only JSON objects have members; other JSON values carry none
impl NamedFieldSource for serde_json::Value {
    fn try_get(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|members| members.try_get(name))
    }
}

/// Member view of any serializable value
///
/// Structs, maps and other values that serialize to an object expose their
/// serialized field names as members.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedSource {
    members: serde_json::Map<String, serde_json::Value>,
}

impl SerializedSource {
    pub fn new<T: Serialize + ?Sized>(value: &T) -> MappingResult<Self> {
        match serde_json::to_value(value)? {
            serde_json::Value::Object(members) => Ok(Self { members }),
            other => Err(MappingError::Config(format!(
                "expected a value with named members, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }
}

impl NamedFieldSource for SerializedSource {
    fn try_get(&self, name: &str) -> Option<Value> {
        self.members.try_get(name)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        country_code: &'static str,
        iso_number: Option<&'static str>,
    }

    #[test]
    fn test_json_object_source() {
        let json = json!({"country_code": "001", "phone_mask": null});
        assert_eq!(json.try_get("country_code"), Some(Value::from("001")));
        assert_eq!(json.try_get("phone_mask"), Some(Value::Null));
        assert_eq!(json.try_get("iso2_code"), None);
    }

    #[test]
    fn test_non_object_json_has_no_members() {
        assert_eq!(json!([1, 2]).try_get("0"), None);
    }

    #[test]
    fn test_map_sources() {
        let mut map: HashMap<String, Value> = HashMap::new();
        map.insert("is_active".to_string(), Value::Boolean(true));
        assert_eq!(map.try_get("is_active"), Some(Value::Boolean(true)));

        let tree: BTreeMap<String, Value> = BTreeMap::new();
        assert_eq!(tree.try_get("is_active"), None);
    }

    #[test]
    fn test_serialized_source() {
        let source = SerializedSource::new(&Payload {
            country_code: "001",
            iso_number: None,
        })
        .unwrap();
        assert_eq!(source.try_get("country_code"), Some(Value::from("001")));
        assert_eq!(source.try_get("iso_number"), Some(Value::Null));
        assert_eq!(source.member_names().count(), 2);
    }

    #[test]
    fn test_serialized_source_requires_members() {
        let err = SerializedSource::new(&42).unwrap_err();
        assert!(matches!(err, MappingError::Config(ref msg) if msg.contains("number")));
    }
}
