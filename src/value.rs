//! Loosely-typed column values
//!
//! [`Value`] is the cell type shared by rows, dynamic sources and entity
//! setters. Importers coerce values to a column's semantic type before an
//! entity sees them; the `into_*` accessors then unwrap the expected variant.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MappingError, MappingResult};
use crate::schema::SemanticType;

/// A single column value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Database null
    Null,
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Boolean(bool),
    Character(char),
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Name of the variant, used in coercion errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
            Value::Decimal(_) => "decimal",
            Value::Boolean(_) => "boolean",
            Value::Character(_) => "character",
            Value::Timestamp(_) => "timestamp",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub(crate) fn mismatch(&self, column: &str, expected: SemanticType) -> MappingError {
        MappingError::TypeCoercion {
            column: column.to_string(),
            expected,
            found: self.kind_name().to_string(),
        }
    }

    pub fn into_text(self, column: &str) -> MappingResult<Option<String>> {
        match self {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s)),
            other => Err(other.mismatch(column, SemanticType::Text)),
        }
    }

    pub fn into_integer(self, column: &str) -> MappingResult<Option<i64>> {
        match self {
            Value::Null => Ok(None),
            Value::Integer(n) => Ok(Some(n)),
            other => Err(other.mismatch(column, SemanticType::Integer)),
        }
    }

    pub fn into_decimal(self, column: &str) -> MappingResult<Option<Decimal>> {
        match self {
            Value::Null => Ok(None),
            Value::Decimal(d) => Ok(Some(d)),
            Value::Integer(n) => Ok(Some(Decimal::from(n))),
            other => Err(other.mismatch(column, SemanticType::Decimal)),
        }
    }

    pub fn into_boolean(self, column: &str) -> MappingResult<Option<bool>> {
        match self {
            Value::Null => Ok(None),
            Value::Boolean(b) => Ok(Some(b)),
            other => Err(other.mismatch(column, SemanticType::Boolean)),
        }
    }

    pub fn into_character(self, column: &str) -> MappingResult<Option<char>> {
        match self {
            Value::Null => Ok(None),
            Value::Character(c) => Ok(Some(c)),
            other => Err(other.mismatch(column, SemanticType::Character)),
        }
    }

    pub fn into_timestamp(self, column: &str) -> MappingResult<Option<NaiveDateTime>> {
        match self {
            Value::Null => Ok(None),
            Value::Timestamp(ts) => Ok(Some(ts)),
            other => Err(other.mismatch(column, SemanticType::Timestamp)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Character(c)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(ts: NaiveDateTime) -> Self {
        Value::Timestamp(ts)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Parsed JSON maps onto the closest cell type
///
/// Integral numbers become integers, other numbers decimals. Arrays and
/// objects have no column counterpart and are kept as their JSON text.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Decimal(Decimal::from(u))
                } else {
                    let text = n.to_string();
                    Decimal::from_str(&text)
                        .or_else(|_| Decimal::from_scientific(&text))
                        .map(Value::Decimal)
                        .unwrap_or(Value::Text(text))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            other => Value::Text(other.to_string()),
        }
    }
}
