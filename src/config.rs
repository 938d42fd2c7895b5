//! Configuration for row and dynamic imports

use serde::{Deserialize, Serialize};

use crate::error::MappingResult;
use crate::schema::SemanticType;
use crate::value::Value;

/// Configuration for importers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Accept textual and numeric spellings of other types
    /// (`"42"` for an integer, `1` for a boolean, `"0.5"` for a decimal)
    pub lenient_coercion: bool,
    /// Extra `chrono` formats tried when parsing timestamp text
    pub timestamp_formats: Vec<String>,
    /// Values substituted for members a dynamic source does not carry
    pub defaults: DynamicDefaults,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            lenient_coercion: true,
            timestamp_formats: Vec::new(),
            defaults: DynamicDefaults::default(),
        }
    }
}

impl ImportConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a strict config (values must already carry the column's type)
    pub fn strict() -> Self {
        Self {
            lenient_coercion: false,
            ..Self::default()
        }
    }

    pub fn with_lenient_coercion(mut self, enabled: bool) -> Self {
        self.lenient_coercion = enabled;
        self
    }

    /// Add a timestamp format, e.g. `"%d/%m/%Y %H:%M"`
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_formats.push(format.into());
        self
    }

    pub fn with_defaults(mut self, defaults: DynamicDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> MappingResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> MappingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Type defaults for absent dynamic members
///
/// Numeric and timestamp columns have no configurable default: an absent
/// member always becomes a database null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicDefaults {
    pub text: String,
    pub character: char,
    pub boolean: bool,
}

impl Default for DynamicDefaults {
    fn default() -> Self {
        Self {
            text: String::new(),
            character: ' ',
            boolean: false,
        }
    }
}

impl DynamicDefaults {
    /// Default cell for a column of the given type
    pub fn for_type(&self, semantic_type: SemanticType) -> Value {
        match semantic_type {
            SemanticType::Text => Value::Text(self.text.clone()),
            SemanticType::Character => Value::Character(self.character),
            SemanticType::Boolean => Value::Boolean(self.boolean),
            SemanticType::Integer | SemanticType::Decimal | SemanticType::Timestamp => Value::Null,
        }
    }
}
