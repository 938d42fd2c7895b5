//! Error types for mapping, validation and identity operations

use thiserror::Error;
use uuid::Uuid;

use crate::schema::SemanticType;

/// Errors that can occur while mapping legacy rows onto entities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    /// A row, source object or required value was absent
    #[error("Null input: {0}")]
    NullInput(String),

    /// No column mapping entry exists for the requested field
    #[error("No column mapping for field '{field}' on entity '{kind}'")]
    MissingMapping { kind: String, field: String },

    /// Text is wider than the column's declared width
    #[error("Column '{column}' exceeds maximum length (max: {max}, got: {actual})")]
    LengthExceeded {
        column: String,
        max: usize,
        actual: usize,
    },

    /// Universal id has non-zero high bytes and has no native counterpart
    #[error("Universal id {0} cannot be narrowed to a native id: high 8 bytes are not zero")]
    Overflow(Uuid),

    /// A value cannot be coerced into the column's semantic type
    #[error("Cannot coerce {found} into {expected} for column '{column}'")]
    TypeCoercion {
        column: String,
        expected: SemanticType,
        found: String,
    },

    /// A schema-conformant row lacks one of the schema's columns
    #[error("Row is missing column '{0}'")]
    MissingColumn(String),

    /// The same field was mapped twice in one table
    #[error("Duplicate field '{field}' in column mapping for entity '{kind}'")]
    DuplicateField { kind: String, field: String },

    /// Column declarations do not describe a usable schema
    #[error("Invalid schema structure: {0}")]
    InvalidSchema(String),

    /// Configuration or payload could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MappingError {
    /// Null input for a named field of an entity kind
    pub fn null_field(kind: &str, field: &str) -> Self {
        MappingError::NullInput(format!("{}.{}", kind, field))
    }

    pub fn missing_mapping(kind: &str, field: &str) -> Self {
        MappingError::MissingMapping {
            kind: kind.to_string(),
            field: field.to_string(),
        }
    }
}

impl From<serde_json::Error> for MappingError {
    fn from(e: serde_json::Error) -> Self {
        MappingError::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for MappingError {
    fn from(e: serde_yaml::Error) -> Self {
        MappingError::Config(e.to_string())
    }
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
