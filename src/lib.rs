//! Legacy Entity Mapping - import mapping and dual-identity layer
//!
//! Provides the reusable core behind entities that mirror rows of a legacy
//! order-management database:
//! - Column mapping tables (logical field to external column)
//! - Schema generation (column types, widths, nullability, primary keys)
//! - Width/nullability validation for bounded text fields
//! - Native (64-bit) to universal (128-bit) id translation
//! - Row import and dynamic (loosely-typed) object import
//!
//! The layer is synchronous and performs no I/O.

pub mod config;
pub mod entity;
pub mod error;
pub mod identity;
pub mod import;
pub mod mapping;
pub mod schema;
pub mod validation;
pub mod value;

// Re-export commonly used types
pub use config::{DynamicDefaults, ImportConfig};
pub use entity::{
    Country, DefaultProvider, Entity, EntityMetadata, NaturalKey, PayloadDefault, StaticDefault,
    Warehouse,
};
pub use error::{MappingError, MappingResult};
pub use identity::{Identified, to_native, to_universal};
pub use import::{DynamicImporter, NamedFieldSource, Row, RowImporter, SerializedSource};
pub use mapping::{ColumnMapping, ColumnMappingTable};
pub use schema::{ColumnDefinition, ColumnSpec, ExternalSchema, SemanticType, describe};
pub use validation::{check_length, check_required};
pub use value::Value;
