//! Entity kinds and their shared surfaces
//!
//! An entity kind declares its column mapping table, its column specs and
//! how a coerced value is assigned to each logical field. Everything else
//! (schema generation, caching, row and dynamic import, width checks) is
//! driven from those declarations.

mod country;
mod defaults;
pub mod registry;
mod warehouse;

use std::sync::Arc;

pub use country::Country;
pub use defaults::{DefaultProvider, PayloadDefault, StaticDefault};
pub use registry::EntityMetadata;
pub use warehouse::Warehouse;

use crate::error::MappingResult;
use crate::mapping::ColumnMappingTable;
use crate::schema::ColumnSpec;
use crate::value::Value;

/// A legacy record kind that can be populated from external rows
pub trait Entity: Default + Sized + 'static {
    /// Kind name used in error messages and schema output
    const KIND: &'static str;

    /// Column declarations for every mapped column
    const COLUMNS: &'static [ColumnSpec];

    /// Build the kind's column mapping table
    fn build_mappings() -> MappingResult<ColumnMappingTable>;

    /// Assign an already coerced value to a logical field
    fn assign(&mut self, field: &str, value: Value) -> MappingResult<()>;

    /// Cached mapping table and schema for this kind
    fn metadata() -> MappingResult<Arc<EntityMetadata>> {
        registry::metadata::<Self>()
    }
}

/// Entity kinds that can be referenced from other rows by a natural key
pub trait NaturalKey: Entity {
    fn natural_key(&self) -> &str;

    /// Construct a stub carrying only the natural key
    fn from_natural_key(key: &str) -> MappingResult<Self>;
}

/// Capture a relational column as a stub of the related kind
///
/// Null or blank keys yield no stub. The related entity is never resolved
/// beyond its key.
pub fn stub<E: NaturalKey>(key: Option<String>) -> MappingResult<Option<E>> {
    match key.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(key) => E::from_natural_key(key).map(Some),
    }
}
