//! Per-kind metadata cache
//!
//! Mapping tables and schemas are pure functions of the entity kind, so
//! each kind's metadata is built once and shared read-only across threads.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::debug;

use super::Entity;
use crate::error::{MappingError, MappingResult};
use crate::mapping::ColumnMappingTable;
use crate::schema::{ColumnDefinition, ColumnSpec, ExternalSchema, describe};

/// Keyed by entity type, so two types sharing a kind name never share metadata
static METADATA: Lazy<RwLock<HashMap<TypeId, Arc<EntityMetadata>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Column mapping table and external schema of one entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMetadata {
    table: ColumnMappingTable,
    schema: ExternalSchema,
}

impl EntityMetadata {
    /// Join a mapping table with its column declarations
    pub fn new(table: ColumnMappingTable, specs: &[ColumnSpec]) -> MappingResult<Self> {
        let schema = describe(&table, specs)?;
        Ok(Self { table, schema })
    }

    pub fn build<E: Entity>() -> MappingResult<Self> {
        Self::new(E::build_mappings()?, E::COLUMNS)
    }

    pub fn kind(&self) -> &str {
        self.table.kind()
    }

    pub fn table(&self) -> &ColumnMappingTable {
        &self.table
    }

    pub fn schema(&self) -> &ExternalSchema {
        &self.schema
    }

    /// Resolve a logical field to its column definition
    pub fn column_for(&self, field: &str) -> MappingResult<&ColumnDefinition> {
        let entry = self.table.lookup(field)?;
        self.schema
            .column(entry.column())
            .ok_or_else(|| MappingError::missing_mapping(self.kind(), field))
    }
}

/// Cached metadata for `E`, building it on first use
///
/// Build failures are returned to the caller and not cached.
pub fn metadata<E: Entity>() -> MappingResult<Arc<EntityMetadata>> {
    {
        let cache = METADATA.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(found) = cache.get(&TypeId::of::<E>()) {
            return Ok(Arc::clone(found));
        }
    }

    let built = Arc::new(EntityMetadata::build::<E>()?);

    let mut cache = METADATA.write().unwrap_or_else(PoisonError::into_inner);
    let entry = cache.entry(TypeId::of::<E>()).or_insert_with(|| {
        debug!("Cached metadata for entity kind '{}'", E::KIND);
        built
    });
    Ok(Arc::clone(entry))
}

/// Whether metadata for any entity type of `kind` has been built
pub fn is_cached(kind: &str) -> bool {
    METADATA
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .values()
        .any(|meta| meta.kind() == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Warehouse;
    use crate::schema::ColumnSpec;
    use crate::value::Value;

    /// Distinct type reusing the warehouse kind name with another layout
    #[derive(Debug, Default)]
    struct Depot;

    impl Entity for Depot {
        const KIND: &'static str = "warehouse";

        const COLUMNS: &'static [ColumnSpec] = &[ColumnSpec::integer("depot_id").primary_key()];

        fn build_mappings() -> MappingResult<ColumnMappingTable> {
            ColumnMappingTable::builder(Self::KIND)
                .map("id", "depot_id")
                .build()
        }

        fn assign(&mut self, field: &str, _value: Value) -> MappingResult<()> {
            Err(MappingError::missing_mapping(Self::KIND, field))
        }
    }

    #[test]
    fn test_metadata_is_shared() {
        let first = metadata::<Warehouse>().unwrap();
        let second = metadata::<Warehouse>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(is_cached("warehouse"));
    }

    #[test]
    fn test_metadata_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| metadata::<Warehouse>().unwrap()))
            .collect();
        let all: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(all.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_same_kind_name_does_not_share_metadata() {
        let warehouse = metadata::<Warehouse>().unwrap();
        let depot = metadata::<Depot>().unwrap();

        assert!(!Arc::ptr_eq(&warehouse, &depot));
        assert_eq!(depot.schema().columns().len(), 1);
        assert_eq!(depot.column_for("id").unwrap().name, "depot_id");
        assert_eq!(warehouse.column_for("id").unwrap().name, "warehouse_id");
    }

    #[test]
    fn test_column_for() {
        let meta = metadata::<Warehouse>().unwrap();
        let column = meta.column_for("code").unwrap();
        assert_eq!(column.name, "warehouse_code");
        assert_eq!(column.max_length, Some(10));
        assert!(meta.column_for("region").is_err());
    }
}
