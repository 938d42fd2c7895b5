//! Schema generation from column mapping tables

use tracing::debug;

use super::types::{ColumnDefinition, ColumnSpec, ExternalSchema};
use crate::error::{MappingError, MappingResult};
use crate::mapping::ColumnMappingTable;

/// Derive the external schema of an entity kind
///
/// Emits one column definition per mapping entry, in table order, taking
/// type, nullability and width from the kind's column declarations. A
/// mapping entry without a declaration fails with `MissingMapping`, and a
/// schema without any primary-key column is rejected.
pub fn describe(table: &ColumnMappingTable, specs: &[ColumnSpec]) -> MappingResult<ExternalSchema> {
    let mut columns = Vec::with_capacity(table.len());

    for entry in table.iter() {
        let spec = specs
            .iter()
            .find(|spec| spec.column == entry.column())
            .ok_or_else(|| MappingError::missing_mapping(table.kind(), entry.field()))?;

        columns.push(ColumnDefinition {
            name: entry.column().to_string(),
            field: entry.field().to_string(),
            semantic_type: spec.semantic_type,
            nullable: spec.nullable,
            max_length: spec.max_length,
            primary_key: spec.primary_key,
            references: spec.references.map(str::to_string),
        });
    }

    if !columns.iter().any(|c| c.primary_key) {
        return Err(MappingError::InvalidSchema(format!(
            "entity '{}' declares no primary-key column",
            table.kind()
        )));
    }

    debug!(
        "Described schema for '{}' with {} columns",
        table.kind(),
        columns.len()
    );

    Ok(ExternalSchema {
        kind: table.kind().to_string(),
        columns,
    })
}
