//! Dynamic object importer
//!
//! Converts a loosely-typed source into a schema-conformant row, then hands
//! it to the row importer so both paths share validation and coercion.

use tracing::trace;

use super::row::{Row, RowImporter};
use super::source::NamedFieldSource;
use crate::config::ImportConfig;
use crate::entity::Entity;
use crate::error::{MappingError, MappingResult};
use crate::schema::ExternalSchema;

/// Populates entities from named-field sources
#[derive(Debug, Clone, Default)]
pub struct DynamicImporter {
    rows: RowImporter,
}

impl DynamicImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ImportConfig) -> Self {
        Self {
            rows: RowImporter::with_config(config),
        }
    }

    pub fn config(&self) -> &ImportConfig {
        self.rows.config()
    }

    /// Build a full row for `schema` from `source`
    ///
    /// Columns the source does not carry get the type default: configured
    /// text, character and boolean substitutes, null for numeric and
    /// timestamp columns.
    pub fn row_from<S: NamedFieldSource + ?Sized>(&self, source: &S, schema: &ExternalSchema) -> Row {
        let defaults = &self.config().defaults;

        schema
            .columns()
            .iter()
            .map(|column| {
                let value = source.try_get(&column.name).unwrap_or_else(|| {
                    trace!(
                        "Source has no member '{}' for '{}', using {} default",
                        column.name, schema.kind, column.semantic_type
                    );
                    defaults.for_type(column.semantic_type)
                });
                (column.name.clone(), value)
            })
            .collect()
    }

    /// Import a new entity from a loosely-typed source
    pub fn import_from<E, S>(&self, source: Option<&S>) -> MappingResult<E>
    where
        E: Entity,
        S: NamedFieldSource + ?Sized,
    {
        let source = source.ok_or_else(|| MappingError::NullInput("source object".to_string()))?;
        let meta = E::metadata()?;
        let row = self.row_from(source, meta.schema());
        self.rows.import(Some(&row))
    }
}
