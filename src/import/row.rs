//! Schema-conformant rows and the row importer

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::coerce::coerce;
use crate::config::ImportConfig;
use crate::entity::{Entity, EntityMetadata};
use crate::error::{MappingError, MappingResult};
use crate::value::Value;

/// A tabular row keyed by external column name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    cells: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, builder style
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.cells.insert(column.into(), value.into())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(column)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Populates entities from schema-conformant rows
#[derive(Debug, Clone, Default)]
pub struct RowImporter {
    config: ImportConfig,
}

impl RowImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import a new entity from `row`
    ///
    /// An absent row fails with `NullInput` before anything is built. Any
    /// later failure discards the partially populated entity.
    pub fn import<E: Entity>(&self, row: Option<&Row>) -> MappingResult<E> {
        let row = row.ok_or_else(|| MappingError::NullInput("row".to_string()))?;
        let meta = E::metadata()?;

        let mut entity = E::default();
        self.populate(row, &meta, &mut entity)?;

        debug!("Imported '{}' entity from {} columns", E::KIND, row.len());
        Ok(entity)
    }

    /// Populate an existing entity from `row`
    ///
    /// Validation is per field: on error, fields assigned before the
    /// failing column keep their new values.
    pub fn import_into<E: Entity>(&self, row: Option<&Row>, entity: &mut E) -> MappingResult<()> {
        let row = row.ok_or_else(|| MappingError::NullInput("row".to_string()))?;
        let meta = E::metadata()?;
        self.populate(row, &meta, entity)
    }

    fn populate<E: Entity>(
        &self,
        row: &Row,
        meta: &EntityMetadata,
        entity: &mut E,
    ) -> MappingResult<()> {
        for entry in meta.table().iter() {
            let column = meta.column_for(entry.field())?;
            let raw = row
                .get(&column.name)
                .ok_or_else(|| MappingError::MissingColumn(column.name.clone()))?;
            let value = coerce(raw.clone(), column, &self.config)?;
            entity.assign(entry.field(), value)?;
        }
        Ok(())
    }
}
