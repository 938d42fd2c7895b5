//! Column mapping entries and tables

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MappingError, MappingResult};

/// Association between a logical field and an external column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    field: String,
    column: String,
}

impl ColumnMapping {
    pub fn new(field: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            column: column.into(),
        }
    }

    /// Logical field name on the entity
    pub fn field(&self) -> &str {
        &self.field
    }

    /// External column name in the legacy source
    pub fn column(&self) -> &str {
        &self.column
    }
}

/// Ordered column mappings for one entity kind
///
/// Field names are unique within a table. Column names are only required to
/// be unique per field, so two tables may both map to `code`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMappingTable {
    kind: String,
    entries: Vec<ColumnMapping>,
    by_field: HashMap<String, usize>,
}

impl ColumnMappingTable {
    /// Build a table from ordered entries, rejecting duplicate field names
    pub fn new(kind: impl Into<String>, entries: Vec<ColumnMapping>) -> MappingResult<Self> {
        let kind = kind.into();
        let mut by_field = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            if by_field.insert(entry.field.clone(), index).is_some() {
                return Err(MappingError::DuplicateField {
                    kind,
                    field: entry.field.clone(),
                });
            }
        }

        Ok(Self {
            kind,
            entries,
            by_field,
        })
    }

    pub fn builder(kind: impl Into<String>) -> ColumnMappingTableBuilder {
        ColumnMappingTableBuilder {
            kind: kind.into(),
            entries: Vec::new(),
        }
    }

    /// Entity kind this table belongs to
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Resolve a logical field to its mapping entry
    pub fn lookup(&self, field: &str) -> MappingResult<&ColumnMapping> {
        self.by_field
            .get(field)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| MappingError::missing_mapping(&self.kind, field))
    }

    /// Reverse lookup by external column name
    pub fn lookup_column(&self, column: &str) -> Option<&ColumnMapping> {
        self.entries.iter().find(|entry| entry.column == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.entries.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.field.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder collecting mappings in declaration order
#[derive(Debug, Clone)]
pub struct ColumnMappingTableBuilder {
    kind: String,
    entries: Vec<ColumnMapping>,
}

impl ColumnMappingTableBuilder {
    /// Map a field to a column
    pub fn map(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.entries.push(ColumnMapping::new(field, column));
        self
    }

    pub fn build(self) -> MappingResult<ColumnMappingTable> {
        ColumnMappingTable::new(self.kind, self.entries)
    }
}
