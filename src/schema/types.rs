//! Column declarations and external schema types

use serde::{Deserialize, Serialize};

/// Semantic type of an external column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Variable or fixed width text
    Text,
    /// Signed 64-bit integer
    Integer,
    /// Exact decimal (money, rates)
    Decimal,
    /// Boolean flag
    Boolean,
    /// Single character
    Character,
    /// Timestamp without zone, always nullable in the legacy source
    Timestamp,
}

impl SemanticType {
    pub fn type_name(&self) -> &'static str {
        match self {
            SemanticType::Text => "text",
            SemanticType::Integer => "integer",
            SemanticType::Decimal => "decimal",
            SemanticType::Boolean => "boolean",
            SemanticType::Character => "character",
            SemanticType::Timestamp => "timestamp",
        }
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Per-kind declaration of one external column
///
/// Entity kinds declare these as constants next to their column mapping
/// table; [`describe`](super::describe) joins the two into a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: &'static str,
    pub semantic_type: SemanticType,
    pub nullable: bool,
    pub max_length: Option<usize>,
    pub primary_key: bool,
    /// Entity kind referenced by this column's natural key
    pub references: Option<&'static str>,
}

impl ColumnSpec {
    const fn of(column: &'static str, semantic_type: SemanticType) -> Self {
        Self {
            column,
            semantic_type,
            nullable: false,
            max_length: None,
            primary_key: false,
            references: None,
        }
    }

    /// Bounded text column
    pub const fn text(column: &'static str, max_length: usize) -> Self {
        let mut spec = Self::of(column, SemanticType::Text);
        spec.max_length = Some(max_length);
        spec
    }

    pub const fn integer(column: &'static str) -> Self {
        Self::of(column, SemanticType::Integer)
    }

    pub const fn decimal(column: &'static str) -> Self {
        Self::of(column, SemanticType::Decimal)
    }

    pub const fn boolean(column: &'static str) -> Self {
        Self::of(column, SemanticType::Boolean)
    }

    pub const fn character(column: &'static str) -> Self {
        Self::of(column, SemanticType::Character)
    }

    pub const fn timestamp(column: &'static str) -> Self {
        let mut spec = Self::of(column, SemanticType::Timestamp);
        spec.nullable = true;
        spec
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark the column as holding the natural key of another entity kind
    pub const fn references(mut self, kind: &'static str) -> Self {
        self.references = Some(kind);
        self
    }
}

/// Column definition in an entity's external schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// External column name
    pub name: String,
    /// Logical field the column maps to
    pub field: String,
    pub semantic_type: SemanticType,
    pub nullable: bool,
    /// Maximum width in characters, text columns only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
}

impl ColumnDefinition {
    pub fn is_relational(&self) -> bool {
        self.references.is_some()
    }
}

/// Ordered external shape of one entity kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSchema {
    pub kind: String,
    pub columns: Vec<ColumnDefinition>,
}

impl ExternalSchema {
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Primary-key columns in declaration order
    pub fn primary_key(&self) -> Vec<&ColumnDefinition> {
        self.columns.iter().filter(|c| c.primary_key).collect()
    }
}
