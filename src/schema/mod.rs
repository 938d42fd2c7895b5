//! External schema description
//!
//! Each entity kind declares its columns as [`ColumnSpec`] constants. The
//! schema generator joins those declarations with the kind's column mapping
//! table to produce an [`ExternalSchema`]: the ordered column definitions
//! used both for validating field values and as the template for turning a
//! loosely-typed object into a row.

mod generator;
mod types;

pub use generator::describe;
pub use types::{ColumnDefinition, ColumnSpec, ExternalSchema, SemanticType};
