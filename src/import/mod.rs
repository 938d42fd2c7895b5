//! Import functionality
//!
//! Two entry points populate entities:
//! - [`RowImporter`] for schema-conformant tabular rows
//! - [`DynamicImporter`] for loosely-typed sources (JSON payloads, maps,
//!   serializable structs), which builds a full row and delegates to the
//!   row importer
//!
//! # Example
//!
//! ```rust
//! use legacy_entity_mapping::entity::Warehouse;
//! use legacy_entity_mapping::import::{DynamicImporter, Row, RowImporter};
//! use serde_json::json;
//!
//! let row = Row::new()
//!     .with("warehouse_id", 4i64)
//!     .with("warehouse_code", "WH04")
//!     .with("warehouse_name", "North")
//!     .with("is_active", true);
//! let from_row: Warehouse = RowImporter::new().import(Some(&row)).unwrap();
//!
//! let payload = json!({
//!     "warehouse_id": 4,
//!     "warehouse_code": "WH04",
//!     "warehouse_name": "North",
//!     "is_active": true
//! });
//! let from_payload: Warehouse = DynamicImporter::new().import_from(Some(&payload)).unwrap();
//!
//! assert_eq!(from_row, from_payload);
//! ```

mod coerce;
mod dynamic;
mod row;
mod source;

pub use coerce::coerce;
pub use dynamic::DynamicImporter;
pub use row::{Row, RowImporter};
pub use source::{NamedFieldSource, SerializedSource};
