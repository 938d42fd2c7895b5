//! Column mapping tables
//!
//! A column mapping table is the ordered association between an entity's
//! logical field names and the external column names of the legacy source.
//! Every other component resolves a field to its column through
//! [`ColumnMappingTable::lookup`].
//!
//! # Example
//!
//! ```rust
//! use legacy_entity_mapping::mapping::ColumnMappingTable;
//!
//! let table = ColumnMappingTable::builder("country")
//!     .map("id", "country_id")
//!     .map("code", "country_code")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.lookup("code").unwrap().column(), "country_code");
//! assert!(table.lookup("missing").is_err());
//! ```

mod table;

pub use table::{ColumnMapping, ColumnMappingTable, ColumnMappingTableBuilder};
