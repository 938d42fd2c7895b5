//! Warehouse entity

use super::{Entity, NaturalKey};
use crate::error::{MappingError, MappingResult};
use crate::identity::Identified;
use crate::mapping::ColumnMappingTable;
use crate::schema::ColumnSpec;
use crate::validation::{check_length, check_required};
use crate::value::Value;

/// Logical field names
pub mod field {
    pub const ID: &str = "id";
    pub const CODE: &str = "code";
    pub const NAME: &str = "name";
    pub const ACTIVE: &str = "active";
}

/// Stock location, referenced from other rows by its code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Warehouse {
    id: i64,
    code: String,
    name: Option<String>,
    active: bool,
}

impl Warehouse {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, value: &str) -> MappingResult<()> {
        let meta = Self::metadata()?;
        self.code = check_required(&meta, value, field::CODE, true)?;
        Ok(())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<&str>) -> MappingResult<()> {
        let meta = Self::metadata()?;
        self.name = check_length(&meta, value, field::NAME, true, true)?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Identified for Warehouse {
    fn native_id(&self) -> i64 {
        self.id
    }

    fn set_native_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for Warehouse {
    const KIND: &'static str = "warehouse";

    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::integer("warehouse_id").primary_key(),
        ColumnSpec::text("warehouse_code", 10),
        ColumnSpec::text("warehouse_name", 40).nullable(),
        ColumnSpec::boolean("is_active"),
    ];

    fn build_mappings() -> MappingResult<ColumnMappingTable> {
        ColumnMappingTable::builder(Self::KIND)
            .map(field::ID, "warehouse_id")
            .map(field::CODE, "warehouse_code")
            .map(field::NAME, "warehouse_name")
            .map(field::ACTIVE, "is_active")
            .build()
    }

    fn assign(&mut self, target: &str, value: Value) -> MappingResult<()> {
        let meta = Self::metadata()?;
        let column = meta.column_for(target)?.name.as_str();
        let required = || MappingError::null_field(Self::KIND, target);

        match target {
            field::ID => {
                let id = value.into_integer(column)?.ok_or_else(required)?;
                self.set_native_id(id);
                Ok(())
            }
            field::CODE => {
                let code = value.into_text(column)?.ok_or_else(required)?;
                self.set_code(&code)
            }
            field::NAME => {
                let name = value.into_text(column)?;
                self.set_name(name.as_deref())
            }
            field::ACTIVE => {
                self.active = value.into_boolean(column)?.ok_or_else(required)?;
                Ok(())
            }
            other => Err(MappingError::missing_mapping(Self::KIND, other)),
        }
    }
}

impl NaturalKey for Warehouse {
    fn natural_key(&self) -> &str {
        &self.code
    }

    fn from_natural_key(key: &str) -> MappingResult<Self> {
        let mut warehouse = Self::default();
        warehouse.set_code(key)?;
        Ok(warehouse)
    }
}
