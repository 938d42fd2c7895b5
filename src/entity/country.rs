//! Country entity

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::{Entity, NaturalKey, Warehouse, stub};
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
    pub const PHONE_MASK: &str = "phone_mask";
    pub const ISO2: &str = "iso2";
    pub const ISO3: &str = "iso3";
    pub const ISO_NUMBER: &str = "iso_number";
    pub const CURRENCY_SYMBOL: &str = "currency_symbol";
    pub const TAX_RATE: &str = "tax_rate";
    pub const ACTIVE: &str = "active";
    pub const UPDATED_AT: &str = "updated_at";
    pub const WAREHOUSE: &str = "warehouse";
}

/// Country record
///
/// The default shipping warehouse is held as a stub carrying only the
/// warehouse code read from the country row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Country {
    id: i64,
    code: String,
    name: String,
    phone_mask: Option<String>,
    iso2: Option<String>,
    iso3: Option<String>,
    iso_number: Option<String>,
    currency_symbol: char,
    tax_rate: Decimal,
    active: bool,
    updated_at: Option<NaiveDateTime>,
    warehouse: Option<Warehouse>,
}

impl Country {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, value: &str) -> MappingResult<()> {
        let meta = Self::metadata()?;
        self.code = check_required(&meta, value, field::CODE, true)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, value: &str) -> MappingResult<()> {
        let meta = Self::metadata()?;
        self.name = check_required(&meta, value, field::NAME, true)?;
        Ok(())
    }

    pub fn phone_mask(&self) -> Option<&str> {
        self.phone_mask.as_deref()
    }

    pub fn set_phone_mask(&mut self, value: Option<&str>) -> MappingResult<()> {
        let meta = Self::metadata()?;
        self.phone_mask = check_length(&meta, value, field::PHONE_MASK, true, true)?;
        Ok(())
    }

    pub fn iso2(&self) -> Option<&str> {
        self.iso2.as_deref()
    }

    pub fn set_iso2(&mut self, value: Option<&str>) -> MappingResult<()> {
        let meta = Self::metadata()?;
        self.iso2 = check_length(&meta, value, field::ISO2, true, true)?;
        Ok(())
    }

    pub fn iso3(&self) -> Option<&str> {
        self.iso3.as_deref()
    }

    pub fn set_iso3(&mut self, value: Option<&str>) -> MappingResult<()> {
        let meta = Self::metadata()?;
        self.iso3 = check_length(&meta, value, field::ISO3, true, true)?;
        Ok(())
    }

    pub fn iso_number(&self) -> Option<&str> {
        self.iso_number.as_deref()
    }

    pub fn set_iso_number(&mut self, value: Option<&str>) -> MappingResult<()> {
        let meta = Self::metadata()?;
        self.iso_number = check_length(&meta, value, field::ISO_NUMBER, true, true)?;
        Ok(())
    }

    pub fn currency_symbol(&self) -> char {
        self.currency_symbol
    }

    pub fn set_currency_symbol(&mut self, symbol: char) {
        self.currency_symbol = symbol;
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn set_tax_rate(&mut self, rate: Decimal) {
        self.tax_rate = rate;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }

    pub fn set_updated_at(&mut self, updated_at: Option<NaiveDateTime>) {
        self.updated_at = updated_at;
    }

    /// Warehouse stub; only its code is populated
    pub fn warehouse(&self) -> Option<&Warehouse> {
        self.warehouse.as_ref()
    }

    /// Replace the warehouse with a stub for `code`
    pub fn set_warehouse_code(&mut self, code: Option<&str>) -> MappingResult<()> {
        let meta = Self::metadata()?;
        let code = check_length(&meta, code, field::WAREHOUSE, true, true)?;
        self.warehouse = stub(code)?;
        Ok(())
    }

    pub fn warehouse_code(&self) -> Option<&str> {
        self.warehouse.as_ref().map(NaturalKey::natural_key)
    }
}

impl Identified for Country {
    fn native_id(&self) -> i64 {
        self.id
    }

    fn set_native_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for Country {
    const KIND: &'static str = "country";

    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::integer("country_id").primary_key(),
        ColumnSpec::text("country_code", 3),
        ColumnSpec::text("country_name", 40),
        ColumnSpec::text("phone_mask", 18).nullable(),
        ColumnSpec::text("iso2_code", 2).nullable(),
        ColumnSpec::text("iso3_code", 3).nullable(),
        ColumnSpec::text("iso_number", 3).nullable(),
        ColumnSpec::character("currency_symbol"),
        ColumnSpec::decimal("tax_rate"),
        ColumnSpec::boolean("is_active"),
        ColumnSpec::timestamp("updated_at"),
        ColumnSpec::text("warehouse_code", 10)
            .nullable()
            .references(Warehouse::KIND),
    ];

    fn build_mappings() -> MappingResult<ColumnMappingTable> {
        ColumnMappingTable::builder(Self::KIND)
            .map(field::ID, "country_id")
            .map(field::CODE, "country_code")
            .map(field::NAME, "country_name")
            .map(field::PHONE_MASK, "phone_mask")
            .map(field::ISO2, "iso2_code")
            .map(field::ISO3, "iso3_code")
            .map(field::ISO_NUMBER, "iso_number")
            .map(field::CURRENCY_SYMBOL, "currency_symbol")
            .map(field::TAX_RATE, "tax_rate")
            .map(field::ACTIVE, "is_active")
            .map(field::UPDATED_AT, "updated_at")
            .map(field::WAREHOUSE, "warehouse_code")
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
            }
            field::CODE => {
                let code = value.into_text(column)?.ok_or_else(required)?;
                self.set_code(&code)?;
            }
            field::NAME => {
                let name = value.into_text(column)?.ok_or_else(required)?;
                self.set_name(&name)?;
            }
            field::PHONE_MASK => self.set_phone_mask(value.into_text(column)?.as_deref())?,
            field::ISO2 => self.set_iso2(value.into_text(column)?.as_deref())?,
            field::ISO3 => self.set_iso3(value.into_text(column)?.as_deref())?,
            field::ISO_NUMBER => self.set_iso_number(value.into_text(column)?.as_deref())?,
            field::CURRENCY_SYMBOL => {
                self.currency_symbol = value
                    .into_character(column)?
                    .ok_or_else(required)?;
            }
            field::TAX_RATE => {
                self.tax_rate = value.into_decimal(column)?.ok_or_else(required)?;
            }
            field::ACTIVE => {
                self.active = value.into_boolean(column)?.ok_or_else(required)?;
            }
            field::UPDATED_AT => self.updated_at = value.into_timestamp(column)?,
            field::WAREHOUSE => self.set_warehouse_code(value.into_text(column)?.as_deref())?,
            other => return Err(MappingError::missing_mapping(Self::KIND, other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::to_universal;
    use crate::schema::SemanticType;

    #[test]
    fn test_bounded_setters() {
        let mut country = Country::default();
        country.set_code("001").unwrap();
        country.set_name("  United States  ").unwrap();
        country.set_phone_mask(Some("(999) 999-9999")).unwrap();

        assert_eq!(country.code(), "001");
        assert_eq!(country.name(), "United States");
        assert_eq!(country.phone_mask(), Some("(999) 999-9999"));

        assert!(matches!(
            country.set_iso2(Some("USA")),
            Err(MappingError::LengthExceeded { max: 2, actual: 3, .. })
        ));
        assert_eq!(country.iso2(), None);
    }

    #[test]
    fn test_name_width_boundary() {
        let mut country = Country::default();
        let forty = "N".repeat(40);
        country.set_name(&forty).unwrap();
        assert_eq!(country.name(), forty);

        let forty_one = "N".repeat(41);
        assert!(matches!(
            country.set_name(&forty_one),
            Err(MappingError::LengthExceeded { max: 40, actual: 41, .. })
        ));
    }

    #[test]
    fn test_warehouse_stub() {
        let mut country = Country::default();
        country.set_warehouse_code(Some("WH01")).unwrap();
        assert_eq!(country.warehouse_code(), Some("WH01"));

        let warehouse = country.warehouse().unwrap();
        assert_eq!(warehouse.native_id(), 0);
        assert_eq!(warehouse.name(), None);

        country.set_warehouse_code(None).unwrap();
        assert!(country.warehouse().is_none());
    }

    #[test]
    fn test_universal_id_surface() {
        let mut country = Country::default();
        country.set_native_id(840);
        assert_eq!(country.universal_id(), to_universal(840));

        let err = country.set_universal_id(uuid::Uuid::from_u128(u128::MAX));
        assert!(err.is_err());
        assert_eq!(country.native_id(), 840);
    }

    #[test]
    fn test_assign_rejects_wrong_type() {
        let mut country = Country::default();
        let err = country.assign(field::ACTIVE, Value::from("yes")).unwrap_err();
        assert_eq!(
            err,
            MappingError::TypeCoercion {
                column: "is_active".to_string(),
                expected: SemanticType::Boolean,
                found: "text".to_string(),
            }
        );
    }
}
