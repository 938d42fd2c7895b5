//! Injected default instances
//!
//! Callers that need a "default country" (or any other default entity)
//! receive a [`DefaultProvider`] at startup instead of reaching for a
//! process-wide instance, so tests can substitute their own defaults.

use std::marker::PhantomData;

use super::Entity;
use crate::error::{MappingError, MappingResult};
use crate::import::DynamicImporter;

/// Supplies the default instance of an entity kind
pub trait DefaultProvider<E> {
    fn default_instance(&self) -> MappingResult<E>;
}

/// Provider returning clones of a fixed instance
#[derive(Debug, Clone)]
pub struct StaticDefault<E> {
    instance: E,
}

impl<E> StaticDefault<E> {
    pub fn new(instance: E) -> Self {
        Self { instance }
    }
}

impl<E: Clone> DefaultProvider<E> for StaticDefault<E> {
    fn default_instance(&self) -> MappingResult<E> {
        Ok(self.instance.clone())
    }
}

/// Provider building the default from a configured JSON payload
///
/// The payload goes through the dynamic importer, so it is validated like
/// any other loosely-typed source and may omit members that have type
/// defaults.
#[derive(Debug, Clone)]
pub struct PayloadDefault<E> {
    payload: serde_json::Map<String, serde_json::Value>,
    importer: DynamicImporter,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> PayloadDefault<E> {
    pub fn new(payload: serde_json::Value) -> MappingResult<Self> {
        match payload {
            serde_json::Value::Object(payload) => Ok(Self {
                payload,
                importer: DynamicImporter::new(),
                _entity: PhantomData,
            }),
            _ => Err(MappingError::Config(format!(
                "default '{}' payload must be a JSON object",
                E::KIND
            ))),
        }
    }

    pub fn from_json_str(json: &str) -> MappingResult<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn with_importer(mut self, importer: DynamicImporter) -> Self {
        self.importer = importer;
        self
    }

    /// Build the instance once up front, surfacing payload errors early
    pub fn validated(self) -> MappingResult<Self> {
        self.default_instance()?;
        Ok(self)
    }
}

impl<E: Entity> DefaultProvider<E> for PayloadDefault<E> {
    fn default_instance(&self) -> MappingResult<E> {
        self.importer.import_from(Some(&self.payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Warehouse;
    use crate::identity::Identified;
    use serde_json::json;

    #[test]
    fn test_static_default() {
        let mut warehouse = Warehouse::default();
        warehouse.set_code("MAIN").unwrap();
        let provider = StaticDefault::new(warehouse.clone());
        assert_eq!(provider.default_instance().unwrap(), warehouse);
    }

    #[test]
    fn test_payload_default() {
        let provider = PayloadDefault::<Warehouse>::from_json_str(
            r#"{"warehouse_id": 1, "warehouse_code": "MAIN", "is_active": true}"#,
        )
        .unwrap();
        let warehouse = provider.default_instance().unwrap();
        assert_eq!(warehouse.native_id(), 1);
        assert_eq!(warehouse.code(), "MAIN");
    }

    #[test]
    fn test_payload_must_be_object() {
        let result = PayloadDefault::<Warehouse>::new(json!("MAIN"));
        assert!(matches!(result, Err(MappingError::Config(_))));
    }

    #[test]
    fn test_absent_code_takes_empty_default() {
        let provider = PayloadDefault::<Warehouse>::new(json!({"warehouse_id": 1}))
            .unwrap()
            .validated()
            .unwrap();
        let warehouse = provider.default_instance().unwrap();
        assert_eq!(warehouse.native_id(), 1);
        assert_eq!(warehouse.code(), "");
    }

    #[test]
    fn test_validated_surfaces_bad_payload() {
        let provider = PayloadDefault::<Warehouse>::new(
            json!({"warehouse_id": 1, "warehouse_code": "WAREHOUSE-0001"}),
        )
        .unwrap();
        assert!(matches!(
            provider.validated(),
            Err(MappingError::LengthExceeded { max: 10, .. })
        ));
    }
}
