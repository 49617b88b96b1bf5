//! Name-keyed schema registry.

use crate::error::RegistryError;
use std::collections::BTreeMap;
use wireform_schema::Schema;

/// An explicit mapping from type name to schema.
///
/// Built once at startup and passed to whatever derives documents or
/// endpoints. Registration is fail-fast: binding a name to a
/// structurally different schema is a configuration defect, while
/// re-registering the identical schema (same fingerprint) is accepted so
/// that independent modules may both declare a shared type.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: BTreeMap<String, Schema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `schema`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        schema: Schema,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if let Some(existing) = self.entries.get(&name) {
            let existing_fp = existing.fingerprint();
            let offered_fp = schema.fingerprint();
            if existing_fp != offered_fp {
                return Err(RegistryError::SchemaConflict {
                    name,
                    existing: existing_fp.to_string(),
                    offered: offered_fp.to_string(),
                });
            }
            return Ok(());
        }
        self.entries.insert(name, schema);
        Ok(())
    }

    /// The schema bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.entries.get(name)
    }

    /// The schema bound to `name`, or a missing-schema error.
    pub fn require(&self, name: &str) -> Result<&Schema, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::MissingSchema {
            name: name.to_string(),
        })
    }

    /// Registered names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wireform_schema::ProductBuilder;

    fn fruit() -> Schema {
        ProductBuilder::new("Fruit")
            .field("name", Schema::string())
            .finish()
            .expect("valid product")
    }

    #[test]
    fn register_and_require() {
        let mut registry = SchemaRegistry::new();
        registry.register("Fruit", fruit()).expect("first binding");
        assert_eq!(registry.require("Fruit").ok(), Some(&fruit()));
        assert_eq!(
            registry.require("Vegetable"),
            Err(RegistryError::MissingSchema {
                name: "Vegetable".to_string(),
            })
        );
    }

    #[test]
    fn identical_re_registration_is_idempotent() {
        let mut registry = SchemaRegistry::new();
        registry.register("Fruit", fruit()).expect("first binding");
        registry.register("Fruit", fruit()).expect("same shape again");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn conflicting_re_registration_fails_fast() {
        let mut registry = SchemaRegistry::new();
        registry.register("Fruit", fruit()).expect("first binding");
        let conflicting = fruit().with_description("not the same");
        assert!(matches!(
            registry.register("Fruit", conflicting),
            Err(RegistryError::SchemaConflict { .. })
        ));
    }

    #[test]
    fn conflict_detection_is_not_fooled_by_crafted_names() {
        let mut registry = SchemaRegistry::new();
        let with_field = ProductBuilder::new("x")
            .field("y", Schema::string())
            .finish()
            .expect("valid product");
        registry.register("Forged", with_field).expect("first binding");

        let forged = ProductBuilder::new("x\nfield:y\nprimitive:string")
            .finish()
            .expect("valid product");
        assert!(matches!(
            registry.register("Forged", forged),
            Err(RegistryError::SchemaConflict { .. })
        ));
    }

    #[test]
    fn names_are_ordered() {
        let mut registry = SchemaRegistry::new();
        registry.register("b", Schema::string()).expect("binds");
        registry.register("a", Schema::integer()).expect("binds");
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["a", "b"]);
    }
}
