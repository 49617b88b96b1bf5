//! Content-addressed schema identity.
//!
//! A fingerprint is a sha256 over the canonical JSON serialization of a
//! schema. Serialization is deterministic (declaration-ordered struct
//! fields, tagged shapes), so two schemas fingerprint equal iff they are
//! structurally equal; sharing (`Arc` identity) does not participate.
//! Registries use fingerprints to tell an idempotent re-registration
//! apart from a conflicting one.

use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A sha256 fingerprint of a schema value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaFingerprint(pub String);

impl SchemaFingerprint {
    /// Compute the fingerprint of `schema`.
    pub fn of(schema: &Schema) -> Self {
        let bytes = serde_json::to_vec(schema).expect("Schema must serialize");
        let hash = Sha256::digest(&bytes);
        Self(format!("{hash:x}"))
    }
}

impl fmt::Display for SchemaFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Schema {
    /// The content fingerprint of this schema.
    pub fn fingerprint(&self) -> SchemaFingerprint {
        SchemaFingerprint::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::ProductBuilder;

    fn sample() -> Schema {
        ProductBuilder::new("Fruit")
            .field("name", Schema::string())
            .field("amount", Schema::integer())
            .finish()
            .expect("valid product")
    }

    #[test]
    fn structurally_equal_schemas_fingerprint_equal() {
        assert_eq!(sample().fingerprint(), sample().fingerprint());
    }

    #[test]
    fn description_changes_the_fingerprint() {
        let plain = sample();
        let described = sample().with_description("a fruit");
        assert_ne!(plain.fingerprint(), described.fingerprint());
    }

    #[test]
    fn field_order_changes_the_fingerprint() {
        let swapped = ProductBuilder::new("Fruit")
            .field("amount", Schema::integer())
            .field("name", Schema::string())
            .finish()
            .expect("valid product");
        assert_ne!(sample().fingerprint(), swapped.fingerprint());
    }

    #[test]
    fn optional_and_collection_wrappers_are_distinguished() {
        let optional = Schema::optional(Schema::string());
        let collection = Schema::collection(Schema::string());
        assert_ne!(optional.fingerprint(), collection.fingerprint());
    }

    // Names are data, not framing: a name crafted to spell out another
    // schema's structure must not collide with that structure.
    #[test]
    fn crafted_names_cannot_forge_structure() {
        let with_field = ProductBuilder::new("x")
            .field("y", Schema::string())
            .finish()
            .expect("valid product");
        let forged = ProductBuilder::new("x\nfield:y\nprimitive:string")
            .finish()
            .expect("valid product");
        assert_ne!(with_field.fingerprint(), forged.fingerprint());

        let newline_named = ProductBuilder::new("a\nb")
            .finish()
            .expect("valid product");
        let plain_named = ProductBuilder::new("a")
            .field("b", Schema::string())
            .finish()
            .expect("valid product");
        assert_ne!(newline_named.fingerprint(), plain_named.fingerprint());
    }
}
