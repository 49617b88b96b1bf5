//! Schema derivation for products and coproducts.
//!
//! Derivation is a one-time, setup-time composition: given per-field (or
//! per-variant) schemas it builds the aggregate schema, checking the
//! structural invariants as it goes. Every defect (duplicate field name,
//! duplicate discriminant, empty coproduct) is reported from `finish()`
//! as a [`SchemaError`], before any external input exists.

use crate::error::SchemaError;
use crate::naming::FieldNaming;
use crate::schema::{CoproductShape, ProductShape, Schema, SchemaField, SchemaVariant, Shape};
use std::collections::BTreeSet;
use std::sync::Arc;

const ANONYMOUS: &str = "<anonymous>";

/// Builds a product schema from named field schemas.
///
/// Field order is preserved. The naming policy is applied uniformly to
/// every field name at `finish()`; uniqueness is checked on the derived
/// names, so a policy that collapses two source names is itself a defect.
#[derive(Debug, Clone, Default)]
pub struct ProductBuilder {
    name: Option<String>,
    naming: FieldNaming,
    fields: Vec<(String, Schema)>,
}

impl ProductBuilder {
    /// Start a product derivation for the named type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            naming: FieldNaming::Identity,
            fields: Vec::new(),
        }
    }

    /// Start a product derivation with no type name.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set the field naming policy for this derivation.
    pub fn naming(mut self, naming: FieldNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Append a field with its schema.
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.push((name.into(), schema));
        self
    }

    /// Derive the product schema, checking field-name uniqueness.
    pub fn finish(self) -> Result<Schema, SchemaError> {
        let product_name = self.name.clone().unwrap_or_else(|| ANONYMOUS.to_string());
        let mut seen = BTreeSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());
        for (source_name, schema) in self.fields {
            let name = self.naming.apply(&source_name);
            if !seen.insert(name.clone()) {
                return Err(SchemaError::DuplicateField {
                    product: product_name,
                    name,
                });
            }
            fields.push(SchemaField {
                name,
                schema: Arc::new(schema),
            });
        }
        Ok(Schema {
            description: None,
            shape: Shape::Product(ProductShape {
                name: self.name,
                fields,
            }),
        })
    }
}

/// Builds a coproduct schema from discriminated variant schemas.
#[derive(Debug, Clone, Default)]
pub struct CoproductBuilder {
    name: Option<String>,
    discriminator_field: Option<String>,
    variants: Vec<SchemaVariant>,
}

impl CoproductBuilder {
    /// Start a coproduct derivation for the named type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            discriminator_field: None,
            variants: Vec::new(),
        }
    }

    /// Use a structural representation: the discriminant travels in the
    /// named field of the encoded object.
    pub fn discriminator_field(mut self, field: impl Into<String>) -> Self {
        self.discriminator_field = Some(field.into());
        self
    }

    /// Append a variant under its discriminant value.
    pub fn variant(
        mut self,
        discriminant: impl Into<String>,
        name: impl Into<String>,
        schema: Schema,
    ) -> Self {
        self.variants.push(SchemaVariant {
            discriminant: discriminant.into(),
            name: name.into(),
            schema: Arc::new(schema),
        });
        self
    }

    /// Derive the coproduct schema, checking discriminant uniqueness and
    /// that at least one variant exists.
    pub fn finish(self) -> Result<Schema, SchemaError> {
        let coproduct_name = self.name.clone().unwrap_or_else(|| ANONYMOUS.to_string());
        if self.variants.is_empty() {
            return Err(SchemaError::EmptyCoproduct {
                coproduct: coproduct_name,
            });
        }
        let mut seen = BTreeSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.discriminant.clone()) {
                return Err(SchemaError::DuplicateDiscriminant {
                    coproduct: coproduct_name,
                    discriminant: variant.discriminant.clone(),
                });
            }
        }
        Ok(Schema {
            description: None,
            shape: Shape::Coproduct(CoproductShape {
                name: self.name,
                discriminator_field: self.discriminator_field,
                variants: self.variants,
            }),
        })
    }
}

/// A typed discriminator function for a coproduct type `T`.
///
/// The function must be total over `T` — in Rust that means an exhaustive
/// `match` over the enum, which the compiler checks. What it cannot check
/// is agreement with the derived schema: [`Discriminator::resolve`] closes
/// that gap by treating a discriminant absent from the variant mapping as
/// a configuration defect, on the encode side as much as on decode.
#[derive(Clone)]
pub struct Discriminator<T: ?Sized> {
    by: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T: ?Sized> Discriminator<T> {
    pub fn new(by: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self { by: Arc::new(by) }
    }

    /// The discriminant value of `value`.
    pub fn of(&self, value: &T) -> String {
        (self.by)(value)
    }

    /// Resolve `value` to its variant in `shape`.
    pub fn resolve<'a>(
        &self,
        value: &T,
        shape: &'a CoproductShape,
    ) -> Result<&'a SchemaVariant, SchemaError> {
        let discriminant = self.of(value);
        shape
            .variant(&discriminant)
            .ok_or_else(|| SchemaError::UnknownDiscriminant {
                coproduct: shape.name.clone().unwrap_or_else(|| ANONYMOUS.to_string()),
                discriminant,
            })
    }
}

impl<T: ?Sized> std::fmt::Debug for Discriminator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Discriminator(..)")
    }
}
