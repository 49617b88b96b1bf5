//! The structural schema model.
//!
//! A [`Schema`] describes the shape of a type: primitive, product,
//! coproduct, collection, or optional. It carries no codec behavior —
//! documentation tooling reads it, nothing executes it.
//!
//! Children are held behind [`Arc`] so that rewriting one node of a large
//! schema (see [`crate::path`]) shares every untouched subtree with the
//! original value. Equality is structural; sharing is an optimization
//! observable only through `Arc::ptr_eq`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The kind of a primitive schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// UTF-8 text.
    String,
    /// Signed integer.
    Integer,
    /// Floating-point number.
    Number,
    /// True/false.
    Boolean,
    /// Raw bytes.
    Binary,
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

/// A named field of a product schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub name: String,
    pub schema: Arc<Schema>,
}

/// The shape of a product type: an ordered sequence of uniquely named
/// fields, optionally carrying the product's own type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fields: Vec<SchemaField>,
}

/// One variant of a coproduct, keyed by its discriminant value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaVariant {
    /// The discriminator value identifying this variant on the wire.
    pub discriminant: String,
    /// The variant's type name, for documentation.
    pub name: String,
    pub schema: Arc<Schema>,
}

/// The shape of a coproduct type: uniquely discriminated variants.
///
/// `discriminator_field` is set for structural representations, where the
/// discriminant travels as a named field of the encoded object rather than
/// being implied by the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoproductShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator_field: Option<String>,
    pub variants: Vec<SchemaVariant>,
}

impl CoproductShape {
    /// Look up a variant by discriminant value.
    pub fn variant(&self, discriminant: &str) -> Option<&SchemaVariant> {
        self.variants.iter().find(|v| v.discriminant == discriminant)
    }
}

/// The structural alternatives a schema node can take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Shape {
    Primitive { primitive: PrimitiveKind },
    Product(ProductShape),
    Coproduct(CoproductShape),
    Collection { element: Arc<Schema> },
    Optional { inner: Arc<Schema> },
}

impl Shape {
    /// A short name for this shape, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Primitive { .. } => "primitive",
            Self::Product(_) => "product",
            Self::Coproduct(_) => "coproduct",
            Self::Collection { .. } => "collection",
            Self::Optional { .. } => "optional",
        }
    }
}

/// A structural description of a type.
///
/// Immutable by convention: every "modify" operation produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub shape: Shape,
}

impl Schema {
    /// A primitive schema of the given kind.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self {
            description: None,
            shape: Shape::Primitive { primitive: kind },
        }
    }

    pub fn string() -> Self {
        Self::primitive(PrimitiveKind::String)
    }

    pub fn integer() -> Self {
        Self::primitive(PrimitiveKind::Integer)
    }

    pub fn number() -> Self {
        Self::primitive(PrimitiveKind::Number)
    }

    pub fn boolean() -> Self {
        Self::primitive(PrimitiveKind::Boolean)
    }

    pub fn binary() -> Self {
        Self::primitive(PrimitiveKind::Binary)
    }

    /// A homogeneous collection of `element`.
    pub fn collection(element: Schema) -> Self {
        Self {
            description: None,
            shape: Shape::Collection {
                element: Arc::new(element),
            },
        }
    }

    /// An optional wrapper around `inner`.
    pub fn optional(inner: Schema) -> Self {
        Self {
            description: None,
            shape: Shape::Optional {
                inner: Arc::new(inner),
            },
        }
    }

    /// Attach a human-readable description, replacing any existing one.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True if this schema is a collection.
    pub fn is_collection(&self) -> bool {
        matches!(self.shape, Shape::Collection { .. })
    }

    /// The element schema of a collection, if this is one.
    ///
    /// Generic "apply to every element" rewrites start here.
    pub fn element(&self) -> Option<&Schema> {
        match &self.shape {
            Shape::Collection { element } => Some(element.as_ref()),
            _ => None,
        }
    }

    /// The field schema with the given name, if this is a product.
    pub fn field(&self, name: &str) -> Option<&Schema> {
        match &self.shape {
            Shape::Product(product) => product
                .fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.schema.as_ref()),
            _ => None,
        }
    }

    /// The variant with the given discriminant, if this is a coproduct.
    pub fn variant(&self, discriminant: &str) -> Option<&SchemaVariant> {
        match &self.shape {
            Shape::Coproduct(coproduct) => coproduct.variant(discriminant),
            _ => None,
        }
    }

    /// A short name for this schema's shape, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        self.shape.kind_name()
    }
}
