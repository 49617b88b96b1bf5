//! Path-based schema modification.
//!
//! A [`SchemaPath`] addresses one node inside a derived schema by walking
//! product fields and collection element positions. Applying a rewrite at
//! a path produces a new root schema in which only the nodes on the path
//! are rebuilt; every sibling keeps the same `Arc` as the original.
//!
//! Two entry points, per the safety trade-off they make:
//!
//! - [`Schema::modify_at`] is the unchecked variant. It accepts any path
//!   and reports a missing or non-traversable segment when the rewrite is
//!   applied.
//! - [`CheckedPath::resolve`] validates every segment against the schema
//!   up front and is the recommended default. Call sites using the
//!   unchecked variant opt into weaker guarantees visibly.

use crate::error::SchemaError;
use crate::schema::{Schema, Shape};
use std::fmt;
use std::sync::Arc;

/// One step of a schema path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Descend into the named field of a product.
    Field(String),
    /// Descend into the element schema of a collection.
    Each,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Each => f.write_str("each"),
        }
    }
}

/// A path through products and collection elements to one schema node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaPath {
    segments: Vec<PathSegment>,
}

impl SchemaPath {
    /// The empty path, addressing the root itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with a product field name.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    /// Extend the path into a collection's element schema.
    pub fn each(mut self) -> Self {
        self.segments.push(PathSegment::Each);
        self
    }

    /// Parse a dotted path such as `fruits.each.amount`.
    ///
    /// The literal segment `each` descends into a collection element;
    /// every other segment is a field name. A field actually named `each`
    /// must be addressed through the builder form.
    pub fn parse(path: &str) -> Result<Self, SchemaError> {
        if path.is_empty() {
            return Err(SchemaError::EmptyPath);
        }
        let mut segments = Vec::new();
        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(SchemaError::InvalidPath {
                    path: path.to_string(),
                    message: "empty segment".to_string(),
                });
            }
            segments.push(if segment == "each" {
                PathSegment::Each
            } else {
                PathSegment::Field(segment.to_string())
            });
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

fn location(segments: &[PathSegment], depth: usize) -> String {
    if depth == 0 {
        return "<root>".to_string();
    }
    segments[..depth]
        .iter()
        .map(PathSegment::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Rebuild `schema` with `rewrite` applied at the node `segments` points
/// to. Nodes off the path are shared, not copied.
fn modify<F>(
    schema: &Schema,
    segments: &[PathSegment],
    depth: usize,
    rewrite: F,
) -> Result<Schema, SchemaError>
where
    F: FnOnce(&Schema) -> Schema,
{
    let Some(segment) = segments.get(depth) else {
        return Ok(rewrite(schema));
    };
    match (&schema.shape, segment) {
        (Shape::Product(product), PathSegment::Field(name)) => {
            let index = product
                .fields
                .iter()
                .position(|f| &f.name == name)
                .ok_or_else(|| SchemaError::SegmentNotFound {
                    segment: name.clone(),
                    at: location(segments, depth),
                })?;
            let rebuilt =
                modify(product.fields[index].schema.as_ref(), segments, depth + 1, rewrite)?;
            let mut product = product.clone();
            product.fields[index].schema = Arc::new(rebuilt);
            Ok(Schema {
                description: schema.description.clone(),
                shape: Shape::Product(product),
            })
        }
        (Shape::Collection { element }, PathSegment::Each) => {
            let rebuilt = modify(element.as_ref(), segments, depth + 1, rewrite)?;
            Ok(Schema {
                description: schema.description.clone(),
                shape: Shape::Collection {
                    element: Arc::new(rebuilt),
                },
            })
        }
        (shape, segment) => Err(SchemaError::NotTraversable {
            segment: segment.to_string(),
            kind: shape.kind_name(),
            at: location(segments, depth),
        }),
    }
}

/// Walk `segments` against `schema` without rewriting, reporting the
/// first invalid segment.
fn check(schema: &Schema, segments: &[PathSegment], depth: usize) -> Result<(), SchemaError> {
    let Some(segment) = segments.get(depth) else {
        return Ok(());
    };
    match (&schema.shape, segment) {
        (Shape::Product(product), PathSegment::Field(name)) => {
            let field = product.fields.iter().find(|f| &f.name == name).ok_or_else(|| {
                SchemaError::SegmentNotFound {
                    segment: name.clone(),
                    at: location(segments, depth),
                }
            })?;
            check(field.schema.as_ref(), segments, depth + 1)
        }
        (Shape::Collection { element }, PathSegment::Each) => {
            check(element.as_ref(), segments, depth + 1)
        }
        (shape, segment) => Err(SchemaError::NotTraversable {
            segment: segment.to_string(),
            kind: shape.kind_name(),
            at: location(segments, depth),
        }),
    }
}

impl Schema {
    /// Apply `rewrite` to the node addressed by `path`, unchecked.
    ///
    /// Segment existence is established during traversal, so an invalid
    /// path surfaces here rather than at path construction. Prefer
    /// [`CheckedPath::resolve`] where the schema is known up front.
    pub fn modify_at(
        &self,
        path: &SchemaPath,
        rewrite: impl FnOnce(&Schema) -> Schema,
    ) -> Result<Schema, SchemaError> {
        modify(self, path.segments(), 0, rewrite)
    }
}

/// A path pre-validated against a specific schema.
///
/// Construction walks the whole path, so every segment is known to exist
/// before any rewrite is attempted. Applying the path to the schema it
/// was resolved against cannot fail on path grounds; applying it to an
/// unrelated schema falls back to traversal-time reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedPath {
    path: SchemaPath,
}

impl CheckedPath {
    /// Validate `path` against `schema`.
    pub fn resolve(schema: &Schema, path: SchemaPath) -> Result<Self, SchemaError> {
        if path.is_root() {
            return Err(SchemaError::EmptyPath);
        }
        check(schema, path.segments(), 0)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &SchemaPath {
        &self.path
    }

    /// Apply `rewrite` at this path.
    pub fn apply(
        &self,
        schema: &Schema,
        rewrite: impl FnOnce(&Schema) -> Schema,
    ) -> Result<Schema, SchemaError> {
        schema.modify_at(&self.path, rewrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::ProductBuilder;
    use crate::schema::Shape;

    fn basket_schema() -> Schema {
        let fruit = ProductBuilder::new("Fruit")
            .field("name", Schema::string())
            .field("amount", Schema::integer())
            .finish()
            .expect("valid product");
        ProductBuilder::new("Basket")
            .field("owner", Schema::string())
            .field("fruits", Schema::collection(fruit))
            .finish()
            .expect("valid product")
    }

    fn product_field(schema: &Schema, name: &str) -> Arc<Schema> {
        let Shape::Product(product) = &schema.shape else {
            panic!("expected product shape");
        };
        product
            .fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.schema.clone())
            .expect("field present")
    }

    #[test]
    fn parse_and_display_round() {
        let path = SchemaPath::parse("fruits.each.amount").expect("parses");
        assert_eq!(
            path,
            SchemaPath::root().field("fruits").each().field("amount")
        );
        assert_eq!(path.to_string(), "fruits.each.amount");
        assert_eq!(SchemaPath::parse(""), Err(SchemaError::EmptyPath));
        assert!(matches!(
            SchemaPath::parse("a..b"),
            Err(SchemaError::InvalidPath { .. })
        ));
    }

    #[test]
    fn modify_rewrites_only_the_addressed_node() {
        let schema = basket_schema();
        let path = SchemaPath::parse("fruits.each.amount").expect("parses");
        let modified = schema
            .modify_at(&path, |node| {
                node.clone().with_description("how many there are")
            })
            .expect("path exists");

        // The addressed node changed.
        let fruit = element_of(&modified, "fruits");
        assert_eq!(
            fruit.field("amount").and_then(Schema::description),
            Some("how many there are")
        );

        // Siblings are shared with the original, not rebuilt.
        assert!(Arc::ptr_eq(
            &product_field(&modified, "owner"),
            &product_field(&schema, "owner"),
        ));
        let original_fruit = element_of(&schema, "fruits");
        assert!(Arc::ptr_eq(
            &product_field(&fruit, "name"),
            &product_field(&original_fruit, "name"),
        ));

        // The original is untouched.
        assert_eq!(
            original_fruit.field("amount").and_then(Schema::description),
            None
        );
    }

    // The element schema of a named collection field.
    fn element_of(schema: &Schema, field: &str) -> Schema {
        schema
            .field(field)
            .and_then(Schema::element)
            .cloned()
            .expect("collection field")
    }

    #[test]
    fn root_path_rewrites_the_root() {
        let schema = basket_schema();
        let modified = schema
            .modify_at(&SchemaPath::root(), |node| {
                node.clone().with_description("a basket")
            })
            .expect("root always exists");
        assert_eq!(modified.description(), Some("a basket"));
    }

    #[test]
    fn missing_field_reported_at_modification_time() {
        let schema = basket_schema();
        let path = SchemaPath::root().field("fruits").each().field("colour");
        let result = schema.modify_at(&path, Schema::clone);
        assert_eq!(
            result,
            Err(SchemaError::SegmentNotFound {
                segment: "colour".to_string(),
                at: "fruits.each".to_string(),
            })
        );
    }

    #[test]
    fn each_on_a_product_is_not_traversable() {
        let schema = basket_schema();
        let path = SchemaPath::root().each();
        let result = schema.modify_at(&path, Schema::clone);
        assert_eq!(
            result,
            Err(SchemaError::NotTraversable {
                segment: "each".to_string(),
                kind: "product",
                at: "<root>".to_string(),
            })
        );
    }

    #[test]
    fn checked_path_rejects_invalid_segments_up_front() {
        let schema = basket_schema();
        let bad = SchemaPath::root().field("fruits").field("amount");
        let result = CheckedPath::resolve(&schema, bad);
        assert_eq!(
            result,
            Err(SchemaError::NotTraversable {
                segment: "amount".to_string(),
                kind: "collection",
                at: "fruits".to_string(),
            })
        );
    }

    #[test]
    fn checked_path_applies_like_unchecked() {
        let schema = basket_schema();
        let path = SchemaPath::parse("fruits.each.name").expect("parses");
        let checked = CheckedPath::resolve(&schema, path.clone()).expect("valid path");
        let via_checked = checked
            .apply(&schema, |node| node.clone().with_description("fruit name"))
            .expect("resolved path applies");
        let via_unchecked = schema
            .modify_at(&path, |node| node.clone().with_description("fruit name"))
            .expect("path exists");
        assert_eq!(via_checked, via_unchecked);
    }
}
