//! # Wireform Schema
//!
//! Structural schemas: the metadata half of wireform. A [`Schema`]
//! describes the shape of a type (primitive, product, coproduct,
//! collection, optional) for documentation tooling to consume. Nothing
//! here encodes or decodes; codecs reference schemas as inert metadata.
//!
//! ## Architecture
//!
//! ```text
//! Schema / Shape        ← the structural model (Arc-shared children)
//!     │
//! FieldNaming           ← naming policy applied during derivation
//!     │
//! ProductBuilder        ← derive a product from named field schemas
//! CoproductBuilder      ← derive a coproduct from discriminated variants
//! Discriminator<T>      ← typed variant resolution, total over T
//!     │
//! SchemaPath            ← address a nested node (fields + `each`)
//! CheckedPath           ← the same, validated against a schema up front
//!     │
//! SchemaFingerprint     ← content-addressed schema identity
//! ```
//!
//! Every value is immutable: derivation and modification return new
//! schemas, sharing untouched subtrees with the input. Configuration
//! defects (duplicate names, invalid paths, unknown discriminants) are
//! reported as [`SchemaError`] at composition time, never deferred to
//! the decoding of external input.

pub mod derive;
pub mod error;
pub mod fingerprint;
pub mod naming;
pub mod path;
pub mod schema;

pub use derive::{CoproductBuilder, Discriminator, ProductBuilder};
pub use error::SchemaError;
pub use fingerprint::SchemaFingerprint;
pub use naming::{FieldNaming, to_kebab_case, to_snake_case};
pub use path::{CheckedPath, PathSegment, SchemaPath};
pub use schema::{
    CoproductShape, PrimitiveKind, ProductShape, Schema, SchemaField, SchemaVariant, Shape,
};
