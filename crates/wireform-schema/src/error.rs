//! Configuration errors raised while building or rewriting schemas.
//!
//! These are programmer defects, not data errors: they surface at
//! derivation/modification time, before any external input is in play,
//! and are meant to fail composition fast rather than be handled.

/// Errors from schema derivation and path-based modification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Two fields of one product resolved to the same name.
    ///
    /// Can be introduced by a naming policy collapsing distinct source
    /// names onto one derived name.
    #[error("duplicate field `{name}` in product `{product}`")]
    DuplicateField { product: String, name: String },

    /// Two variants of one coproduct share a discriminant value.
    #[error("duplicate discriminant `{discriminant}` in coproduct `{coproduct}`")]
    DuplicateDiscriminant {
        coproduct: String,
        discriminant: String,
    },

    /// A coproduct was derived with no variants at all.
    #[error("coproduct `{coproduct}` has no variants")]
    EmptyCoproduct { coproduct: String },

    /// A discriminator produced a value absent from the variant mapping.
    ///
    /// Raised on the encode/resolve side as well as on decode: a value
    /// whose discriminant is unknown means the coproduct definition is
    /// incomplete, which is a configuration defect.
    #[error("discriminant `{discriminant}` is not a variant of coproduct `{coproduct}`")]
    UnknownDiscriminant {
        coproduct: String,
        discriminant: String,
    },

    /// A path named a field that does not exist at the traversed node.
    #[error("path segment `{segment}` not found at `{at}`")]
    SegmentNotFound { segment: String, at: String },

    /// A path segment cannot descend into the shape found at the node,
    /// e.g. `each` applied to a product or a field name applied to a
    /// primitive.
    #[error("segment `{segment}` cannot traverse {kind} at `{at}`")]
    NotTraversable {
        segment: String,
        kind: &'static str,
        at: String,
    },

    /// A path with no segments was given where one is required.
    #[error("empty schema path")]
    EmptyPath,

    /// A dotted path string could not be parsed.
    #[error("invalid path `{path}`: {message}")]
    InvalidPath { path: String, message: String },
}
