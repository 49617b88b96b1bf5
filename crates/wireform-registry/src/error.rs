//! Registry configuration errors.
//!
//! All of these indicate mis-wired startup composition. They are meant
//! to abort registry construction, not to be handled downstream.

/// Errors from codec/schema registry construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A codec for this type pair is already registered.
    #[error("codec already registered for `{type_name}`")]
    DuplicateCodec { type_name: String },

    /// No codec is registered for this type pair.
    #[error("no codec registered for `{type_name}`")]
    MissingCodec { type_name: String },

    /// No schema is registered under this name.
    #[error("no schema registered under `{name}`")]
    MissingSchema { name: String },

    /// The name is already bound to a structurally different schema.
    #[error(
        "schema `{name}` already registered with a different shape \
         (fingerprint {existing}, offered {offered})"
    )]
    SchemaConflict {
        name: String,
        existing: String,
        offered: String,
    },
}
