//! # Wireform Registry
//!
//! Explicit codec and schema registries. Where the rest of wireform is
//! pure composition, this crate is the single lookup path that replaces
//! ambient "find the codec for this type" resolution: registries are
//! built once at startup, checked fail-fast, and passed explicitly to
//! whatever derives endpoints or documents from them.
//!
//! - [`SchemaRegistry`]: type name → [`wireform_schema::Schema`], with
//!   fingerprint-checked idempotent re-registration.
//! - [`CodecRegistry`]: `(raw, typed)` type pair → typed
//!   [`wireform_codec::Codec`], recovered at the static types of the
//!   call site.

pub mod codec_registry;
pub mod error;
pub mod schema_registry;

pub use codec_registry::CodecRegistry;
pub use error::RegistryError;
pub use schema_registry::SchemaRegistry;
