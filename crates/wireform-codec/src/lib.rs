//! # Wireform Codec
//!
//! Bidirectional wire codecs: the behavioral half of wireform. A codec
//! converts between a raw wire representation (text, bytes, JSON) and a
//! typed value, reporting every decode failure as data.
//!
//! ## Architecture
//!
//! ```text
//! DecodeResult<T>       ← Value / Error / Mismatch, always data
//!     │
//! RawValue              ← raw representations with a diagnostic rendering
//!     │
//! CodecFormat           ← wire format tag (inert metadata)
//!     │
//! Validator<T>          ← post-decode predicate plus description
//!     │
//! Codec<R, T>           ← encode/decode pair; composes via map_decode,
//!     │                   map, and validated
//! primitives            ← string / integer / float / boolean / bytes /
//!                         json leaves to compose from
//! ```
//!
//! The design contract: `encode` is total and deterministic, `decode` is
//! total over its raw domain, and composed stages run in composition
//! order with short-circuit on the first failure. No stage panics on
//! malformed input, so calling layers can aggregate field-level
//! failures uniformly.

pub mod codec;
pub mod decode;
pub mod format;
pub mod primitives;
pub mod raw;
pub mod validator;

pub use codec::Codec;
pub use decode::{DecodeFailure, DecodeResult};
pub use format::CodecFormat;
pub use raw::RawValue;
pub use validator::Validator;
