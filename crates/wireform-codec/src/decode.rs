//! Decode outcomes as data.
//!
//! Every decode attempt ends in exactly one of three states: a value, a
//! recoverable error carrying the raw input, or a mismatch against an
//! expectation. Failures are values, never panics: that is the contract
//! that lets codecs stack arbitrarily many mapping layers without any
//! handling boilerplate in between.

/// The cause attached to a [`DecodeResult::Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeFailure {
    /// The raw input could not be parsed.
    #[error("parse failure: {message}")]
    Parse { message: String },

    /// Required input was absent.
    #[error("input missing")]
    Missing,

    /// The input parsed but had the wrong shape.
    #[error("unexpected shape: {message}")]
    Shape { message: String },

    /// A cause specific to one codec.
    #[error("{0}")]
    Custom(String),
}

/// The outcome of one decode attempt.
///
/// `Error` and `Mismatch` are terminal for the attempt: no partial value
/// is exposed, and composed layers propagate them unchanged. Equality is
/// value-based for testability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult<T> {
    /// Successful decode.
    Value(T),
    /// The input was malformed; `raw` retains a rendering of what was
    /// actually received.
    Error { raw: String, cause: DecodeFailure },
    /// The input decoded but failed an expectation, typically a
    /// validator's. `actual` retains the raw input rendering.
    Mismatch { expected: String, actual: String },
}

impl<T> DecodeResult<T> {
    /// True if this is a `Value`.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The decoded value, discarding failure detail.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Map the decoded value, passing failures through unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DecodeResult<U> {
        match self {
            Self::Value(value) => DecodeResult::Value(f(value)),
            Self::Error { raw, cause } => DecodeResult::Error { raw, cause },
            Self::Mismatch { expected, actual } => DecodeResult::Mismatch { expected, actual },
        }
    }

    /// Chain a further decode stage, short-circuiting on failure.
    ///
    /// `f` is never invoked unless `self` is a `Value`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> DecodeResult<U>) -> DecodeResult<U> {
        match self {
            Self::Value(value) => f(value),
            Self::Error { raw, cause } => DecodeResult::Error { raw, cause },
            Self::Mismatch { expected, actual } => DecodeResult::Mismatch { expected, actual },
        }
    }
}
