//! Bidirectional codecs.
//!
//! A [`Codec<R, T>`] pairs a total, deterministic `encode: &T -> R` with
//! a total `decode: R -> DecodeResult<T>`. The round-trip law holds for
//! every value a successful decode can produce: `decode(encode(t))` is
//! `Value(t)` on that canonical subset. Instances backed by a lossy raw
//! representation must document the loss.
//!
//! Codecs are immutable values. Composition never mutates: mapping and
//! validation produce new codecs that wrap the existing stages, and the
//! stages always run in composition order, short-circuiting on the first
//! failure.

use crate::decode::DecodeResult;
use crate::format::CodecFormat;
use crate::raw::RawValue;
use crate::validator::Validator;
use std::fmt;
use std::sync::Arc;
use wireform_schema::Schema;

/// A bidirectional mapping between a raw wire representation `R` and a
/// typed value `T`, tagged with a wire format.
///
/// `schema` and `format` are inert metadata for the documentation layer;
/// they never influence encode/decode behavior.
pub struct Codec<R, T> {
    format: CodecFormat,
    schema: Option<Schema>,
    validator: Option<Validator<T>>,
    encode: Arc<dyn Fn(&T) -> R + Send + Sync>,
    decode: Arc<dyn Fn(R) -> DecodeResult<T> + Send + Sync>,
}

impl<R: RawValue + 'static, T: 'static> Codec<R, T> {
    /// Build a codec from its two halves.
    pub fn new(
        format: CodecFormat,
        encode: impl Fn(&T) -> R + Send + Sync + 'static,
        decode: impl Fn(R) -> DecodeResult<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            format,
            schema: None,
            validator: None,
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    /// Encode a value. Total and deterministic.
    pub fn encode(&self, value: &T) -> R {
        (self.encode)(value)
    }

    /// Decode a raw value. Malformed input yields `Error`, never a panic.
    pub fn decode(&self, raw: R) -> DecodeResult<T> {
        (self.decode)(raw)
    }

    /// The wire format tag.
    pub fn format(&self) -> CodecFormat {
        self.format
    }

    /// The attached schema, if any.
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Attach (or replace) the schema metadata.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// The attached validator, if any. Repeated [`Self::validated`] calls
    /// surface here as one conjunction.
    pub fn validator(&self) -> Option<&Validator<T>> {
        self.validator.as_ref()
    }

    /// Compose a further decode/encode stage onto this codec.
    ///
    /// The derived decode runs this codec first; a failure propagates
    /// unchanged and `decode` is never invoked. The derived encode runs
    /// `encode` first, then this codec's. When both stages round-trip
    /// individually, the composition round-trips too.
    ///
    /// Schema and format carry over: mapping refines the typed side, the
    /// wire shape the metadata describes is unchanged.
    pub fn map_decode<U: 'static>(
        &self,
        decode: impl Fn(T) -> DecodeResult<U> + Send + Sync + 'static,
        encode: impl Fn(&U) -> T + Send + Sync + 'static,
    ) -> Codec<R, U> {
        let base_decode = self.decode.clone();
        let base_encode = self.encode.clone();
        Codec {
            format: self.format,
            schema: self.schema.clone(),
            validator: None,
            encode: Arc::new(move |value: &U| base_encode(&encode(value))),
            decode: Arc::new(move |raw: R| base_decode(raw).and_then(&decode)),
        }
    }

    /// Compose an infallible mapping onto this codec.
    pub fn map<U: 'static>(
        &self,
        to: impl Fn(T) -> U + Send + Sync + 'static,
        from: impl Fn(&U) -> T + Send + Sync + 'static,
    ) -> Codec<R, U> {
        self.map_decode(move |value| DecodeResult::Value(to(value)), from)
    }

    /// Attach a validator, run after each successful decode.
    ///
    /// A rejected value becomes `Mismatch` carrying the validator's
    /// description and a rendering of the raw input. Encoding is
    /// unchanged: validators constrain what comes in, not what goes out.
    pub fn validated(&self, validator: Validator<T>) -> Codec<R, T> {
        let base_decode = self.decode.clone();
        let attached = match self.validator.clone() {
            Some(existing) => existing.and(validator.clone()),
            None => validator.clone(),
        };
        Codec {
            format: self.format,
            schema: self.schema.clone(),
            validator: Some(attached),
            encode: self.encode.clone(),
            decode: Arc::new(move |raw: R| {
                let received = raw.clone();
                base_decode(raw).and_then(|value| {
                    if validator.accepts(&value) {
                        DecodeResult::Value(value)
                    } else {
                        DecodeResult::Mismatch {
                            expected: validator.description().to_string(),
                            actual: received.render(),
                        }
                    }
                })
            }),
        }
    }
}

impl<R, T> Clone for Codec<R, T> {
    fn clone(&self) -> Self {
        Self {
            format: self.format,
            schema: self.schema.clone(),
            validator: self.validator.clone(),
            encode: self.encode.clone(),
            decode: self.decode.clone(),
        }
    }
}

impl<R, T> fmt::Debug for Codec<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("format", &self.format)
            .field("schema", &self.schema)
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}
