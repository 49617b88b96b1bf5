//! Primitive codec constructors.
//!
//! The leaves every application codec is composed from: text codecs over
//! `String`, a byte passthrough, and JSON codecs over a raw JSON
//! document. Each comes with the matching schema already attached.

use crate::codec::Codec;
use crate::decode::{DecodeFailure, DecodeResult};
use crate::format::CodecFormat;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wireform_schema::Schema;

/// Identity codec over text.
pub fn string() -> Codec<String, String> {
    Codec::new(CodecFormat::TextPlain, Clone::clone, DecodeResult::Value)
        .with_schema(Schema::string())
}

/// Text codec for `i64`, decimal notation.
pub fn integer() -> Codec<String, i64> {
    Codec::new(
        CodecFormat::TextPlain,
        |n: &i64| n.to_string(),
        |raw: String| match raw.parse::<i64>() {
            Ok(n) => DecodeResult::Value(n),
            Err(e) => DecodeResult::Error {
                raw,
                cause: DecodeFailure::Parse {
                    message: e.to_string(),
                },
            },
        },
    )
    .with_schema(Schema::integer())
}

/// Text codec for `f64`.
///
/// Lossy raw representation: the canonical domain excludes NaN, which
/// re-reads as NaN but compares unequal to itself.
pub fn float() -> Codec<String, f64> {
    Codec::new(
        CodecFormat::TextPlain,
        |x: &f64| x.to_string(),
        |raw: String| match raw.parse::<f64>() {
            Ok(x) => DecodeResult::Value(x),
            Err(e) => DecodeResult::Error {
                raw,
                cause: DecodeFailure::Parse {
                    message: e.to_string(),
                },
            },
        },
    )
    .with_schema(Schema::number())
}

/// Text codec for `bool`, spelled `true`/`false`.
pub fn boolean() -> Codec<String, bool> {
    Codec::new(
        CodecFormat::TextPlain,
        |b: &bool| b.to_string(),
        |raw: String| match raw.parse::<bool>() {
            Ok(b) => DecodeResult::Value(b),
            Err(e) => DecodeResult::Error {
                raw,
                cause: DecodeFailure::Parse {
                    message: e.to_string(),
                },
            },
        },
    )
    .with_schema(Schema::boolean())
}

/// Identity codec over raw bytes.
pub fn bytes() -> Codec<Vec<u8>, Vec<u8>> {
    Codec::new(CodecFormat::OctetStream, Clone::clone, DecodeResult::Value)
        .with_schema(Schema::binary())
}

/// JSON document codec: text in, [`serde_json::Value`] out.
///
/// No schema is attached: an arbitrary document has no fixed shape.
pub fn json_value() -> Codec<String, serde_json::Value> {
    Codec::new(
        CodecFormat::Json,
        |value: &serde_json::Value| value.to_string(),
        |raw: String| match serde_json::from_str(&raw) {
            Ok(value) => DecodeResult::Value(value),
            Err(e) => DecodeResult::Error {
                raw,
                cause: DecodeFailure::Parse {
                    message: e.to_string(),
                },
            },
        },
    )
}

/// Typed JSON codec over serde, with the caller-supplied schema.
///
/// `T`'s `Serialize` must be infallible for encode to be total. A type
/// serde_json rejects (non-string map keys) encodes as the empty
/// document, which no decode accepts, so the round-trip law does not
/// hold for such types. Debug builds assert on such a value.
pub fn json<T>(schema: Schema) -> Codec<String, T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    Codec::new(
        CodecFormat::Json,
        |value: &T| match serde_json::to_string(value) {
            Ok(text) => text,
            Err(e) => {
                debug_assert!(false, "value does not serialize as JSON: {e}");
                String::new()
            }
        },
        |raw: String| match serde_json::from_str::<T>(&raw) {
            Ok(value) => DecodeResult::Value(value),
            Err(e) => DecodeResult::Error {
                raw,
                cause: DecodeFailure::Parse {
                    message: e.to_string(),
                },
            },
        },
    )
    .with_schema(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wireform_schema::ProductBuilder;

    #[test]
    fn string_is_the_identity() {
        let codec = string();
        assert_eq!(
            codec.decode("plain".to_string()),
            DecodeResult::Value("plain".to_string())
        );
        assert_eq!(codec.encode(&"plain".to_string()), "plain");
        assert_eq!(codec.format(), CodecFormat::TextPlain);
    }

    #[test]
    fn integer_parse_failure_is_data_not_a_fault() {
        let codec = integer();
        let result = codec.decode("xyz".to_string());
        let DecodeResult::Error { raw, cause } = result else {
            panic!("expected an error outcome");
        };
        assert_eq!(raw, "xyz");
        assert!(matches!(cause, DecodeFailure::Parse { .. }));
    }

    #[test]
    fn integer_round_trip() {
        let codec = integer();
        for n in [-1i64, 0, 42, i64::MAX] {
            assert_eq!(codec.decode(codec.encode(&n)), DecodeResult::Value(n));
        }
    }

    #[test]
    fn boolean_round_trip_and_failure() {
        let codec = boolean();
        assert_eq!(codec.decode("true".to_string()), DecodeResult::Value(true));
        assert_eq!(codec.encode(&false), "false");
        assert!(matches!(
            codec.decode("yes".to_string()),
            DecodeResult::Error { .. }
        ));
    }

    #[test]
    fn bytes_pass_through() {
        let codec = bytes();
        let payload = vec![0u8, 1, 2];
        assert_eq!(
            codec.decode(payload.clone()),
            DecodeResult::Value(payload.clone())
        );
        assert_eq!(codec.encode(&payload), payload);
        assert_eq!(codec.format(), CodecFormat::OctetStream);
    }

    #[test]
    fn json_value_parses_and_reports() {
        let codec = json_value();
        assert_eq!(
            codec.decode(r#"{"a":1}"#.to_string()),
            DecodeResult::Value(serde_json::json!({"a": 1}))
        );
        assert!(matches!(
            codec.decode("{not json".to_string()),
            DecodeResult::Error { .. }
        ));
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Fruit {
        fruit: String,
        amount: i64,
    }

    #[test]
    fn typed_json_round_trip() {
        let schema = ProductBuilder::new("Fruit")
            .field("fruit", Schema::string())
            .field("amount", Schema::integer())
            .finish()
            .expect("valid product");
        let codec = json::<Fruit>(schema);

        let value = Fruit {
            fruit: "pear".to_string(),
            amount: 3,
        };
        assert_eq!(
            codec.decode(codec.encode(&value)),
            DecodeResult::Value(value)
        );
        assert_eq!(
            codec.schema().map(Schema::kind_name),
            Some("product")
        );
    }
}
