//! Wire format tags.

use serde::{Deserialize, Serialize};

/// The wire format a codec speaks.
///
/// Read-only metadata: the tag never influences encode/decode behavior,
/// it only tells the endpoint/documentation layers which media type a
/// codec belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecFormat {
    /// `text/plain; charset=utf-8`
    TextPlain,
    /// `application/json`
    Json,
    /// `application/octet-stream`
    OctetStream,
}

impl CodecFormat {
    /// The media type string for this format.
    pub fn media_type(self) -> &'static str {
        match self {
            Self::TextPlain => "text/plain; charset=utf-8",
            Self::Json => "application/json",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for CodecFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.media_type())
    }
}

impl std::str::FromStr for CodecFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = s.split(';').next().unwrap_or(s).trim();
        match essence {
            "text/plain" => Ok(Self::TextPlain),
            "application/json" => Ok(Self::Json),
            "application/octet-stream" => Ok(Self::OctetStream),
            _ => Err(format!("unknown codec format: {s}")),
        }
    }
}
