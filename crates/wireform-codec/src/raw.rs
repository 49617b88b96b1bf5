//! Raw wire representations.
//!
//! Failure outcomes always retain what was actually received, so every
//! raw type a codec can read from needs a diagnostic rendering. That is
//! the whole trait: clone for re-reading, render for reporting.

/// A raw representation a codec can decode from and encode to.
pub trait RawValue: Clone {
    /// A human-readable rendering of this raw value for diagnostics.
    fn render(&self) -> String;
}

impl RawValue for String {
    fn render(&self) -> String {
        self.clone()
    }
}

/// Bytes render as a length plus a bounded hex prefix, not the payload.
impl RawValue for Vec<u8> {
    fn render(&self) -> String {
        const PREFIX: usize = 16;
        let hex: String = self.iter().take(PREFIX).map(|b| format!("{b:02x}")).collect();
        if self.len() > PREFIX {
            format!("{} bytes: {hex}…", self.len())
        } else {
            format!("{} bytes: {hex}", self.len())
        }
    }
}

impl RawValue for serde_json::Value {
    fn render(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_render_verbatim() {
        assert_eq!("abc123".to_string().render(), "abc123");
    }

    #[test]
    fn bytes_render_as_bounded_hex() {
        assert_eq!(vec![0x00u8, 0xff].render(), "2 bytes: 00ff");
        let long = vec![0xabu8; 20];
        let rendered = long.render();
        assert!(rendered.starts_with("20 bytes: "));
        assert!(rendered.ends_with('…'));
    }

    #[test]
    fn json_renders_compactly() {
        let value = serde_json::json!({ "a": 1 });
        assert_eq!(value.render(), r#"{"a":1}"#);
    }
}
