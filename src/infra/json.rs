//! Document encoding shared by every command that writes page JSON.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Four-space indented JSON, non-ASCII left as-is, no trailing newline.
pub fn to_document_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn indents_with_four_spaces_and_keeps_unicode() {
        let value = json!({
            "title": "📷 images",
            "rows": [],
            "layout": {"columns": 1}
        });
        let bytes = to_document_bytes(&value).expect("encode");
        let text = String::from_utf8(bytes).expect("utf8");
        assert_eq!(
            text,
            "{\n    \"title\": \"📷 images\",\n    \"rows\": [],\n    \"layout\": {\n        \"columns\": 1\n    }\n}"
        );
    }

    #[test]
    fn escapes_control_characters_only() {
        let bytes = to_document_bytes(&json!("a\nb ✓")).expect("encode");
        assert_eq!(bytes, "\"a\\nb ✓\"".as_bytes());
    }
}
