//! JSON encoding for inline `<script>` payloads.

use serde::Serialize;

/// Serializes `value` to JSON that can be placed inside a `<script>` element.
///
/// `<`, `>` and `&` are written as `\u003c`, `\u003e` and `\u0026`, so a
/// string value containing `</script>` cannot close the element early. The
/// line and paragraph separators are escaped as well because older JavaScript
/// engines reject them in string literals. The output remains valid JSON and
/// parses back to the same value.
pub fn to_script_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;

    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }

    Ok(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_escapes_script_terminator() {
        let encoded = to_script_json(&json!({ "title": "</script><b>" })).unwrap();
        assert!(!encoded.contains('<'));
        assert!(!encoded.contains('>'));
        assert!(encoded.contains("\\u003c/script\\u003e"));
    }

    #[test]
    fn test_escaped_output_parses_back() {
        let original = json!({ "a": "x & y < z", "b": 3, "c": "line\u{2028}sep" });
        let encoded = to_script_json(&original).unwrap();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_plain_values_untouched() {
        assert_eq!(to_script_json(&json!({ "width": "auto" })).unwrap(), r#"{"width":"auto"}"#);
    }
}
