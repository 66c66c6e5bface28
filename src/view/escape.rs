//! Escaping for text placed into HTML and inline scripts.

/// Escape text content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make serialized JSON safe to embed inside a `<script>` element.
///
/// Only characters that are meaningful to the HTML tokenizer (or invalid in
/// pre-ES2019 JavaScript) are rewritten, and always as `\uXXXX` escapes, so
/// the result is still valid JSON for the same value.
pub fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_script_json_cannot_close_script() {
        let value = serde_json::json!({ "title": "</script><script>alert(1)</script>" });
        let escaped = escape_script_json(&serde_json::to_string(&value).unwrap());

        assert!(!escaped.contains("</script>"));
        assert!(!escaped.contains('<'));

        let back: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_line_separators_round_trip() {
        let value = serde_json::json!(["a\u{2028}b\u{2029}c & d"]);
        let escaped = escape_script_json(&serde_json::to_string(&value).unwrap());

        assert!(escaped.contains("\\u2028"));
        assert!(escaped.contains("\\u0026"));
        let back: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(back, value);
    }
}
