//! Scalar rendering and parsing shared by the encoder and decoder.

use serde_json::{Number, Value};

/// Whether `s` is a bare identifier word usable as a tag name.
pub fn is_bare_word(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parses_as_number(s: &str) -> bool {
    serde_json::from_str::<Number>(s).is_ok()
}

/// Whether a string must be quoted to survive a decode unchanged: structural
/// characters (newline, colon, dash, hash, quote, backslash), surrounding
/// whitespace, emptiness, or text that parses as another scalar.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() || s != s.trim() {
        return true;
    }
    if s.contains(['\n', ':', '-', '#', '"', '\\']) {
        return true;
    }
    if matches!(s, "true" | "false" | "null" | "[]" | "{}") {
        return true;
    }
    if s.starts_with('!') {
        return true;
    }
    parses_as_number(s)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Render a scalar (or empty container) in its inline form.
pub fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if needs_quoting(s) {
                format!("\"{}\"", escape(s))
            } else {
                s.clone()
            }
        }
        Value::Array(arr) if arr.is_empty() => "[]".to_string(),
        Value::Object(obj) if obj.is_empty() => "{}".to_string(),
        // non-empty containers are never rendered inline
        _ => String::new(),
    }
}

/// Whether a value renders inline (scalar or empty container).
pub fn is_inline(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
        Value::Array(arr) => arr.is_empty(),
        Value::Object(obj) => obj.is_empty(),
    }
}

/// Parse an inline scalar: boolean literal, then numeric literal, then
/// quoted string, then empty-container/null literals, then bare string.
pub fn parse_scalar(text: &str) -> Value {
    let text = text.trim();
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        "[]" => return Value::Array(Vec::new()),
        "{}" => return Value::Object(serde_json::Map::new()),
        _ => {}
    }
    if let Ok(n) = serde_json::from_str::<Number>(text) {
        return Value::Number(n);
    }
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return Value::String(unescape(&text[1..text.len() - 1]));
    }
    Value::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_words() {
        assert!(is_bare_word("Damage"));
        assert!(is_bare_word("_hidden"));
        assert!(is_bare_word("Stat2"));
        assert!(!is_bare_word("2x"));
        assert!(!is_bare_word("a b"));
        assert!(!is_bare_word(""));
    }

    #[test]
    fn plain_strings_stay_bare() {
        assert_eq!(render_scalar(&json!("Sword Strike")), "Sword Strike");
        assert_eq!(render_scalar(&json!("Assets/Effects/Burning")), "Assets/Effects/Burning");
    }

    #[test]
    fn structural_strings_are_quoted() {
        assert_eq!(render_scalar(&json!("a: b")), "\"a: b\"");
        assert_eq!(render_scalar(&json!("semi-final")), "\"semi-final\"");
        assert_eq!(render_scalar(&json!("#1")), "\"#1\"");
        assert_eq!(render_scalar(&json!("")), "\"\"");
        assert_eq!(render_scalar(&json!("  padded ")), "\"  padded \"");
    }

    #[test]
    fn scalar_lookalike_strings_are_quoted() {
        assert_eq!(render_scalar(&json!("true")), "\"true\"");
        assert_eq!(render_scalar(&json!("42")), "\"42\"");
        assert_eq!(render_scalar(&json!("0.5")), "\"0.5\"");
    }

    #[test]
    fn numbers_keep_integer_float_distinction() {
        assert_eq!(render_scalar(&json!(10)), "10");
        assert_eq!(render_scalar(&json!(10.0)), "10.0");
        assert_eq!(parse_scalar("10"), json!(10));
        assert_eq!(parse_scalar("10.0"), json!(10.0));
        assert_ne!(parse_scalar("10"), parse_scalar("10.0"));
    }

    #[test]
    fn parse_order_boolean_number_quoted_bare() {
        assert_eq!(parse_scalar("true"), json!(true));
        assert_eq!(parse_scalar("0.25"), json!(0.25));
        assert_eq!(parse_scalar("\"42\""), json!("42"));
        assert_eq!(parse_scalar("Fire"), json!("Fire"));
        assert_eq!(parse_scalar("[]"), json!([]));
        assert_eq!(parse_scalar("{}"), json!({}));
    }

    #[test]
    fn quoted_round_trip_with_escapes() {
        for s in ["a: b", "line1\nline2", "say \"hi\"", "back\\slash", "\ttabbed"] {
            let rendered = render_scalar(&json!(s));
            assert_eq!(parse_scalar(&rendered), json!(s), "string {s:?}");
        }
    }
}
