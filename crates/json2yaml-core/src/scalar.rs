//! Scalar encoder — YAML text for null, booleans, numbers and strings.
//!
//! Strings are always written double-quoted. YAML double-quoted scalars
//! accept nearly the same escapes as JSON strings, so the translation is
//! small:
//!
//! - `\` and `"` are backslash-escaped
//! - newline, carriage return and tab use `\n`, `\r`, `\t`
//! - every other C0 control character (backspace and form feed included)
//!   becomes a lowercase `\u00XX` escape
//! - everything else is written verbatim, including DEL, U+0085, U+2028
//!   and U+2029; YAML 1.1 readers fold the last three as line breaks
//!
//! Numbers are written as their original literal, never reformatted.
//!
//! # Example
//! ```
//! use json2yaml_core::scalar::encode_string;
//! assert_eq!(encode_string("a\u{8}b\n"), r#""a\u0008b\n""#);
//! ```

use crate::types::Value;

/// Encode a scalar value. Returns `None` for arrays and objects, which have
/// no single-token form.
pub fn encode_scalar(value: &Value) -> Option<String> {
    let mut out = String::new();
    push_scalar(value, &mut out).then_some(out)
}

/// Encode a string as a double-quoted YAML scalar.
pub fn encode_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    push_quoted(s, &mut out);
    out
}

/// Append the encoded form of a scalar to `out`. Returns `false` (and appends
/// nothing) for containers.
pub(crate) fn push_scalar(value: &Value, out: &mut String) -> bool {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(literal) => out.push_str(literal),
        Value::String(s) => push_quoted(s, out),
        Value::Array(_) | Value::Object(_) => return false,
    }
    true
}

/// Append `s` as a double-quoted scalar. Also used for mapping keys.
pub(crate) fn push_quoted(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => push_unicode_escape(c as u8, out),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn push_unicode_escape(byte: u8, out: &mut String) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.push_str("\\u00");
    out.push(HEX[(byte >> 4) as usize] as char);
    out.push(HEX[(byte & 0x0f) as usize] as char);
}
