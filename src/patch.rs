//! Line-Patcher
//!
//! In-place `key=value` substitution on raw configuration text. This is not an
//! INI writer: it never inserts, never reorders, and only touches the first line
//! that starts with `key=`. Everything else, line terminators included, is kept
//! byte for byte.

/// Replace the first `key=...` line, or return `None` when no line starts with `key=`.
///
/// Only the line content is replaced; its `\n` or `\r\n` terminator stays.
pub fn patch_line(text: &str, key: &str, value: &str) -> Option<String> {
    let prefix = format!("{}=", key);
    let mut offset = 0;

    for segment in text.split_inclusive('\n') {
        if segment.starts_with(&prefix) {
            let content_len = segment.find(|c: char| c == '\r' || c == '\n').unwrap_or(segment.len());
            let mut patched = String::with_capacity(text.len() + value.len());
            patched.push_str(&text[..offset]);
            patched.push_str(&prefix);
            patched.push_str(value);
            patched.push_str(&text[offset + content_len..]);
            return Some(patched);
        }
        offset += segment.len();
    }

    None
}

/// Set `key` to `value`. Text without a matching line comes back unchanged.
pub fn set_value(text: &str, key: &str, value: &str) -> String {
    patch_line(text, key, value).unwrap_or_else(|| text.to_string())
}
