//! INI Parser
//!
//! Best-effort reader for the `[Section]` / `key=value` files Natro Macro keeps in
//! its `settings/` directory. Malformed lines are dropped rather than reported.

use std::collections::HashMap;

/// Keys and values of a single section.
pub type Section = HashMap<String, String>;

/// Section name to section contents.
pub type ParsedSections = HashMap<String, Section>;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse INI-like text into sections.
///
/// - `\n` and `\r\n` line breaks are both accepted; each line is trimmed of
///   whitespace and byte-order marks.
/// - Blank lines and `;` comments are skipped.
/// - `[Name]` opens (or resets) a section. Names must be non-empty and free of `]`.
/// - Inside a section, a line with exactly one `=` becomes a trimmed key/value pair.
///   Anything else, and anything before the first header, is ignored.
pub fn parse(text: &str) -> ParsedSections {
    let mut sections = ParsedSections::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let line = trim(line);
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if let Some(name) = section_header(line) {
            sections.insert(name.to_string(), Section::new());
            current = Some(name.to_string());
            continue;
        }

        let Some(section_name) = current.as_ref() else {
            continue;
        };

        let mut parts = line.split('=');
        if let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) {
            if let Some(section) = sections.get_mut(section_name) {
                section.insert(trim(key).to_string(), trim(value).to_string());
            }
        }
    }

    sections
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn section_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    if name.is_empty() || name.contains(']') {
        return None;
    }
    Some(name)
}
