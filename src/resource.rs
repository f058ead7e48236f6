//! Flat ini-style locale resource parsing.
//!
//! Locale resources are plain text, one `key=value` pair per line. Values may
//! carry C-style escape sequences which are unescaped on load.

use std::collections::HashMap;

/// Parses ini-style text into a flat key→value map.
///
/// Blank lines, `;`/`#` comment lines, and `[section]` headers are skipped;
/// sections carry no meaning and their entries land in the same flat map.
/// Keys and values are trimmed, a single pair of surrounding double quotes on
/// the value is stripped, and escape sequences are resolved via [`unescape`].
/// A later duplicate key replaces the earlier entry.
#[must_use]
pub fn parse_entries(contents: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!("skipping malformed resource line: {line:?}");
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            tracing::warn!("skipping resource line with empty key: {line:?}");
            continue;
        }

        entries.insert(key.to_string(), unescape(unquote(value.trim())));
    }

    entries
}

/// Strips one pair of surrounding double quotes, if both are present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Resolves C-style escape sequences in a resource value.
///
/// `\n`, `\t`, `\r` and `\\` map to their characters; a backslash before any
/// other character is dropped and the character kept; a trailing lone
/// backslash is dropped.
#[must_use]
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
