//! Delimited text writer.

use std::path::Path;

use super::write_atomic;
use crate::Record;
use crate::config::{CollisionPolicy, OutputConfig};
use crate::error::{ChatlogError, Field, Result};

/// Writes records as delimited lines.
///
/// # Format
/// - Columns: `Author`, `Timestamp`, `Body`, no header row
/// - Delimiter: [`OutputConfig::delimiter`] (`|_|` by default)
/// - One record per line, `\n` terminated
/// - Encoding: UTF-8
pub fn write_delimited(
    records: &[Record],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let content = to_delimited(records, config)?;
    write_atomic(output_path, content.as_bytes())
}

/// Renders records as delimited lines.
///
/// An empty slice renders to an empty string.
pub fn to_delimited(records: &[Record], config: &OutputConfig) -> Result<String> {
    let mut output = String::new();

    for record in records {
        let fields = [
            (Field::Author, record.author()),
            (Field::Timestamp, record.timestamp()),
            (Field::Message, record.body()),
        ];

        for (position, (field, value)) in fields.into_iter().enumerate() {
            if position > 0 {
                output.push_str(&config.delimiter);
            }
            output.push_str(&render_field(record, field, value, config)?);
        }
        output.push('\n');
    }

    Ok(output)
}

fn render_field(record: &Record, field: Field, value: &str, config: &OutputConfig) -> Result<String> {
    let delimiter = config.delimiter.as_str();
    if delimiter.is_empty() {
        return Ok(value.to_string());
    }

    match config.collision {
        CollisionPolicy::Escape => Ok(escape_delimiter(value, delimiter)),
        CollisionPolicy::Reject if collides(value, delimiter) => {
            Err(ChatlogError::DelimiterCollision {
                line: record.line(),
                field,
                delimiter: delimiter.to_string(),
            })
        }
        CollisionPolicy::Reject | CollisionPolicy::Ignore => Ok(value.to_string()),
    }
}

/// Returns `true` if `value` would blur a field boundary next to `delimiter`.
///
/// Besides containing the delimiter, a field collides when it ends with a
/// proper prefix of it (`x|_` before `|_|`) or starts with a proper suffix
/// of it (`_|x` after `|_|`).
pub fn collides(value: &str, delimiter: &str) -> bool {
    if delimiter.is_empty() {
        return false;
    }
    value.contains(delimiter)
        || proper_prefixes(delimiter).any(|prefix| value.ends_with(prefix))
        || proper_suffixes(delimiter).any(|suffix| value.starts_with(suffix))
}

fn proper_prefixes(delimiter: &str) -> impl Iterator<Item = &str> {
    delimiter
        .char_indices()
        .skip(1)
        .map(move |(i, _)| &delimiter[..i])
}

fn proper_suffixes(delimiter: &str) -> impl Iterator<Item = &str> {
    delimiter
        .char_indices()
        .skip(1)
        .map(move |(i, _)| &delimiter[i..])
}

/// Escapes a field so that a row splits back into its fields on `delimiter`.
///
/// - `\` is doubled
/// - inside the field, a backslash is inserted after the first character of
///   each delimiter occurrence, so `|_|` becomes `|\_|`
/// - a field starting with a proper suffix of the delimiter gets a leading
///   `\`, one ending with a proper prefix gets a trailing `\`
/// - a single-character delimiter is written as its `\u{..}` escape
///
/// [`unescape_delimiter`] reverses it. Delimiters containing `\` are not
/// supported.
///
/// ```rust
/// use chatlog_csv::core::output::{escape_delimiter, unescape_delimiter};
///
/// assert_eq!(escape_delimiter("a|_|b", "|_|"), r"a|\_|b");
/// assert_eq!(escape_delimiter("x|_", "|_|"), r"x|_\");
/// assert_eq!(escape_delimiter(r"p|\_|q", "|_|"), r"p|\\_|q");
/// assert_eq!(escape_delimiter("a;b", ";"), r"a\u{3b}b");
/// assert_eq!(unescape_delimiter(r"p|\\_|q", "|_|"), r"p|\_|q");
/// ```
pub fn escape_delimiter(value: &str, delimiter: &str) -> String {
    let mut chars = delimiter.chars();
    let Some(first) = chars.next() else {
        return value.to_string();
    };
    let single = chars.next().is_none();

    let mut escaped = String::with_capacity(value.len() + 8);
    let mut rest = value;

    while let Some(c) = rest.chars().next() {
        if c == '\\' {
            escaped.push_str("\\\\");
        } else if rest.starts_with(delimiter) {
            if single {
                escaped.push_str(&format!("\\u{{{:x}}}", u32::from(first)));
            } else {
                escaped.push(first);
                escaped.push('\\');
            }
        } else {
            escaped.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    if !single {
        if proper_suffixes(delimiter).any(|suffix| escaped.starts_with(suffix)) {
            escaped.insert(0, '\\');
        }
        if proper_prefixes(delimiter).any(|prefix| escaped.ends_with(prefix)) {
            escaped.push('\\');
        }
    }

    escaped
}

/// Reverses [`escape_delimiter`] on one field.
///
/// `\\` becomes `\`; for a single-character delimiter `\u{..}` becomes the
/// character; any other backslash is dropped.
pub fn unescape_delimiter(value: &str, delimiter: &str) -> String {
    let single = delimiter.chars().count() == 1;
    let mut unescaped = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        if let Some(tail) = rest.strip_prefix('\\') {
            unescaped.push('\\');
            rest = tail;
        } else if single {
            if let Some((decoded, tail)) = decode_codepoint(rest) {
                unescaped.push(decoded);
                rest = tail;
            }
        }
    }

    unescaped
}

fn decode_codepoint(rest: &str) -> Option<(char, &str)> {
    let body = rest.strip_prefix("u{")?;
    let end = body.find('}')?;
    let decoded = u32::from_str_radix(&body[..end], 16)
        .ok()
        .and_then(char::from_u32)?;
    Some((decoded, &body[end + 1..]))
}
