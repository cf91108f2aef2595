//! Field extractors.
//!
//! Pure functions isolating one field from a line of markup. They are only
//! called after the matching presence marker was seen, so a missing pattern
//! is reported as [`ChatlogError::Extraction`].

use std::sync::LazyLock;

use regex::Regex;

use super::markers::{
    AUTHOR_PATTERN, LINK_SENTINEL, MESSAGE_LINK_MARKER, MESSAGE_PATTERN, MESSAGE_PREFIX,
    MESSAGE_SUFFIX, RAW_LINK_MARKER, TIMESTAMP_PATTERN,
};
use crate::error::{ChatlogError, Field, Result};

static AUTHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(AUTHOR_PATTERN).unwrap());

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).unwrap());

static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(MESSAGE_PATTERN).unwrap());

/// Returns the author name, without its `#1234` discriminator.
///
/// ```rust
/// use chatlog_csv::parsing::fields::extract_author;
///
/// let line = r#"<span class="chatlog__author-name" title="Alice#1234">Alice</span>"#;
/// assert_eq!(extract_author(line).unwrap(), "Alice");
/// ```
pub fn extract_author(line: &str) -> Result<&str> {
    capture(&AUTHOR_RE, line).ok_or_else(|| ChatlogError::extraction(Field::Author))
}

/// Returns the inner text of the timestamp span.
pub fn extract_timestamp(line: &str) -> Result<&str> {
    capture(&TIMESTAMP_RE, line).ok_or_else(|| ChatlogError::extraction(Field::Timestamp))
}

/// Returns the raw message body of a logical line.
///
/// Links short-circuit to [`LINK_SENTINEL`]. Otherwise the first
/// `markdown">...</div` span is located and its inner markup returned
/// verbatim, still to be cleaned.
pub fn extract_message(line: &str) -> Result<&str> {
    if line.contains(RAW_LINK_MARKER) {
        return Ok(LINK_SENTINEL);
    }

    let span = MESSAGE_RE
        .find(line)
        .ok_or_else(|| ChatlogError::extraction(Field::Message))?
        .as_str();

    if span.starts_with(MESSAGE_LINK_MARKER) {
        return Ok(LINK_SENTINEL);
    }

    Ok(&span[MESSAGE_PREFIX.len()..span.len() - MESSAGE_SUFFIX.len()])
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
