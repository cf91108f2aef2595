//! Message body cleaning.
//!
//! A raw body still carries the inline markup of the export. [`clean`] runs
//! four stages in a fixed order, each replacing every leftmost-first,
//! non-overlapping match in one pass before the next stage starts:
//!
//! 1. emoji images become [`EMOJI_SENTINEL`]
//! 2. mention spans become the bare display name, padded with spaces
//! 3. any remaining `<span>` tags are dropped, their text kept
//! 4. HTML entities are repaired

use std::sync::LazyLock;

use regex::Regex;

use super::entities::repair;
use super::markers::{EMOJI_PATTERN, EMOJI_SENTINEL, MENTION_PATTERN, SPAN_TAG_PATTERN};

static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMOJI_PATTERN).unwrap());

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(MENTION_PATTERN).unwrap());

static SPAN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(SPAN_TAG_PATTERN).unwrap());

/// Cleans a raw message body into plain text.
///
/// Cleaning a cleaned body again is a no-op only when the body holds no
/// entity-like text. Entity repair runs last, so escaped markup or a
/// double-escaped entity decodes into something the earlier stages match
/// on a second pass.
///
/// # Example
///
/// ```rust
/// use chatlog_csv::parsing::cleaner::clean;
///
/// let raw = r#"Hello <span class="mention">@<span>Bob</span></span>!"#;
/// assert_eq!(clean(raw), "Hello  Bob !");
///
/// let escaped = "&lt;span&gt;hi&lt;/span&gt; &amp;amp;";
/// assert_eq!(clean(escaped), "<span>hi</span> &amp;");
/// assert_eq!(clean(&clean(escaped)), "hi &");
/// ```
pub fn clean(body: &str) -> String {
    let text = replace_emojis(body);
    let text = replace_mentions(&text);
    let text = strip_spans(&text);
    repair(&text)
}

/// Replaces every emoji image with [`EMOJI_SENTINEL`].
pub fn replace_emojis(text: &str) -> String {
    EMOJI_RE.replace_all(text, EMOJI_SENTINEL).into_owned()
}

/// Replaces every mention span with ` <name> `.
pub fn replace_mentions(text: &str) -> String {
    MENTION_RE.replace_all(text, " ${1} ").into_owned()
}

/// Removes every `<span ...>` and `</span>` tag.
pub fn strip_spans(text: &str) -> String {
    SPAN_TAG_RE.replace_all(text, "").into_owned()
}

/// Counts the emoji sentinels in a cleaned body.
pub fn count_emojis(cleaned: &str) -> usize {
    cleaned.matches(EMOJI_SENTINEL.trim()).count()
}
