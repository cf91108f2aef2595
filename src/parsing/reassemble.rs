//! Logical line reassembly.
//!
//! The export breaks long message bodies over several physical lines. A
//! logical line keeps absorbing physical lines until one of them ends with
//! [`LINE_CLOSE`]. A line ending in [`EMPHASIS_CLOSE`] does not count: the
//! `>` belongs to the inline `</em>` tag, not to the element.

use super::markers::{EMPHASIS_CLOSE, LINE_CLOSE, LINE_JOIN};
use crate::error::{ChatlogError, Result};

/// One or more physical lines joined into a single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Joined content, physical lines separated by [`LINE_JOIN`].
    pub text: String,
    /// Index of the last physical line consumed.
    pub last_index: usize,
}

/// Joins physical lines from `start` until the element closes.
///
/// # Errors
///
/// Returns [`ChatlogError::UnterminatedLine`] if the input runs out first.
///
/// # Example
///
/// ```rust
/// use chatlog_csv::parsing::reassemble::reassemble;
///
/// let lines = ["<div class=\"markdown\">first", "second</div></div>"];
/// let logical = reassemble(&lines, 0).unwrap();
/// assert_eq!(logical.text, "<div class=\"markdown\">first. second</div></div>");
/// assert_eq!(logical.last_index, 1);
/// ```
pub fn reassemble<S: AsRef<str>>(lines: &[S], start: usize) -> Result<LogicalLine> {
    let mut text = String::new();

    for (index, raw) in lines.iter().enumerate().skip(start) {
        let raw = trim_newline(raw.as_ref());
        if index > start {
            text.push_str(LINE_JOIN);
        }
        text.push_str(raw);

        if closes(raw) {
            return Ok(LogicalLine {
                text,
                last_index: index,
            });
        }
    }

    Err(ChatlogError::unterminated(start))
}

/// Returns `true` if a physical line ends its element.
pub fn closes(raw: &str) -> bool {
    let raw = trim_newline(raw);
    raw.ends_with(LINE_CLOSE) && !raw.ends_with(EMPHASIS_CLOSE)
}

fn trim_newline(raw: &str) -> &str {
    raw.trim_end_matches(['\n', '\r'])
}
