//! Extracted chat record.
//!
//! A [`Record`] is one row of output: who spoke, when, and what they said.
//! Author and timestamp are the *last seen* values at the point the record
//! was found, since the export only repeats them at the start of each
//! message group.
//!
//! # Examples
//!
//! ```
//! use chatlog_csv::{Record, RecordKind};
//!
//! let record = Record::new("Alice", "19-Oct-18 10:00 AM", "Hello!").with_line(12);
//! assert_eq!(record.author(), "Alice");
//! assert_eq!(record.kind(), RecordKind::Text);
//! assert!(record.datetime().is_some());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::cleaner::count_emojis;
use crate::parsing::markers::{IMAGE_SENTINEL, LINK_SENTINEL};

/// Timestamp layouts used by DiscordChatExporter HTML exports.
const DATETIME_FORMATS: &[&str] = &[
    "%d-%b-%y %I:%M %p",
    "%d-%b-%y %I:%M:%S %p",
    "%d-%b-%Y %I:%M %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// One message, attachment, or link extracted from the chat log.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `author` | `String` | Last seen author name, `""` before the first one |
/// | `timestamp` | `String` | Last seen timestamp text, verbatim |
/// | `body` | `String` | Cleaned message text or a sentinel |
/// | `line` | `usize` | 0-based physical line the record starts on |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the author, discriminator removed.
    pub author: String,

    /// Timestamp text exactly as shown in the export.
    pub timestamp: String,

    /// Cleaned message body, or `$IMAGE$` / `$LINK$`.
    pub body: String,

    /// Source line index.
    #[serde(default)]
    pub line: usize,
}

/// What a record's body represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Regular message text
    Text,
    /// Attachment, body is `$IMAGE$`
    Image,
    /// Link-only message, body is `$LINK$`
    Link,
}

impl Record {
    /// Creates a record with line index 0.
    pub fn new(
        author: impl Into<String>,
        timestamp: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            timestamp: timestamp.into(),
            body: body.into(),
            line: 0,
        }
    }

    /// Builder method to set the source line index.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Classifies the body by its sentinel.
    pub fn kind(&self) -> RecordKind {
        match self.body.as_str() {
            IMAGE_SENTINEL => RecordKind::Image,
            LINK_SENTINEL => RecordKind::Link,
            _ => RecordKind::Text,
        }
    }

    /// Number of emoji sentinels in the body.
    pub fn emoji_count(&self) -> usize {
        count_emojis(&self.body)
    }

    /// Parses the timestamp text into a date and time.
    ///
    /// Returns `None` for time-only timestamps ("10:00 AM") and unknown
    /// layouts; the verbatim text stays available through [`timestamp`](Self::timestamp).
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        let text = self.timestamp.trim();
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Text => write!(f, "text"),
            RecordKind::Image => write!(f, "image"),
            RecordKind::Link => write!(f, "link"),
        }
    }
}
