//! Output writers.
//!
//! - [`write_delimited`] / [`to_delimited`] - one record per line, fields
//!   joined by the configured delimiter (`|_|` by default), no header
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines - requires `json-output` feature
//!
//! Writers render the complete output in memory first and then replace the
//! destination file atomically, so a failed run never leaves a half-written
//! file behind.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatlog_csv::Result<()> {
//! use chatlog_csv::config::OutputConfig;
//! use chatlog_csv::core::output::{to_delimited, write_delimited};
//! use chatlog_csv::Record;
//!
//! let records = vec![Record::new("Alice", "10:00 AM", "Hello!")];
//!
//! write_delimited(&records, "chat.csv", &OutputConfig::new())?;
//!
//! let text = to_delimited(&records, &OutputConfig::new())?;
//! assert_eq!(text, "Alice|_|10:00 AM|_|Hello!\n");
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ChatlogError, Result};

mod delimited_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

pub use delimited_writer::{
    collides, escape_delimiter, to_delimited, unescape_delimiter, write_delimited,
};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Replaces `path` with `content` in one step.
///
/// The content goes to a temporary file next to the destination, which is
/// then renamed over it.
pub fn write_atomic(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| ChatlogError::io(dir, e))?;
    file.write_all(content)
        .and_then(|()| file.flush())
        .map_err(|e| ChatlogError::io(path, e))?;
    file.persist(path)
        .map_err(|e| ChatlogError::io(path, e.error))?;

    Ok(())
}
