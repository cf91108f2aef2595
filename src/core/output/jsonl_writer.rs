//! JSON Lines (JSONL) output writer.
//!
//! Carries the same rows as the delimited writer, plus the record kind and
//! source line, without any delimiter ambiguity.

use std::path::Path;

use serde::Serialize;

use super::write_atomic;
use crate::Record;
use crate::error::Result;
use crate::record::RecordKind;

/// Borrowed view of a record for JSONL output.
#[derive(Serialize)]
struct JsonlRecord<'a> {
    author: &'a str,
    timestamp: &'a str,
    body: &'a str,
    kind: RecordKind,
    line: usize,
}

impl<'a> From<&'a Record> for JsonlRecord<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            author: record.author(),
            timestamp: record.timestamp(),
            body: record.body(),
            kind: record.kind(),
            line: record.line(),
        }
    }
}

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"author":"Alice","timestamp":"10:00 AM","body":"Hello","kind":"text","line":12}
/// {"author":"Alice","timestamp":"10:00 AM","body":"$IMAGE$","kind":"image","line":15}
/// ```
pub fn write_jsonl(records: &[Record], output_path: impl AsRef<Path>) -> Result<()> {
    let content = to_jsonl(records)?;
    write_atomic(output_path, content.as_bytes())
}

/// Renders records as JSON Lines.
pub fn to_jsonl(records: &[Record]) -> Result<String> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(&JsonlRecord::from(record))?);
        output.push('\n');
    }
    Ok(output)
}
