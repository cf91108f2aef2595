//! Unified error types for chatlog-csv.
//!
//! This module provides a single [`ChatlogError`] enum that covers every
//! failure in the extraction pipeline. All of them are fatal: the pipeline
//! never retries and never leaves a half-written output file behind.
//!
//! # Error Taxonomy
//!
//! - **Parse** errors: the document ended while a logical line was still open
//! - **Extraction** errors: a marker was present but its pattern did not match
//! - **IO** errors: the input could not be read or the output not written

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for chatlog-csv operations.
///
/// # Example
///
/// ```rust
/// use chatlog_csv::error::Result;
/// use chatlog_csv::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlogError>;

/// The error type for all chatlog-csv operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlogError {
    /// An I/O error occurred on a specific file.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist or isn't readable
    /// - The output directory is not writable
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        /// The file that could not be read or written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The document ended while a logical line was still open.
    ///
    /// `line` is the 0-based index of the physical line where the
    /// unterminated element started.
    #[error("Malformed chat log: element starting at line {line} is never closed")]
    UnterminatedLine {
        /// Index of the first physical line of the open element
        line: usize,
    },

    /// A field marker was detected but its full pattern was not found.
    ///
    /// Under a well-formed export this cannot happen; it signals that the
    /// presence check and the extraction pattern disagree.
    #[error("Failed to extract {field} at line {line}")]
    Extraction {
        /// Which field was being extracted
        field: Field,
        /// Index of the physical line being processed
        line: usize,
    },

    /// A field contains the output delimiter and the writer was configured
    /// to reject such records.
    #[error("Record from line {line} has a {field} containing the delimiter '{delimiter}'")]
    DelimiterCollision {
        /// Source line of the offending record
        line: usize,
        /// The field that contains the delimiter
        field: Field,
        /// The configured delimiter
        delimiter: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The record field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Author,
    Timestamp,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Author => write!(f, "author"),
            Field::Timestamp => write!(f, "timestamp"),
            Field::Message => write!(f, "message"),
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlogError {
    /// Creates an I/O error bound to the path that failed.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        ChatlogError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an unterminated line error.
    pub fn unterminated(line: usize) -> Self {
        ChatlogError::UnterminatedLine { line }
    }

    /// Creates an extraction error for `field`.
    ///
    /// The line index is unknown at the extraction site and filled in by the
    /// driver through [`ChatlogError::at_line`].
    pub fn extraction(field: Field) -> Self {
        ChatlogError::Extraction { field, line: 0 }
    }

    /// Attaches a source line index to an extraction error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_line(self, index: usize) -> Self {
        match self {
            ChatlogError::Extraction { field, .. } => ChatlogError::Extraction { field, line: index },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlogError::Io { .. })
    }

    /// Returns `true` if the document was malformed.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatlogError::UnterminatedLine { .. })
    }

    /// Returns `true` if this is a field extraction error.
    pub fn is_extraction(&self) -> bool {
        matches!(self, ChatlogError::Extraction { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = ChatlogError::io(
            "logs/chatlog.html",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("logs/chatlog.html"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_unterminated_display() {
        let err = ChatlogError::unterminated(42);
        let display = err.to_string();
        assert!(display.contains("Malformed"));
        assert!(display.contains("42"));
    }

    #[test]
    fn test_extraction_display() {
        let err = ChatlogError::extraction(Field::Timestamp).at_line(7);
        assert_eq!(err.to_string(), "Failed to extract timestamp at line 7");
    }

    #[test]
    fn test_at_line_leaves_other_variants() {
        let err = ChatlogError::unterminated(3).at_line(9);
        assert!(matches!(err, ChatlogError::UnterminatedLine { line: 3 }));
    }

    #[test]
    fn test_delimiter_collision_display() {
        let err = ChatlogError::DelimiterCollision {
            line: 12,
            field: Field::Message,
            delimiter: "|_|".into(),
        };
        let display = err.to_string();
        assert!(display.contains("12"));
        assert!(display.contains("message"));
        assert!(display.contains("|_|"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err = ChatlogError::io(
            "chat.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatlogError::io("x", io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_parse());
        assert!(!io_err.is_extraction());

        let parse_err = ChatlogError::unterminated(0);
        assert!(parse_err.is_parse());
        assert!(!parse_err.is_io());

        let extract_err = ChatlogError::extraction(Field::Author);
        assert!(extract_err.is_extraction());
        assert!(!extract_err.is_parse());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlogError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Author.to_string(), "author");
        assert_eq!(Field::Timestamp.to_string(), "timestamp");
        assert_eq!(Field::Message.to_string(), "message");
    }

    #[test]
    fn test_error_debug() {
        let err = ChatlogError::unterminated(1);
        let debug = format!("{:?}", err);
        assert!(debug.contains("UnterminatedLine"));
    }
}
