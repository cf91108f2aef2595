//! Record builder: the stateful line scan over a chat log.
//!
//! The export only writes the author and timestamp once per message group,
//! so the scan carries both forward in a [`ScanState`] and stamps them on
//! every record it emits until the next group overrides them.
//!
//! # Example
//!
//! ```rust
//! use chatlog_csv::Extractor;
//!
//! let html = r#"<span class="chatlog__author-name" title="Alice#1234">Alice</span>
//! <span class="chatlog__timestamp">10:00 AM</span>
//! <div class="chatlog__content"><div class="markdown">Hello!</div></div>
//! "#;
//!
//! let records = Extractor::new().extract_str(html)?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].author(), "Alice");
//! assert_eq!(records[0].timestamp(), "10:00 AM");
//! assert_eq!(records[0].body(), "Hello!");
//! # Ok::<(), chatlog_csv::ChatlogError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::Record;
use crate::config::ExtractConfig;
use crate::error::{ChatlogError, Result};
use crate::parsing::markers::{
    AUTHOR_MARKER, EMBED_MARKER, IMAGE_MARKER, IMAGE_SENTINEL, MESSAGE_MARKER, TIMESTAMP_MARKER,
};
use crate::parsing::{clean, extract_author, extract_message, extract_timestamp, reassemble};
use crate::tokenizer::{IdentityTokenizer, Tokenizer};

/// Author and timestamp carried across lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Last seen author, empty before the first author marker.
    pub author: String,
    /// Last seen timestamp, empty before the first timestamp marker.
    pub timestamp: String,
}

impl ScanState {
    fn record(&self, body: impl Into<String>, line: usize) -> Record {
        Record::new(self.author.clone(), self.timestamp.clone(), body).with_line(line)
    }
}

/// Extracts [`Record`]s from a DiscordChatExporter HTML document.
pub struct Extractor {
    config: ExtractConfig,
    tokenizer: Box<dyn Tokenizer>,
}

impl Extractor {
    /// Creates an extractor with default configuration and the identity
    /// tokenizer.
    pub fn new() -> Self {
        Self::with_config(ExtractConfig::default())
    }

    /// Creates an extractor with custom configuration.
    pub fn with_config(config: ExtractConfig) -> Self {
        Self {
            config,
            tokenizer: Box::new(IdentityTokenizer),
        }
    }

    /// Replaces the body tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Returns the name of the active tokenizer.
    pub fn tokenizer_name(&self) -> &'static str {
        self.tokenizer.name()
    }

    /// Reads a whole chat log file and extracts its records.
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ChatlogError::io(path, e))?;
        self.extract_str(&content)
    }

    /// Extracts records from an in-memory document.
    pub fn extract_str(&self, content: &str) -> Result<Vec<Record>> {
        let lines: Vec<&str> = content.lines().collect();
        self.extract_lines(&lines)
    }

    /// Extracts records from pre-split physical lines, in document order.
    ///
    /// # Errors
    ///
    /// - [`ChatlogError::UnterminatedLine`] if a message never closes
    /// - [`ChatlogError::Extraction`] if a marker is present but its pattern
    ///   does not match
    pub fn extract_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<Record>> {
        let mut state = ScanState::default();
        let mut records = Vec::new();
        let mut index = 0;

        while index < lines.len() {
            if self.config.limit_reached(records.len()) {
                break;
            }

            let line = lines[index].as_ref();
            if line.trim().is_empty() {
                index += 1;
                continue;
            }

            if line.contains(IMAGE_MARKER) {
                if !self.config.skip_images {
                    records.push(state.record(IMAGE_SENTINEL, index));
                }
                index += 1;
                continue;
            }

            if line.contains(AUTHOR_MARKER) {
                state.author = extract_author(line)
                    .map_err(|e| e.at_line(index))?
                    .to_string();
            }

            if line.contains(TIMESTAMP_MARKER) {
                state.timestamp = extract_timestamp(line)
                    .map_err(|e| e.at_line(index))?
                    .to_string();
            }

            if line.contains(MESSAGE_MARKER) && !line.contains(EMBED_MARKER) {
                let logical = reassemble(lines, index)?;
                let body = self
                    .message_body(&logical.text)
                    .map_err(|e| e.at_line(index))?;

                if body.chars().count() > self.config.min_body_len {
                    records.push(state.record(body, index));
                }

                // Continuation lines belong to this message
                index = logical.last_index + 1;
                continue;
            }

            index += 1;
        }

        Ok(records)
    }

    /// Extracts, cleans and tokenizes the body of one logical line.
    pub fn message_body(&self, logical: &str) -> Result<String> {
        let raw = extract_message(logical)?;
        Ok(self.tokenizer.tokenize(&clean(raw)))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}
