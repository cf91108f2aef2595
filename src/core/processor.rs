use std::fs;
use std::path::Path;

use crate::Record;
use crate::config::{ExtractConfig, OutputConfig};
use crate::core::output::write_delimited;
use crate::error::{ChatlogError, Result};
use crate::extractor::Extractor;
use crate::record::RecordKind;

/// Statistics about an extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub text: usize,
    pub images: usize,
    pub links: usize,
    /// Text records containing at least one emoji
    pub with_emoji: usize,
    /// Physical lines in the input document, when known
    pub lines: usize,
}

impl ExtractionStats {
    pub fn from_records(records: &[Record]) -> Self {
        let mut stats = Self::default();
        for record in records {
            match record.kind() {
                RecordKind::Text => {
                    stats.text += 1;
                    if record.emoji_count() > 0 {
                        stats.with_emoji += 1;
                    }
                }
                RecordKind::Image => stats.images += 1,
                RecordKind::Link => stats.links += 1,
            }
        }
        stats
    }

    /// Records the number of physical lines scanned.
    #[must_use]
    pub fn with_lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    pub fn total(&self) -> usize {
        self.text + self.images + self.links
    }

    /// Share of records that carry real text, in percent.
    pub fn text_ratio(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.text as f64 / self.total() as f64 * 100.0
    }
}

/// Full pipeline: read the chat log, extract, write delimited output.
///
/// Nothing is written unless the whole document was extracted.
pub fn extract_and_write(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    extract_config: ExtractConfig,
    output_config: &OutputConfig,
) -> Result<ExtractionStats> {
    let input = input.as_ref();
    let content = fs::read_to_string(input).map_err(|e| ChatlogError::io(input, e))?;

    let records = Extractor::with_config(extract_config).extract_str(&content)?;
    write_delimited(&records, output, output_config)?;

    Ok(ExtractionStats::from_records(&records).with_lines(content.lines().count()))
}
