//! # chatlog-csv
//!
//! Flattens DiscordChatExporter HTML chat logs into a delimited dataset of
//! `author|_|timestamp|_|message` rows, ready for downstream analysis.
//!
//! ## Overview
//!
//! The export is recognized through fixed marker substrings rather than an
//! HTML parser. A single sequential scan:
//!
//! - tracks the last seen author and timestamp
//! - joins message bodies that span several physical lines
//! - extracts and cleans each body (emojis, mentions, spans, HTML entities)
//! - emits one [`Record`] per message, attachment, or link
//!
//! Attachments and links are replaced by the `$IMAGE$` and `$LINK$`
//! sentinels, emoji images by ` $EMOJI$ `.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlog_csv::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = Extractor::new().extract_file("logs/chatlog.html")?;
//!     write_delimited(&records, "chat.csv", &OutputConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`extractor`] - the stateful line scan ([`Extractor`])
//! - [`parsing`] - markers, reassembly, field extraction, cleaning, entities
//! - [`tokenizer`] - body post-processing hook ([`Tokenizer`](tokenizer::Tokenizer))
//! - [`record`] - [`Record`] and [`RecordKind`]
//! - [`config`] - [`ExtractConfig`](config::ExtractConfig), [`OutputConfig`](config::OutputConfig)
//! - [`core`] - writers and the end-to-end pipeline
//! - [`cli`] - CLI arguments (feature `cli`)
//! - [`error`] - [`ChatlogError`], [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extractor;
pub mod parsing;
pub mod record;
pub mod tokenizer;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlogError, Result};
pub use extractor::Extractor;
pub use record::{Record, RecordKind};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlog_csv::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Record, RecordKind};

    pub use crate::error::{ChatlogError, Result};

    pub use crate::extractor::Extractor;
    pub use crate::tokenizer::{IdentityTokenizer, Tokenizer};

    pub use crate::config::{CollisionPolicy, ExtractConfig, OutputConfig};

    pub use crate::core::processor::{ExtractionStats, extract_and_write};

    pub use crate::core::output::{to_delimited, write_delimited};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_jsonl, write_jsonl};
}
