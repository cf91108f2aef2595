//! Run-level processing for chatlog-csv.
//!
//! This module contains:
//! - [`processor`] - the read → extract → write pipeline and [`ExtractionStats`]
//! - [`output`] - writers (delimited, JSONL)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chatlog_csv::config::{ExtractConfig, OutputConfig};
//! use chatlog_csv::core::extract_and_write;
//!
//! let stats = extract_and_write(
//!     "logs/chatlog.html",
//!     "chat.csv",
//!     ExtractConfig::new(),
//!     &OutputConfig::new(),
//! )?;
//! println!("{} records", stats.total());
//! # Ok::<(), chatlog_csv::ChatlogError>(())
//! ```

pub mod output;
pub mod processor;

pub use output::{to_delimited, write_delimited};
#[cfg(feature = "json-output")]
pub use output::{to_jsonl, write_jsonl};

pub use processor::{ExtractionStats, extract_and_write};
