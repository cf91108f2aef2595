//! Marker-based parsing of DiscordChatExporter HTML.
//!
//! Every stage here is a pure function over strings; the stateful line scan
//! lives in [`crate::extractor`].
//!
//! - [`markers`] - named marker tokens, patterns and sentinels
//! - [`reassemble`] - joins multi-line elements into one logical line
//! - [`fields`] - author, timestamp and message extractors
//! - [`cleaner`] - emoji, mention and span cleanup
//! - [`entities`] - HTML entity repair

pub mod cleaner;
pub mod entities;
pub mod fields;
pub mod markers;
pub mod reassemble;

// Re-export commonly used items
pub use cleaner::clean;
pub use entities::repair;
pub use fields::{extract_author, extract_message, extract_timestamp};
pub use markers::{EMOJI_SENTINEL, IMAGE_SENTINEL, LINK_SENTINEL};
pub use reassemble::{LogicalLine, reassemble};
