//! Configuration types for extraction and output.
//!
//! Plain, serializable structs without any CLI framework dependencies.
//!
//! - [`ExtractConfig`] - controls the line scan
//! - [`OutputConfig`] - controls the delimited writer
//!
//! # Example
//!
//! ```rust
//! use chatlog_csv::config::{CollisionPolicy, ExtractConfig, OutputConfig};
//!
//! let extract = ExtractConfig::new().with_max_records(95);
//! let output = OutputConfig::new().with_collision(CollisionPolicy::Reject);
//! ```

use serde::{Deserialize, Serialize};

/// Default input path of the CLI.
pub const DEFAULT_INPUT: &str = "logs/chatlog.html";

/// Fixed output file name of the CLI.
pub const DEFAULT_OUTPUT: &str = "chat.csv";

/// Field separator of the delimited output.
pub const DEFAULT_DELIMITER: &str = "|_|";

/// Configuration for the extraction scan.
///
/// # Example
///
/// ```rust
/// use chatlog_csv::config::ExtractConfig;
///
/// let config = ExtractConfig::new()
///     .with_max_records(100)
///     .with_skip_images(true);
/// assert_eq!(config.max_records, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Stop after this many records (default: unbounded)
    pub max_records: Option<usize>,

    /// Bodies must be strictly longer than this many characters (default: 1)
    ///
    /// Filters out stray whitespace and icon-only artifacts.
    pub min_body_len: usize,

    /// Do not emit `$IMAGE$` records for attachments (default: false)
    pub skip_images: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_records: None,
            min_body_len: 1,
            skip_images: false,
        }
    }
}

impl ExtractConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of extracted records.
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }

    /// Sets the body length threshold.
    #[must_use]
    pub fn with_min_body_len(mut self, len: usize) -> Self {
        self.min_body_len = len;
        self
    }

    /// Sets whether attachments are skipped.
    #[must_use]
    pub fn with_skip_images(mut self, skip: bool) -> Self {
        self.skip_images = skip;
        self
    }

    /// Returns `true` once `count` records reach the cap.
    pub fn limit_reached(&self, count: usize) -> bool {
        self.max_records.is_some_and(|max| count >= max)
    }
}

/// What the delimited writer does with a field that contains the delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Break each occurrence with a backslash (`|_|` becomes `|\_|`)
    #[default]
    Escape,
    /// Fail with [`ChatlogError::DelimiterCollision`](crate::ChatlogError::DelimiterCollision)
    Reject,
    /// Write the field as is, corrupting column alignment
    Ignore,
}

/// Configuration for delimited output.
///
/// # Example
///
/// ```rust
/// use chatlog_csv::config::OutputConfig;
///
/// let config = OutputConfig::new().with_delimiter(";");
/// assert_eq!(config.delimiter, ";");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Field separator (default: `|_|`)
    pub delimiter: String,

    /// Delimiter collision handling (default: escape)
    pub collision: CollisionPolicy,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            collision: CollisionPolicy::default(),
        }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field separator.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the collision policy.
    #[must_use]
    pub fn with_collision(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }
}
