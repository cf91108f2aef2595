//! Post-processing hook for cleaned message bodies.
//!
//! Every body produced by the message branch of the extractor is passed
//! through a [`Tokenizer`] right before the record is emitted. The default
//! [`IdentityTokenizer`] returns the body unchanged.
//!
//! # Example
//!
//! ```rust
//! use chatlog_csv::tokenizer::Tokenizer;
//! use chatlog_csv::Extractor;
//!
//! struct Lowercase;
//!
//! impl Tokenizer for Lowercase {
//!     fn name(&self) -> &'static str {
//!         "lowercase"
//!     }
//!
//!     fn tokenize(&self, body: &str) -> String {
//!         body.to_lowercase()
//!     }
//! }
//!
//! let extractor = Extractor::new().with_tokenizer(Lowercase);
//! assert_eq!(extractor.tokenizer_name(), "lowercase");
//! ```

/// Transforms a cleaned message body.
pub trait Tokenizer: Send + Sync {
    /// Returns the name of the tokenizer.
    fn name(&self) -> &'static str;

    /// Returns the transformed body.
    fn tokenize(&self, body: &str) -> String;
}

/// Tokenizer that leaves bodies untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTokenizer;

impl Tokenizer for IdentityTokenizer {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn tokenize(&self, body: &str) -> String {
        body.to_string()
    }
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn name(&self) -> &'static str {
        "closure"
    }

    fn tokenize(&self, body: &str) -> String {
        self(body)
    }
}
