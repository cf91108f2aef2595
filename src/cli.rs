//! Command-line interface definition using clap.
//!
//! The CLI takes a single option, `-c <path>`, naming the chat log to read.
//! Output always goes to [`DEFAULT_OUTPUT`] in the working directory.

use std::path::{Path, PathBuf};

use clap::Parser;

pub use crate::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Convert a DiscordChatExporter HTML chat log into `chat.csv`
/// (author|_|timestamp|_|message per line).
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlog-csv")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlog-csv
    chatlog-csv -c exports/general.html")]
pub struct Args {
    /// Custom path for the chat log HTML file
    #[arg(short = 'c', value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}

impl Args {
    /// Path of the chat log to read.
    pub fn input_path(&self) -> &Path {
        &self.input
    }

    /// Path of the delimited output file.
    pub fn output_path(&self) -> &'static Path {
        Path::new(DEFAULT_OUTPUT)
    }
}
