//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One sentence ready for output
///
/// Offsets always refer to the original input. When punctuation is
/// normalized, `text` is the rewritten sentence and may differ from
/// `input[start..end]` in length and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Input file the sentence came from
    pub source: String,
    /// Sentence text, normalized if requested
    pub text: String,
    /// Byte offset in the source text
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Character offset in the source text
    pub char_start: usize,
    /// End character offset (exclusive)
    pub char_end: usize,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single sentence
    fn format_sentence(&mut self, sentence: &SentenceRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) fn record(text: &str, start: usize) -> SentenceRecord {
    SentenceRecord {
        source: "test.txt".to_string(),
        text: text.to_string(),
        start,
        end: start + text.len(),
        char_start: start,
        char_end: start + text.chars().count(),
    }
}
