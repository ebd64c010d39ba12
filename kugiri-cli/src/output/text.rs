//! Plain text output formatter

use super::{OutputFormatter, SentenceRecord};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &SentenceRecord) -> Result<()> {
        let text = sentence.text.trim();
        if !text.is_empty() {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
