//! Markdown output formatter

use super::{OutputFormatter, SentenceRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs sentences as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
    current_source: Option<String>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
            current_source: None,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, sentence: &SentenceRecord) -> Result<()> {
        if self.current_source.as_deref() != Some(sentence.source.as_str()) {
            if self.current_source.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {}", sentence.source)?;
            writeln!(self.writer)?;
            self.current_source = Some(sentence.source.clone());
        }

        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", self.sentence_count, sentence.text.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
