//! Sentence segmentation
//!
//! A sentence ends at the first run of sentence enders after the current
//! position, together with any whitespace that follows the run. Text after
//! the last ender is flushed as a final sentence, so the spans always cover
//! the input exactly.

use std::iter::FusedIterator;

use serde::Serialize;

use crate::language::LocaleRule;

/// A contiguous sentence in the source text
///
/// Offsets are half-open byte offsets into the input and always fall on
/// character boundaries. Code point offsets are provided for callers that
/// index by character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentenceSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub char_start: usize,
    pub char_end: usize,
    pub text: &'a str,
}

impl<'a> SentenceSpan<'a> {
    /// Sentence text without surrounding whitespace
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits text into sentences according to a locale rule
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    /// Lazily split `text` into sentence spans
    ///
    /// Every call starts again from the beginning of the text.
    pub fn segment<'a>(rule: &'a LocaleRule, text: &'a str) -> Sentences<'a> {
        Sentences {
            rule,
            text,
            pos: 0,
            char_pos: 0,
        }
    }

    /// Trimmed, non-empty sentence texts
    pub fn sentences<'a>(rule: &'a LocaleRule, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        Self::segment(rule, text)
            .map(|span| span.trimmed())
            .filter(|sentence| !sentence.is_empty())
    }

    /// Number of spans `segment` would produce
    pub fn count(rule: &LocaleRule, text: &str) -> usize {
        Self::segment(rule, text).count()
    }
}

/// Iterator over the sentence spans of a text
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rule: &'a LocaleRule,
    text: &'a str,
    /// Byte offset of the next sentence
    pos: usize,
    char_pos: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = SentenceSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        let end = self
            .rule
            .boundary()
            .next_end(self.text, start)
            .unwrap_or(self.text.len());
        let text = &self.text[start..end];

        let char_start = self.char_pos;
        let char_end = char_start + text.chars().count();

        self.pos = end;
        self.char_pos = char_end;

        Some(SentenceSpan {
            start,
            end,
            char_start,
            char_end,
            text,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Sentences<'_> {}
