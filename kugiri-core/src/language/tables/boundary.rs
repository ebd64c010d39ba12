//! Sentence boundary matcher
//!
//! Compiled once per rule from the resolved sentence enders. A match is a
//! contiguous run of enders followed by any trailing whitespace; the body
//! before it is left to the caller, which gives the shortest sentence.

use regex::Regex;

use super::charset::CharSet;

/// Compiled sentence boundary matcher
#[derive(Debug, Clone)]
pub struct BoundaryMatcher {
    /// `None` when the rule has no enders and never segments
    regex: Option<Regex>,
}

impl BoundaryMatcher {
    /// Compile a matcher for a set of sentence enders
    pub fn new(enders: &CharSet) -> Result<Self, regex::Error> {
        if enders.is_empty() {
            return Ok(Self::inactive());
        }

        let class: String = enders
            .chars()
            .iter()
            .map(|ch| regex::escape(ch.encode_utf8(&mut [0; 4])))
            .collect();
        let regex = Regex::new(&format!(r"[{class}]+\s*"))?;

        Ok(Self { regex: Some(regex) })
    }

    /// Matcher that never finds a boundary
    pub fn inactive() -> Self {
        Self { regex: None }
    }

    /// Byte offset just past the next boundary at or after `from`
    #[inline]
    pub fn next_end(&self, text: &str, from: usize) -> Option<usize> {
        self.regex
            .as_ref()?
            .find_at(text, from)
            .map(|found| found.end())
    }

    /// Whether this matcher can ever produce a boundary
    pub fn is_active(&self) -> bool {
        self.regex.is_some()
    }
}
