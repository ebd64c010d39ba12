//! Ordered punctuation substitution table
//!
//! Entries are applied in declared order, each claiming the text it matches
//! before later entries see it. An entry whose key starts with an earlier
//! entry's key could never fire, so such tables are rejected when they are
//! built.

use crate::language::config::PunctuationEntry;

/// Punctuation substitution table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunctuationMap {
    entries: Vec<PunctuationEntry>,
}

impl PunctuationMap {
    /// Build a table, validating its keys
    pub fn new(entries: Vec<PunctuationEntry>) -> Result<Self, String> {
        check_entries(&entries)?;
        Ok(Self { entries })
    }

    /// Resolve an override list against a base table
    ///
    /// Override entries come first; base entries whose key the override
    /// redefines are dropped.
    pub fn merged(overrides: &[PunctuationEntry], base: &PunctuationMap) -> Vec<PunctuationEntry> {
        let mut entries = overrides.to_vec();
        entries.extend(
            base.entries
                .iter()
                .filter(|entry| !overrides.iter().any(|o| o.from == entry.from))
                .cloned(),
        );
        entries
    }

    /// Replacement for an exact key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.from == key)
            .map(|entry| entry.to.as_str())
    }

    pub fn entries(&self) -> &[PunctuationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate keys of a punctuation table in declared order
pub(crate) fn check_entries(entries: &[PunctuationEntry]) -> Result<(), String> {
    for (i, entry) in entries.iter().enumerate() {
        if entry.from.is_empty() {
            return Err(format!("punctuation entry {} has an empty key", i + 1));
        }

        for earlier in &entries[..i] {
            if earlier.from == entry.from {
                return Err(format!("duplicate punctuation key {:?}", entry.from));
            }
            if entry.from.starts_with(earlier.from.as_str()) {
                return Err(format!(
                    "punctuation key {:?} is shadowed by earlier key {:?}",
                    entry.from, earlier.from
                ));
            }
        }
    }

    Ok(())
}
