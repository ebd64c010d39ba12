//! Locale rules
//!
//! A [`LocaleRule`] bundles the punctuation conventions of one locale. Rules
//! are built once, merged onto the common rule, and never change afterwards.

use tracing::warn;

use crate::error::{Result, RuleError};
use crate::language::config::PunctuationEntry;
use crate::language::tables::{BoundaryMatcher, CharSet, PunctuationMap, SuppressionSet};

/// Identifier of the base rule every locale inherits from
pub const COMMON_LOCALE: &str = "common";

/// Fields a locale definition sets explicitly
///
/// `None` means "inherit from the common rule". Set fields replace the
/// inherited value outright; punctuation entries are put in front of the
/// inherited table instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleOverrides {
    pub name: Option<String>,
    pub list_separators: Option<Vec<char>>,
    pub sentence_enders: Option<Vec<char>>,
    pub suppressed_checks: Option<Vec<String>>,
    pub punctuation: Vec<PunctuationEntry>,
}

impl LocaleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn list_separators(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.list_separators = Some(chars.into_iter().collect());
        self
    }

    pub fn sentence_enders(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.sentence_enders = Some(chars.into_iter().collect());
        self
    }

    pub fn suppressed_checks<I, S>(mut self, checks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppressed_checks = Some(checks.into_iter().map(Into::into).collect());
        self
    }

    /// Append one punctuation substitution
    pub fn punctuation(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.punctuation.push(PunctuationEntry::new(from, to));
        self
    }
}

/// Immutable per-locale punctuation conventions
#[derive(Debug, Clone)]
pub struct LocaleRule {
    locale_id: String,
    name: String,

    list_separators: CharSet,
    sentence_enders: CharSet,
    /// Derived from `sentence_enders`
    boundary: BoundaryMatcher,
    punctuation: PunctuationMap,
    suppressed: SuppressionSet,
}

impl LocaleRule {
    /// Build a standalone rule; unset fields are empty
    ///
    /// This is how the common rule itself is made.
    pub fn standalone(locale_id: &str, overrides: &LocaleOverrides) -> Result<Self> {
        Self::build(
            locale_id,
            overrides.name.clone(),
            overrides.list_separators.clone().unwrap_or_default(),
            overrides.sentence_enders.clone().unwrap_or_default(),
            overrides.punctuation.clone(),
            overrides.suppressed_checks.clone().unwrap_or_default(),
        )
    }

    /// Build a rule by merging `overrides` onto `base`
    pub fn merged(base: &LocaleRule, locale_id: &str, overrides: &LocaleOverrides) -> Result<Self> {
        let list_separators = match &overrides.list_separators {
            Some(chars) => chars.clone(),
            None => base.list_separators.chars().to_vec(),
        };
        let sentence_enders = match &overrides.sentence_enders {
            Some(chars) => chars.clone(),
            None => base.sentence_enders.chars().to_vec(),
        };
        let suppressed = match &overrides.suppressed_checks {
            Some(checks) => checks.clone(),
            None => base.suppressed.iter().map(str::to_string).collect(),
        };

        // Catch problems inside the override itself before they get mixed
        // with inherited entries and reported against the wrong key.
        crate::language::tables::punctuation::check_entries(&overrides.punctuation)
            .map_err(|reason| RuleError::invalid(locale_id, reason))?;
        let punctuation = PunctuationMap::merged(&overrides.punctuation, &base.punctuation);

        Self::build(
            locale_id,
            overrides.name.clone(),
            list_separators,
            sentence_enders,
            punctuation,
            suppressed,
        )
    }

    fn build(
        locale_id: &str,
        name: Option<String>,
        list_separators: Vec<char>,
        sentence_enders: Vec<char>,
        punctuation: Vec<PunctuationEntry>,
        suppressed: Vec<String>,
    ) -> Result<Self> {
        if locale_id.trim().is_empty() {
            return Err(RuleError::invalid(locale_id, "locale code is empty"));
        }

        let sentence_enders = CharSet::new(sentence_enders);
        if let Some(ch) = sentence_enders.chars().iter().find(|ch| ch.is_whitespace()) {
            return Err(RuleError::invalid(
                locale_id,
                format!("whitespace {ch:?} cannot end a sentence"),
            ));
        }
        if sentence_enders.is_empty() {
            warn!(locale = locale_id, "locale has no sentence enders and will never segment");
        }

        let boundary = BoundaryMatcher::new(&sentence_enders)
            .map_err(|e| RuleError::invalid(locale_id, format!("boundary matcher: {e}")))?;
        let punctuation =
            PunctuationMap::new(punctuation).map_err(|reason| RuleError::invalid(locale_id, reason))?;

        Ok(Self {
            locale_id: locale_id.to_string(),
            name: name.unwrap_or_else(|| locale_id.to_string()),
            list_separators: CharSet::new(list_separators),
            sentence_enders,
            boundary,
            punctuation,
            suppressed: SuppressionSet::new(suppressed),
        })
    }

    /// Rule with no enders, separators, substitutions or suppressions
    pub(crate) fn empty(locale_id: &str) -> Self {
        Self {
            locale_id: locale_id.to_string(),
            name: locale_id.to_string(),
            list_separators: CharSet::default(),
            sentence_enders: CharSet::default(),
            boundary: BoundaryMatcher::inactive(),
            punctuation: PunctuationMap::default(),
            suppressed: SuppressionSet::default(),
        }
    }

    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn list_separators(&self) -> &CharSet {
        &self.list_separators
    }

    pub fn sentence_enders(&self) -> &CharSet {
        &self.sentence_enders
    }

    #[inline]
    pub fn is_sentence_ender(&self, ch: char) -> bool {
        self.sentence_enders.contains(ch)
    }

    #[inline]
    pub fn is_list_separator(&self, ch: char) -> bool {
        self.list_separators.contains(ch)
    }

    pub fn punctuation_map(&self) -> &PunctuationMap {
        &self.punctuation
    }

    pub fn suppressed_checks(&self) -> &SuppressionSet {
        &self.suppressed
    }

    pub(crate) fn boundary(&self) -> &BoundaryMatcher {
        &self.boundary
    }
}
