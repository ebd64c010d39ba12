//! Configuration structures and validation
//!
//! This module defines the TOML schema for locale definitions. Every field
//! except the metadata is optional; an absent field is inherited from the
//! common rule when the definition is registered.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};
use crate::language::rule::LocaleOverrides;
use crate::language::tables::punctuation::check_entries;

/// Root locale definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_separators: Option<Vec<char>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_enders: Option<Vec<char>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppressed_checks: Option<Vec<String>>,
    /// Ordered substitution table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub punctuation: Vec<PunctuationEntry>,
}

/// Locale metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One punctuation substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationEntry {
    pub from: String,
    pub to: String,
}

impl PunctuationEntry {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl LocaleConfig {
    /// Parse a definition from TOML text
    ///
    /// `source_name` only feeds error messages.
    pub fn from_toml_str(toml_str: &str, source_name: &str) -> Result<Self> {
        let config: LocaleConfig = toml::from_str(toml_str).map_err(|e| RuleError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the parts of a definition that do not depend on the base rule
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(RuleError::invalid("", "locale code is empty"));
        }

        check_entries(&self.punctuation)
            .map_err(|reason| RuleError::invalid(&self.metadata.code, reason))?;

        Ok(())
    }

    /// Split into the locale code and the fields it overrides
    pub fn into_parts(self) -> (String, LocaleOverrides) {
        let overrides = LocaleOverrides {
            name: self.metadata.name,
            list_separators: self.list_separators,
            sentence_enders: self.sentence_enders,
            suppressed_checks: self.suppressed_checks,
            punctuation: self.punctuation,
        };
        (self.metadata.code, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_definition() {
        let config = LocaleConfig::from_toml_str(
            r#"
list_separators = ["、", ","]
sentence_enders = ["。", "！", "？"]
suppressed_checks = ["startcaps"]

[metadata]
code = "ja"
name = "Japanese"

[[punctuation]]
from = ". "
to = "。"
"#,
            "ja.toml",
        )
        .unwrap();

        assert_eq!(config.metadata.code, "ja");
        assert_eq!(config.metadata.name.as_deref(), Some("Japanese"));
        assert_eq!(config.sentence_enders, Some(vec!['。', '！', '？']));
        assert_eq!(config.punctuation, vec![PunctuationEntry::new(". ", "。")]);
    }

    #[test]
    fn test_absent_fields_stay_none() {
        let config = LocaleConfig::from_toml_str(
            r#"
[metadata]
code = "el"
"#,
            "el.toml",
        )
        .unwrap();

        assert!(config.list_separators.is_none());
        assert!(config.sentence_enders.is_none());
        assert!(config.suppressed_checks.is_none());
        assert!(config.punctuation.is_empty());
    }

    #[test]
    fn test_explicit_empty_list_is_present() {
        let config = LocaleConfig::from_toml_str(
            r#"
suppressed_checks = []

[metadata]
code = "xx"
"#,
            "xx.toml",
        )
        .unwrap();

        assert_eq!(config.suppressed_checks, Some(vec![]));
    }

    #[test]
    fn test_rejects_empty_code() {
        let err = LocaleConfig::from_toml_str("[metadata]\ncode = \"\"\n", "bad.toml").unwrap_err();
        assert!(matches!(err, RuleError::InvalidRule { .. }));
    }

    #[test]
    fn test_rejects_empty_punctuation_key() {
        let err = LocaleConfig::from_toml_str(
            r#"
[metadata]
code = "xx"

[[punctuation]]
from = ""
to = "。"
"#,
            "xx.toml",
        )
        .unwrap_err();

        match err {
            RuleError::InvalidRule { locale, reason } => {
                assert_eq!(locale, "xx");
                assert!(reason.contains("empty key"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_multi_char_separator_is_a_parse_error() {
        let err = LocaleConfig::from_toml_str(
            r#"
list_separators = [", "]

[metadata]
code = "xx"
"#,
            "xx.toml",
        )
        .unwrap_err();

        match err {
            RuleError::Parse { source_name, .. } => assert_eq!(source_name, "xx.toml"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_into_parts() {
        let config = LocaleConfig::from_toml_str(
            r#"
sentence_enders = ["."]

[metadata]
code = "xx"
"#,
            "xx.toml",
        )
        .unwrap();

        let (code, overrides) = config.into_parts();
        assert_eq!(code, "xx");
        assert_eq!(overrides.sentence_enders, Some(vec!['.']));
        assert!(overrides.list_separators.is_none());
    }
}
