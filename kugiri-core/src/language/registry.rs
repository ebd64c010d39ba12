//! Locale rule registry
//!
//! Maps locale identifiers to rules. Every rule except the common one is
//! merged onto the common rule when it is registered. Lookups never fail:
//! an unknown locale gets the common rule.
//!
//! Registration needs `&mut self` and lookups only `&self`, so a registry
//! that has been shared across threads can no longer change.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Result, RuleError};
use crate::language::config::LocaleConfig;
use crate::language::rule::{LocaleOverrides, LocaleRule, COMMON_LOCALE};

/// Registry of locale rules
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    common: Arc<LocaleRule>,
    /// Keyed by normalized locale tag
    rules: HashMap<String, Arc<LocaleRule>>,
}

impl RuleRegistry {
    /// Create a registry around a common base definition
    ///
    /// The definition's own code is ignored; the base is always registered
    /// as `"common"`.
    pub fn new(common: LocaleConfig) -> Result<Self> {
        let (_, overrides) = common.into_parts();
        Self::with_common(&overrides)
    }

    /// Create a registry whose common rule is built from `overrides`
    pub fn with_common(overrides: &LocaleOverrides) -> Result<Self> {
        let common = LocaleRule::standalone(COMMON_LOCALE, overrides)?;
        Ok(Self::from_common(common))
    }

    /// Registry whose common rule has no conventions at all
    pub fn empty() -> Self {
        Self::from_common(LocaleRule::empty(COMMON_LOCALE))
    }

    fn from_common(common: LocaleRule) -> Self {
        let common = Arc::new(common);
        let mut rules = HashMap::new();
        rules.insert(COMMON_LOCALE.to_string(), Arc::clone(&common));
        Self { common, rules }
    }

    /// Register a locale by merging `overrides` onto the common rule
    pub fn register(
        &mut self,
        locale_id: &str,
        overrides: &LocaleOverrides,
    ) -> Result<Arc<LocaleRule>> {
        let key = normalize_tag(locale_id);
        if self.rules.contains_key(&key) {
            return Err(RuleError::DuplicateLocale {
                locale: locale_id.to_string(),
            });
        }

        let rule = Arc::new(LocaleRule::merged(&self.common, locale_id, overrides)?);
        debug!(
            locale = locale_id,
            enders = rule.sentence_enders().len(),
            substitutions = rule.punctuation_map().len(),
            suppressed = rule.suppressed_checks().len(),
            "registered locale rule"
        );
        self.rules.insert(key, Arc::clone(&rule));
        Ok(rule)
    }

    /// Register a parsed locale definition
    pub fn register_config(&mut self, config: LocaleConfig) -> Result<Arc<LocaleRule>> {
        config.validate()?;
        let (code, overrides) = config.into_parts();
        self.register(&code, &overrides)
    }

    /// Rule for a locale, falling back to the common rule
    ///
    /// `ja_JP.UTF-8` resolves to `ja-jp` if registered, then `ja`, then
    /// common.
    pub fn lookup(&self, locale_id: &str) -> Arc<LocaleRule> {
        let key = normalize_tag(locale_id);
        if let Some(rule) = self.rules.get(&key) {
            return Arc::clone(rule);
        }

        if let Some(rule) = primary_subtag(&key).and_then(|primary| self.rules.get(primary)) {
            trace!(locale = locale_id, resolved = rule.locale_id(), "using primary language rule");
            return Arc::clone(rule);
        }

        trace!(locale = locale_id, "no locale rule, using common");
        Arc::clone(&self.common)
    }

    /// Rule registered under exactly this locale, without fallback
    pub fn get(&self, locale_id: &str) -> Option<Arc<LocaleRule>> {
        self.rules.get(&normalize_tag(locale_id)).cloned()
    }

    pub fn contains(&self, locale_id: &str) -> bool {
        self.rules.contains_key(&normalize_tag(locale_id))
    }

    pub fn common(&self) -> Arc<LocaleRule> {
        Arc::clone(&self.common)
    }

    /// Registered locale identifiers, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.rules.values().map(|rule| rule.locale_id()).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered rules, common included
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Normalize a raw locale string for matching
///
/// Strips encoding suffixes (`.UTF-8`) and variants (`@latin`), turns
/// underscores into hyphens and lowercases the rest.
pub fn normalize_tag(raw: &str) -> String {
    let trimmed = raw.trim();
    let end = trimmed.find(['.', '@']).unwrap_or(trimmed.len());
    trimmed[..end].replace('_', "-").to_lowercase()
}

/// Primary language subtag of a normalized tag, if it has more than one
fn primary_subtag(tag: &str) -> Option<&str> {
    let (primary, _) = tag.split_once('-')?;
    (!primary.is_empty()).then_some(primary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RuleRegistry {
        let mut registry = RuleRegistry::with_common(
            &LocaleOverrides::new()
                .list_separators([','])
                .sentence_enders(['.', '!', '?']),
        )
        .unwrap();
        registry
            .register("ja", &LocaleOverrides::new().sentence_enders(['。', '！', '？']))
            .unwrap();
        registry
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("ja_JP.UTF-8"), "ja-jp");
        assert_eq!(normalize_tag("sr_RS@latin"), "sr-rs");
        assert_eq!(normalize_tag(" pt-BR "), "pt-br");
        assert_eq!(normalize_tag("ja"), "ja");
        assert_eq!(normalize_tag(""), "");
    }

    #[test]
    fn test_primary_subtag() {
        assert_eq!(primary_subtag("ja-jp"), Some("ja"));
        assert_eq!(primary_subtag("ja"), None);
        assert_eq!(primary_subtag("-jp"), None);
    }

    #[test]
    fn test_lookup_exact_and_fallbacks() {
        let registry = registry();

        assert_eq!(registry.lookup("ja").locale_id(), "ja");
        assert_eq!(registry.lookup("JA").locale_id(), "ja");
        assert_eq!(registry.lookup("ja_JP.UTF-8").locale_id(), "ja");
        assert_eq!(registry.lookup("xx").locale_id(), COMMON_LOCALE);
        assert_eq!(registry.lookup("").locale_id(), COMMON_LOCALE);
    }

    #[test]
    fn test_more_specific_rule_wins() {
        let mut registry = registry();
        registry
            .register("ja-JP", &LocaleOverrides::new().suppressed_checks(["startcaps"]))
            .unwrap();

        assert_eq!(registry.lookup("ja_JP").locale_id(), "ja-JP");
        assert_eq!(registry.lookup("ja-KS").locale_id(), "ja");
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = registry();

        let err = registry.register("ja", &LocaleOverrides::new()).unwrap_err();
        assert!(matches!(err, RuleError::DuplicateLocale { ref locale } if locale == "ja"));

        let err = registry.register("common", &LocaleOverrides::new()).unwrap_err();
        assert!(matches!(err, RuleError::DuplicateLocale { .. }));

        // The original rule is untouched
        assert!(registry.lookup("ja").is_sentence_ender('。'));
    }

    #[test]
    fn test_invalid_registration_leaves_registry_unchanged() {
        let mut registry = registry();
        let before = registry.len();

        assert!(registry
            .register("el", &LocaleOverrides::new().punctuation("", ";"))
            .is_err());
        assert_eq!(registry.len(), before);
        assert!(!registry.contains("el"));
    }

    #[test]
    fn test_get_does_not_fall_back() {
        let registry = registry();
        assert!(registry.get("ja").is_some());
        assert!(registry.get("ja-JP").is_none());
        assert!(registry.get("xx").is_none());
    }

    #[test]
    fn test_locales_sorted() {
        let registry = registry();
        assert_eq!(registry.locales(), vec!["common", "ja"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry_still_answers() {
        let registry = RuleRegistry::empty();
        let rule = registry.lookup("ja");
        assert_eq!(rule.locale_id(), COMMON_LOCALE);
        assert!(rule.sentence_enders().is_empty());
    }
}
