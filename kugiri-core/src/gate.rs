//! Check applicability per locale

use crate::language::LocaleRule;

/// Answers whether a QA check applies to a locale
///
/// Check identifiers are opaque; anything the rule does not suppress is
/// active.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckGate;

impl CheckGate {
    #[inline]
    pub fn is_active(rule: &LocaleRule, check_id: &str) -> bool {
        !rule.suppressed_checks().is_suppressed(check_id)
    }

    /// Keep only the checks that apply to `rule`, in input order
    pub fn active_checks<'a, I>(rule: &'a LocaleRule, check_ids: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: AsRef<str>,
    {
        check_ids
            .into_iter()
            .filter(move |id| Self::is_active(rule, id.as_ref()))
    }

    /// Checks the rule suppresses, sorted
    pub fn suppressed(rule: &LocaleRule) -> impl Iterator<Item = &str> {
        rule.suppressed_checks().iter()
    }
}
