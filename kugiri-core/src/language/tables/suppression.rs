//! Suppressed check identifiers
//!
//! Check ids are opaque strings owned by the external check runner.

use std::collections::BTreeSet;

/// Set of checks that do not apply to a locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressionSet {
    checks: BTreeSet<String>,
}

impl SuppressionSet {
    pub fn new<I, S>(checks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            checks: checks.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn is_suppressed(&self, check_id: &str) -> bool {
        self.checks.contains(check_id)
    }

    /// Suppressed ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let set = SuppressionSet::new(["startcaps", "simplecaps"]);

        assert!(set.is_suppressed("startcaps"));
        assert!(set.is_suppressed("simplecaps"));
        assert!(!set.is_suppressed("doublespacing"));
        assert!(!set.is_suppressed("StartCaps"));
    }

    #[test]
    fn test_iter_is_sorted() {
        let set = SuppressionSet::new(vec!["startcaps".to_string(), "acronyms".to_string()]);
        let ids: Vec<&str> = set.iter().collect();
        assert_eq!(ids, vec!["acronyms", "startcaps"]);
    }
}
