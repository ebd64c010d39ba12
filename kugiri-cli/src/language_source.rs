//! Locale source management for CLI
//!
//! Combines the built-in locale tables with definitions loaded from files
//! and remembers where each locale came from.

use anyhow::{Context, Result};
use kugiri_core::{definition_files, LocaleRule, RuleRegistry, COMMON_LOCALE};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of a locale rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSource {
    /// Embedded in the binary
    BuiltIn,
    /// Loaded from a configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl LocaleSource {
    /// Get the display name for the locale source
    pub fn display_name(&self) -> String {
        match self {
            LocaleSource::BuiltIn => "built-in".to_string(),
            LocaleSource::External { path } => format!("external: {}", path.display()),
        }
    }
}

/// Registry plus the origin of every locale in it
#[derive(Debug)]
pub struct LocaleCatalog {
    registry: RuleRegistry,
    sources: BTreeMap<String, LocaleSource>,
}

impl LocaleCatalog {
    /// Built-in locales only
    pub fn builtin() -> Result<Self> {
        let registry = RuleRegistry::builtin().context("Failed to load built-in locales")?;
        let sources = registry
            .locales()
            .into_iter()
            .map(|id| (id.to_string(), LocaleSource::BuiltIn))
            .collect();
        Ok(Self { registry, sources })
    }

    /// Register one external definition file
    pub fn add_file(&mut self, path: &Path) -> Result<Arc<LocaleRule>> {
        let rule = self
            .registry
            .load_file(path)
            .with_context(|| format!("Failed to load locale config: {}", path.display()))?;
        log::info!("Loaded locale '{}' from {}", rule.locale_id(), path.display());
        self.sources.insert(
            rule.locale_id().to_string(),
            LocaleSource::External {
                path: path.to_path_buf(),
            },
        );
        Ok(rule)
    }

    /// Register every `*.toml` in a directory, each under its own file
    pub fn add_dir(&mut self, dir: &Path) -> Result<Vec<Arc<LocaleRule>>> {
        let files = definition_files(dir)
            .with_context(|| format!("Failed to load locale directory: {}", dir.display()))?;
        files.iter().map(|path| self.add_file(path)).collect()
    }

    /// Resolve a locale, warning when only the common rule applies
    pub fn resolve(&self, locale: &str) -> Arc<LocaleRule> {
        let rule = self.registry.lookup(locale);
        if self.falls_back_to_common(locale) {
            log::warn!(
                "No rule registered for locale '{}', using '{}'",
                locale,
                COMMON_LOCALE
            );
        } else if !self.registry.contains(locale) {
            log::debug!("Locale '{}' resolved to '{}'", locale, rule.locale_id());
        }
        rule
    }

    /// Whether `locale` has no rule of its own, not even for its language
    pub fn falls_back_to_common(&self, locale: &str) -> bool {
        !self.registry.contains(locale) && self.registry.lookup(locale).locale_id() == COMMON_LOCALE
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn source(&self, locale_id: &str) -> Option<&LocaleSource> {
        self.sources.get(locale_id)
    }
}
