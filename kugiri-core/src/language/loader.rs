//! Locale definition loader
//!
//! Built-in definitions are compiled into the binary; external ones are read
//! from TOML files at startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::{debug, error};

use crate::error::{Result, RuleError};
use crate::language::config::LocaleConfig;
use crate::language::registry::RuleRegistry;
use crate::language::rule::LocaleRule;

/// Embedded base definition
const COMMON_TOML: &str = include_str!("../../configs/locales/common.toml");

/// Embedded locale definitions, merged onto the common one in this order
const EMBEDDED: &[(&str, &str)] = &[
    ("ja.toml", include_str!("../../configs/locales/ja.toml")),
    ("zh.toml", include_str!("../../configs/locales/zh.toml")),
    ("ar.toml", include_str!("../../configs/locales/ar.toml")),
    ("el.toml", include_str!("../../configs/locales/el.toml")),
];

static BUILTIN: OnceLock<RuleRegistry> = OnceLock::new();

/// Shared registry of built-in locales, created on first access
///
/// The embedded tables are covered by tests, so the empty fallback only
/// exists to keep lookups infallible.
pub fn builtin_registry() -> &'static RuleRegistry {
    BUILTIN.get_or_init(|| match RuleRegistry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            error!("failed to load built-in locale rules: {e}");
            RuleRegistry::empty()
        }
    })
}

/// Rule for a locale from the built-in registry, falling back to common
pub fn get_rules(locale_id: &str) -> Arc<LocaleRule> {
    builtin_registry().lookup(locale_id)
}

impl RuleRegistry {
    /// Registry populated from the embedded locale tables
    pub fn builtin() -> Result<Self> {
        let mut registry = RuleRegistry::builtin_common()?;

        for (name, toml_str) in EMBEDDED {
            registry.load_str(toml_str, name)?;
        }

        debug!(locales = registry.len(), "loaded built-in locale rules");
        Ok(registry)
    }

    /// Registry holding only the embedded common rule
    ///
    /// Useful for checking an external definition on its own, including one
    /// that redefines a built-in locale.
    pub fn builtin_common() -> Result<Self> {
        let common = LocaleConfig::from_toml_str(COMMON_TOML, "common.toml")?;
        RuleRegistry::new(common)
    }

    /// Register a definition from TOML text
    pub fn load_str(&mut self, toml_str: &str, source_name: &str) -> Result<Arc<LocaleRule>> {
        let config = LocaleConfig::from_toml_str(toml_str, source_name)?;
        self.register_config(config)
    }

    /// Register a definition from a TOML file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Arc<LocaleRule>> {
        let path = path.as_ref();
        let toml_str = fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&toml_str, &path.display().to_string())
    }

    /// Register every `*.toml` file in a directory, in file name order
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<Arc<LocaleRule>>> {
        definition_files(dir)?
            .iter()
            .map(|path| self.load_file(path))
            .collect()
    }
}

/// The `*.toml` files of a directory, sorted by file name
pub fn definition_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let io_error = |source| RuleError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
