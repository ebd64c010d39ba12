//! Locale rules for sentence segmentation and punctuation handling
//!
//! This module provides a data-driven system: one [`LocaleRule`] type, filled
//! from TOML definitions and merged onto a common base.

pub mod config;
pub mod loader;
pub mod registry;
pub mod rule;
pub mod tables;

pub use config::{LocaleConfig, Metadata, PunctuationEntry};
pub use loader::{builtin_registry, definition_files, get_rules};
pub use registry::{normalize_tag, RuleRegistry};
pub use rule::{LocaleOverrides, LocaleRule, COMMON_LOCALE};
