//! Locale-aware sentence segmentation and punctuation normalization
//!
//! This crate is the engine behind translation QA checks that need to know
//! how a language ends sentences, which punctuation it prefers, and which
//! checks make no sense for it (capitalisation in a script without case,
//! for example).
//!
//! # Architecture
//!
//! - **Locale rules**: one immutable [`LocaleRule`] per locale, built from TOML
//!   definitions merged onto a common base and held in a [`RuleRegistry`]
//! - **Segmenter**: lazy sentence spans that cover the input exactly
//! - **Normalizer**: punctuation substitution in table order, never rescanning replacements
//! - **Check gate**: per-locale check suppression
//!
//! Everything after registry construction is a pure function over shared,
//! read-only rules, so any number of threads can use the same registry.
//!
//! # Example
//!
//! ```rust
//! use kugiri_core::{CheckGate, PunctuationNormalizer, RuleRegistry, Segmenter};
//!
//! let registry = RuleRegistry::builtin().unwrap();
//! let ja = registry.lookup("ja_JP.UTF-8");
//!
//! let text = "これは文です。それもです。";
//! let sentences: Vec<&str> = Segmenter::segment(&ja, text).map(|s| s.text).collect();
//! assert_eq!(sentences, vec!["これは文です。", "それもです。"]);
//!
//! assert_eq!(PunctuationNormalizer::normalize(&ja, "はい. いいえ"), "はい。いいえ");
//! assert!(!CheckGate::is_active(&ja, "startcaps"));
//! ```

pub mod error;
pub mod gate;
pub mod language;
pub mod normalizer;
pub mod segmenter;

pub use error::{Result, RuleError};
pub use gate::CheckGate;
pub use language::{
    builtin_registry, definition_files, get_rules, normalize_tag, LocaleConfig, LocaleOverrides,
    LocaleRule, Metadata, PunctuationEntry, RuleRegistry, COMMON_LOCALE,
};
pub use normalizer::PunctuationNormalizer;
pub use segmenter::{Segmenter, SentenceSpan, Sentences};
