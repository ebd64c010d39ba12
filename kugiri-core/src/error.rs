//! Error types for locale rule construction
//!
//! Only registry population can fail. Segmentation, normalization and check
//! gating always degrade to a best-effort answer instead of erroring.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or registering locale rules
#[derive(Error, Debug)]
pub enum RuleError {
    /// A locale identifier was registered twice
    #[error("locale '{locale}' is already registered")]
    DuplicateLocale {
        /// The identifier that was reused
        locale: String,
    },

    /// A locale definition is malformed
    #[error("invalid rule for locale '{locale}': {reason}")]
    InvalidRule {
        /// The locale whose definition was rejected
        locale: String,
        /// What is wrong with it
        reason: String,
    },

    /// A locale definition could not be parsed
    #[error("failed to parse {source_name}: {message}")]
    Parse {
        /// File name or embedded table name
        source_name: String,
        /// Parser message
        message: String,
    },

    /// A locale definition file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl RuleError {
    pub(crate) fn invalid(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        RuleError::InvalidRule {
            locale: locale.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for rule construction
pub type Result<T> = std::result::Result<T, RuleError>;
