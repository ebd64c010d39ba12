//! Runtime tables for locale rules
//!
//! All tables are built once per rule and are read-only afterwards.

pub mod boundary;
pub mod charset;
pub mod punctuation;
pub mod suppression;

pub use boundary::BoundaryMatcher;
pub use charset::CharSet;
pub use punctuation::PunctuationMap;
pub use suppression::SuppressionSet;
