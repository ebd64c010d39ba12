//! Validate command implementation

use anyhow::Result;
use clap::Args;
use kugiri_core::RuleRegistry;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to locale configuration file to validate
    #[arg(short = 'c', long = "file", value_name = "FILE", required = true)]
    pub locale_file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    ///
    /// The file is merged onto the built-in common rule only, so a file that
    /// redefines a built-in locale validates as well.
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating locale configuration: {}",
            self.locale_file.display()
        );

        let mut registry = RuleRegistry::builtin_common()?;
        match registry.load_file(&self.locale_file) {
            Ok(rule) => {
                let enders: String = rule.sentence_enders().chars().iter().collect();
                println!("✓ Configuration is valid!");
                println!("  Locale code: {}", rule.locale_id());
                println!("  Locale name: {}", rule.name());
                println!("  Sentence enders: {}", enders);
                println!("  Punctuation entries: {}", rule.punctuation_map().len());
                println!("  Suppressed checks: {}", rule.suppressed_checks().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(toml_content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        ValidateArgs {
            locale_file: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
sentence_enders = [".", "!", "?"]
suppressed_checks = ["startcaps"]

[metadata]
code = "test"
name = "Test Locale"

[[punctuation]]
from = ", "
to = "、"
"#;
        assert!(validate(toml_content).is_ok());
    }

    #[test]
    fn test_validate_builtin_locale_redefinition() {
        assert!(validate("[metadata]\ncode = \"ja\"\n").is_ok());
    }

    #[test]
    fn test_validate_empty_code() {
        let err = validate("[metadata]\ncode = \"\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_validate_shadowed_key() {
        let toml_content = r#"
[metadata]
code = "test"

[[punctuation]]
from = "."
to = "。"

[[punctuation]]
from = ". "
to = "。"
"#;
        let err = validate(toml_content).unwrap_err();
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn test_validate_missing_file() {
        let err = ValidateArgs {
            locale_file: PathBuf::from("/nonexistent/kugiri/test.toml"),
        }
        .execute()
        .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
