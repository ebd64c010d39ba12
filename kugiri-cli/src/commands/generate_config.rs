//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Locale code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub locale_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating locale configuration template...");
        println!("  Locale code: {}", self.locale_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize the locale rules");
        println!("2. Validate your configuration:");
        println!("   kugiri validate --file {}", self.output.display());
        println!("3. Use it for segmentation:");
        println!(
            "   kugiri --locale-config {} segment -i input.txt -l {}",
            self.output.display(),
            self.locale_code
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Locale configuration for {code}
#
# Every field except [metadata] is optional. Fields left out are inherited
# from the built-in "common" locale; fields that are present replace it.

# Characters separating list items
list_separators = [","]

# Characters that may end a sentence. A run of them ends one sentence.
sentence_enders = [".", "!", "?", "…"]

# QA checks that make no sense for this locale
suppressed_checks = [
    # Example: "startcaps", "simplecaps"
]

[metadata]
code = "{code}"
name = "Custom Locale"

# Punctuation substitutions, applied one entry at a time in this order.
# Text an earlier entry replaced is never touched by a later one. An entry
# may not start with the `from` of an earlier entry.
#
# [[punctuation]]
# from = ". "
# to = "。"
#
# [[punctuation]]
# from = ", "
# to = "、"
"#,
            code = self.locale_code
        )
    }
}
