//! Normalize command implementation

use anyhow::{Context, Result};
use clap::Args;
use kugiri_core::{LocaleRule, PunctuationNormalizer};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use super::RunContext;
use crate::input::FileReader;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Locale whose punctuation conventions are applied
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Treat every line as a translated unit and also convert its final
    /// punctuation mark
    #[arg(short, long)]
    pub translate: bool,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let text = FileReader::read_text(&self.input)?;
        let rule = ctx.catalog.resolve(ctx.locale(self.locale.as_deref()));
        log::info!(
            "Normalizing {} with locale '{}'",
            self.input.display(),
            rule.locale_id()
        );

        let normalized = self.apply(&rule, &text);
        match &self.output {
            Some(path) => fs::write(path, normalized)
                .with_context(|| format!("Failed to write to {}", path.display()))?,
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(normalized.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    fn apply(&self, rule: &LocaleRule, text: &str) -> String {
        if !self.translate {
            return PunctuationNormalizer::normalize(rule, text).into_owned();
        }

        text.split_inclusive('\n')
            .map(|line| {
                let content = line.trim_end_matches(['\r', '\n']);
                let ending = &line[content.len()..];
                PunctuationNormalizer::translate(rule, content) + ending
            })
            .collect()
    }
}
