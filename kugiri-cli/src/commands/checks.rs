//! Checks command implementation

use anyhow::Result;
use clap::Args;
use kugiri_core::{CheckGate, LocaleRule};
use std::io::Write;

use super::RunContext;

/// Arguments for the checks command
#[derive(Debug, Args)]
pub struct ChecksArgs {
    /// Locale to query
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Check identifiers (default: list the suppressed ones)
    #[arg(value_name = "CHECK")]
    pub checks: Vec<String>,
}

impl ChecksArgs {
    /// Execute the checks command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let rule = ctx.catalog.resolve(ctx.locale(self.locale.as_deref()));
        let stdout = std::io::stdout();
        self.write_to(&rule, &mut stdout.lock())
    }

    fn write_to(&self, rule: &LocaleRule, out: &mut impl Write) -> Result<()> {
        if self.checks.is_empty() {
            writeln!(out, "Suppressed checks for '{}':", rule.locale_id())?;
            for check in CheckGate::suppressed(rule) {
                writeln!(out, "  {check}")?;
            }
            return Ok(());
        }

        for check in &self.checks {
            let state = if CheckGate::is_active(rule, check) {
                "active"
            } else {
                "suppressed"
            };
            writeln!(out, "{check}: {state}")?;
        }
        Ok(())
    }
}
