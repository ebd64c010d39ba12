//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::language_source::LocaleCatalog;

pub mod checks;
pub mod generate_config;
pub mod normalize;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into sentences
    Segment(segment::SegmentArgs),

    /// Rewrite punctuation to a locale's conventions
    Normalize(normalize::NormalizeArgs),

    /// Report whether checks are active for a locale
    Checks(checks::ChecksArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a locale configuration file
    Validate(validate::ValidateArgs),

    /// Generate a locale configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available locale rules
    Locales,

    /// List available output formats
    Formats,
}

/// Settings and locales shared by every command of one invocation
#[derive(Debug)]
pub struct RunContext {
    pub config: CliConfig,
    pub catalog: LocaleCatalog,
    pub quiet: bool,
}

impl RunContext {
    /// Build the locale catalog from the built-in tables, the CLI settings
    /// and any extra `--locale-config` files, in that order
    pub fn new(config: CliConfig, locale_configs: &[PathBuf], quiet: bool) -> Result<Self> {
        let mut catalog = LocaleCatalog::builtin()?;

        for dir in &config.locales.dirs {
            catalog.add_dir(dir)?;
        }
        for file in config.locales.files.iter().chain(locale_configs) {
            catalog.add_file(file)?;
        }

        Ok(Self {
            config,
            catalog,
            quiet,
        })
    }

    /// Locale chosen on the command line, or the configured default
    pub fn locale<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.config.defaults.locale)
    }
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let stdout = std::io::stdout();
        self.write_to(ctx, &mut stdout.lock())
    }

    fn write_to(&self, ctx: &RunContext, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Locales => {
                writeln!(out, "Available locales:")?;
                let registry = ctx.catalog.registry();
                for id in registry.locales() {
                    let Some(rule) = registry.get(id) else {
                        continue;
                    };
                    let source = ctx
                        .catalog
                        .source(id)
                        .map(|source| source.display_name())
                        .unwrap_or_default();
                    writeln!(out, "  {:<10} {} ({})", id, rule.name(), source)?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                writeln!(out, "  text      One sentence per line")?;
                writeln!(out, "  json      JSON array with byte and character offsets")?;
                writeln!(out, "  markdown  Numbered list grouped by input file")?;
            }
        }
        Ok(())
    }
}
