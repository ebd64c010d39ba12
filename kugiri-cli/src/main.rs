//! Command-line entry point for kugiri

use anyhow::Result;
use clap::Parser;
use kugiri_cli::commands::{Commands, RunContext};
use kugiri_cli::config::CliConfig;
use std::path::PathBuf;

/// Locale-aware sentence segmentation and punctuation normalization
#[derive(Debug, Parser)]
#[command(name = "kugiri", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CLI settings file (kugiri.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extra locale definition file, may be repeated
    #[arg(long = "locale-config", global = true, value_name = "FILE")]
    locale_config: Vec<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    log::debug!("Arguments: {:?}", cli);

    match &cli.command {
        Commands::Validate(args) => return args.execute(),
        Commands::GenerateConfig(args) => return args.execute(),
        _ => {}
    }

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let ctx = RunContext::new(config, &cli.locale_config, cli.quiet)?;

    match &cli.command {
        Commands::Segment(args) => args.execute(&ctx),
        Commands::Normalize(args) => args.execute(&ctx),
        Commands::Checks(args) => args.execute(&ctx),
        Commands::List { subcommand } => subcommand.execute(&ctx),
        Commands::Validate(_) | Commands::GenerateConfig(_) => Ok(()),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
