//! Configuration module
//!
//! Settings come from an optional `kugiri.toml`; command-line flags win over
//! anything set here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Defaults for commands
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Extra locale definitions
    #[serde(default)]
    pub locales: LocalesConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Command defaults
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Locale used when `--locale` is not given
    pub locale: String,

    /// Output format used when `--format` is not given
    pub format: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            locale: kugiri_core::COMMON_LOCALE.to_string(),
            format: "text".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

/// External locale definition sources
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LocalesConfig {
    /// Individual TOML files
    pub files: Vec<PathBuf>,

    /// Directories scanned for `*.toml`
    pub dirs: Vec<PathBuf>,
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of input files from which documents are processed in parallel
    pub parallel_threshold_files: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold_files: 8,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    ///
    /// Relative locale paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.locales.resolve_relative(base);
        }
        Ok(config)
    }

    /// Worker threads to use, resolving 0 to the CPU count
    pub fn worker_threads(&self) -> usize {
        match self.performance.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

impl LocalesConfig {
    fn resolve_relative(&mut self, base: &Path) {
        for path in self.files.iter_mut().chain(self.dirs.iter_mut()) {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
