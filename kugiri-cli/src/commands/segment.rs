//! Segment command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use kugiri_core::{LocaleRule, PunctuationNormalizer, Segmenter};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use super::RunContext;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormatter, SentenceRecord, TextFormatter,
};
use crate::progress::ProgressReporter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Locale whose rules are used, e.g. ja or ja_JP.UTF-8
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Normalize punctuation of every sentence
    #[arg(short, long)]
    pub normalize: bool,

    /// Force parallel processing even for few files
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: from config, else CPU count)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with offsets
    Json,
    /// Markdown formatted output
    Markdown,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let format = self.output_format(&ctx.config)?;
        let writer: Box<dyn io::Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, ctx.config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for record in self.run(ctx)? {
            formatter.format_sentence(&record)?;
        }
        formatter.finish()
    }

    /// Segment every input file, keeping input order
    pub fn run(&self, ctx: &RunContext) -> Result<Vec<SentenceRecord>> {
        let files = resolve_patterns(&self.input)?;
        let locale = ctx.locale(self.locale.as_deref());
        let rule = ctx.catalog.resolve(locale);

        log::info!(
            "Segmenting {} file(s) with locale '{}'",
            files.len(),
            rule.locale_id()
        );

        let progress = ProgressReporter::new(files.len() as u64, ctx.quiet);
        let segment = |path: &PathBuf| {
            let records = self.segment_file(&rule, path);
            progress.file_completed(&path.display().to_string());
            records
        };

        let use_parallel = files.len() > 1
            && (self.parallel || files.len() >= ctx.config.performance.parallel_threshold_files);
        let per_file = if use_parallel {
            let threads = self.threads.unwrap_or_else(|| ctx.config.worker_threads());
            log::debug!("Processing files in parallel on {} threads", threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to create thread pool")?;
            pool.install(|| files.par_iter().map(segment).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(segment).collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        Ok(per_file.into_iter().flatten().collect())
    }

    fn segment_file(&self, rule: &LocaleRule, path: &Path) -> Result<Vec<SentenceRecord>> {
        let text = FileReader::read_text(path)?;
        let source = path.display().to_string();

        let records: Vec<SentenceRecord> = Segmenter::segment(rule, &text)
            .map(|span| SentenceRecord {
                source: source.clone(),
                text: if self.normalize {
                    PunctuationNormalizer::normalize(rule, span.text).into_owned()
                } else {
                    span.text.to_string()
                },
                start: span.start,
                end: span.end,
                char_start: span.char_start,
                char_end: span.char_end,
            })
            .collect();

        log::debug!("{}: {} sentences", source, records.len());
        Ok(records)
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.defaults.format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.defaults.format
            ))
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &Path) -> SegmentArgs {
        SegmentArgs {
            input: vec![input.display().to_string()],
            output: None,
            format: None,
            locale: Some("ja".to_string()),
            normalize: false,
            parallel: false,
            threads: None,
        }
    }

    fn context() -> RunContext {
        RunContext::new(CliConfig::default(), &[], true).unwrap()
    }

    #[test]
    fn test_segment_japanese_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ja.txt");
        fs::write(&path, "これは文です。それもです。").unwrap();

        let records = args(&path).run(&context()).unwrap();
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["これは文です。", "それもです。"]);
        assert_eq!(records[1].start, 21);
        assert_eq!(records[1].char_start, 7);
        assert_eq!(records[1].source, path.display().to_string());
    }

    #[test]
    fn test_segment_with_normalization() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ja.txt");
        fs::write(&path, "はい. いいえ。").unwrap();

        let mut segment = args(&path);
        segment.normalize = true;
        let records = segment.run(&context()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "はい。いいえ。");
        // Offsets keep pointing into the original input
        let original = "はい. いいえ。";
        assert_eq!(records[0].end, original.len());
        assert_eq!(&original[records[0].start..records[0].end], original);
        assert_ne!(records[0].text.len(), records[0].end - records[0].start);
    }

    #[test]
    fn test_parallel_keeps_input_order() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..4 {
            fs::write(
                temp_dir.path().join(format!("doc{i}.txt")),
                format!("File {i} first. File {i} second."),
            )
            .unwrap();
        }

        let mut segment = args(&temp_dir.path().join("*.txt"));
        segment.locale = None;
        segment.parallel = true;
        segment.threads = Some(2);
        let records = segment.run(&context()).unwrap();

        assert_eq!(records.len(), 8);
        assert_eq!(records[0].text, "File 0 first. ");
        assert_eq!(records[7].text, "File 3 second.");
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let mut config = CliConfig::default();
        let segment = args(Path::new("unused.txt"));
        assert_eq!(segment.output_format(&config).unwrap(), OutputFormat::Text);

        config.defaults.format = "JSON".to_string();
        assert_eq!(segment.output_format(&config).unwrap(), OutputFormat::Json);

        config.defaults.format = "yaml".to_string();
        let err = segment.output_format(&config).unwrap_err();
        assert!(err.to_string().contains("unknown output format 'yaml'"));
    }

    #[test]
    fn test_missing_input_fails() {
        let err = args(Path::new("/nonexistent/kugiri/input.txt"))
            .run(&context())
            .unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
