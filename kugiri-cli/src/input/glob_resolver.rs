//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!(CliError::FileNotFound(patterns.join(", ")));
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_and_dedups() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let exact = temp_dir.path().join("a.txt").display().to_string();
        let files = resolve_patterns(&[pattern, exact]).unwrap();

        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_no_match_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.none", temp_dir.path().display());

        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file pattern: [");
    }
}
