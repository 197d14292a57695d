//! Batch check and rewrite over resolved YAML files
//!
//! Fans the per-file work out on a rayon worker pool and aggregates results
//! once every file has been processed. Each file owns its full
//! read/parse/serialize/write sequence; there is no shared mutable state
//! beyond the read-only resolved file list, so a single file's failure
//! never aborts the others. Writes are not transactional across the batch:
//! every file write is independently gated by its own stability check.

use std::fs;
use std::path::{Path, PathBuf};

use console::Color;
use log::debug;
use rayon::prelude::*;

use crate::classify::{classify, FileKind};
use crate::error::{Error, Result};
use crate::normalize::{is_stable, normalize_yaml};
use crate::output::{status, OutputConfig};
use crate::path::{read_file, relative_path_for, resolve_patterns};

/// Outcome of checking a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

/// Check whether every YAML file matched by `patterns` is already normalized.
///
/// Files that are not usable YAML are reported to stderr and skipped
/// without affecting the result. Returns true iff no eligible file needs
/// normalization; an empty resolution is trivially true.
pub fn check(patterns: &[String], out: &OutputConfig) -> bool {
    let files = resolve_patterns(patterns);
    let statuses: Vec<CheckStatus> = files
        .par_iter()
        .map(|file| check_file(file, out))
        .collect();
    statuses.iter().all(|status| *status != CheckStatus::Failed)
}

fn check_file(path: &Path, out: &OutputConfig) -> CheckStatus {
    let file = relative_path_for(path);
    match file_is_normalized(path) {
        Ok(true) => {
            println!(
                "{} already normalized {}",
                status(out, "[PASSED]", Color::Green),
                file.display()
            );
            CheckStatus::Passed
        }
        Ok(false) => {
            println!(
                "{} normalization suggested for {}",
                status(out, "[FAILED]", Color::Red),
                file.display()
            );
            CheckStatus::Failed
        }
        Err(err) => {
            debug!("skipping {}: {}", path.display(), err);
            eprintln!("{} not a YAML file", file.display());
            CheckStatus::Skipped
        }
    }
}

/// Whether the file's current content equals its normalized form.
///
/// # Errors
///
/// Returns [`Error::NotYaml`] for files excluded by classification, or the
/// underlying error if the file changes underneath us between
/// classification and reading.
pub fn file_is_normalized(path: &Path) -> Result<bool> {
    if classify(path) != FileKind::Document {
        return Err(Error::NotYaml {
            path: path.display().to_string(),
        });
    }
    let input = read_file(path)?;
    Ok(input == normalize_yaml(&input)?)
}

/// Rewrite every YAML file matched by `patterns` into normalized form.
///
/// Reports per-file outcomes to stderr and returns the resolved file list.
/// A file is only overwritten when the normalized text parses back to the
/// same document stream; otherwise it is left untouched and reported as an
/// error.
pub fn normalize(patterns: &[String], out: &OutputConfig) -> Vec<PathBuf> {
    let files = resolve_patterns(patterns);
    if files.is_empty() {
        eprintln!("{:?} does not match any files", patterns);
        return files;
    }
    files.par_iter().for_each(|file| process(file, out));
    files
}

fn process(path: &Path, out: &OutputConfig) {
    let file = relative_path_for(path);
    match normalize_file(path) {
        Ok(()) => eprintln!(
            "{} {}",
            status(out, "[NORMALIZED]", Color::Green),
            file.display()
        ),
        Err(Error::NotYaml { .. }) => eprintln!("{} is not a YAML file", file.display()),
        Err(err) => {
            debug!("{}: {}", path.display(), err);
            eprintln!(
                "{} Could not normalize {}",
                status(out, "[ERROR]", Color::Red),
                file.display()
            );
        }
    }
}

/// Normalize one file in place, gated by the stability check.
///
/// # Errors
///
/// Returns [`Error::NotYaml`] for files excluded by classification and
/// [`Error::Unstable`] when the normalized text does not parse back to the
/// original document stream. The file is written only on success.
pub fn normalize_file(path: &Path) -> Result<()> {
    if classify(path) != FileKind::Document {
        return Err(Error::NotYaml {
            path: path.display().to_string(),
        });
    }
    let input = read_file(path)?;
    let norm = normalize_yaml(&input)?;
    if !is_stable(&input, &norm) {
        return Err(Error::Unstable {
            path: path.display().to_string(),
        });
    }
    fs::write(path, norm)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn pattern(dir: &TempDir, glob: &str) -> Vec<String> {
        vec![format!("{}/{}", dir.path().display(), glob)]
    }

    #[test]
    fn test_check_passes_for_normalized_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "ok.yml", "---\na: 1\nb: 2\n");
        assert!(check(&pattern(&dir, "*.yml"), &OutputConfig::without_color()));
    }

    #[test]
    fn test_check_fails_for_unnormalized_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "ok.yml", "---\na: 1\nb: 2\n");
        write(&dir, "unsorted.yml", "b: 2\na: 1\n");
        assert!(!check(&pattern(&dir, "*.yml"), &OutputConfig::without_color()));
    }

    #[test]
    fn test_check_skips_do_not_fail_the_batch() {
        let dir = TempDir::new().unwrap();
        write(&dir, "ok.yml", "---\na: 1\n");
        write(&dir, "bad.yml", "invalid: [unclosed");
        write(&dir, "scalar.yml", "just a string\n");
        assert!(check(&pattern(&dir, "*.yml"), &OutputConfig::without_color()));
    }

    #[test]
    fn test_check_empty_resolution_is_trivially_true() {
        let dir = TempDir::new().unwrap();
        assert!(check(&pattern(&dir, "*.yml"), &OutputConfig::without_color()));
    }

    #[test]
    fn test_normalize_rewrites_file_in_place() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "unsorted.yml", "b:\n  z: 20\n  x: 10\na: ~\n");

        let processed = normalize(&pattern(&dir, "*.yml"), &OutputConfig::without_color());
        assert_eq!(processed, vec![path.clone()]);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "---\na: null\nb:\n  x: 10\n  z: 20\n"
        );
    }

    #[test]
    fn test_normalize_leaves_scalar_files_untouched() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "scalar.yml", "just a string\n");

        normalize(&pattern(&dir, "*.yml"), &OutputConfig::without_color());
        assert_eq!(fs::read_to_string(&path).unwrap(), "just a string\n");
    }

    #[test]
    fn test_normalize_empty_resolution_returns_empty() {
        let dir = TempDir::new().unwrap();
        let processed = normalize(&pattern(&dir, "*.yml"), &OutputConfig::without_color());
        assert!(processed.is_empty());
    }

    #[test]
    fn test_normalize_returns_all_resolved_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.yml", "b: 2\na: 1\n");
        write(&dir, "scalar.yml", "just a string\n");

        let processed = normalize(&pattern(&dir, "*.yml"), &OutputConfig::without_color());
        assert_eq!(processed.len(), 2);
    }

    #[test]
    fn test_file_is_normalized_rejects_non_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.yml", "invalid: [unclosed");
        assert!(matches!(
            file_is_normalized(&path),
            Err(Error::NotYaml { .. })
        ));
    }

    #[test]
    fn test_normalize_file_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "doc.yml", "b: 2\na: 1\n");

        normalize_file(&path).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        normalize_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }
}
