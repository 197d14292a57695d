//! Glob resolution, file reading and path reporting helpers

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Expand glob patterns into a deduplicated, sorted list of paths.
///
/// Malformed patterns and unreadable matches are silently dropped; a
/// pattern that matches nothing simply contributes nothing. Classification
/// decides later whether a match is usable, so directories and other
/// non-files are kept here.
pub fn resolve_patterns(patterns: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = patterns
        .iter()
        .filter_map(|pattern| glob::glob(pattern).ok())
        .flatten()
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();
    files.dedup();
    debug!("resolved {} paths from {} patterns", files.len(), patterns.len());
    files
}

/// Read a file as UTF-8 text, tolerating a leading byte-order mark.
pub fn read_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    match content.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

/// Render a path relative to the current working directory where possible.
///
/// Reports use this form. Falls back to the resolved path when it is not
/// under the working directory.
pub fn relative_path_for(path: &Path) -> PathBuf {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if let Ok(cwd) = env::current_dir() {
        if let Ok(relative) = resolved.strip_prefix(&cwd) {
            return relative.to_path_buf();
        }
    }
    resolved
}
