//! File classification for the batch runner
//!
//! Decides, per path, whether a file is eligible for normalization. Only
//! [`FileKind::Document`] files are checked or rewritten; everything else is
//! reported and skipped.

use std::path::Path;

use log::debug;
use serde_yaml::Value;

use crate::normalize::parse_stream;
use crate::path::read_file;

/// How a path participates in a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// The path does not resolve to a regular readable file.
    NotAFile,
    /// The content fails to parse as YAML.
    Unparseable,
    /// A single bare string scalar document. There is no key order to
    /// canonicalize, so such files are excluded from normalization.
    ScalarOnly,
    /// Eligible for normalization.
    Document,
}

/// Classify a path for normalization.
///
/// Empty streams and non-string scalar documents count as [`FileKind::Document`];
/// normalizing them is harmless and keeps the check total over all parseable
/// files.
pub fn classify(path: &Path) -> FileKind {
    if !path.is_file() {
        return FileKind::NotAFile;
    }
    let content = match read_file(path) {
        Ok(content) => content,
        Err(_) => return FileKind::NotAFile,
    };
    match parse_stream(&content) {
        Ok(documents) => {
            if let [Value::String(_)] = documents.as_slice() {
                FileKind::ScalarOnly
            } else {
                FileKind::Document
            }
        }
        Err(err) => {
            debug!("{}: {}", path.display(), err);
            FileKind::Unparseable
        }
    }
}
