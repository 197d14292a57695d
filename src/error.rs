//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `yaml-normalizer` application. It uses the `thiserror` library to create
//! an `Error` enum that covers all anticipated failure modes, providing
//! clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures.
//!
//! Per-file failures (a file that is not YAML, a normalization that would
//! change a document's meaning) are represented as values so the batch
//! runner can report them without aborting the run.

use thiserror::Error;

/// Main error type for yaml-normalizer operations
#[derive(Error, Debug)]
pub enum Error {
    /// The file is missing, unreadable, not parseable as YAML, or contains
    /// only a bare string scalar.
    ///
    /// Such files are excluded from normalization and reported per file;
    /// they never abort a batch run.
    #[error("{path} not a YAML file")]
    NotYaml { path: String },

    /// Normalizing the file would have changed the parsed meaning of its
    /// documents.
    ///
    /// The original file is left untouched when this occurs.
    #[error("normalization is not stable for {path}")]
    Unstable { path: String },

    /// A flat dot-joined key addressed a path segment that already holds a
    /// non-mapping value (or a leaf landed on an intermediate mapping).
    #[error("flat key conflict at '{path}'")]
    FlatKeyConflict { path: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing or serialization error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
