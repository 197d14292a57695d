//! # Normalize Command Implementation
//!
//! This module implements the `normalize` subcommand, which rewrites the
//! YAML files matched by the given glob patterns into normalized form, in
//! place.
//!
//! ## Functionality
//!
//! Every matched file is processed independently. A file is only
//! overwritten after the stability check confirmed that its normalized text
//! parses back to the same document stream; otherwise the original is left
//! untouched and an error is reported. Per-file failures never abort the
//! batch, and the command itself always succeeds once argument parsing is
//! done.

use anyhow::Result;
use clap::Args;

use yaml_normalizer::batch;
use yaml_normalizer::output::OutputConfig;

/// Normalize YAML files in place
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Glob patterns selecting the YAML files to normalize.
    ///
    /// Patterns that are malformed or match nothing are silently dropped
    /// during resolution.
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,
}

/// Execute the `normalize` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: NormalizeArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    batch::normalize(&args.patterns, &out);
    Ok(())
}
