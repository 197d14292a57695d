//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which reports whether the
//! YAML files matched by the given glob patterns are already in normalized
//! form.
//!
//! ## Functionality
//!
//! Every matched file is classified and evaluated independently: eligible
//! files are compared bit for bit against their normalized form and reported
//! as `[PASSED]` or `[FAILED]`; files that are not usable YAML are reported
//! to stderr and skipped without failing the batch. The process exits
//! non-zero when at least one file needs normalization.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;

use yaml_normalizer::batch;
use yaml_normalizer::output::OutputConfig;

/// Check whether YAML files are already normalized
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Glob patterns selecting the YAML files to check.
    ///
    /// Patterns that are malformed or match nothing are silently dropped
    /// during resolution.
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,
}

/// Execute the `check` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    if batch::check(&args.patterns, &out) {
        Ok(())
    } else {
        Err(anyhow::anyhow!("normalization suggested for some files"))
    }
}
