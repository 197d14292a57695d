//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// YAML Normalizer - Check and rewrite YAML files into a canonical form
#[derive(Parser, Debug)]
#[command(name = "yaml-normalizer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether YAML files are already normalized
    Check(commands::check::CheckArgs),

    /// Normalize YAML files in place
    Normalize(commands::normalize::NormalizeArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .init();

        match self.command {
            Commands::Check(args) => commands::check::execute(args, &self.color),
            Commands::Normalize(args) => commands::normalize::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
