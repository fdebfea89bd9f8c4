//! CLI argument parsing for codefence.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codefence: resolve the configuration of annotated fenced code blocks.
///
/// A block file holds an optional configuration prelude, a `---` line,
/// and the literal code. Use `-` to read the block from stdin.
#[derive(Parser, Debug)]
#[command(name = "codefence")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for codefence.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a block and print the result.
    ///
    /// Shows the resolved configuration, the filtered content (or the
    /// filter error) and the resolved annotations.
    Resolve(ResolveArgs),

    /// Check a block's configuration against the known schema.
    ///
    /// Reports unknown keys, malformed values and annotation items that
    /// can never resolve. Does not resolve the block.
    Check(CheckArgs),
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Block file to resolve (`-` for stdin).
    pub block: PathBuf,

    /// YAML file mapping preset names to configuration.
    #[arg(long)]
    pub presets: Option<PathBuf>,

    /// Page default block applied under the block's own configuration.
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// Global defaults file.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Block file to check (`-` for stdin).
    pub block: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
