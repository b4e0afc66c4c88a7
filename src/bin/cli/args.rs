//! CLI argument definitions for the opdocs binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generate a Markdown reference of `$`-prefixed operations
#[derive(Parser, Debug)]
#[command(name = "opdocs")]
#[command(version = opdocs::VERSION)]
#[command(about = "Generate a Markdown reference of $-prefixed operations")]
#[command(long_about = "
Scan a directory of operation sources for `$name(args:` signatures and write a
Markdown table per source file linking each operator to its documentation.

Common Usage:

  # Regenerate docs/operations.md from src/operations/*.ts
  opdocs

  # Fail in CI when the committed reference is out of date
  opdocs --check

  # Inspect the extracted catalog
  opdocs --stdout --format json
")]
pub struct Cli {
    /// Project root; relative paths are resolved against it [default: current directory]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory holding the operation sources [default: src/operations]
    #[arg(long)]
    pub operations_dir: Option<PathBuf>,

    /// Markdown file to write [default: docs/operations.md]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File-name suffix selecting operation files [default: .ts]
    #[arg(long)]
    pub extension: Option<String>,

    /// Skip files whose name contains this marker [default: .test.]
    #[arg(long)]
    pub test_marker: Option<String>,

    /// Additional glob patterns of operation files to skip (repeatable)
    #[arg(long)]
    pub ignore: Vec<String>,

    /// YAML configuration file [default: .opdocs.yml or .opdocs.yaml in the root]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// Print the rendered output instead of writing the document
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Verify the document is up to date without writing it
    #[arg(long)]
    pub check: bool,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for the rendered catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown reference document
    Markdown,
    /// JSON catalog
    Json,
}
