//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Regroup - split consolidated test sources into one file per artifact.
#[derive(Debug, Parser)]
#[command(name = "regroup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ./regroup.toml when present)
    #[arg(short, long, global = true, env = "REGROUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (paths or names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split consolidated sources into per-artifact destinations
    Split(SplitArgs),

    /// Report declared artifacts that have no test
    Coverage(CoverageArgs),
}

/// Arguments for the split command.
#[derive(Debug, Parser)]
pub struct SplitArgs {
    /// Directory holding the consolidated source documents
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Directory receiving `<category>/<Artifact><Suffix>.<ext>` files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Run the pipeline and report without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the coverage command.
#[derive(Debug, Parser)]
pub struct CoverageArgs {
    /// Directory of production sources; file stems are the declared artifacts
    #[arg(long)]
    pub sources: PathBuf,

    /// Directory of test sources
    #[arg(long)]
    pub tests: PathBuf,

    /// Artifact that intentionally has no test (repeatable)
    #[arg(short, long)]
    pub exclude: Vec<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
