//! Regroup CLI library.
//!
//! This library provides the pieces behind the `regroup` binary: argument
//! parsing, the `regroup.toml` configuration file, filesystem collaborators
//! for reading sources and writing destinations, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::RegroupConfig;
pub use error::{CliError, Result};
pub use output::Formatter;
