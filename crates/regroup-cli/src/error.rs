//! Error types for the CLI application.

use regroup_classifier::ClassifierError;
use regroup_orchestrator::OrchestratorError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A file or directory named on the command line or in the config is missing
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Orchestrator could not be built
    #[error("{0}")]
    Orchestrator(#[from] OrchestratorError),

    /// Classifier could not be built
    #[error("{0}")]
    Classifier(#[from] ClassifierError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
