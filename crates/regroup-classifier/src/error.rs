//! Error types for the Classifier

use thiserror::Error;

/// Errors that can occur while building a Classifier
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Marker pattern failed to compile
    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}
