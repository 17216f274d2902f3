//! Error types for the Synthesizer

use thiserror::Error;

/// Errors that can occur while rendering a destination
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesizerError {
    /// Rendered text does not hold as many opening as closing delimiters
    #[error("Rendered {artifact} is unbalanced: {open} opening vs {close} closing delimiters")]
    Unbalanced {
        /// Artifact whose destination failed the check
        artifact: String,
        /// Opening delimiters counted
        open: usize,
        /// Closing delimiters counted
        close: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
