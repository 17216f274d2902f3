//! Error types for Orchestrator construction

use regroup_classifier::ClassifierError;
use regroup_extractor::ExtractorError;
use regroup_synthesizer::SynthesizerError;
use thiserror::Error;

/// Errors that can occur while building an Orchestrator
///
/// A run itself never fails: everything it meets is recorded as a diagnostic.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// Extractor could not be built
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// Classifier could not be built
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Synthesizer could not be built
    #[error("Synthesizer error: {0}")]
    Synthesizer(#[from] SynthesizerError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
