//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// Delimiter depth never returned to zero before end of text
    #[error("Unbalanced delimiters: {construct} opened at line {line} never closes")]
    Unbalanced {
        /// Unit or grouping that failed to close
        construct: String,
        /// 1-based line of the construct's start
        line: usize,
    },

    /// Quoted unit name carries a delimiter, which would unbalance the block
    #[error("Unbalanced delimiters: unit name '{name}' at line {line} contains a delimiter")]
    UnbalancedName {
        /// Unit name as written between the quotes
        name: String,
        /// 1-based line of the unit's marker
        line: usize,
    },

    /// Requested grouping is not declared in the document
    #[error("Grouping not found: {0}")]
    GroupingNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Whether this error means the whole document must be skipped
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ExtractorError::Unbalanced { .. } | ExtractorError::UnbalancedName { .. }
        )
    }
}
