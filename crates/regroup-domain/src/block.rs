//! Block module - source documents and the test units lifted out of them

use serde::{Deserialize, Serialize};

/// A consolidated source file handed to the pipeline
///
/// Immutable once read: the pipeline only borrows its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Originating path or file name
    pub name: String,

    /// Raw text content
    pub text: String,
}

impl SourceDocument {
    /// Create a new source document
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// One extracted, self-contained unit (a single test case)
///
/// `full_text` is the exact source span from the unit marker to the closing
/// body delimiter. It is always delimiter-balanced and contains `body`
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Declared unit name (the text inside the name quotes)
    pub name: String,

    /// Text between the end of the name and the opening body delimiter, trimmed
    pub signature: String,

    /// Body span, inclusive of its opening and closing delimiters
    pub body: String,

    /// Full unit span, marker included
    pub full_text: String,

    /// Grouping construct the unit was nested in, for grouped extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
}

impl Block {
    /// Whether this block came from a grouped-mode extraction
    pub fn is_grouped(&self) -> bool {
        self.grouping.is_some()
    }
}
