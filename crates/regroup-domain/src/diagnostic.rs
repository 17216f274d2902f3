//! Diagnostic module - every recoverable problem a run can report

use serde::Serialize;
use std::fmt;

/// A recoverable problem found during a run
///
/// Nothing in the pipeline is fatal: each of these is recorded and the run
/// continues with the next document, block or artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Delimiter balance never returned to zero; the document was skipped
    MalformedDocument {
        /// Document name
        document: String,
        /// What failed to close and where
        detail: String,
    },

    /// The document could not be read; it was skipped
    UnreadableDocument {
        /// Document name
        document: String,
        /// Why the read failed
        detail: String,
    },

    /// No artifact could be identified; the block was dropped
    UnclassifiedBlock {
        /// Document name
        document: String,
        /// Block name
        block: String,
        /// Leading text of the block body for diagnosis
        excerpt: String,
    },

    /// Artifact resolved but missing from the category table; no file written
    UnresolvedCategory {
        /// Artifact name
        artifact: String,
        /// Number of blocks left without a destination
        blocks: usize,
    },

    /// A configured grouping does not occur in its document
    MissingGrouping {
        /// Document name
        document: String,
        /// Grouping name
        grouping: String,
    },

    /// One block was assigned to several artifacts
    SharedBlock {
        /// Document name
        document: String,
        /// Block name
        block: String,
        /// Every artifact that received the block
        artifacts: Vec<String>,
    },

    /// The rendered destination failed its balance check
    SynthesisFailed {
        /// Artifact name
        artifact: String,
        /// Failure detail
        detail: String,
    },
}

impl Diagnostic {
    /// Short machine-friendly kind name
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::MalformedDocument { .. } => "malformed_document",
            Diagnostic::UnreadableDocument { .. } => "unreadable_document",
            Diagnostic::UnclassifiedBlock { .. } => "unclassified_block",
            Diagnostic::UnresolvedCategory { .. } => "unresolved_category",
            Diagnostic::MissingGrouping { .. } => "missing_grouping",
            Diagnostic::SharedBlock { .. } => "shared_block",
            Diagnostic::SynthesisFailed { .. } => "synthesis_failed",
        }
    }

    /// Whether the diagnostic means some input produced no output
    ///
    /// Shared blocks are informational: the block was written, possibly twice.
    pub fn is_loss(&self) -> bool {
        !matches!(self, Diagnostic::SharedBlock { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedDocument { document, detail } => {
                write!(f, "malformed document {}: {}", document, detail)
            }
            Diagnostic::UnreadableDocument { document, detail } => {
                write!(f, "skipped {}: {}", document, detail)
            }
            Diagnostic::UnclassifiedBlock {
                document,
                block,
                excerpt,
            } => write!(
                f,
                "could not identify artifact for '{}' in {}: {}",
                block, document, excerpt
            ),
            Diagnostic::UnresolvedCategory { artifact, blocks } => write!(
                f,
                "unknown category for {} ({} block(s) skipped)",
                artifact, blocks
            ),
            Diagnostic::MissingGrouping { document, grouping } => {
                write!(f, "grouping {} not found in {}", grouping, document)
            }
            Diagnostic::SharedBlock {
                document,
                block,
                artifacts,
            } => write!(
                f,
                "'{}' in {} assigned to {}",
                block,
                document,
                artifacts.join(", ")
            ),
            Diagnostic::SynthesisFailed { artifact, detail } => {
                write!(f, "could not synthesize {}: {}", artifact, detail)
            }
        }
    }
}

/// Shorten `text` to at most `max` characters on a single line
///
/// # Examples
///
/// ```
/// use regroup_domain::excerpt;
///
/// assert_eq!(excerpt("short", 10), "short");
/// assert_eq!(excerpt("a rather long test name", 8), "a rather...");
/// ```
pub fn excerpt(text: &str, max: usize) -> String {
    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}
