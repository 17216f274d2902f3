//! Extraction modes and per-document results

use regroup_domain::{Block, DocumentPlan};

/// How a document is scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Every unit in the document is a sibling; emit them all
    Flat,

    /// Only units nested in these named groupings are emitted
    Grouped(Vec<String>),
}

impl From<&DocumentPlan> for ExtractionMode {
    fn from(plan: &DocumentPlan) -> Self {
        if plan.is_grouped() {
            ExtractionMode::Grouped(plan.groupings.clone())
        } else {
            ExtractionMode::Flat
        }
    }
}

/// Blocks extracted from one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentExtraction {
    /// Blocks in appearance order (grouping order first in grouped mode)
    pub blocks: Vec<Block>,

    /// Requested groupings the document does not declare
    pub missing_groupings: Vec<String>,
}
