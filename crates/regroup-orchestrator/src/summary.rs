//! Run summary: counts and diagnostics collected during a run

use regroup_domain::{ArtifactKey, Diagnostic};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything a run reports
///
/// Tracks documents and blocks seen, blocks written per artifact, artifacts
/// per category, and every diagnostic in the order it was raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Documents handed to the run
    pub documents_processed: usize,

    /// Blocks extracted across all documents
    pub blocks_extracted: usize,

    /// Blocks written per destination (`category/artifact`)
    pub artifact_blocks: BTreeMap<String, usize>,

    /// Destinations written per category
    pub category_artifacts: BTreeMap<String, usize>,

    /// Diagnostics in the order they were raised
    pub diagnostics: Vec<Diagnostic>,
}

impl RunSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed document and the blocks it yielded
    pub fn record_document(&mut self, blocks: usize) {
        self.documents_processed += 1;
        self.blocks_extracted += blocks;
    }

    /// Record a synthesized destination
    pub fn record_destination(&mut self, key: &ArtifactKey, blocks: usize) {
        *self.artifact_blocks.entry(key.to_string()).or_insert(0) += blocks;
        *self.category_artifacts.entry(key.category.clone()).or_insert(0) += 1;
    }

    /// Record a diagnostic
    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Number of destinations written
    pub fn total_destinations(&self) -> usize {
        self.artifact_blocks.len()
    }

    /// Number of blocks written, counting shared blocks once per destination
    pub fn total_blocks_written(&self) -> usize {
        self.artifact_blocks.values().sum()
    }

    /// Diagnostics bucketed by kind
    pub fn diagnostics_by_kind(&self) -> BTreeMap<&'static str, Vec<&Diagnostic>> {
        let mut by_kind: BTreeMap<&'static str, Vec<&Diagnostic>> = BTreeMap::new();
        for diagnostic in &self.diagnostics {
            by_kind.entry(diagnostic.kind()).or_default().push(diagnostic);
        }
        by_kind
    }

    /// Whether any input produced no output
    pub fn has_losses(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_loss)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a plain text report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Regroup Run Summary".to_string(),
            "===================".to_string(),
            format!("Documents processed: {}", self.documents_processed),
            format!("Blocks extracted: {}", self.blocks_extracted),
            format!("Destinations written: {}", self.total_destinations()),
            format!("Blocks written: {}", self.total_blocks_written()),
            String::new(),
        ];

        if !self.category_artifacts.is_empty() {
            lines.push("Destinations by category:".to_string());
            for (category, count) in &self.category_artifacts {
                lines.push(format!("  {}: {}", category, count));
            }
            lines.push(String::new());
        }

        if !self.artifact_blocks.is_empty() {
            lines.push("Blocks by destination:".to_string());
            for (artifact, count) in &self.artifact_blocks {
                lines.push(format!("  {}: {}", artifact, count));
            }
            lines.push(String::new());
        }

        if !self.diagnostics.is_empty() {
            lines.push(format!("Diagnostics ({}):", self.diagnostics.len()));
            for (kind, diagnostics) in self.diagnostics_by_kind() {
                lines.push(format!("  {} ({}):", kind, diagnostics.len()));
                for diagnostic in diagnostics {
                    lines.push(format!("    - {}", diagnostic));
                }
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_creation() {
        let summary = RunSummary::new();
        assert_eq!(summary.total_destinations(), 0);
        assert_eq!(summary.total_blocks_written(), 0);
        assert!(!summary.has_losses());
    }

    #[test]
    fn test_record_destination() {
        let mut summary = RunSummary::new();
        summary.record_destination(&ArtifactKey::new("Foo", "basic"), 2);
        summary.record_destination(&ArtifactKey::new("Bar", "basic"), 3);
        summary.record_destination(&ArtifactKey::new("Baz", "generics"), 1);

        assert_eq!(summary.total_destinations(), 3);
        assert_eq!(summary.total_blocks_written(), 6);
        assert_eq!(summary.category_artifacts["basic"], 2);
        assert_eq!(summary.artifact_blocks["generics/Baz"], 1);
    }

    #[test]
    fn test_diagnostics_by_kind() {
        let mut summary = RunSummary::new();
        summary.record(Diagnostic::UnresolvedCategory {
            artifact: "Orphan".to_string(),
            blocks: 1,
        });
        summary.record(Diagnostic::SharedBlock {
            document: "A.kt".to_string(),
            block: "x".to_string(),
            artifacts: vec!["Foo".to_string(), "Bar".to_string()],
        });
        summary.record(Diagnostic::UnresolvedCategory {
            artifact: "Stray".to_string(),
            blocks: 2,
        });

        let by_kind = summary.diagnostics_by_kind();
        assert_eq!(by_kind["unresolved_category"].len(), 2);
        assert_eq!(by_kind["shared_block"].len(), 1);
        assert!(summary.has_losses());
    }

    #[test]
    fn test_shared_blocks_are_not_losses() {
        let mut summary = RunSummary::new();
        summary.record(Diagnostic::SharedBlock {
            document: "A.kt".to_string(),
            block: "x".to_string(),
            artifacts: vec!["Foo".to_string(), "Bar".to_string()],
        });
        assert!(!summary.has_losses());
    }

    #[test]
    fn test_summary_text() {
        let mut summary = RunSummary::new();
        summary.record_document(3);
        summary.record_destination(&ArtifactKey::new("Foo", "basic"), 2);
        summary.record(Diagnostic::UnclassifiedBlock {
            document: "A.kt".to_string(),
            block: "alpha".to_string(),
            excerpt: "{ assertTrue(true) }".to_string(),
        });

        let text = summary.summary();
        assert!(text.contains("Documents processed: 1"));
        assert!(text.contains("Blocks extracted: 3"));
        assert!(text.contains("basic/Foo: 2"));
        assert!(text.contains("unclassified_block (1):"));
    }

    #[test]
    fn test_json_tags_diagnostics() {
        let mut summary = RunSummary::new();
        summary.record(Diagnostic::MalformedDocument {
            document: "B.kt".to_string(),
            detail: "never closes".to_string(),
        });
        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(json["diagnostics"][0]["kind"], "malformed_document");
        assert_eq!(json["diagnostics"][0]["document"], "B.kt");
    }
}
