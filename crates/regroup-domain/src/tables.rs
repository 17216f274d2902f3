//! Static configuration tables
//!
//! Hand-maintained, immutable lookup tables handed to the orchestrator at
//! construction time. They deserialize straight from the `[categories]`,
//! `[overrides]` and `[[documents]]` sections of a TOML file.

use crate::{ArtifactKey, UNKNOWN_CATEGORY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Artifact name → category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable(BTreeMap<String, String>);

impl CategoryTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, artifact: impl Into<String>, category: impl Into<String>) {
        self.0.insert(artifact.into(), category.into());
    }

    /// Category for `artifact`, if mapped
    pub fn get(&self, artifact: &str) -> Option<&str> {
        self.0.get(artifact).map(String::as_str)
    }

    /// Category for `artifact`, or the `"unknown"` sentinel
    pub fn category_or_unknown(&self, artifact: &str) -> &str {
        self.get(artifact).unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CategoryTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Grouping name → artifact key
///
/// Grouping names are authoritative: an entry here wins over whatever the
/// factory-marker heuristic finds in a grouped block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideTable(BTreeMap<String, ArtifactKey>);

impl OverrideTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, grouping: impl Into<String>, key: ArtifactKey) {
        self.0.insert(grouping.into(), key);
    }

    /// Override for `grouping`, if any
    pub fn get(&self, grouping: &str) -> Option<&ArtifactKey> {
        self.0.get(grouping)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ArtifactKey)> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = (K, ArtifactKey)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// How one source document is to be read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPlan {
    /// Document name, matched against `SourceDocument::name` (or its file name)
    pub name: String,

    /// Groupings to extract; empty means flat extraction
    #[serde(default)]
    pub groupings: Vec<String>,

    /// Artifacts a flat document is known to exercise
    #[serde(default)]
    pub candidates: Vec<ArtifactKey>,
}

impl DocumentPlan {
    /// Plan for a flat document with no candidates
    pub fn flat(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Plan for a grouped document
    pub fn grouped<I, S>(name: impl Into<String>, groupings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            groupings: groupings.into_iter().map(Into::into).collect(),
            candidates: Vec::new(),
        }
    }

    /// Add flat-mode candidates
    pub fn with_candidates(mut self, candidates: Vec<ArtifactKey>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Whether the document is read in grouped mode
    pub fn is_grouped(&self) -> bool {
        !self.groupings.is_empty()
    }

    /// Whether this plan applies to a document called `document`
    ///
    /// A plan named `SAMBasicTest.kt` matches both `SAMBasicTest.kt` and
    /// `some/dir/SAMBasicTest.kt`.
    pub fn matches(&self, document: &str) -> bool {
        document == self.name
            || document
                .rsplit(['/', '\\'])
                .next()
                .is_some_and(|file| file == self.name)
    }
}

/// All static tables consumed by a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticTables {
    /// Artifact → category
    #[serde(default)]
    pub categories: CategoryTable,

    /// Grouping → artifact key
    #[serde(default)]
    pub overrides: OverrideTable,

    /// Per-document extraction plans, in processing order
    #[serde(default)]
    pub documents: Vec<DocumentPlan>,
}

impl StaticTables {
    /// Plan registered for `document`, if any
    pub fn plan_for(&self, document: &str) -> Option<&DocumentPlan> {
        self.documents.iter().find(|plan| plan.matches(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup_miss_is_unknown() {
        let table: CategoryTable = [("IntValidator", "basic")].into_iter().collect();
        assert_eq!(table.category_or_unknown("IntValidator"), "basic");
        assert_eq!(table.category_or_unknown("Orphan"), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_plan_matches_file_name() {
        let plan = DocumentPlan::flat("SAMBasicTest.kt");
        assert!(plan.matches("SAMBasicTest.kt"));
        assert!(plan.matches("src/test/SAMBasicTest.kt"));
        assert!(!plan.matches("OtherSAMBasicTest.kt"));
    }

    #[test]
    fn test_parse_tables_from_toml() {
        let toml = r#"
            [categories]
            IntValidator = "basic"
            SetTransformer = "collections"

            [overrides]
            ListMapperTests = { artifact = "ListMapper", category = "generics" }

            [[documents]]
            name = "SAMCollectionsTest.kt"
            groupings = ["ListMapperTests", "SetTransformerTests"]

            [[documents]]
            name = "SAMBasicTest.kt"
            candidates = [{ artifact = "IntValidator", category = "basic" }]
        "#;

        let tables: StaticTables = toml::from_str(toml).unwrap();
        assert_eq!(tables.categories.len(), 2);
        assert_eq!(
            tables.overrides.get("ListMapperTests"),
            Some(&ArtifactKey::new("ListMapper", "generics"))
        );
        assert!(tables.plan_for("SAMCollectionsTest.kt").unwrap().is_grouped());
        let basic = tables.plan_for("SAMBasicTest.kt").unwrap();
        assert!(!basic.is_grouped());
        assert_eq!(basic.candidates.len(), 1);
        assert!(tables.plan_for("Missing.kt").is_none());
    }
}
