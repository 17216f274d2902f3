//! Artifact module - identifies the destination of a block

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to artifacts missing from the category table
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Identifies one destination file: the production artifact a block exercises
/// and the category (directory/package bucket) it belongs to.
///
/// Two blocks with the same key are merged into the same destination.
///
/// # Examples
///
/// ```
/// use regroup_domain::ArtifactKey;
///
/// let key = ArtifactKey::new("IntValidator", "basic");
/// assert_eq!(key.to_string(), "basic/IntValidator");
/// assert!(!key.is_unresolved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtifactKey {
    /// Artifact name (e.g. the interface under test)
    pub artifact: String,

    /// Destination category
    pub category: String,
}

impl ArtifactKey {
    /// Create a new artifact key
    pub fn new(artifact: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            artifact: artifact.into(),
            category: category.into(),
        }
    }

    /// Whether the category lookup failed for this artifact
    pub fn is_unresolved(&self) -> bool {
        self.category == UNKNOWN_CATEGORY
    }

    /// Key ordering destinations by category first, then artifact
    pub fn destination_key(&self) -> (String, String) {
        (self.category.clone(), self.artifact.clone())
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category() {
        let key = ArtifactKey::new("Orphan", UNKNOWN_CATEGORY);
        assert!(key.is_unresolved());
    }

    #[test]
    fn test_destination_key_orders_by_category() {
        let a = ArtifactKey::new("Zeta", "basic");
        let b = ArtifactKey::new("Alpha", "generics");
        assert!(a.destination_key() < b.destination_key());
    }

    #[test]
    fn test_deserialize_from_table() {
        let key: ArtifactKey =
            toml::from_str("artifact = \"ListMapper\"\ncategory = \"generics\"").unwrap();
        assert_eq!(key, ArtifactKey::new("ListMapper", "generics"));
    }
}
