//! Category resolution

use regroup_domain::{ArtifactKey, CategoryTable};
use tracing::debug;

/// Resolves artifact names to categories through the static category table
#[derive(Debug, Clone, Copy)]
pub struct CategoryResolver<'a> {
    table: &'a CategoryTable,
}

impl<'a> CategoryResolver<'a> {
    /// Create a resolver over `table`
    pub fn new(table: &'a CategoryTable) -> Self {
        Self { table }
    }

    /// Key for `artifact`; the category is `"unknown"` when the table has no entry
    pub fn resolve(&self, artifact: &str) -> ArtifactKey {
        let category = self.table.category_or_unknown(artifact);
        if self.table.get(artifact).is_none() {
            debug!("No category for artifact '{}'", artifact);
        }
        ArtifactKey::new(artifact, category)
    }
}
