//! Blocks bucketed per artifact, in first-seen order

use crate::{ArtifactKey, Block};
use indexmap::IndexMap;

/// Mapping from artifact to its blocks
///
/// Buckets keep the order in which their key was first seen, and blocks keep
/// the order in which they were pushed: document-processing order, then
/// in-document appearance order.
#[derive(Debug, Clone, Default)]
pub struct GroupedBlocks {
    buckets: IndexMap<ArtifactKey, Vec<Block>>,
}

impl GroupedBlocks {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block to the bucket of `key`
    pub fn push(&mut self, key: ArtifactKey, block: Block) {
        self.buckets.entry(key).or_default().push(block);
    }

    /// Blocks recorded for `key`
    pub fn get(&self, key: &ArtifactKey) -> Option<&[Block]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Iterate buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&ArtifactKey, &[Block])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of artifacts
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no block was grouped
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of blocks across all buckets
    pub fn block_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(name: &str) -> Block {
        Block {
            name: name.to_string(),
            signature: "()".to_string(),
            body: "{}".to_string(),
            full_text: format!("@Test fun `{}`() {{}}", name),
            grouping: None,
        }
    }

    #[test]
    fn test_first_seen_order() {
        let mut grouped = GroupedBlocks::new();
        grouped.push(ArtifactKey::new("Zeta", "basic"), block("z1"));
        grouped.push(ArtifactKey::new("Alpha", "basic"), block("a1"));
        grouped.push(ArtifactKey::new("Zeta", "basic"), block("z2"));

        let keys: Vec<_> = grouped.iter().map(|(k, _)| k.artifact.as_str()).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);

        let zeta = grouped.get(&ArtifactKey::new("Zeta", "basic")).unwrap();
        assert_eq!(zeta[0].name, "z1");
        assert_eq!(zeta[1].name, "z2");
        assert_eq!(grouped.block_count(), 3);
    }
}
