//! Destination module - one regenerated file per artifact

use crate::{ArtifactKey, Block};
use serde::Serialize;
use std::collections::BTreeSet;

/// A synthesized destination file
///
/// Produced once by the synthesizer and handed to the persistence
/// collaborator; the pipeline keeps no reference to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationDocument {
    /// Artifact this file covers
    pub artifact: ArtifactKey,

    /// Fixed header block (license or generated-file notice)
    pub header: String,

    /// Package declared by the file
    pub package_path: String,

    /// Every import the file declares
    pub imports: BTreeSet<String>,

    /// Blocks in output order
    pub body_blocks: Vec<Block>,

    /// Output path relative to the destination root
    pub relative_path: String,

    /// Complete rendered text
    pub text: String,
}

impl DestinationDocument {
    /// Number of blocks written to this file
    pub fn block_count(&self) -> usize {
        self.body_blocks.len()
    }
}
