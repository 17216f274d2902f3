//! Regroup Domain Layer
//!
//! This crate contains the data model shared by every stage of the regroup
//! pipeline. It performs no I/O and holds no global state.
//!
//! ## Key Concepts
//!
//! - **SourceDocument**: a consolidated source file, read once and never mutated
//! - **Block**: one self-contained test unit lifted out of a document
//! - **ArtifactKey**: the `(artifact, category)` pair naming one destination file
//! - **GroupedBlocks**: blocks bucketed per artifact, in first-seen order
//! - **StaticTables**: hand-maintained category, override and document tables
//! - **Diagnostic**: every recoverable problem a run can report
//!
//! ## Pipeline
//!
//! ```text
//! SourceDocument → Extractor → Block → Classifier → ArtifactKey
//!                                        ↓
//!                     GroupedBlocks → Synthesizer → DestinationDocument
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod balance;
pub mod block;
pub mod destination;
pub mod diagnostic;
pub mod grouped;
pub mod tables;

// Re-exports for convenience
pub use artifact::{ArtifactKey, UNKNOWN_CATEGORY};
pub use balance::Delimiters;
pub use block::{Block, SourceDocument};
pub use destination::DestinationDocument;
pub use diagnostic::{excerpt, Diagnostic};
pub use grouped::GroupedBlocks;
pub use tables::{CategoryTable, DocumentPlan, OverrideTable, StaticTables};
