//! Regroup Orchestrator
//!
//! Drives a full regrouping run: consolidated source documents in, one
//! synthesized destination per artifact out.
//!
//! # Overview
//!
//! The Orchestrator is responsible for:
//! - **Extraction**: reading each document flat or by its configured groupings
//! - **Classification**: mapping every block to one or more artifacts
//! - **Category resolution**: placing each artifact in its category
//! - **Synthesis**: rendering one destination file per resolved artifact
//! - **Reporting**: collecting counts and diagnostics in a [`RunSummary`]
//!
//! A run never fails. Malformed documents, unclassified blocks, unknown
//! categories and failed renders are recorded and skipped.
//!
//! # Usage
//!
//! ```
//! use regroup_domain::{ArtifactKey, DocumentPlan, OverrideTable, SourceDocument, StaticTables};
//! use regroup_orchestrator::{Orchestrator, OrchestratorConfig};
//!
//! let mut overrides = OverrideTable::new();
//! overrides.insert("FooTests", ArtifactKey::new("Foo", "basic"));
//! let tables = StaticTables {
//!     overrides,
//!     documents: vec![DocumentPlan::grouped("SAMBasicTest.kt", ["FooTests"])],
//!     ..StaticTables::default()
//! };
//!
//! let text = r#"class SAMBasicTest {
//!     inner class FooTests {
//!         @Test
//!         fun `first`() { assertEquals(1, 1) }
//!     }
//! }
//! "#;
//!
//! let orchestrator = Orchestrator::new(tables, OrchestratorConfig::default()).unwrap();
//! let output = orchestrator.run(&[SourceDocument::new("SAMBasicTest.kt", text)]);
//!
//! let destination = &output.destinations[&("basic".to_string(), "Foo".to_string())];
//! assert_eq!(destination.relative_path, "basic/FooTest.kt");
//! println!("{}", output.summary.summary());
//! ```
//!
//! # Configuration
//!
//! The Orchestrator can be configured via TOML:
//!
//! ```toml
//! excerpt_len = 80
//!
//! [extractor]
//! unit_marker = "@Test"
//! grouping_keyword = "inner class"
//!
//! [classifier]
//! factory_verb = "fake"
//! policy = "permissive"
//!
//! [synthesizer]
//! package_root = "com.example.tests"
//! container_suffix = "Test"
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod orchestrator;
mod summary;

pub use config::OrchestratorConfig;
pub use error::OrchestratorError;
pub use orchestrator::{Destinations, Orchestrator, RunOutput};
pub use summary::RunSummary;
