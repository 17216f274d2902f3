//! Regroup Classifier
//!
//! Decides which production artifact each extracted block exercises, and
//! where that artifact's regenerated file belongs.
//!
//! The Classifier provides:
//! - Factory-marker heuristic (`fakeWidget(` → `Widget`)
//! - Grouping overrides that take precedence over the heuristic
//! - Candidate assignment for flat documents exercising several artifacts
//! - Category resolution through the static category table
//! - Test coverage checks over declared artifacts
//!
//! # Examples
//!
//! ```
//! use regroup_classifier::{Classification, Classifier, ClassifierConfig};
//! use regroup_domain::{Block, OverrideTable};
//!
//! let classifier = Classifier::new(ClassifierConfig::default()).unwrap();
//! let block = Block {
//!     name: "beta".to_string(),
//!     signature: "()".to_string(),
//!     body: "{ val w = fakeWidget() }".to_string(),
//!     full_text: "@Test fun `beta`() { val w = fakeWidget() }".to_string(),
//!     grouping: None,
//! };
//!
//! let result = classifier.classify(&block, None, &OverrideTable::new());
//! assert_eq!(result, Classification::Marker("Widget".to_string()));
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod coverage;
mod error;
mod resolver;

pub use classifier::{Classification, Classifier};
pub use config::{AssignmentPolicy, ClassifierConfig};
pub use coverage::{check_coverage, CoverageReport};
pub use error::ClassifierError;
pub use resolver::CategoryResolver;
