//! Regroup Synthesizer
//!
//! Renders one destination file per artifact from its ordered blocks.
//! Performs no I/O: the caller decides where the text goes.
//!
//! # Examples
//!
//! ```
//! use regroup_domain::{ArtifactKey, Block};
//! use regroup_synthesizer::{FileSynthesizer, SynthesizerConfig};
//!
//! let synthesizer = FileSynthesizer::new(SynthesizerConfig::default()).unwrap();
//! let block = Block {
//!     name: "GIVEN foo WHEN bar THEN baz".to_string(),
//!     signature: "()".to_string(),
//!     body: "{\n        assertTrue(fakeFoo().ok())\n    }".to_string(),
//!     full_text: String::new(),
//!     grouping: None,
//! };
//!
//! let destination = synthesizer
//!     .synthesize(&ArtifactKey::new("Foo", "1_basic"), &[block])
//!     .unwrap();
//! assert_eq!(destination.relative_path, "1_basic/FooTest.kt");
//! assert!(destination.imports.contains("kotlin.test.assertTrue"));
//! assert!(destination.text.contains("class FooTest {"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod imports;
mod package;


pub use config::{ImportRule, SynthesizerConfig};
pub use error::SynthesizerError;
pub use file::FileSynthesizer;
pub use imports::ImportSynthesizer;
pub use package::{package_path, package_segment};
