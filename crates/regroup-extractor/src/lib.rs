//! Regroup Extractor
//!
//! Lifts self-contained test units out of consolidated source files without
//! parsing them.
//!
//! # Overview
//!
//! A unit starts at a fixed marker (`@Test`) directly followed by a named
//! declaration (``fun `name`()``). Its body is found with an explicit
//! delimiter-depth counter: the span ends where the depth returns to zero.
//! Nothing else about the language is understood.
//!
//! # Modes
//!
//! - **Flat**: every unit in the document is emitted.
//! - **Grouped**: each named grouping (``inner class FooTests { ... }``) is
//!   located first, and only the units inside its span are emitted.
//!
//! A document whose delimiters never balance is rejected as a whole; a
//! truncated block is never emitted.
//!
//! # Example Usage
//!
//! ```
//! use regroup_extractor::{BlockExtractor, ExtractorConfig};
//!
//! let extractor = BlockExtractor::new(ExtractorConfig::default()).unwrap();
//! let text = "class T {\n    @Test\n    fun `adds`() {\n        check(1 + 1 == 2)\n    }\n}\n";
//!
//! let blocks: Vec<_> = extractor.blocks(text).collect::<Result<_, _>>().unwrap();
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].name, "adds");
//! assert_eq!(blocks[0].signature, "()");
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod scanner;
mod extractor;


pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use types::{DocumentExtraction, ExtractionMode};
pub use scanner::{line_of, matching_close};
pub use extractor::{BlockExtractor, Blocks};
