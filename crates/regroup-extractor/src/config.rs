//! Configuration for the Extractor

use regroup_domain::Delimiters;
use serde::{Deserialize, Serialize};

/// Textual markers that delimit units and groupings
///
/// Defaults match Kotlin test sources:
///
/// ```text
/// inner class FooTests {
///     @Test
///     fun `does something`() = runTest {
///         ...
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Annotation immediately preceding a unit declaration
    pub unit_marker: String,

    /// Keyword introducing the unit declaration
    pub unit_keyword: String,

    /// Character quoting unit names that contain spaces
    pub name_quote: char,

    /// Keyword sequence introducing a grouping construct
    pub grouping_keyword: String,

    /// Body delimiters
    pub delimiters: Delimiters,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.unit_marker.trim().is_empty() {
            return Err("unit_marker must not be empty".to_string());
        }
        if self.unit_keyword.trim().is_empty() {
            return Err("unit_keyword must not be empty".to_string());
        }
        if self.grouping_keyword.split_whitespace().next().is_none() {
            return Err("grouping_keyword must not be empty".to_string());
        }
        self.delimiters.validate()?;
        if self.name_quote == self.delimiters.open || self.name_quote == self.delimiters.close {
            return Err(format!(
                "name_quote '{}' collides with a body delimiter",
                self.name_quote
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            unit_marker: "@Test".to_string(),
            unit_keyword: "fun".to_string(),
            name_quote: '`',
            grouping_keyword: "inner class".to_string(),
            delimiters: Delimiters::default(),
        }
    }
}
