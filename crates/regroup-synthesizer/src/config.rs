//! Configuration for the Synthesizer

use regroup_domain::Delimiters;
use serde::{Deserialize, Serialize};

/// One conditional import: added whenever `token` occurs in the block text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRule {
    /// Literal substring to look for
    pub token: String,

    /// Fully-qualified import added on a hit
    pub import: String,
}

impl ImportRule {
    /// Create a new rule
    pub fn new(token: impl Into<String>, import: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            import: import.into(),
        }
    }
}

/// Layout and import settings for rendered destination files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// Fixed header emitted first (license or generated-file notice); empty to omit
    pub header: String,

    /// Package prefix; the category's package segment is appended
    pub package_root: String,

    /// Suffix of the containing class (`Foo` → `FooTest`)
    pub container_suffix: String,

    /// One indentation level
    pub indent: String,

    /// Class doc comment, `{artifact}` is replaced by the artifact name
    pub doc_template: String,

    /// Extension of rendered files, without the dot
    pub extension: String,

    /// Factory verb used for the artifact's helper import
    pub factory_verb: String,

    /// Annotation emitted before every unit
    pub unit_marker: String,

    /// Keyword introducing every unit
    pub unit_keyword: String,

    /// Character quoting unit names
    pub name_quote: char,

    /// Delimiters used for the containing class and the balance check
    pub delimiters: Delimiters,

    /// Imports every destination declares
    pub baseline_imports: Vec<String>,

    /// Token-triggered imports
    pub import_rules: Vec<ImportRule>,
}

impl SynthesizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.package_root.trim().is_empty() {
            return Err("package_root must not be empty".to_string());
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(format!(
                "extension '{}' must be non-empty and given without a dot",
                self.extension
            ));
        }
        if self.factory_verb.is_empty() {
            return Err("factory_verb must not be empty".to_string());
        }
        if self.unit_keyword.trim().is_empty() {
            return Err("unit_keyword must not be empty".to_string());
        }
        if !self.indent.chars().all(char::is_whitespace) {
            return Err("indent must only contain whitespace".to_string());
        }
        if let Some(rule) = self.import_rules.iter().find(|r| r.token.is_empty()) {
            return Err(format!("import rule for '{}' has an empty token", rule.import));
        }
        self.delimiters.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Render the class doc comment body for `artifact`
    pub fn doc_for(&self, artifact: &str) -> String {
        self.doc_template.replace("{artifact}", artifact)
    }
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            header: String::new(),
            package_root: "com.example.tests".to_string(),
            container_suffix: "Test".to_string(),
            indent: "    ".to_string(),
            doc_template: "Tests for {artifact}.".to_string(),
            extension: "kt".to_string(),
            factory_verb: "fake".to_string(),
            unit_marker: "@Test".to_string(),
            unit_keyword: "fun".to_string(),
            name_quote: '`',
            delimiters: Delimiters::default(),
            baseline_imports: vec![
                "kotlin.test.Test".to_string(),
                "kotlin.test.assertEquals".to_string(),
            ],
            import_rules: default_import_rules(),
        }
    }
}

fn default_import_rules() -> Vec<ImportRule> {
    [
        ("assertTrue", "kotlin.test.assertTrue"),
        ("assertFalse", "kotlin.test.assertFalse"),
        ("assertNull", "kotlin.test.assertNull"),
        ("assertNotNull", "kotlin.test.assertNotNull"),
        ("assertContentEquals", "kotlin.test.assertContentEquals"),
        ("assertIs<", "kotlin.test.assertIs"),
        ("assertFailsWith", "kotlin.test.assertFailsWith"),
        ("runTest", "kotlinx.coroutines.test.runTest"),
    ]
    .into_iter()
    .map(|(token, import)| ImportRule::new(token, import))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SynthesizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.import_rules.len(), 8);
    }

    #[test]
    fn test_dotted_extension_is_invalid() {
        let config = SynthesizerConfig {
            extension: ".kt".to_string(),
            ..SynthesizerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_doc_template() {
        let config = SynthesizerConfig::default();
        assert_eq!(config.doc_for("Widget"), "Tests for Widget.");
    }

    #[test]
    fn test_partial_toml_keeps_default_rules() {
        let config = SynthesizerConfig::from_toml(
            "header = \"// Copyright (C) 2025\"\npackage_root = \"org.sample\"",
        )
        .unwrap();
        assert_eq!(config.header, "// Copyright (C) 2025");
        assert_eq!(config.package_root, "org.sample");
        assert_eq!(config.import_rules, default_import_rules());
    }

    #[test]
    fn test_custom_rules_from_toml() {
        let config = SynthesizerConfig::from_toml(
            "[[import_rules]]\ntoken = \"assertSame\"\nimport = \"kotlin.test.assertSame\"\n",
        )
        .unwrap();
        assert_eq!(
            config.import_rules,
            vec![ImportRule::new("assertSame", "kotlin.test.assertSame")]
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SynthesizerConfig::default();
        let parsed = SynthesizerConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
