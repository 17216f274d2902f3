//! Token-driven import detection

use crate::{ImportRule, SynthesizerConfig};
use std::collections::BTreeSet;

/// Derives the import set a piece of block text needs
///
/// A closed rule table matched by substring. It may over-include but never
/// misses the import of a token that is present.
#[derive(Debug, Clone)]
pub struct ImportSynthesizer {
    baseline: Vec<String>,
    rules: Vec<ImportRule>,
}

impl ImportSynthesizer {
    /// Create a synthesizer from a baseline and a rule table
    pub fn new(baseline: Vec<String>, rules: Vec<ImportRule>) -> Self {
        Self { baseline, rules }
    }

    /// Create a synthesizer from the configured baseline and rules
    pub fn from_config(config: &SynthesizerConfig) -> Self {
        Self::new(config.baseline_imports.clone(), config.import_rules.clone())
    }

    /// Baseline plus every import whose token occurs in `text`
    pub fn synthesize(&self, text: &str) -> BTreeSet<String> {
        self.baseline
            .iter()
            .cloned()
            .chain(
                self.rules
                    .iter()
                    .filter(|rule| text.contains(rule.token.as_str()))
                    .map(|rule| rule.import.clone()),
            )
            .collect()
    }
}

impl Default for ImportSynthesizer {
    fn default() -> Self {
        Self::from_config(&SynthesizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_baseline() {
        let imports = ImportSynthesizer::default().synthesize("");
        assert_eq!(
            imports.into_iter().collect::<Vec<_>>(),
            vec!["kotlin.test.Test", "kotlin.test.assertEquals"]
        );
    }

    #[test]
    fn test_detects_tokens() {
        let text = "fun `a`() = runTest {\n    assertIs<String>(x)\n    assertNotNull(y)\n}";
        let imports = ImportSynthesizer::default().synthesize(text);
        assert!(imports.contains("kotlinx.coroutines.test.runTest"));
        assert!(imports.contains("kotlin.test.assertIs"));
        assert!(imports.contains("kotlin.test.assertNotNull"));
        assert!(!imports.contains("kotlin.test.assertFailsWith"));
    }

    #[test]
    fn test_generic_type_assertion_needs_angle_bracket() {
        let imports = ImportSynthesizer::default().synthesize("assertIsolated()");
        assert!(!imports.contains("kotlin.test.assertIs"));
    }

    #[test]
    fn test_over_inclusion_is_accepted() {
        // assertNotNull also contains assertNull
        let imports = ImportSynthesizer::default().synthesize("assertNotNull(x)");
        assert!(imports.contains("kotlin.test.assertNull"));
        assert!(imports.contains("kotlin.test.assertNotNull"));
    }
}
