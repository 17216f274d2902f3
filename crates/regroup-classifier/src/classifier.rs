//! Block classification logic

use crate::{AssignmentPolicy, ClassifierConfig, ClassifierError};
use regex::Regex;
use regroup_domain::{ArtifactKey, Block, DocumentPlan, OverrideTable};
use std::collections::BTreeSet;
use tracing::debug;

/// Outcome of classifying one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Resolved through the grouping override table
    Override(ArtifactKey),

    /// Resolved from the document's candidate list; may name several artifacts
    Candidates(Vec<ArtifactKey>),

    /// Artifact named by a factory marker; category still to be resolved
    Marker(String),

    /// No artifact could be identified
    Unclassified,
}

impl Classification {
    /// Whether an artifact was identified
    pub fn is_classified(&self) -> bool {
        !matches!(self, Classification::Unclassified)
    }
}

/// The Classifier maps blocks to artifacts
///
/// Pure: identical block text, plan and overrides always give an identical
/// classification.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    marker: Regex,
    import: Regex,
}

impl Classifier {
    /// Create a new Classifier with the given configuration
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate().map_err(ClassifierError::Config)?;
        let verb = regex::escape(&config.factory_verb);
        let marker = Regex::new(&format!(r"\b{}([A-Z][A-Za-z0-9_]*)\s*[<{{(]", verb))?;
        let import = Regex::new(&format!(
            r"(?m)^\s*import\s+[\w.]*\.{}([A-Z][A-Za-z0-9_]*)\s*$",
            verb
        ))?;
        Ok(Self {
            config,
            marker,
            import,
        })
    }

    /// Get the classifier configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Factory function name for `artifact` (`Widget` → `fakeWidget`)
    pub fn factory_name(&self, artifact: &str) -> String {
        format!("{}{}", self.config.factory_verb, artifact)
    }

    /// Artifact named by the first factory invocation in `text`
    ///
    /// # Examples
    ///
    /// ```
    /// use regroup_classifier::{Classifier, ClassifierConfig};
    ///
    /// let classifier = Classifier::new(ClassifierConfig::default()).unwrap();
    /// assert_eq!(classifier.factory_marker("val t = fakeTransformer<Int> { }"), Some("Transformer"));
    /// assert_eq!(classifier.factory_marker("val t = fakeValue"), None);
    /// ```
    pub fn factory_marker<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.marker
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Every artifact a test text exercises, through factory calls or factory imports
    pub fn tested_artifacts(&self, text: &str) -> BTreeSet<String> {
        self.marker
            .captures_iter(text)
            .chain(self.import.captures_iter(text))
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Classify a block
    ///
    /// Resolution order:
    /// 1. the override entry of the block's grouping,
    /// 2. the document's candidates named in the block (flat blocks only),
    /// 3. the first factory marker in the block body.
    pub fn classify(
        &self,
        block: &Block,
        plan: Option<&DocumentPlan>,
        overrides: &OverrideTable,
    ) -> Classification {
        if let Some(key) = block.grouping.as_deref().and_then(|g| overrides.get(g)) {
            debug!("'{}' resolved by grouping override to {}", block.name, key);
            return Classification::Override(key.clone());
        }

        let marker = self.factory_marker(&block.body);

        if !block.is_grouped() {
            if let Some(plan) = plan {
                let matches = self.matching_candidates(block, plan, marker);
                if !matches.is_empty() {
                    return Classification::Candidates(matches);
                }
            }
        }

        match marker {
            Some(artifact) => Classification::Marker(artifact.to_string()),
            None => Classification::Unclassified,
        }
    }

    /// Candidates whose artifact name appears literally in the block
    ///
    /// A factory name always contains its artifact name, so matching the
    /// artifact covers both spellings.
    fn matching_candidates(
        &self,
        block: &Block,
        plan: &DocumentPlan,
        marker: Option<&str>,
    ) -> Vec<ArtifactKey> {
        let matches: Vec<&ArtifactKey> = plan
            .candidates
            .iter()
            .filter(|c| block.full_text.contains(c.artifact.as_str()))
            .collect();

        match self.config.policy {
            AssignmentPolicy::Permissive => matches.into_iter().cloned().collect(),
            AssignmentPolicy::Exclusive => matches
                .iter()
                .find(|c| Some(c.artifact.as_str()) == marker)
                .or_else(|| matches.first())
                .map(|c| vec![(*c).clone()])
                .unwrap_or_default(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: identical body text always yields the identical classification
        #[test]
        fn test_classification_is_deterministic(body in "[ a-zA-Z(){}<>]{0,60}") {
            let classifier = Classifier::new(ClassifierConfig::default()).unwrap();
            let block = Block {
                name: "generated".to_string(),
                signature: "()".to_string(),
                body: body.clone(),
                full_text: format!("@Test fun `generated`() {}", body),
                grouping: None,
            };
            let overrides = OverrideTable::new();
            prop_assert_eq!(
                classifier.classify(&block, None, &overrides),
                classifier.classify(&block.clone(), None, &overrides)
            );
        }
    }
}
