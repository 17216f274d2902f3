//! Configuration for a regrouping run
//!
//! Composes the per-stage configurations into the one value an
//! [`Orchestrator`](crate::Orchestrator) is built from.

use regroup_classifier::{AssignmentPolicy, ClassifierConfig};
use regroup_extractor::ExtractorConfig;
use regroup_synthesizer::SynthesizerConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the Orchestrator
///
/// # Examples
///
/// ```
/// use regroup_classifier::AssignmentPolicy;
/// use regroup_orchestrator::OrchestratorConfig;
///
/// // Default: permissive candidate assignment
/// let config = OrchestratorConfig::default();
/// assert_eq!(config.classifier.policy, AssignmentPolicy::Permissive);
///
/// // Strict: every block lands in exactly one destination
/// let config = OrchestratorConfig::strict();
/// assert_eq!(config.classifier.policy, AssignmentPolicy::Exclusive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Unit and grouping markers
    pub extractor: ExtractorConfig,

    /// Factory verb and candidate policy
    pub classifier: ClassifierConfig,

    /// Destination layout and imports
    pub synthesizer: SynthesizerConfig,

    /// Maximum characters kept in an unclassified-block excerpt
    /// Default: 80
    pub excerpt_len: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            classifier: ClassifierConfig::default(),
            synthesizer: SynthesizerConfig::default(),
            excerpt_len: 80,
        }
    }
}

impl OrchestratorConfig {
    /// Strict configuration: exclusive candidate assignment
    ///
    /// No block is ever written to more than one destination.
    pub fn strict() -> Self {
        Self {
            classifier: ClassifierConfig {
                policy: AssignmentPolicy::Exclusive,
                ..ClassifierConfig::default()
            },
            ..Self::default()
        }
    }

    /// Validate every stage and their agreement
    ///
    /// The synthesizer re-emits what the extractor and classifier read, so
    /// the factory verb, unit marker, unit keyword and quote must agree.
    pub fn validate(&self) -> Result<(), String> {
        self.extractor.validate()?;
        self.classifier.validate()?;
        self.synthesizer.validate()?;

        if self.excerpt_len == 0 {
            return Err("excerpt_len must be greater than zero".to_string());
        }
        if self.classifier.factory_verb != self.synthesizer.factory_verb {
            return Err(format!(
                "classifier factory_verb '{}' differs from synthesizer factory_verb '{}'",
                self.classifier.factory_verb, self.synthesizer.factory_verb
            ));
        }
        if self.extractor.unit_marker != self.synthesizer.unit_marker
            || self.extractor.unit_keyword != self.synthesizer.unit_keyword
            || self.extractor.name_quote != self.synthesizer.name_quote
        {
            return Err(
                "extractor and synthesizer disagree on unit_marker, unit_keyword or name_quote"
                    .to_string(),
            );
        }
        if self.extractor.delimiters != self.synthesizer.delimiters {
            return Err("extractor and synthesizer delimiters differ".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
