//! Classifier configuration

use serde::{Deserialize, Serialize};

/// How a flat-document block matching several candidates is assigned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentPolicy {
    /// Assign the block to every candidate named in its text
    ///
    /// A block may land in several destinations; each such block is reported.
    #[default]
    Permissive,

    /// Assign the block to exactly one candidate
    ///
    /// The candidate named by the block's factory marker wins; otherwise the
    /// first matching candidate in table order.
    Exclusive,
}

/// Configuration for classification rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Verb prefixing factory invocations (`fake` in `fakeWidget()`)
    pub factory_verb: String,

    /// Candidate assignment policy for flat documents
    pub policy: AssignmentPolicy,
}

impl ClassifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.factory_verb.is_empty() {
            return Err("factory_verb must not be empty".to_string());
        }
        if !self
            .factory_verb
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(format!(
                "factory_verb '{}' must be an identifier",
                self.factory_verb
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string(self).map_err(|e| format!("Failed to serialize TOML: {}", e))
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            factory_verb: "fake".to_string(),
            policy: AssignmentPolicy::Permissive,
        }
    }
}
