//! Configuration management for the CLI.
//!
//! One TOML file (`regroup.toml` by default) carries the directories, the
//! per-stage settings and the static tables:
//!
//! ```toml
//! source_dir = "src/commonTest/kotlin/scenarios"
//! output_dir = "src/commonTest/kotlin/scenarios"
//! extension = "kt"
//!
//! [classifier]
//! policy = "permissive"
//!
//! [synthesizer]
//! header = "// Copyright (C) 2025"
//! package_root = "com.example.scenarios"
//!
//! [categories]
//! IntValidator = "1_basic"
//!
//! [overrides]
//! NullabilityEdgeCaseTests = { artifact = "NullableTransformer", category = "2_generics" }
//!
//! [[documents]]
//! name = "SAMCollectionsTest.kt"
//! groupings = ["ListMapperTests", "SetTransformerTests"]
//! ```

use crate::error::{CliError, Result};
use regroup_classifier::ClassifierConfig;
use regroup_domain::{CategoryTable, DocumentPlan, OverrideTable, StaticTables};
use regroup_extractor::ExtractorConfig;
use regroup_orchestrator::OrchestratorConfig;
use regroup_synthesizer::SynthesizerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "regroup.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegroupConfig {
    /// Directory holding the consolidated source documents
    pub source_dir: PathBuf,

    /// Directory receiving the destinations
    pub output_dir: PathBuf,

    /// Extension of source files, without the dot
    pub extension: String,

    /// Maximum characters kept in an unclassified-block excerpt
    pub excerpt_len: usize,

    /// Output settings
    pub output: OutputSettings,

    /// Unit and grouping markers
    pub extractor: ExtractorConfig,

    /// Factory verb and candidate policy
    pub classifier: ClassifierConfig,

    /// Destination layout and imports
    pub synthesizer: SynthesizerConfig,

    /// Artifact → category
    pub categories: CategoryTable,

    /// Grouping → artifact
    pub overrides: OverrideTable,

    /// Per-document extraction plans
    pub documents: Vec<DocumentPlan>,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl RegroupConfig {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load `path` when given, else `./regroup.toml` when present, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: RegroupConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(CliError::Config(format!(
                "extension '{}' must be non-empty and given without a dot",
                self.extension
            )));
        }
        self.orchestrator_config()
            .validate()
            .map_err(CliError::Config)
    }

    /// Per-stage configuration for the orchestrator.
    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig {
            extractor: self.extractor.clone(),
            classifier: self.classifier.clone(),
            synthesizer: self.synthesizer.clone(),
            excerpt_len: self.excerpt_len,
        }
    }

    /// Static tables for the orchestrator.
    pub fn tables(&self) -> StaticTables {
        StaticTables {
            categories: self.categories.clone(),
            overrides: self.overrides.clone(),
            documents: self.documents.clone(),
        }
    }
}

impl Default for RegroupConfig {
    fn default() -> Self {
        let run = OrchestratorConfig::default();
        Self {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("regrouped"),
            extension: "kt".to_string(),
            excerpt_len: run.excerpt_len,
            output: OutputSettings::default(),
            extractor: run.extractor,
            classifier: run.classifier,
            synthesizer: run.synthesizer,
            categories: CategoryTable::new(),
            overrides: OverrideTable::new(),
            documents: Vec::new(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use regroup_classifier::AssignmentPolicy;
    use regroup_domain::ArtifactKey;

    #[test]
    fn test_default_config() {
        let config = RegroupConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extension, "kt");
        assert!(config.output.color);
        assert_eq!(config.excerpt_len, 80);
    }

    #[test]
    fn test_full_file() {
        let contents = r#"
source_dir = "in"
output_dir = "out"

[output]
format = "json"

[classifier]
policy = "exclusive"

[synthesizer]
package_root = "org.sample"

[categories]
IntValidator = "1_basic"

[overrides]
NullabilityEdgeCaseTests = { artifact = "NullableTransformer", category = "2_generics" }

[[documents]]
name = "SAMCollectionsTest.kt"
groupings = ["ListMapperTests"]

[[documents]]
name = "SAMGenericClassTest.kt"
candidates = [{ artifact = "Transformer", category = "2_generics" }]
"#;
        let config = RegroupConfig::from_toml(contents).unwrap();
        assert_eq!(config.source_dir, PathBuf::from("in"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
        assert_eq!(config.classifier.policy, AssignmentPolicy::Exclusive);

        let tables = config.tables();
        assert_eq!(tables.categories.get("IntValidator"), Some("1_basic"));
        assert_eq!(
            tables.overrides.get("NullabilityEdgeCaseTests"),
            Some(&ArtifactKey::new("NullableTransformer", "2_generics"))
        );
        assert!(tables.plan_for("SAMCollectionsTest.kt").unwrap().is_grouped());
        assert_eq!(
            tables.plan_for("SAMGenericClassTest.kt").unwrap().candidates,
            vec![ArtifactKey::new("Transformer", "2_generics")]
        );
    }

    #[test]
    fn test_invalid_section_is_rejected() {
        let result = RegroupConfig::from_toml("[classifier]\nfactory_verb = \"\"\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = RegroupConfig::load(Path::new("/nonexistent/regroup.toml"));
        assert!(matches!(result, Err(CliError::NotFound(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("regroup.toml");

        let mut config = RegroupConfig::default();
        config.categories.insert("Foo", "basic");
        config.save(&path).unwrap();

        assert_eq!(RegroupConfig::load(&path).unwrap(), config);
    }
}
