//! Core Orchestrator implementation

use crate::{OrchestratorConfig, OrchestratorError, RunSummary};
use regroup_classifier::{CategoryResolver, Classification, Classifier};
use regroup_domain::{
    excerpt, ArtifactKey, Block, DestinationDocument, Diagnostic, DocumentPlan, GroupedBlocks,
    SourceDocument, StaticTables,
};
use regroup_extractor::{BlockExtractor, ExtractionMode};
use regroup_synthesizer::FileSynthesizer;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Destinations keyed by `(category, artifact)`
pub type Destinations = BTreeMap<(String, String), DestinationDocument>;

/// Result of one run
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    /// Rendered destinations, ordered by category then artifact
    pub destinations: Destinations,

    /// Counts and diagnostics
    pub summary: RunSummary,
}

impl RunOutput {
    /// Whether no destination was produced
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

/// Drives extraction, classification and synthesis over a set of documents
///
/// Holds only immutable state: the static tables and the stage components.
/// A run never fails; every problem ends up in the summary.
///
/// # Examples
///
/// ```
/// use regroup_domain::{CategoryTable, SourceDocument, StaticTables};
/// use regroup_orchestrator::{Orchestrator, OrchestratorConfig};
///
/// let tables = StaticTables {
///     categories: [("Widget", "basic")].into_iter().collect::<CategoryTable>(),
///     ..StaticTables::default()
/// };
/// let orchestrator = Orchestrator::new(tables, OrchestratorConfig::default()).unwrap();
///
/// let text = "class T {\n    @Test\n    fun `beta`() {\n        val w = fakeWidget()\n    }\n}\n";
/// let output = orchestrator.run(&[SourceDocument::new("T.kt", text)]);
///
/// assert_eq!(output.destinations.len(), 1);
/// assert!(output.summary.diagnostics.is_empty());
/// ```
pub struct Orchestrator {
    tables: StaticTables,
    config: OrchestratorConfig,
    extractor: BlockExtractor,
    classifier: Classifier,
    synthesizer: FileSynthesizer,
}

impl Orchestrator {
    /// Create a new Orchestrator over `tables`
    pub fn new(tables: StaticTables, config: OrchestratorConfig) -> Result<Self, OrchestratorError> {
        config.validate().map_err(OrchestratorError::Config)?;
        let extractor = BlockExtractor::new(config.extractor.clone())?;
        let classifier = Classifier::new(config.classifier.clone())?;
        let synthesizer = FileSynthesizer::new(config.synthesizer.clone())?;

        Ok(Self {
            tables,
            config,
            extractor,
            classifier,
            synthesizer,
        })
    }

    /// Create an Orchestrator with default configuration
    pub fn with_tables(tables: StaticTables) -> Result<Self, OrchestratorError> {
        Self::new(tables, OrchestratorConfig::default())
    }

    /// Get the run configuration
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Get the static tables
    pub fn tables(&self) -> &StaticTables {
        &self.tables
    }

    /// Regroup `documents` into one destination per resolved artifact
    ///
    /// Documents are processed in order; within an artifact, blocks keep
    /// document order and then in-document order.
    pub fn run(&self, documents: &[SourceDocument]) -> RunOutput {
        let mut summary = RunSummary::new();
        let mut grouped = GroupedBlocks::new();

        for document in documents {
            self.process_document(document, &mut grouped, &mut summary);
        }

        let destinations = self.synthesize_all(&grouped, &mut summary);

        info!(
            "Run complete: {} documents, {} destinations, {} diagnostics",
            summary.documents_processed,
            destinations.len(),
            summary.diagnostics.len()
        );

        RunOutput {
            destinations,
            summary,
        }
    }

    /// Extract and classify one document into `grouped`
    fn process_document(
        &self,
        document: &SourceDocument,
        grouped: &mut GroupedBlocks,
        summary: &mut RunSummary,
    ) {
        let plan = self.tables.plan_for(&document.name);
        let mode = plan.map(ExtractionMode::from).unwrap_or(ExtractionMode::Flat);
        debug!("Processing {} in {:?} mode", document.name, mode);

        let extraction = match self.extractor.extract(&document.text, &mode) {
            Ok(extraction) => extraction,
            Err(e) => {
                warn!("Skipping {}: {}", document.name, e);
                summary.record_document(0);
                summary.record(Diagnostic::MalformedDocument {
                    document: document.name.clone(),
                    detail: e.to_string(),
                });
                return;
            }
        };

        for grouping in extraction.missing_groupings {
            summary.record(Diagnostic::MissingGrouping {
                document: document.name.clone(),
                grouping,
            });
        }

        summary.record_document(extraction.blocks.len());
        if extraction.blocks.is_empty() {
            info!("{} yielded no blocks", document.name);
        }

        for block in extraction.blocks {
            self.assign(document, plan, block, grouped, summary);
        }
    }

    /// Classify one block and push it to every bucket it belongs to
    fn assign(
        &self,
        document: &SourceDocument,
        plan: Option<&DocumentPlan>,
        block: Block,
        grouped: &mut GroupedBlocks,
        summary: &mut RunSummary,
    ) {
        let keys = self.keys_for(&block, plan);
        match keys.len() {
            0 => {
                warn!("No artifact for '{}' in {}", block.name, document.name);
                summary.record(Diagnostic::UnclassifiedBlock {
                    document: document.name.clone(),
                    block: block.name.clone(),
                    excerpt: excerpt(&block.body, self.config.excerpt_len),
                });
            }
            1 => {}
            _ => summary.record(Diagnostic::SharedBlock {
                document: document.name.clone(),
                block: block.name.clone(),
                artifacts: keys.iter().map(|k| k.artifact.clone()).collect(),
            }),
        }
        for key in keys {
            grouped.push(key, block.clone());
        }
    }

    /// Render one destination per resolved bucket, in first-seen order
    fn synthesize_all(&self, grouped: &GroupedBlocks, summary: &mut RunSummary) -> Destinations {
        let mut destinations = Destinations::new();

        for (key, blocks) in grouped.iter() {
            if key.is_unresolved() {
                warn!("Unknown category for {}, {} block(s) skipped", key.artifact, blocks.len());
                summary.record(Diagnostic::UnresolvedCategory {
                    artifact: key.artifact.clone(),
                    blocks: blocks.len(),
                });
                continue;
            }

            match self.synthesizer.synthesize(key, blocks) {
                Ok(destination) => {
                    debug!("Synthesized {} with {} block(s)", key, blocks.len());
                    summary.record_destination(key, blocks.len());
                    destinations.insert(key.destination_key(), destination);
                }
                Err(e) => {
                    warn!("Failed to synthesize {}: {}", key, e);
                    summary.record(Diagnostic::SynthesisFailed {
                        artifact: key.artifact.clone(),
                        detail: e.to_string(),
                    });
                }
            }
        }

        destinations
    }

    /// Every key `block` is filed under; empty when unclassified
    fn keys_for(&self, block: &Block, plan: Option<&DocumentPlan>) -> Vec<ArtifactKey> {
        match self.classifier.classify(block, plan, &self.tables.overrides) {
            Classification::Override(key) => vec![key],
            Classification::Candidates(keys) => keys,
            Classification::Marker(artifact) => {
                vec![CategoryResolver::new(&self.tables.categories).resolve(&artifact)]
            }
            Classification::Unclassified => Vec::new(),
        }
    }
}
