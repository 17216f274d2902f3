//! Split command implementation.

use super::collect_files;
use crate::cli::SplitArgs;
use crate::config::RegroupConfig;
use crate::error::Result;
use crate::output::Formatter;
use regroup_domain::{Diagnostic, SourceDocument};
use regroup_orchestrator::{Destinations, Orchestrator};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Documents read for a run, plus the ones that had to be skipped
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    /// Readable documents, in load order
    pub documents: Vec<SourceDocument>,

    /// One `UnreadableDocument` per skipped file
    pub skipped: Vec<Diagnostic>,
}

/// Execute the split command.
///
/// Returns `false` when the run produced nothing but diagnostics.
pub fn execute_split(args: SplitArgs, config: &RegroupConfig, formatter: &Formatter) -> Result<bool> {
    let source_dir = args.source_dir.unwrap_or_else(|| config.source_dir.clone());
    let output_dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());

    let loaded = load_documents(&source_dir, config)?;
    info!(
        "Loaded {} document(s) from {}, skipped {}",
        loaded.documents.len(),
        source_dir.display(),
        loaded.skipped.len()
    );

    let orchestrator = Orchestrator::new(config.tables(), config.orchestrator_config())?;
    let mut output = orchestrator.run(&loaded.documents);
    for diagnostic in loaded.skipped {
        output.summary.record(diagnostic);
    }

    if args.dry_run {
        info!("Dry run: nothing written");
    } else {
        let written = write_destinations(&output_dir, &output.destinations)?;
        info!("Wrote {} file(s) under {}", written.len(), output_dir.display());
    }

    println!("{}", formatter.format_run(&output, args.dry_run)?);

    Ok(!(output.is_empty() && !output.summary.diagnostics.is_empty()))
}

/// Read the documents a run works on.
///
/// Documents named in the config are read in table order; with an empty
/// table, every file carrying the configured extension is read in path order.
/// A file that is missing or not valid UTF-8 is skipped and reported; only a
/// missing source directory is an error.
pub fn load_documents(source_dir: &Path, config: &RegroupConfig) -> Result<LoadedDocuments> {
    let paths: Vec<PathBuf> = if config.documents.is_empty() {
        collect_files(source_dir, Some(&config.extension))?
    } else {
        config
            .documents
            .iter()
            .map(|plan| source_dir.join(&plan.name))
            .collect()
    };

    let mut loaded = LoadedDocuments::default();
    for path in paths {
        let name = path
            .strip_prefix(source_dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");

        let detail = if !path.is_file() {
            "not found".to_string()
        } else {
            match fs::read_to_string(&path) {
                Ok(text) => {
                    debug!("Read {} ({} bytes)", name, text.len());
                    loaded.documents.push(SourceDocument::new(name, text));
                    continue;
                }
                Err(e) => e.to_string(),
            }
        };

        warn!("Skipping {} ({})", name, detail);
        loaded.skipped.push(Diagnostic::UnreadableDocument {
            document: name,
            detail,
        });
    }
    Ok(loaded)
}

/// Write every destination under `output_dir`, replacing existing files.
pub fn write_destinations(output_dir: &Path, destinations: &Destinations) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(destinations.len());
    for destination in destinations.values() {
        let path = output_dir.join(&destination.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &destination.text)?;
        debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use regroup_domain::DocumentPlan;

    const SOURCE: &str = "class SAMBasicTest {\n    @Test\n    fun `beta`() {\n        fakeWidget()\n    }\n}\n";

    fn config(source_dir: &Path) -> RegroupConfig {
        let mut config = RegroupConfig {
            source_dir: source_dir.to_path_buf(),
            ..RegroupConfig::default()
        };
        config.categories.insert("Widget", "1_basic");
        config
    }

    fn args(output_dir: &Path, dry_run: bool) -> SplitArgs {
        SplitArgs {
            source_dir: None,
            output_dir: Some(output_dir.to_path_buf()),
            dry_run,
        }
    }

    #[test]
    fn test_split_writes_destinations() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(source.path().join("SAMBasicTest.kt"), SOURCE).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let ok = execute_split(args(output.path(), false), &config(source.path()), &formatter).unwrap();

        assert!(ok);
        let written = fs::read_to_string(output.path().join("1_basic").join("WidgetTest.kt")).unwrap();
        assert!(written.contains("class WidgetTest {"));
        assert!(written.contains("package com.example.tests.basic"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(source.path().join("SAMBasicTest.kt"), SOURCE).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_split(args(output.path(), true), &config(source.path()), &formatter).unwrap();

        assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_rerun_overwrites_identically() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(source.path().join("SAMBasicTest.kt"), SOURCE).unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let config = config(source.path());
        let target = output.path().join("1_basic").join("WidgetTest.kt");

        execute_split(args(output.path(), false), &config, &formatter).unwrap();
        let first = fs::read_to_string(&target).unwrap();
        fs::write(&target, "stale").unwrap();
        execute_split(args(output.path(), false), &config, &formatter).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), first);
    }

    #[test]
    fn test_only_diagnostics_is_a_failure() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(source.path().join("SAMBasicTest.kt"), SOURCE).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let config = RegroupConfig {
            source_dir: source.path().to_path_buf(),
            ..RegroupConfig::default()
        };
        let ok = execute_split(args(output.path(), false), &config, &formatter).unwrap();
        assert!(!ok);
    }

    #[test]
    fn test_documents_table_drives_loading() {
        let source = tempfile::tempdir().unwrap();
        fs::write(source.path().join("A.kt"), "a").unwrap();
        fs::write(source.path().join("B.kt"), "b").unwrap();

        let mut config = config(source.path());
        config.documents = vec![DocumentPlan::flat("B.kt")];
        let loaded = load_documents(source.path(), &config).unwrap();
        assert_eq!(loaded.documents, vec![SourceDocument::new("B.kt", "b")]);
        assert!(loaded.skipped.is_empty());

        config.documents = vec![DocumentPlan::flat("Missing.kt"), DocumentPlan::flat("A.kt")];
        let loaded = load_documents(source.path(), &config).unwrap();
        assert_eq!(loaded.documents, vec![SourceDocument::new("A.kt", "a")]);
        assert_eq!(
            loaded.skipped,
            vec![Diagnostic::UnreadableDocument {
                document: "Missing.kt".to_string(),
                detail: "not found".to_string(),
            }]
        );
    }

    #[test]
    fn test_non_utf8_source_is_skipped() {
        let source = tempfile::tempdir().unwrap();
        fs::write(source.path().join("Binary.kt"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(source.path().join("SAMBasicTest.kt"), SOURCE).unwrap();

        let loaded = load_documents(source.path(), &config(source.path())).unwrap();
        assert_eq!(loaded.documents.len(), 1);
        assert_eq!(loaded.documents[0].name, "SAMBasicTest.kt");
        assert!(matches!(
            loaded.skipped.as_slice(),
            [Diagnostic::UnreadableDocument { document, .. }] if document == "Binary.kt"
        ));
    }

    #[test]
    fn test_missing_document_does_not_stop_split() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(source.path().join("SAMBasicTest.kt"), SOURCE).unwrap();

        let mut config = config(source.path());
        config.documents = vec![
            DocumentPlan::flat("Gone.kt"),
            DocumentPlan::flat("SAMBasicTest.kt"),
        ];
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let ok = execute_split(args(output.path(), false), &config, &formatter).unwrap();

        assert!(ok);
        assert!(output.path().join("1_basic").join("WidgetTest.kt").is_file());
    }

    #[test]
    fn test_missing_source_dir_is_an_error() {
        let config = config(Path::new("/nonexistent/regroup"));
        assert!(matches!(
            load_documents(Path::new("/nonexistent/regroup"), &config),
            Err(CliError::NotFound(_))
        ));
    }

    #[test]
    fn test_extension_filter_when_no_table() {
        let source = tempfile::tempdir().unwrap();
        fs::create_dir_all(source.path().join("nested")).unwrap();
        fs::write(source.path().join("nested").join("A.kt"), "a").unwrap();
        fs::write(source.path().join("README.md"), "docs").unwrap();

        let loaded = load_documents(source.path(), &config(source.path())).unwrap();
        assert_eq!(loaded.documents.len(), 1);
        assert_eq!(loaded.documents[0].name, "nested/A.kt");
    }
}
