//! Coverage command implementation.

use super::collect_files;
use crate::cli::CoverageArgs;
use crate::config::RegroupConfig;
use crate::error::Result;
use crate::output::Formatter;
use regroup_classifier::{check_coverage, Classifier, CoverageReport};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use tracing::{debug, info};

/// Execute the coverage command.
///
/// Returns `false` when some declared artifact has no test.
pub fn execute_coverage(
    args: CoverageArgs,
    config: &RegroupConfig,
    formatter: &Formatter,
) -> Result<bool> {
    let report = coverage_report(&args, config)?;
    println!("{}", formatter.format_coverage(&report)?);
    Ok(report.is_complete())
}

/// Build the coverage report for `args`.
pub fn coverage_report(args: &CoverageArgs, config: &RegroupConfig) -> Result<CoverageReport> {
    let declared: Vec<String> = collect_files(&args.sources, Some(&config.extension))?
        .iter()
        .filter_map(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .collect();

    let mut texts = Vec::new();
    for path in collect_files(&args.tests, None)? {
        match fs::read_to_string(&path) {
            Ok(text) => texts.push(text),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!("Skipping non-text file {}", path.display());
            }
            Err(e) => return Err(e.into()),
        }
    }
    info!(
        "Checking {} declared artifact(s) against {} test file(s)",
        declared.len(),
        texts.len()
    );

    let classifier = Classifier::new(config.classifier.clone())?;
    let excluded: BTreeSet<String> = args.exclude.iter().cloned().collect();

    Ok(check_coverage(
        &classifier,
        declared.iter().map(String::as_str),
        texts.iter().map(String::as_str),
        &excluded,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::Path;

    fn fixture(root: &Path) -> CoverageArgs {
        let sources = root.join("main");
        let tests = root.join("test");
        fs::create_dir_all(sources.join("basic")).unwrap();
        fs::create_dir_all(&tests).unwrap();

        fs::write(sources.join("basic").join("Validator.kt"), "fun interface Validator").unwrap();
        fs::write(sources.join("Producer.kt"), "fun interface Producer").unwrap();
        fs::write(sources.join("Marker.kt"), "interface Marker").unwrap();
        fs::write(
            tests.join("ValidatorTest.kt"),
            "import com.example.basic.fakeValidator\n\nval v = fakeValidator { }\n",
        )
        .unwrap();

        CoverageArgs {
            sources,
            tests,
            exclude: vec!["Marker".to_string()],
        }
    }

    #[test]
    fn test_reports_missing_artifacts() {
        let root = tempfile::tempdir().unwrap();
        let args = fixture(root.path());

        let report = coverage_report(&args, &RegroupConfig::default()).unwrap();
        assert_eq!(report.tested, vec!["Validator"]);
        assert_eq!(report.missing, vec!["Producer"]);
        assert_eq!(report.excluded, vec!["Marker"]);
    }

    #[test]
    fn test_incomplete_coverage_fails() {
        let root = tempfile::tempdir().unwrap();
        let args = fixture(root.path());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        assert!(!execute_coverage(args, &RegroupConfig::default(), &formatter).unwrap());
    }

    #[test]
    fn test_complete_coverage_succeeds() {
        let root = tempfile::tempdir().unwrap();
        let mut args = fixture(root.path());
        args.exclude.push("Producer".to_string());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        assert!(execute_coverage(args, &RegroupConfig::default(), &formatter).unwrap());
    }
}
