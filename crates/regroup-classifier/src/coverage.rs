//! Test coverage over declared artifacts

use crate::Classifier;
use serde::Serialize;
use std::collections::BTreeSet;

/// Which declared artifacts have a test
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Declared artifacts exercised by at least one test text
    pub tested: Vec<String>,

    /// Declared artifacts no test text exercises
    pub missing: Vec<String>,

    /// Declared artifacts skipped on purpose
    pub excluded: Vec<String>,
}

impl CoverageReport {
    /// Whether every non-excluded artifact is tested
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of artifacts that count towards coverage
    pub fn considered(&self) -> usize {
        self.tested.len() + self.missing.len()
    }
}

/// Check which `declared` artifacts are exercised by `test_texts`
///
/// An artifact counts as tested when any text invokes its factory or imports
/// it. All three lists come back sorted and free of duplicates.
pub fn check_coverage<'a, D, T>(
    classifier: &Classifier,
    declared: D,
    test_texts: T,
    excluded: &BTreeSet<String>,
) -> CoverageReport
where
    D: IntoIterator<Item = &'a str>,
    T: IntoIterator<Item = &'a str>,
{
    let tested_anywhere: BTreeSet<String> = test_texts
        .into_iter()
        .flat_map(|text| classifier.tested_artifacts(text))
        .collect();

    let declared: BTreeSet<&str> = declared.into_iter().collect();

    let mut report = CoverageReport::default();
    for artifact in declared {
        let name = artifact.to_string();
        if excluded.contains(artifact) {
            report.excluded.push(name);
        } else if tested_anywhere.contains(artifact) {
            report.tested.push(name);
        } else {
            report.missing.push(name);
        }
    }
    report
}
