//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use regroup_classifier::CoverageReport;
use regroup_orchestrator::RunOutput;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a split run.
    pub fn format_run(&self, output: &RunOutput, dry_run: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_run_json(output, dry_run),
            OutputFormat::Table => Ok(self.format_run_table(output, dry_run)),
            OutputFormat::Quiet => Ok(output
                .destinations
                .values()
                .map(|d| d.relative_path.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_run_json(&self, output: &RunOutput, dry_run: bool) -> Result<String> {
        let destinations: Vec<serde_json::Value> = output
            .destinations
            .values()
            .map(|d| {
                serde_json::json!({
                    "category": d.artifact.category,
                    "artifact": d.artifact.artifact,
                    "path": d.relative_path,
                    "blocks": d.block_count(),
                    "imports": d.imports,
                })
            })
            .collect();

        let report = serde_json::json!({
            "dry_run": dry_run,
            "destinations": destinations,
            "summary": output.summary,
        });
        Ok(serde_json::to_string_pretty(&report)?)
    }

    fn format_run_table(&self, output: &RunOutput, dry_run: bool) -> String {
        let summary = &output.summary;
        let mut sections = Vec::new();

        if output.destinations.is_empty() {
            sections.push(self.warning("No destinations produced."));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Category", "Artifact", "Blocks", "Path"]);
            for destination in output.destinations.values() {
                builder.push_record([
                    destination.artifact.category.clone(),
                    destination.artifact.artifact.clone(),
                    destination.block_count().to_string(),
                    destination.relative_path.clone(),
                ]);
            }
            sections.push(Self::render(builder));
        }

        if !summary.diagnostics.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Kind", "Detail"]);
            for diagnostic in &summary.diagnostics {
                builder.push_record([diagnostic.kind().to_string(), diagnostic.to_string()]);
            }
            sections.push(Self::render(builder));
        }

        let totals = format!(
            "{} destination(s), {} of {} block(s) from {} document(s), {} diagnostic(s)",
            summary.total_destinations(),
            summary.total_blocks_written(),
            summary.blocks_extracted,
            summary.documents_processed,
            summary.diagnostics.len()
        );
        sections.push(if dry_run {
            self.info(&format!("Dry run: {}", totals))
        } else if summary.has_losses() {
            self.warning(&totals)
        } else {
            self.success(&totals)
        });

        sections.join("\n\n")
    }

    /// Format a coverage report.
    pub fn format_coverage(&self, report: &CoverageReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.missing.join("\n")),
            OutputFormat::Table => Ok(self.format_coverage_table(report)),
        }
    }

    fn format_coverage_table(&self, report: &CoverageReport) -> String {
        let mut rows: Vec<(&str, &str)> = report
            .tested
            .iter()
            .map(|a| (a.as_str(), "tested"))
            .chain(report.missing.iter().map(|a| (a.as_str(), "missing")))
            .chain(report.excluded.iter().map(|a| (a.as_str(), "excluded")))
            .collect();
        rows.sort();

        let mut sections = Vec::new();
        if !rows.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Artifact", "Status"]);
            for (artifact, status) in rows {
                builder.push_record([artifact, status]);
            }
            sections.push(Self::render(builder));
        }

        sections.push(if report.is_complete() {
            self.success(&format!(
                "All {} artifact(s) tested ({} excluded)",
                report.considered(),
                report.excluded.len()
            ))
        } else {
            self.warning(&format!(
                "{} of {} artifact(s) missing a test",
                report.missing.len(),
                report.considered()
            ))
        });

        sections.join("\n\n")
    }

    fn render(builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), Color::Green)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), Color::Blue)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}
