// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use crate::report::{ApplyReport, IssueKind, LayerOutcome};
use colored::*;

pub struct ReportFormatter {
    verbose: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Print to stderr so stdout stays free for the rewritten style.
    pub fn print(&self, report: &ApplyReport) {
        eprintln!("{}", "=== MAP LOCALIZATION ===".bold().cyan());
        match report.language {
            Some(language) => eprintln!(
                "  Language: {} ({})",
                language.to_string().bold(),
                language.field_name()
            ),
            None => eprintln!("  Language: {}", "unresolved".red()),
        }
        if !report.style_attached {
            eprintln!("  No style attached; selection recorded");
        }
        eprintln!();

        self.print_layers(report);
        self.print_issues(report);
    }

    fn print_layers(&self, report: &ApplyReport) {
        let rewritten = report.rewritten().count();
        let unchanged = report
            .layers
            .iter()
            .filter(|l| l.outcome == LayerOutcome::Unchanged)
            .count();
        let skipped = report.layers.len() - rewritten - unchanged;

        eprintln!("{}", "LAYERS".bold().yellow());
        eprintln!("  Rewritten: {}", rewritten.to_string().green());
        eprintln!("  Unchanged: {}", unchanged);
        eprintln!("  Skipped:   {}", skipped);

        if self.verbose {
            for layer in &report.layers {
                let status = match &layer.outcome {
                    LayerOutcome::Rewritten { .. } => "rewritten".green(),
                    LayerOutcome::Unchanged => "unchanged".normal(),
                    LayerOutcome::Skipped { reason } => format!("skipped: {}", reason).dimmed(),
                };
                eprintln!(
                    "    - {} [{} / {}] {}",
                    layer.layer_id, layer.source_id, layer.class, status
                );
            }
        }
        eprintln!();
    }

    fn print_issues(&self, report: &ApplyReport) {
        if report.issues.is_empty() {
            eprintln!("{}", "No warnings".green());
            return;
        }

        eprintln!("{}", "WARNINGS".bold().red());
        for issue in &report.issues {
            let label = match issue.kind {
                IssueKind::UnresolvedLocale => "locale",
                IssueKind::UnsupportedSource => "source",
                IssueKind::PatternMismatch => "pattern",
                IssueKind::Style => "style",
            };
            eprintln!("  [{}] {}", label.yellow(), issue.message);
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
