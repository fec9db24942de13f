// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported reports

use crate::report::ApplyReport;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    /// Format implied by a file extension, JSON when unknown.
    pub fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or(ReportOutputFormat::Json)
    }

    pub fn serialize(&self, report: &ApplyReport) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}

/// Write a report in `format`, or in the format implied by the file
/// extension when none is given.
pub fn save_report(
    report: &ApplyReport,
    path: &Path,
    format: Option<ReportOutputFormat>,
) -> Result<()> {
    let format = format.unwrap_or_else(|| ReportOutputFormat::for_path(path));
    let content = format.serialize(report)?;
    fs::write(path, content).with_context(|| format!("writing report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ReportOutputFormat::for_path(Path::new("out.yml")),
            ReportOutputFormat::Yaml
        );
        assert_eq!(
            ReportOutputFormat::for_path(Path::new("out.JSON")),
            ReportOutputFormat::Json
        );
        assert_eq!(
            ReportOutputFormat::for_path(Path::new("out")),
            ReportOutputFormat::Json
        );
    }

    #[test]
    fn json_report_tags_outcomes() {
        let mut report = ApplyReport::new(Some(Language::German));
        report.layers.push(crate::report::LayerReport {
            layer_id: "poi-label".to_string(),
            source_id: "composite".to_string(),
            class: crate::classify::SourceClass::StreetsV7,
            outcome: crate::report::LayerOutcome::Unchanged,
        });
        let json = ReportOutputFormat::Json.serialize(&report).unwrap();
        assert!(json.contains("\"status\": \"unchanged\""));
        assert!(json.contains("\"language\": \"GERMAN\""));
        assert!(json.contains("\"class\": \"streets_v7\""));
    }

    #[test]
    fn explicit_format_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = ApplyReport::new(Some(Language::French));

        save_report(&report, &path, Some(ReportOutputFormat::Yaml)).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("language: FRENCH"));
        assert!(serde_json::from_str::<serde_json::Value>(&written).is_err());

        save_report(&report, &path, None).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"language\": \"FRENCH\""));
    }
}
