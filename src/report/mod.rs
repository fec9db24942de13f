// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization reports
//!
//! Every language application produces an [`ApplyReport`]: what happened to
//! each candidate layer and which warnings were raised on the way.

pub mod formatter;
pub mod output;

use crate::classify::SourceClass;
use crate::error::LocalizationError;
use crate::types::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyReport {
    pub generated_at: DateTime<Utc>,
    /// Language applied; `None` when the request did not resolve.
    pub language: Option<Language>,
    /// Whether a style was attached. Without one the selection is only
    /// recorded for the next style load.
    pub style_attached: bool,
    pub layers: Vec<LayerReport>,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerReport {
    pub layer_id: String,
    pub source_id: String,
    pub class: SourceClass,
    pub outcome: LayerOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LayerOutcome {
    Rewritten { before: Value, after: Value },
    Unchanged,
    Skipped { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    UnresolvedLocale,
    UnsupportedSource,
    PatternMismatch,
    Style,
}

/// A warning raised while applying a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    /// Locale, source id or layer id the issue is about.
    pub subject: String,
    pub message: String,
}

impl From<&LocalizationError> for Issue {
    fn from(err: &LocalizationError) -> Self {
        let (kind, subject) = match err {
            LocalizationError::UnresolvedLocale { locale } => {
                (IssueKind::UnresolvedLocale, locale.clone())
            }
            LocalizationError::InvalidLocale(locale) => {
                (IssueKind::UnresolvedLocale, locale.clone())
            }
            LocalizationError::UnsupportedSource { source_id, .. } => {
                (IssueKind::UnsupportedSource, source_id.clone())
            }
            LocalizationError::NoLabelExpression { layer_id }
            | LocalizationError::PatternMismatch { layer_id, .. } => {
                (IssueKind::PatternMismatch, layer_id.clone())
            }
            LocalizationError::InvalidExpression(text) => {
                (IssueKind::PatternMismatch, text.clone())
            }
            LocalizationError::Style(err) => (IssueKind::Style, err.to_string()),
        };
        Issue {
            kind,
            subject,
            message: err.to_string(),
        }
    }
}

impl ApplyReport {
    pub fn new(language: Option<Language>) -> Self {
        Self {
            generated_at: Utc::now(),
            language,
            style_attached: false,
            layers: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Report for a request that never resolved to a language.
    pub fn unresolved(err: &LocalizationError) -> Self {
        let mut report = Self::new(None);
        report.issues.push(Issue::from(err));
        report
    }

    pub fn push_issue(&mut self, err: &LocalizationError) {
        self.issues.push(Issue::from(err));
    }

    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }

    pub fn rewritten(&self) -> impl Iterator<Item = &LayerReport> {
        self.layers
            .iter()
            .filter(|layer| matches!(layer.outcome, LayerOutcome::Rewritten { .. }))
    }

    /// Whether the request resolved and raised no warnings.
    pub fn is_clean(&self) -> bool {
        self.language.is_some() && self.issues.is_empty()
    }
}
