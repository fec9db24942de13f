// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for localization operations.
//!
//! None of these abort a language change. The plugin logs them and records
//! them in the [`ApplyReport`](crate::report::ApplyReport).

use crate::style::StyleError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocalizationError {
    /// No registry entry for the locale.
    #[error("couldn't match locale {locale} to a map locale")]
    UnresolvedLocale { locale: String },

    /// Locale string that is not a language tag at all.
    #[error("invalid locale '{0}'")]
    InvalidLocale(String),

    /// Source not backed by a localizable streets dataset.
    #[error("the source {source_id} is not based on streets vector tiles; supported sources: {supported:?}")]
    UnsupportedSource {
        source_id: String,
        supported: Vec<&'static str>,
    },

    /// Symbol layer whose label does not read a name field.
    #[error("layer {layer_id} has no name-based label expression")]
    NoLabelExpression { layer_id: String },

    /// Label expression of an unexpected shape; left untouched.
    #[error("layer {layer_id}: {reason}")]
    PatternMismatch { layer_id: String, reason: String },

    /// Label text that does not parse as JSON.
    #[error("invalid label expression: {0}")]
    InvalidExpression(String),

    #[error(transparent)]
    Style(#[from] StyleError),
}
